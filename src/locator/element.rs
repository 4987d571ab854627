use std::fmt;

use crate::error::OtoResult;
use crate::locator::strategy::LocatorTemplate;

/// An addressable browser element.
///
/// Either a fixed locator/description pair, or a shared strategy plus the
/// arguments to render it with. Templated elements render on every call.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Static {
        locator: String,
        human_readable: String,
    },
    Templated {
        strategy: &'static LocatorTemplate,
        args: Vec<String>,
    },
}

impl Element {
    pub fn fixed(locator: impl Into<String>, human_readable: impl Into<String>) -> Self {
        Element::Static {
            locator: locator.into(),
            human_readable: human_readable.into(),
        }
    }

    pub fn templated<I, S>(strategy: &'static LocatorTemplate, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Element::Templated {
            strategy,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn get_locator(&self) -> OtoResult<String> {
        match self {
            Element::Static { locator, .. } => Ok(locator.clone()),
            Element::Templated { strategy, args } => strategy.render_locator(args),
        }
    }

    pub fn get_human_readable(&self) -> OtoResult<String> {
        match self {
            Element::Static { human_readable, .. } => Ok(human_readable.clone()),
            Element::Templated { strategy, args } => strategy.render_human_readable(args),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let locator = match self.get_locator() {
            Ok(locator) => locator,
            Err(e) => return write!(f, "locator: <unrenderable: {}>", e),
        };
        match self.get_human_readable() {
            Ok(human) if human.is_empty() => write!(f, "locator: {}", locator),
            Ok(human) => write!(f, "locator: {} ({})", locator, human),
            Err(e) => write!(f, "locator: <unrenderable: {}>", e),
        }
    }
}
