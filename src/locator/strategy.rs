use std::fmt::Display;

use crate::error::{OtoError, OtoResult};

/// A pair of parameterized templates: one renders a locator string for the
/// browser driver, the other a description a human can read in a log line.
///
/// Placeholders are written `{0}`, `{1}`, ... and may repeat. Substitution is
/// purely textual: arguments are inserted as-is, with no quoting or escaping,
/// so a value containing `'` or `]` can break an XPath locator. Callers are
/// expected to pass safe values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocatorTemplate {
    human_readable: &'static str,
    template: &'static str,
}

impl LocatorTemplate {
    pub const fn new(human_readable: &'static str, template: &'static str) -> Self {
        LocatorTemplate {
            human_readable,
            template,
        }
    }

    /// The raw locator template.
    pub fn template(&self) -> &'static str {
        self.template
    }

    /// The raw human-readable template.
    pub fn human_readable_template(&self) -> &'static str {
        self.human_readable
    }

    /// Render the locator string for the given arguments.
    pub fn render_locator<T: Display>(&self, args: &[T]) -> OtoResult<String> {
        substitute(self.template, args)
    }

    /// Render the human-readable description for the given arguments.
    pub fn render_human_readable<T: Display>(&self, args: &[T]) -> OtoResult<String> {
        substitute(self.human_readable, args)
    }

    /// Number of arguments needed to render both templates.
    pub fn placeholder_count(&self) -> usize {
        placeholder_indices(self.template)
            .chain(placeholder_indices(self.human_readable))
            .max()
            .map_or(0, |highest| highest.saturating_add(1))
    }
}

/// Replace every `{i}` in `template` with `args[i]`.
fn substitute<T: Display>(template: &str, args: &[T]) -> OtoResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match parse_placeholder(after) {
            Some((index, digits)) => {
                let arg = args.get(index).ok_or_else(|| OtoError::MissingArgument {
                    index,
                    argc: args.len(),
                    template: template.to_string(),
                })?;
                out.push_str(&arg.to_string());
                rest = &after[digits + 1..];
            }
            None => {
                // not a placeholder, keep the brace
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

/// Parse `123}` at the start of `s`, returning the index and digit count.
fn parse_placeholder(s: &str) -> Option<(usize, usize)> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || s.as_bytes().get(digits) != Some(&b'}') {
        return None;
    }
    s[..digits].parse().ok().map(|index| (index, digits))
}

fn placeholder_indices(template: &str) -> impl Iterator<Item = usize> + '_ {
    template
        .match_indices('{')
        .filter_map(|(pos, _)| parse_placeholder(&template[pos + 1..]))
        .map(|(index, _)| index)
}
