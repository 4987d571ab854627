//! Named addresses for UI elements in test automation.
//!
//! Browser elements are addressed by locator strings rendered from shared
//! templates ([`locator`]). Desktop widgets are described by their
//! accessibility attributes plus a named parent, and resolved against the
//! live accessibility tree each time they are used ([`desktop`]).

pub mod browser;
pub mod cli;
pub mod desktop;
pub mod error;
pub mod locator;

pub use error::{OtoError, OtoResult};
