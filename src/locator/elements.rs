//! Named elements shared by every page.

use std::sync::LazyLock;

use crate::locator::element::Element;
use crate::locator::strategies;

/// Id assigned to an element by `Oto::bookmark_element`.
pub const DEFAULT_BOOKMARK: &str = "otoBookmark";

pub static BOOKMARKED_ELEMENT: LazyLock<Element> =
    LazyLock::new(|| Element::templated(&strategies::ID, [DEFAULT_BOOKMARK]));

pub static OK_BUTTON: LazyLock<Element> =
    LazyLock::new(|| Element::templated(&strategies::BUTTON, ["OK"]));

pub static CANCEL_BUTTON: LazyLock<Element> =
    LazyLock::new(|| Element::templated(&strategies::BUTTON, ["Cancel"]));

pub static SUBMIT_BUTTON: LazyLock<Element> =
    LazyLock::new(|| Element::templated(&strategies::BUTTON, ["Submit"]));

static ALL: [(&str, &LazyLock<Element>); 4] = [
    ("bookmarked_element", &BOOKMARKED_ELEMENT),
    ("ok_button", &OK_BUTTON),
    ("cancel_button", &CANCEL_BUTTON),
    ("submit_button", &SUBMIT_BUTTON),
];

/// Every named element, in declaration order.
pub fn all() -> impl Iterator<Item = (&'static str, &'static Element)> {
    ALL.iter().map(|(name, element)| (*name, &***element))
}

pub fn lookup(name: &str) -> Option<&'static Element> {
    all().find(|(entry, _)| *entry == name).map(|(_, element)| element)
}
