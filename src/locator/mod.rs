pub mod element;
pub mod elements;
pub mod strategies;
pub mod strategy;

pub use element::Element;
pub use strategy::LocatorTemplate;
