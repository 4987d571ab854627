pub mod base;
pub mod driver;
pub mod selenium;
pub mod server;

pub use base::Oto;
pub use driver::BrowserDriver;
pub use selenium::SeleniumRc;
pub use server::SeleniumServer;
