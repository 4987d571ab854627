use tracing::{info, warn};

use crate::browser::driver::BrowserDriver;
use crate::error::OtoResult;
use crate::locator::element::Element;
use crate::locator::elements::DEFAULT_BOOKMARK;

/// Page-load timeout for `click_wait`, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// Test-step actions on named elements.
///
/// Every action renders the element's locator, highlights the element and
/// logs what it is doing in human-readable terms before acting.
pub struct Oto<D: BrowserDriver> {
    driver: D,
    base_url: String,
}

impl<D: BrowserDriver> Oto<D> {
    pub fn new(driver: D, base_url: impl Into<String>) -> Self {
        Oto {
            driver,
            base_url: base_url.into(),
        }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Open a browser session and bring its window forward.
    pub fn start(&mut self) -> OtoResult<()> {
        info!("Starting browser session for {}...", self.base_url);
        self.driver.start()?;
        self.driver.window_focus()?;
        self.driver.window_maximize()
    }

    /// Close the browser session. Failures are logged, not returned.
    pub fn stop(&mut self) {
        info!("Stopping browser session...");
        if let Err(e) = self.driver.stop() {
            warn!("Browser service didn't respond to stop command: {}", e);
        }
    }

    pub fn go_base(&mut self) -> OtoResult<()> {
        let url = self.base_url.clone();
        self.go(&url)
    }

    pub fn go(&mut self, url: &str) -> OtoResult<()> {
        info!("Opening URL: {}...", url);
        self.driver.open(url)
    }

    pub fn click(&mut self, element: &Element) -> OtoResult<()> {
        info!("Clicking {}...", element);
        let locator = self.highlight(element)?;
        self.driver.click(&locator)
    }

    pub fn click_wait(&mut self, element: &Element) -> OtoResult<()> {
        info!(
            "Clicking {} and waiting for page to load...",
            element.get_human_readable()?
        );
        let locator = self.highlight(element)?;
        self.driver.click(&locator)?;
        self.driver.wait_for_page_to_load(DEFAULT_TIMEOUT_MS)
    }

    pub fn get_text(&mut self, element: &Element) -> OtoResult<String> {
        info!("Getting text from {}...", element);
        let locator = self.highlight(element)?;
        let text = self.driver.get_text(&locator)?;
        info!("Text is: {}", text);
        Ok(text)
    }

    pub fn check(&mut self, element: &Element, checked: bool) -> OtoResult<()> {
        info!(
            "Checking box at {} (checked={})...",
            element.get_human_readable()?,
            checked
        );
        let locator = self.highlight(element)?;
        if checked {
            self.driver.check(&locator)
        } else {
            self.driver.uncheck(&locator)
        }
    }

    pub fn select(&mut self, element: &Element, option: &Element) -> OtoResult<()> {
        info!(
            "Selecting '{}' from select box at {}...",
            option,
            element.get_human_readable()?
        );
        let locator = self.highlight(element)?;
        self.driver.select(&locator, &option.get_locator()?)
    }

    pub fn enter_text(&mut self, element: &Element, text: &str) -> OtoResult<()> {
        info!(
            "Entering '{}' into field at {}...",
            text,
            element.get_human_readable()?
        );
        let locator = self.highlight(element)?;
        self.driver.type_text(&locator, text)
    }

    /// Give the element a fixed id so `BOOKMARKED_ELEMENT` finds it later.
    pub fn bookmark_element(&mut self, element: &Element) -> OtoResult<()> {
        info!("Bookmarking element: {}", element.get_human_readable()?);
        let locator = self.highlight(element)?;
        self.driver.assign_id(&locator, DEFAULT_BOOKMARK)
    }

    pub fn is_element_present(&mut self, element: &Element) -> OtoResult<bool> {
        info!("Checking if {} is present...", element.get_human_readable()?);
        let present = self.driver.is_element_present(&element.get_locator()?)?;
        info!("Is it present? {}", present);
        Ok(present)
    }

    fn highlight(&mut self, element: &Element) -> OtoResult<String> {
        let locator = element.get_locator()?;
        self.driver.highlight(&locator)?;
        Ok(locator)
    }
}
