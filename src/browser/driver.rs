use crate::error::OtoResult;

/// Primitives of a browser-automation service, keyed by locator strings.
pub trait BrowserDriver {
    /// Open a browser session.
    fn start(&mut self) -> OtoResult<()>;

    /// Close the browser session.
    fn stop(&mut self) -> OtoResult<()>;

    fn open(&mut self, url: &str) -> OtoResult<()>;

    fn click(&mut self, locator: &str) -> OtoResult<()>;

    fn type_text(&mut self, locator: &str, text: &str) -> OtoResult<()>;

    fn check(&mut self, locator: &str) -> OtoResult<()>;

    fn uncheck(&mut self, locator: &str) -> OtoResult<()>;

    /// Select the option matching `option_locator` in a select box.
    fn select(&mut self, locator: &str, option_locator: &str) -> OtoResult<()>;

    fn get_text(&mut self, locator: &str) -> OtoResult<String>;

    fn assign_id(&mut self, locator: &str, id: &str) -> OtoResult<()>;

    fn highlight(&mut self, locator: &str) -> OtoResult<()>;

    fn wait_for_page_to_load(&mut self, timeout_ms: u64) -> OtoResult<()>;

    fn is_element_present(&mut self, locator: &str) -> OtoResult<bool>;

    fn window_focus(&mut self) -> OtoResult<()>;

    fn window_maximize(&mut self) -> OtoResult<()>;
}
