use crate::browser::config::{ConnectionOptions, LaunchOptions};
use crate::error::{Result, WatchError};
use crate::page::{PageSnapshot, SnapshotSource};
use headless_chrome::{Browser, Tab};
use std::{ffi::OsStr, sync::Arc, time::Duration};

/// A live page in a Chrome/Chromium instance
///
/// The session owns the browser connection and one tab. It implements
/// [`SnapshotSource`] by evaluating an embedded script that serializes the
/// rendered body subtree together with the current viewport height, so every
/// check pass sees the page exactly as Chrome has laid it out.
pub struct PageSession {
    browser: Browser,
    tab: Arc<Tab>,
}

impl PageSession {
    /// Launch a new browser instance with the given options
    pub fn launch(options: LaunchOptions) -> Result<Self> {
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        launch_opts.ignore_default_args.push(OsStr::new("--enable-automation"));
        launch_opts.args.push(OsStr::new("--disable-blink-features=AutomationControlled"));

        // Watching a page is long-running; don't let the browser idle out
        launch_opts.idle_browser_timeout = Duration::from_secs(60 * 60);

        launch_opts.headless = options.headless;
        launch_opts.window_size = Some((options.window_width, options.window_height));
        launch_opts.sandbox = options.sandbox;

        if let Some(path) = options.chrome_path {
            launch_opts.path = Some(path);
        }
        if let Some(dir) = options.user_data_dir {
            launch_opts.user_data_dir = Some(dir);
        }

        let browser = Browser::new(launch_opts).map_err(|e| WatchError::LaunchFailed(e.to_string()))?;
        let tab = browser
            .new_tab()
            .map_err(|e| WatchError::LaunchFailed(format!("Failed to create tab: {}", e)))?;

        Ok(Self { browser, tab })
    }

    /// Connect to an existing browser instance via WebSocket
    pub fn connect(options: ConnectionOptions) -> Result<Self> {
        let browser =
            Browser::connect(options.ws_url).map_err(|e| WatchError::ConnectionFailed(e.to_string()))?;
        let tab = browser
            .new_tab()
            .map_err(|e| WatchError::ConnectionFailed(format!("Failed to create tab: {}", e)))?;

        Ok(Self { browser, tab })
    }

    /// Launch a browser with default options
    pub fn new() -> Result<Self> {
        Self::launch(LaunchOptions::default())
    }

    /// The tab this session watches
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// The underlying Browser instance
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Navigate the watched tab to a URL
    pub fn navigate(&self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .map_err(|e| WatchError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;

        Ok(())
    }

    /// Wait for navigation to complete
    pub fn wait_for_navigation(&self) -> Result<()> {
        self.tab
            .wait_until_navigated()
            .map_err(|e| WatchError::NavigationFailed(format!("Navigation timeout: {}", e)))?;

        Ok(())
    }

    /// Current vertical scroll offset of the page
    pub fn scroll_top(&self) -> Result<f64> {
        self.evaluate_number("window.scrollY")
    }

    /// Current viewport height
    pub fn viewport_height(&self) -> Result<f64> {
        self.evaluate_number("window.innerHeight")
    }

    /// Scroll the page to a vertical offset
    pub fn scroll_to(&self, y: f64) -> Result<()> {
        let js = format!("window.scrollTo(0, {});", y);
        self.tab
            .evaluate(&js, false)
            .map_err(|e| WatchError::EvaluationFailed(e.to_string()))?;

        Ok(())
    }

    fn evaluate_number(&self, js: &str) -> Result<f64> {
        let result = self
            .tab
            .evaluate(js, false)
            .map_err(|e| WatchError::EvaluationFailed(e.to_string()))?;

        result
            .value
            .and_then(|v| v.as_f64())
            .ok_or_else(|| WatchError::EvaluationFailed(format!("'{}' returned no number", js)))
    }
}

impl SnapshotSource for PageSession {
    /// Capture the rendered body subtree and viewport height
    fn snapshot(&mut self) -> Result<PageSnapshot> {
        let js_code = include_str!("snapshot.js");

        let result = self
            .tab
            .evaluate(js_code, false)
            .map_err(|e| WatchError::SnapshotFailed(format!("Failed to execute snapshot script: {}", e)))?;

        let json_value = result
            .value
            .ok_or_else(|| WatchError::SnapshotFailed("No value returned from snapshot script".to_string()))?;

        // The script returns a JSON string, so unwrap the string first
        let json_str: String = serde_json::from_value(json_value)
            .map_err(|e| WatchError::SnapshotFailed(format!("Failed to get JSON string: {}", e)))?;

        PageSnapshot::from_json(&json_str)
            .map_err(|e| WatchError::SnapshotFailed(format!("Failed to parse snapshot JSON: {}", e)))
    }
}
