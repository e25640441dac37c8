//! Terminal stand-in for the browsing context.

use owo_colors::OwoColorize;
use venue_core::Navigator;

/// Announces redirect targets and optionally opens them in the browser.
pub struct BrowserNavigator {
    open_browser: bool,
}

impl BrowserNavigator {
    pub fn new(open_browser: bool) -> Self {
        BrowserNavigator { open_browser }
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) {
        println!("{} {}", "Redirected to".dimmed(), url);

        if !self.open_browser {
            return;
        }

        if let Err(e) = open::that(url) {
            tracing::warn!(%url, error = %e, "could not open browser");
            eprintln!("(Could not open browser automatically, please copy the URL above)");
        }
    }
}
