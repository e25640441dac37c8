use std::sync::Arc;

use anyhow::Result;
use venue_core::{AlwaysConfirm, DeleteButton, DeleteVenue};
use venues_cli::config::VenuesConfig;
use venues_cli::http::ReqwestTransport;
use venues_cli::navigate::BrowserNavigator;
use venues_cli::prompt::TerminalConfirm;
use venues_cli::trigger::ArgTrigger;

use crate::render::Render;
use crate::utils::tui::WithSpinner;

pub struct Options {
    pub base_url: Option<String>,
    pub force: bool,
    pub no_open: bool,
}

pub async fn run(venue_id: String, options: Options) -> Result<()> {
    let mut config = VenuesConfig::load()?;

    if let Some(base_url) = options.base_url {
        config.base_url = base_url;
    }
    if options.no_open {
        config.open_browser = false;
    }

    let transport = WithSpinner::new(ReqwestTransport::new(config.base_url()?)?);
    let navigator = BrowserNavigator::new(config.open_browser);
    let action = DeleteVenue::new(Arc::new(transport), Arc::new(navigator));

    let trigger = ArgTrigger::new(venue_id);
    let button = if options.force {
        DeleteButton::bind(trigger, AlwaysConfirm, action)
    } else {
        DeleteButton::bind(trigger, TerminalConfirm, action)
    };

    let outcome = button.click().await;

    // Failures were already reported through tracing; the command itself
    // always succeeds once the button is bound.
    if let Some(line) = outcome.render() {
        println!("{}", line);
    }

    Ok(())
}
