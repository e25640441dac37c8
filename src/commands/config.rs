use anyhow::Result;
use owo_colors::OwoColorize;
use venues_cli::config::VenuesConfig;

pub fn run(base_url: Option<String>, open_browser: Option<bool>) -> Result<()> {
    let path = VenuesConfig::config_path()?;
    let mut config = VenuesConfig::load()?;

    if base_url.is_none() && open_browser.is_none() {
        println!("{}", path.display().dimmed());
        println!("base_url     = {}", config.base_url);
        println!("open_browser = {}", config.open_browser);
        return Ok(());
    }

    if let Some(base_url) = base_url {
        config.base_url = base_url;
        // Refuse to save something `delete` could not use.
        config.base_url()?;
    }
    if let Some(open_browser) = open_browser {
        config.open_browser = open_browser;
    }

    config.save_to(&path)?;
    println!("{}", format!("Saved {}", path.display()).green());

    Ok(())
}
