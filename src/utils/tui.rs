use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use venue_core::{DeleteResponse, Transport, TransportError};

pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["-", "\\", "|", "/"])
        .template("{msg} {spinner}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Shows a spinner while the wrapped transport's request is running.
pub struct WithSpinner<T> {
    inner: T,
}

impl<T> WithSpinner<T> {
    pub fn new(inner: T) -> Self {
        WithSpinner { inner }
    }
}

#[async_trait]
impl<T: Transport> Transport for WithSpinner<T> {
    async fn delete(&self, path: &str) -> Result<DeleteResponse, TransportError> {
        let spinner = create_spinner(format!("Deleting {}...", path));
        let result = self.inner.delete(path).await;
        spinner.finish_and_clear();
        result
    }
}
