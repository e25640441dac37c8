//! reqwest-backed transport.

use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use reqwest::{Method, StatusCode};
use url::Url;
use venue_core::{DeleteResponse, Transport, TransportError};

const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Redirect hops followed before the request is reported as failed.
const MAX_REDIRECTS: usize = 10;

/// Statuses fetch treats as a redirect to follow.
fn is_redirect(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::MOVED_PERMANENTLY
            | StatusCode::FOUND
            | StatusCode::SEE_OTHER
            | StatusCode::TEMPORARY_REDIRECT
            | StatusCode::PERMANENT_REDIRECT
    )
}

/// Sends venue paths to a fixed server, following redirects the way a
/// browser's fetch does.
///
/// Redirects are followed here rather than by reqwest so every hop is seen:
/// a chain that ends back at the requested URL still counts as redirected.
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestTransport {
    pub fn new(base_url: Url) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(format!("venues-cli/{}", CURRENT_VERSION))
            .redirect(Policy::none())
            .build()?;

        Ok(ReqwestTransport { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an absolute path against the base URL. Any path prefix on the
    /// base URL is replaced, as it would be for a page on that server.
    pub fn resolve(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path)
            .map_err(|e| TransportError::InvalidUrl {
                url: path.to_string(),
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn delete(&self, path: &str) -> Result<DeleteResponse, TransportError> {
        let mut url = self.resolve(path)?;
        let mut method = Method::DELETE;
        let mut redirected = false;

        for _ in 0..=MAX_REDIRECTS {
            let response = self
                .client
                .request(method.clone(), url.clone())
                .send()
                .await
                .map_err(|e| TransportError::Request {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;

            let status = response.status();
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|value| value.to_str().ok());

            let Some(location) = location.filter(|_| is_redirect(status)) else {
                return Ok(DeleteResponse {
                    status: status.as_u16(),
                    redirected,
                    url: url.to_string(),
                });
            };

            let next = url.join(location).map_err(|e| TransportError::InvalidUrl {
                url: location.to_string(),
                message: e.to_string(),
            })?;

            // 301/302 only rewrite POST, so DELETE survives them; 303 always
            // becomes GET.
            if status == StatusCode::SEE_OTHER && method != Method::HEAD {
                method = Method::GET;
            }

            tracing::debug!(%status, from = %url, to = %next, "following redirect");
            url = next;
            redirected = true;
        }

        Err(TransportError::Request {
            url: url.to_string(),
            message: format!("too many redirects (more than {})", MAX_REDIRECTS),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base: &str) -> ReqwestTransport {
        ReqwestTransport::new(Url::parse(base).unwrap()).unwrap()
    }

    #[test]
    fn test_resolve_against_host() {
        let t = transport("http://localhost:5000");
        assert_eq!(
            t.resolve("/venues/7").unwrap().as_str(),
            "http://localhost:5000/venues/7"
        );
    }

    #[test]
    fn test_resolve_replaces_base_path() {
        let t = transport("https://example.com/app/");
        assert_eq!(
            t.resolve("/venues/").unwrap().as_str(),
            "https://example.com/venues/"
        );
    }
}
