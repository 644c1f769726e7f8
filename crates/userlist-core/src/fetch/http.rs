//! Blocking HTTP GET via the curl crate (libcurl).

use super::FetchError;
use std::time::Duration;

/// Transfer options. The defaults send a plain GET with no timeout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HttpOptions {
    /// Overall transfer timeout. None = no limit.
    pub timeout: Option<Duration>,
}

/// Performs a GET request and returns the response body.
///
/// Follows redirects. No query, body or custom headers are added.
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn get_body(url: &str, opts: HttpOptions) -> Result<Vec<u8>, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    if let Some(timeout) = opts.timeout {
        easy.timeout(timeout)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }
    tracing::debug!(status = code, bytes = body.len(), "GET {} complete", url);

    Ok(body)
}
