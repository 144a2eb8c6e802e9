//! IO modules - side effects (network, subprocess)

pub mod download;
pub mod extract;
pub mod index;

use std::time::Duration;

/// Build the HTTP client used for every repository request.
///
/// `connect_timeout` bounds connection setup only; archive bodies can take
/// much longer than any sensible whole-request timeout.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn http_client(connect_timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(crate::USER_AGENT)
        .connect_timeout(connect_timeout)
        .build()
}
