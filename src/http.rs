// src/http.rs
// Shared HTTP client for all outbound calls

use std::time::Duration;

/// Default connect timeout
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Create the shared HTTP client.
///
/// Built once at startup and cloned into the critique and screenshot
/// clients; clones share one connection pool.
pub fn create_shared_client(request_timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(request_timeout)
        .connect_timeout(CONNECT_TIMEOUT)
        .pool_max_idle_per_host(10)
        .user_agent(concat!("roaster/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_shared_client() {
        let client = create_shared_client(Duration::from_secs(5));
        drop(client);
    }

    #[test]
    fn test_timeout_values() {
        assert_eq!(CONNECT_TIMEOUT, Duration::from_secs(10));
    }
}
