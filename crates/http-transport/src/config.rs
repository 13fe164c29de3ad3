use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://orion-ai-v1.onrender.com";

/// Builder for [`HttpConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct HttpConfigBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl HttpConfigBuilder {
    /// Creates a builder pointing at the default backend.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom base URL. A trailing slash is ignored.
    #[inline]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets how long a single request may take before it fails.
    ///
    /// Without a timeout a request waits for as long as the backend does.
    #[inline]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> HttpConfig {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        HttpConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: self.timeout,
        }
    }
}

/// Configuration for the HTTP transport.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HttpConfig {
    pub(crate) base_url: String,
    pub(crate) timeout: Option<Duration>,
}

impl HttpConfig {
    /// Returns the base URL, without a trailing slash.
    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[inline]
    pub(crate) fn message_url(&self) -> String {
        format!("{}/message", self.base_url)
    }

    #[inline]
    pub(crate) fn thread_url(&self) -> String {
        format!("{}/thread", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HttpConfigBuilder::new().build();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(
            config.message_url(),
            "https://orion-ai-v1.onrender.com/message"
        );
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_trailing_slash() {
        let config = HttpConfigBuilder::new()
            .with_base_url("http://localhost:8080/")
            .with_timeout(Duration::from_secs(5))
            .build();
        assert_eq!(config.thread_url(), "http://localhost:8080/thread");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_builder_debug() {
        let builder = HttpConfigBuilder::new().with_base_url("http://x");
        let debug = format!("{builder:?}");
        assert!(debug.starts_with("HttpConfigBuilder"));
        assert!(debug.contains(r#"base_url: Some("http://x")"#));
    }
}
