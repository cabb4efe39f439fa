use std::time::Duration;

/// A single GET issued by a probe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    pub url: String,
    pub params: Vec<(String, String)>,
    pub timeout: Duration,
}

impl ProbeRequest {
    /// Joins `base_url` and `path` the way the service expects them, ignoring a
    /// trailing slash on the base.
    pub fn new(base_url: &str, path: &str, timeout: Duration) -> Self {
        Self {
            url: format!("{}{path}", base_url.trim_end_matches('/')),
            params: Vec::new(),
            timeout,
        }
    }

    pub fn with_params(mut self, params: Vec<(String, String)>) -> Self {
        self.params = params;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_and_path() {
        let request = ProbeRequest::new("https://example.com", "/hk-post/ip-monitor", Duration::from_secs(10));
        assert_eq!(request.url, "https://example.com/hk-post/ip-monitor");
        assert!(request.params.is_empty());
    }

    #[test]
    fn ignores_trailing_slash_on_base() {
        let request = ProbeRequest::new("https://example.com/", "/hk-post/ip-monitor", Duration::from_secs(10));
        assert_eq!(request.url, "https://example.com/hk-post/ip-monitor");
    }
}
