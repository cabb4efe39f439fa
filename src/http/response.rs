use serde_json::{Map, Value};

/// What a probe got back: the status, and the decoded JSON object when the
/// status was 200.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResponse {
    pub status: u16,
    pub body: Option<Map<String, Value>>,
}

impl ProbeResponse {
    pub fn ok(body: Map<String, Value>) -> Self {
        Self {
            status: 200,
            body: Some(body),
        }
    }

    pub fn status(status: u16) -> Self {
        Self { status, body: None }
    }
}
