use std::time::Duration;

use serde_json::{Map, Value};

use super::error::ProbeError;
use super::request::ProbeRequest;
use super::response::ProbeResponse;

/// Sends one probe and hands back the status plus, on 200, the decoded body.
pub trait Transport {
    async fn get(&self, request: &ProbeRequest) -> Result<ProbeResponse, ProbeError>;
}

/// `reqwest` backed transport. Idle connections are dropped right away, so
/// every probe opens its own connection.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(ProbeError::Client)?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, request: &ProbeRequest) -> Result<ProbeResponse, ProbeError> {
        let mut url = reqwest::Url::parse(&request.url).map_err(|e| ProbeError::InvalidUrl {
            url: request.url.clone(),
            message: e.to_string(),
        })?;

        if !request.params.is_empty() {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in &request.params {
                query_pairs.append_pair(key, value);
            }
        }

        log::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .timeout(request.timeout)
            .send()
            .await
            .map_err(|e| classify(e, request.timeout, ProbeError::Request))?;

        let status = response.status().as_u16();
        if status != 200 {
            return Ok(ProbeResponse::status(status));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| classify(e, request.timeout, ProbeError::Body))?;

        Ok(ProbeResponse::ok(decode_object(&bytes)?))
    }
}

fn classify(err: reqwest::Error, timeout: Duration, wrap: fn(reqwest::Error) -> ProbeError) -> ProbeError {
    if err.is_timeout() {
        ProbeError::Timeout(timeout)
    } else {
        wrap(err)
    }
}

/// Decodes a response body that must be a JSON object.
pub fn decode_object(bytes: &[u8]) -> Result<Map<String, Value>, ProbeError> {
    match serde_json::from_slice(bytes)? {
        Value::Object(map) => Ok(map),
        other => Err(ProbeError::NotAnObject(json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
