use serde::Serialize;
use serde_json::{Map, Value};

/// Placeholder printed for any field the service left out.
pub const MISSING: &str = "N/A";

/// The fields a probe pulls out of a 200 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Snapshot {
    IpMonitor(IpMonitorFields),
    SearchBuildings(SearchFields),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpMonitorFields {
    pub timestamp: String,
    pub cf_ray: String,
    pub cf_connecting_ip: String,
    pub cf_ipcountry: String,
    pub x_forwarded_for: String,
    pub user_agent: String,
}

impl IpMonitorFields {
    pub fn from_body(body: &Map<String, Value>) -> Self {
        // A missing or non-object `ip_info` reads as empty.
        let ip_info = body.get("ip_info").and_then(Value::as_object);
        let info = |key: &str| ip_info.map_or_else(|| MISSING.to_string(), |info| field(info, key, MISSING));

        Self {
            timestamp: field(body, "timestamp", MISSING),
            cf_ray: info("cf_ray"),
            cf_connecting_ip: info("cf_connecting_ip"),
            cf_ipcountry: info("cf_ipcountry"),
            x_forwarded_for: info("x_forwarded_for"),
            user_agent: info("user_agent"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchFields {
    pub count: String,
    pub session_id: String,
    pub timestamp: String,
}

impl SearchFields {
    pub fn from_body(body: &Map<String, Value>) -> Self {
        Self {
            count: field(body, "count", "0"),
            session_id: field(body, "session_id", MISSING),
            timestamp: field(body, "timestamp", MISSING),
        }
    }
}

/// Reads `key` from `map` as display text. Strings come back bare, other
/// values as compact JSON, and `null` or absence as `default`.
pub fn field(map: &Map<String, Value>, key: &str, default: &str) -> String {
    match map.get(key) {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(value)) => value.clone(),
        Some(value) => value.to_string(),
    }
}

/// First `max_chars` characters of `text`.
pub fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn ip_monitor_reads_nested_fields() {
        let body = object(json!({
            "success": true,
            "timestamp": "2024-05-01T08:00:00.000Z",
            "ip_info": {
                "cf_ray": "8a1b2c3d4e5f-HKG",
                "cf_connecting_ip": "203.0.113.7",
                "cf_ipcountry": "HK",
                "x_forwarded_for": "203.0.113.7",
                "user_agent": "python-requests/2.31.0"
            }
        }));

        let fields = IpMonitorFields::from_body(&body);
        assert_eq!(fields.timestamp, "2024-05-01T08:00:00.000Z");
        assert_eq!(fields.cf_ray, "8a1b2c3d4e5f-HKG");
        assert_eq!(fields.cf_connecting_ip, "203.0.113.7");
        assert_eq!(fields.cf_ipcountry, "HK");
        assert_eq!(fields.x_forwarded_for, "203.0.113.7");
        assert_eq!(fields.user_agent, "python-requests/2.31.0");
    }

    #[test]
    fn ip_monitor_missing_fields_fall_back() {
        let body = object(json!({ "ip_info": { "cf_ray": "abc", "cf_ipcountry": null } }));

        let fields = IpMonitorFields::from_body(&body);
        assert_eq!(fields.timestamp, MISSING);
        assert_eq!(fields.cf_ray, "abc");
        assert_eq!(fields.cf_ipcountry, MISSING);
        assert_eq!(fields.user_agent, MISSING);
    }

    #[test]
    fn ip_info_that_is_not_an_object_reads_as_empty() {
        let body = object(json!({ "timestamp": "t", "ip_info": "nope" }));

        let fields = IpMonitorFields::from_body(&body);
        assert_eq!(fields.timestamp, "t");
        assert_eq!(fields.cf_ray, MISSING);
        assert_eq!(fields.x_forwarded_for, MISSING);
    }

    #[test]
    fn search_fields_render_numbers_as_json() {
        let body = object(json!({ "success": true, "count": 3, "session_id": 0.25 }));

        let fields = SearchFields::from_body(&body);
        assert_eq!(fields.count, "3");
        assert_eq!(fields.session_id, "0.25");
        assert_eq!(fields.timestamp, MISSING);
    }

    #[test]
    fn search_count_defaults_to_zero() {
        let fields = SearchFields::from_body(&Map::new());
        assert_eq!(fields.count, "0");
        assert_eq!(fields.session_id, MISSING);
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        assert_eq!(preview("浏览器/1.0", 3), "浏览器");
        assert_eq!(preview("short", 50), "short");
    }
}
