//! Response body fixtures shared by client, app, and end-to-end tests

use serde_json::json;

/// A successful `/advice` body
pub fn slip_body(id: u64, advice: &str) -> String {
    json!({ "slip": { "id": id, "advice": advice } }).to_string()
}

/// The in-band error object the API sends with HTTP 200
pub fn api_error_body(text: &str) -> String {
    json!({ "message": { "type": "error", "text": text } }).to_string()
}
