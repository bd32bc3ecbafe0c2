//! Typed view of an IMS Operations API response body
//!
//! ```json
//! {
//!   "messages": { "IMS1": { "command": "UPD TRAN ...", "rc": "00000000", "rsn": "00000000" } },
//!   "data": [ { "tran": "IVTNO", "mbr": "IMS1", "cc": "0" } ]
//! }
//! ```
//!
//! Used for rendering only; request builders return the raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Command outcome reported by one IMS member
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberMessage {
    pub command: Option<String>,
    pub rc: Option<Value>,
    pub rsn: Option<Value>,
    pub msgdata: Vec<Value>,
}

impl MemberMessage {
    /// Whether the member reported a non-zero return code
    pub fn failed(&self) -> bool {
        self.rc
            .as_ref()
            .map(scalar_text)
            .map(|rc| rc.trim_start_matches('0').chars().any(|c| c != ' '))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImsResponse {
    pub messages: BTreeMap<String, MemberMessage>,
    pub data: Vec<Map<String, Value>>,
}

impl ImsResponse {
    /// Interpret a response body; anything without the expected shape yields `None`
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    /// Column names across all data rows, in first-seen order
    pub fn columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = Vec::new();
        for row in &self.data {
            for key in row.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
        columns
    }
}

/// Render a JSON scalar without quotes
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
