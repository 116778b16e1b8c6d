// src/message.rs
use serde::{Deserialize, Deserializer, Serialize};

/// Inbound body of `POST /api/chat`.
///
/// Both fields are optional here so that an absent field surfaces as a
/// validation error instead of a JSON rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub question: Option<String>,
    /// Age bracket label, e.g. "Under 13" or "61+". Numbers are accepted too;
    /// a zero counts as absent.
    #[serde(default, deserialize_with = "text_or_number")]
    pub age: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        TextOrNumber::Text(s) => Some(s),
        TextOrNumber::Number(n) if n.as_f64() == Some(0.0) => None,
        TextOrNumber::Number(n) => Some(n.to_string()),
    }))
}
