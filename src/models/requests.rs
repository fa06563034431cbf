use serde::{Deserialize, Deserializer, Serialize};

/// Accept strings as-is and stringify scalar JSON values.
///
/// Falsy values (`""`, `0`, `false`, `null`) are treated as absent, matching
/// how chat platforms send unfilled slots.
fn deserialize_loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        String(String),
        Int(i64),
        Float(f64),
        Bool(bool),
        Null,
    }

    let value = match Loose::deserialize(deserializer)? {
        Loose::String(s) => s,
        Loose::Int(0) | Loose::Bool(false) | Loose::Null => return Ok(None),
        Loose::Float(f) if f == 0.0 => return Ok(None),
        Loose::Int(i) => i.to_string(),
        Loose::Float(f) => f.to_string(),
        Loose::Bool(b) => b.to_string(),
    };

    Ok(if value.is_empty() { None } else { Some(value) })
}

/// Book preferences collected by the chatbot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceRequest {
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub mood: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub age: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub rating: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub author: Option<String>,
}

impl PreferenceRequest {
    /// True when the caller asked for highly rated books only
    pub fn wants_high_rating(&self) -> bool {
        self.rating
            .as_deref()
            .map_or(false, |r| r.to_lowercase() == "high")
    }
}
