use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Decode-with-fallback wrapper for fields the backend persists as encoded text.
///
/// A value may arrive already structured, as a JSON string holding the structure,
/// or malformed. Decoding never fails: anything that does not decode keeps its
/// raw value and reads back as `None` through [`Embedded::decoded`].
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Embedded<T> {
    Decoded(T),
    Raw(Value),
}

impl<T> Embedded<T> {
    pub fn decoded(&self) -> Option<&T> {
        match self {
            Embedded::Decoded(value) => Some(value),
            Embedded::Raw(_) => None,
        }
    }

    pub fn is_decoded(&self) -> bool {
        matches!(self, Embedded::Decoded(_))
    }
}

impl<T> Default for Embedded<T> {
    fn default() -> Self {
        Embedded::Raw(Value::Null)
    }
}

impl<T: DeserializeOwned> Embedded<T> {
    pub fn from_value(value: Value) -> Self {
        if let Ok(decoded) = serde_json::from_value::<T>(value.clone()) {
            return Embedded::Decoded(decoded);
        }
        if let Value::String(text) = &value {
            if let Ok(decoded) = serde_json::from_str::<T>(text) {
                return Embedded::Decoded(decoded);
            }
        }
        Embedded::Raw(value)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Embedded<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(value))
    }
}

/// Coerces an event or vehicle price to a number; junk contributes zero.
pub fn numeric_price(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => text.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_structured_value() {
        let embedded = Embedded::<Vec<String>>::from_value(json!(["Goa", "Palolem"]));
        assert_eq!(
            embedded.decoded(),
            Some(&vec!["Goa".to_string(), "Palolem".to_string()])
        );
    }

    #[test]
    fn decodes_json_encoded_text() {
        let embedded = Embedded::<Vec<String>>::from_value(json!("[\"Goa\",\"Palolem\"]"));
        assert!(embedded.is_decoded());
    }

    #[test]
    fn malformed_text_keeps_raw_value() {
        let raw = json!("not valid json [");
        let embedded = Embedded::<Vec<String>>::from_value(raw.clone());
        assert_eq!(embedded.decoded(), None);
        assert_eq!(embedded, Embedded::Raw(raw));
    }

    #[test]
    fn missing_field_reads_as_absent() {
        let embedded: Embedded<Vec<String>> = Embedded::default();
        assert_eq!(embedded.decoded(), None);
    }

    #[test]
    fn price_coercion_handles_numbers_strings_and_junk() {
        assert_eq!(numeric_price(&json!(50)), 50.0);
        assert_eq!(numeric_price(&json!("100")), 100.0);
        assert_eq!(numeric_price(&json!("bad")), 0.0);
        assert_eq!(numeric_price(&Value::Null), 0.0);
    }
}
