//! Single-or-batch input and output shapes
//!
//! The output of every operation has the shape of its input: one text gives
//! one result, a batch gives a result per element in the same order.

use crate::error::{EngineError, Result};
use serde::Serialize;
use serde_json::Value;

/// Text to process
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// One text
    Single(String),
    /// Independent texts, processed in order
    Batch(Vec<String>),
}

impl Input {
    /// Accept a JSON string or an array of strings.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(Input::Single(text.clone())),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::String(text) => Ok(text.clone()),
                    other => Err(EngineError::InvalidInputType {
                        index,
                        found: json_type_name(other).to_string(),
                    }),
                })
                .collect::<Result<Vec<_>>>()
                .map(Input::Batch),
            other => Err(EngineError::InvalidInputType {
                index: 0,
                found: json_type_name(other).to_string(),
            }),
        }
    }

    /// Number of texts
    pub fn len(&self) -> usize {
        match self {
            Input::Single(_) => 1,
            Input::Batch(texts) => texts.len(),
        }
    }

    /// True for an empty batch
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the caller passed a batch
    pub fn is_batch(&self) -> bool {
        matches!(self, Input::Batch(_))
    }

    /// The texts, without shape
    pub fn into_texts(self) -> Vec<String> {
        match self {
            Input::Single(text) => vec![text],
            Input::Batch(texts) => texts,
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Single(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Single(text.to_string())
    }
}

impl From<&String> for Input {
    fn from(text: &String) -> Self {
        Input::Single(text.clone())
    }
}

impl From<Vec<String>> for Input {
    fn from(texts: Vec<String>) -> Self {
        Input::Batch(texts)
    }
}

impl From<Vec<&str>> for Input {
    fn from(texts: Vec<&str>) -> Self {
        Input::Batch(texts.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Input {
    fn from(texts: [&str; N]) -> Self {
        Input::Batch(texts.into_iter().map(str::to_string).collect())
    }
}

/// Result in the shape of its [`Input`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output<T> {
    /// Result for a single text
    Single(T),
    /// One result per batch element
    Batch(Vec<T>),
}

impl<T> Output<T> {
    /// Whether this is a batch result
    pub fn is_batch(&self) -> bool {
        matches!(self, Output::Batch(_))
    }

    /// The single result, if this is not a batch
    pub fn into_single(self) -> Option<T> {
        match self {
            Output::Single(value) => Some(value),
            Output::Batch(_) => None,
        }
    }

    /// The batch results, if this is a batch
    pub fn into_batch(self) -> Option<Vec<T>> {
        match self {
            Output::Single(_) => None,
            Output::Batch(values) => Some(values),
        }
    }

    /// All results, without shape
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Output::Single(value) => vec![value],
            Output::Batch(values) => values,
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_single_and_batch() {
        assert_eq!(
            Input::from_json(&json!("안녕")).unwrap(),
            Input::Single("안녕".to_string())
        );
        let batch = Input::from_json(&json!(["가", "나"])).unwrap();
        assert!(batch.is_batch());
        assert_eq!(batch.len(), 2);
        assert!(Input::from_json(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_from_json_names_offending_index() {
        match Input::from_json(&json!(["가", "나", 3])) {
            Err(EngineError::InvalidInputType { index, found }) => {
                assert_eq!(index, 2);
                assert_eq!(found, "number");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            Input::from_json(&json!({"text": "가"})),
            Err(EngineError::InvalidInputType { index: 0, .. })
        ));
    }

    #[test]
    fn test_output_serializes_untagged() {
        let output = Output::Batch(vec![vec!["가."], vec!["나."]]);
        assert_eq!(serde_json::to_string(&output).unwrap(), r#"[["가."],["나."]]"#);
    }
}
