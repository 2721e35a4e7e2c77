use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A data context: the structured value a rendering code is interpreted
/// against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    None,
    Boolean(bool),
    /// kept as written, so large integers display with their own digits.
    Number(serde_json::Number),
    String(String),
    List(Vec<DataValue>),
    Dict(HashMap<String, DataValue>),
}

impl Default for DataValue {
    fn default() -> Self {
        Self::None
    }
}

impl DataValue {
    pub fn from_json(text: &str) -> Result<Self, ParseError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Ok(Self::from(value))
    }

    pub fn value_name(&self) -> String {
        match self {
            DataValue::None => "none",
            DataValue::Boolean(_) => "boolean",
            DataValue::Number(_) => "number",
            DataValue::String(_) => "string",
            DataValue::List(_) => "list",
            DataValue::Dict(_) => "dict",
        }
        .to_string()
    }

    pub fn as_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_number(&self) -> Option<&serde_json::Number> {
        if let Self::Number(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        if let Self::Boolean(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&[DataValue]> {
        if let Self::List(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn as_dict(&self) -> Option<&HashMap<String, DataValue>> {
        if let Self::Dict(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

impl From<serde_json::Value> for DataValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => DataValue::None,
            serde_json::Value::Bool(v) => DataValue::Boolean(v),
            serde_json::Value::Number(v) => DataValue::Number(v),
            serde_json::Value::String(v) => DataValue::String(v),
            serde_json::Value::Array(v) => {
                DataValue::List(v.into_iter().map(DataValue::from).collect())
            }
            serde_json::Value::Object(v) => {
                let mut r = HashMap::new();
                for (k, d) in v {
                    r.insert(k, DataValue::from(d));
                }
                DataValue::Dict(r)
            }
        }
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        DataValue::String(value.to_string())
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        DataValue::String(value)
    }
}

impl From<bool> for DataValue {
    fn from(value: bool) -> Self {
        DataValue::Boolean(value)
    }
}

impl From<i64> for DataValue {
    fn from(value: i64) -> Self {
        DataValue::Number(value.into())
    }
}

impl From<u64> for DataValue {
    fn from(value: u64) -> Self {
        DataValue::Number(value.into())
    }
}

/// non-finite floats have no json form and become `none`.
impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(DataValue::Number)
            .unwrap_or(DataValue::None)
    }
}

impl<T: Into<DataValue>> From<Vec<T>> for DataValue {
    fn from(value: Vec<T>) -> Self {
        DataValue::List(value.into_iter().map(Into::into).collect())
    }
}
