//! JSON launcher values with number-insensitive equality.
//!
//! `serde_json::Value` keeps integers and floats apart, so `1` and `1.0`
//! compare unequal. A launcher file written by hand should not slip a
//! duplicate past the lint that way: numbers compare by numeric value here,
//! everything else compares structurally with types kept distinct.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A raw JSON launcher description, compared for lint purposes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonLauncher(pub Value);

impl From<Value> for JsonLauncher {
    fn from(value: Value) -> Self {
        JsonLauncher(value)
    }
}

impl PartialEq for JsonLauncher {
    fn eq(&self, other: &Self) -> bool {
        json_eq(&self.0, &other.0)
    }
}

fn json_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| json_eq(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| json_eq(x, y)))
        }
        _ => a == b,
    }
}
