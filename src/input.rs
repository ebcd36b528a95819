//! Input boundary: turns product JSON into a validated [`Product`]
//!
//! All shape checks happen here so the rules downstream never see a
//! malformed value. Accepted documents:
//!
//! - a bare product record
//! - a lookup-service envelope `{"status": 1, "code": "...", "product": {...}}`
//! - a JSON array of either
//!
//! Nutrients may sit flat on the record or under `nutriments`; the nested
//! value wins when both are present. A non-array `ingredients_tags` is read
//! as an empty list.

use crate::models::{Nutrient, Nutriments, Product};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while reading product input
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("product {code} not found by the lookup service")]
    ProductNotFound { code: String },

    #[error("expected a product object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("nutrient '{key}' must be a number, got {found}")]
    NonNumericNutrient { key: &'static str, found: String },

    #[error("field '{field}' must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

impl Product {
    /// Parse a single product document
    pub fn from_json(json: &str) -> Result<Product, InputError> {
        let value: Value = serde_json::from_str(json)?;
        product_from_value(&value)
    }
}

impl TryFrom<Value> for Product {
    type Error = InputError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        product_from_value(&value)
    }
}

/// Parse a document holding one product or an array of products
pub fn parse_products(json: &str) -> Result<Vec<Product>, InputError> {
    let value: Value = serde_json::from_str(json)?;
    match &value {
        Value::Array(items) => items.iter().map(product_from_value).collect(),
        other => Ok(vec![product_from_value(other)?]),
    }
}

/// Build a product from a parsed JSON value
pub fn product_from_value(value: &Value) -> Result<Product, InputError> {
    let record = as_object(value)?;

    if let Some(inner) = record.get("product").filter(|p| p.is_object()) {
        if record.get("status").and_then(Value::as_i64) == Some(0) {
            return Err(InputError::ProductNotFound {
                code: envelope_code(record),
            });
        }
        let mut product = product_from_value(inner)?;
        if product.code.is_none() {
            product.code = optional_code(record)?;
        }
        return Ok(product);
    }
    if record.get("status").and_then(Value::as_i64) == Some(0) {
        return Err(InputError::ProductNotFound {
            code: envelope_code(record),
        });
    }

    Ok(Product {
        code: optional_code(record)?,
        product_name: optional_string(record, "product_name")?,
        brands: optional_string(record, "brands")?,
        image_url: optional_string(record, "image_url")?,
        nutriments: read_nutriments(record)?,
        ingredients_text: optional_string(record, "ingredients_text")?.unwrap_or_default(),
        ingredients_tags: read_tags(record.get("ingredients_tags")),
        nova_group: read_nova_group(record)?,
    })
}

fn as_object(value: &Value) -> Result<&Map<String, Value>, InputError> {
    value.as_object().ok_or(InputError::NotAnObject {
        found: type_name(value),
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn envelope_code(record: &Map<String, Value>) -> String {
    match record.get("code") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => "<unknown>".to_string(),
    }
}

fn optional_code(record: &Map<String, Value>) -> Result<Option<String>, InputError> {
    match record.get("code") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(_) => Err(InputError::InvalidField {
            field: "code",
            expected: "a string or number",
        }),
    }
}

fn optional_string(
    record: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, InputError> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(InputError::InvalidField {
            field,
            expected: "a string",
        }),
    }
}

fn read_nutriments(record: &Map<String, Value>) -> Result<Nutriments, InputError> {
    let mut nutriments = Nutriments::default();
    read_nutrients_into(&mut nutriments, record)?;

    match record.get("nutriments") {
        None | Some(Value::Null) => {}
        Some(Value::Object(nested)) => read_nutrients_into(&mut nutriments, nested)?,
        Some(_) => {
            return Err(InputError::InvalidField {
                field: "nutriments",
                expected: "an object",
            })
        }
    }

    Ok(nutriments)
}

fn read_nutrients_into(
    nutriments: &mut Nutriments,
    source: &Map<String, Value>,
) -> Result<(), InputError> {
    for nutrient in Nutrient::ALL {
        match source.get(nutrient.key()) {
            None | Some(Value::Null) => {}
            Some(Value::Number(n)) => {
                let value = n.as_f64().ok_or_else(|| InputError::NonNumericNutrient {
                    key: nutrient.key(),
                    found: n.to_string(),
                })?;
                nutriments.set(nutrient, value);
            }
            Some(other) => {
                return Err(InputError::NonNumericNutrient {
                    key: nutrient.key(),
                    found: other.to_string(),
                })
            }
        }
    }
    Ok(())
}

/// Tags are best-effort: anything that is not an array reads as empty and
/// non-string entries are skipped.
fn read_tags(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

fn read_nova_group(record: &Map<String, Value>) -> Result<Option<u8>, InputError> {
    const EXPECTED: &str = "an integer from 1 to 4";
    let invalid = InputError::InvalidField {
        field: "nova_group",
        expected: EXPECTED,
    };
    match record.get("nova_group") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            let group = match n.as_u64() {
                Some(g) => g,
                None => match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f >= 0.0 => f as u64,
                    _ => return Err(invalid),
                },
            };
            if (1..=4).contains(&group) {
                Ok(Some(group as u8))
            } else {
                Err(invalid)
            }
        }
        Some(_) => Err(invalid),
    }
}
