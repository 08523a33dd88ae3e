//! Record schemas for the two document collections.
//!
//! The store itself enforces no shape, so every record is validated here at
//! the service boundary: `from_document` either produces the typed record or
//! reports which fields violated the schema.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    pub fields: Vec<String>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed for fields: {}", self.fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Building-materials catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub brand: Option<String>,
    pub grade: Option<String>,
    pub unit: String,
    pub price_per_unit: Option<f64>,
    pub in_stock: bool,
    pub description: Option<String>,
}

impl Product {
    pub fn from_document(doc: &Map<String, Value>) -> std::result::Result<Self, ValidationErrors> {
        let mut invalid = Vec::new();

        let name = required_string(doc, "name", &mut invalid);
        let category = required_string(doc, "category", &mut invalid);
        let brand = optional_string(doc, "brand", &mut invalid);
        let grade = optional_string(doc, "grade", &mut invalid);
        let unit = required_string(doc, "unit", &mut invalid);

        let price_per_unit = match doc.get("price_per_unit") {
            None | Some(Value::Null) => None,
            Some(value) => match value.as_f64() {
                Some(price) if price >= 0.0 => Some(price),
                _ => {
                    invalid.push("price_per_unit".to_string());
                    None
                }
            },
        };

        let in_stock = match doc.get("in_stock") {
            None | Some(Value::Null) => true,
            Some(Value::Bool(flag)) => *flag,
            Some(_) => {
                invalid.push("in_stock".to_string());
                true
            }
        };

        let description = optional_string(doc, "description", &mut invalid);

        match (name, category, unit) {
            (Some(name), Some(category), Some(unit)) if invalid.is_empty() => Ok(Self {
                name,
                category,
                brand,
                grade,
                unit,
                price_per_unit,
                in_stock,
                description,
            }),
            _ => Err(ValidationErrors { fields: invalid }),
        }
    }
}

/// Customer enquiry submitted through the public form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lead {
    pub name: String,
    pub phone: String,
    pub requirement: Option<String>,
    pub quantity: Option<String>,
    pub location: Option<String>,
    pub message: Option<String>,
}

impl Lead {
    pub fn from_document(doc: &Map<String, Value>) -> std::result::Result<Self, ValidationErrors> {
        let mut invalid = Vec::new();

        let name = required_string(doc, "name", &mut invalid);
        let phone = required_string(doc, "phone", &mut invalid);
        let requirement = optional_string(doc, "requirement", &mut invalid);
        let quantity = optional_string(doc, "quantity", &mut invalid);
        let location = optional_string(doc, "location", &mut invalid);
        let message = optional_string(doc, "message", &mut invalid);

        match (name, phone) {
            (Some(name), Some(phone)) if invalid.is_empty() => Ok(Self {
                name,
                phone,
                requirement,
                quantity,
                location,
                message,
            }),
            _ => Err(ValidationErrors { fields: invalid }),
        }
    }
}

fn required_string(doc: &Map<String, Value>, field: &str, invalid: &mut Vec<String>) -> Option<String> {
    match doc.get(field) {
        Some(Value::String(value)) => Some(value.clone()),
        _ => {
            invalid.push(field.to_string());
            None
        }
    }
}

fn optional_string(doc: &Map<String, Value>, field: &str, invalid: &mut Vec<String>) -> Option<String> {
    match doc.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(value)) => Some(value.clone()),
        Some(_) => {
            invalid.push(field.to_string());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn product_in_stock_defaults_to_true() {
        let product = Product::from_document(&doc(json!({
            "name": "Coarse Sand",
            "category": "Sand & Aggregates",
            "unit": "cubic ft",
        })))
        .unwrap();

        assert!(product.in_stock);
        assert_eq!(product.brand, None);
        assert_eq!(product.price_per_unit, None);
    }

    #[test]
    fn product_rejects_negative_price() {
        let err = Product::from_document(&doc(json!({
            "name": "OPC 43",
            "category": "Cement",
            "unit": "bag",
            "price_per_unit": -1.5,
        })))
        .unwrap_err();

        assert_eq!(err.fields, vec!["price_per_unit".to_string()]);
    }

    #[test]
    fn product_accepts_integer_price() {
        let product = Product::from_document(&doc(json!({
            "name": "TMT Rebar 12mm Fe500D",
            "category": "TMT Rebar",
            "unit": "piece",
            "price_per_unit": 620,
        })))
        .unwrap();

        assert_eq!(product.price_per_unit, Some(620.0));
    }

    #[test]
    fn product_requires_unit() {
        let err = Product::from_document(&doc(json!({
            "name": "Bricks",
            "category": "Bricks & Blocks",
        })))
        .unwrap_err();

        assert!(err.fields.contains(&"unit".to_string()));
    }

    #[test]
    fn product_ignores_null_optionals() {
        let product = Product::from_document(&doc(json!({
            "name": "Coarse Sand",
            "category": "Sand & Aggregates",
            "brand": null,
            "grade": null,
            "unit": "cubic ft",
        })))
        .unwrap();

        assert_eq!(product.brand, None);
        assert_eq!(product.grade, None);
    }

    #[test]
    fn lead_requires_name_and_phone() {
        let err = Lead::from_document(&Map::new()).unwrap_err();

        assert!(err.fields.contains(&"name".to_string()));
        assert!(err.fields.contains(&"phone".to_string()));
    }

    #[test]
    fn lead_keeps_optional_fields() {
        let lead = Lead::from_document(&doc(json!({
            "name": "Ravi",
            "phone": "9800000000",
            "requirement": "Cement",
            "quantity": "50 bags",
        })))
        .unwrap();

        assert_eq!(lead.requirement.as_deref(), Some("Cement"));
        assert_eq!(lead.quantity.as_deref(), Some("50 bags"));
        assert_eq!(lead.location, None);
    }

    #[test]
    fn lead_rejects_non_string_phone() {
        let err = Lead::from_document(&doc(json!({
            "name": "Ravi",
            "phone": 9800000000u64,
        })))
        .unwrap_err();

        assert_eq!(err.fields, vec!["phone".to_string()]);
    }
}
