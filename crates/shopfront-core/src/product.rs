//! The product domain: untrusted form input and its coerced draft form.

use serde::Deserialize;
use thiserror::Error;

/// A flat admin-form submission, exactly as it arrives off the wire.
///
/// Every field is optional text; requiredness and typing are enforced by
/// [`NewProduct::from_form`], not by deserialization, so a missing field
/// surfaces as a [`ValidationError`] rather than a framework rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub stock: Option<String>,
    pub supplier_url: Option<String>,
    pub supplier_name: Option<String>,
    /// Accepted from the form but always discarded; see [`NewProduct::from_form`].
    pub shipping_cost: Option<String>,
}

/// A coerced, typed product draft ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub stock: i64,
    /// Informational link to the upstream supplier; never dereferenced.
    pub supplier_url: Option<String>,
    pub supplier_name: Option<String>,
    pub shipping_cost: f64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid value for {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },
}

impl NewProduct {
    /// Coerce an untrusted form submission into a typed draft.
    ///
    /// `name`, `description`, and `price` are required; `stock` defaults to
    /// zero; the remaining text fields are optional with empty strings
    /// normalized to `None`. Whatever `shipping_cost` the caller submitted
    /// is discarded — every product created through intake ships free.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a required field is absent or a
    /// numeric field fails to parse as its declared type.
    pub fn from_form(form: ProductForm) -> Result<Self, ValidationError> {
        let name = required_text(form.name, "name")?;
        let description = required_text(form.description, "description")?;
        let price = parse_price(form.price)?;
        let stock = parse_stock(form.stock)?;

        Ok(Self {
            name,
            description,
            price,
            image_url: optional_text(form.image_url),
            category: optional_text(form.category),
            stock,
            supplier_url: optional_text(form.supplier_url),
            supplier_name: optional_text(form.supplier_name),
            shipping_cost: 0.0,
        })
    }
}

fn required_text(
    value: Option<String>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match value {
        Some(v) => {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                Err(ValidationError::MissingField(field))
            } else {
                Ok(trimmed.to_string())
            }
        }
        None => Err(ValidationError::MissingField(field)),
    }
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_price(value: Option<String>) -> Result<f64, ValidationError> {
    let raw = value.ok_or(ValidationError::MissingField("price"))?;
    let price = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| ValidationError::InvalidField {
            field: "price",
            reason: e.to_string(),
        })?;
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidField {
            field: "price",
            reason: "price must be a non-negative number".to_string(),
        });
    }
    Ok(price)
}

fn parse_stock(value: Option<String>) -> Result<i64, ValidationError> {
    match value {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim()
                .parse::<i64>()
                .map_err(|e| ValidationError::InvalidField {
                    field: "stock",
                    reason: e.to_string(),
                })
        }
        _ => Ok(0),
    }
}
