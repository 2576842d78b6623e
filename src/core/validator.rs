use crate::domain::model::{Category, Product, ProductPayload, User, UserPayload};
use crate::utils::error::{IntegrationError, Result};
use serde_json::Value;

pub const MAX_PRICE: f64 = 100_000.0;

/// Turns a fetched user payload into a [`User`], checking it answers the
/// requested id and carries the fields scoring relies on.
pub fn validate_user(requested_id: i64, payload: UserPayload) -> Result<User> {
    let id = check_id("user.id", requested_id, payload.id)?;
    let name = required_text("user.name", payload.name)?;
    let email = required_text("user.email", payload.email)?;
    let city = optional_city(payload.address)?;

    Ok(User {
        id,
        name,
        email,
        city,
    })
}

pub fn validate_product(requested_id: i64, payload: ProductPayload) -> Result<Product> {
    let id = check_id("product.id", requested_id, payload.id)?;
    let title = required_text("product.title", payload.title)?;

    let label = required_text("product.category", payload.category)?;
    let category = Category::from_label(&label).ok_or_else(|| {
        IntegrationError::validation(
            "product.category",
            format!(
                "\"{}\" is not one of: {}",
                label,
                Category::ALL.map(|c| c.label()).join(", ")
            ),
        )
    })?;

    let price = match payload.price {
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| {
            IntegrationError::validation("product.price", format!("{} is not representable", n))
        })?,
        Some(other) => {
            return Err(IntegrationError::validation(
                "product.price",
                format!("expected a number, got {}", json_kind(&other)),
            ))
        }
        None => return Err(IntegrationError::validation("product.price", "is missing")),
    };
    if !price.is_finite() || price <= 0.0 || price > MAX_PRICE {
        return Err(IntegrationError::validation(
            "product.price",
            format!("{} is outside (0, {}]", price, MAX_PRICE),
        ));
    }

    Ok(Product {
        id,
        title,
        category,
        price,
    })
}

fn check_id(field: &str, requested: i64, returned: Option<Value>) -> Result<i64> {
    let id = match returned {
        Some(Value::Number(n)) => n.as_i64().ok_or_else(|| {
            IntegrationError::validation(field, format!("{} is not an integer id", n))
        })?,
        Some(other) => {
            return Err(IntegrationError::validation(
                field,
                format!("expected an integer, got {}", json_kind(&other)),
            ))
        }
        None => return Err(IntegrationError::validation(field, "is missing")),
    };

    if id != requested {
        return Err(IntegrationError::validation(
            field,
            format!("response carries id {} but {} was requested", id, requested),
        ));
    }
    Ok(id)
}

fn required_text(field: &str, value: Option<Value>) -> Result<String> {
    match value {
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(text),
        Some(Value::String(_)) => Err(IntegrationError::validation(field, "must not be empty")),
        Some(other) => Err(IntegrationError::validation(
            field,
            format!("expected a string, got {}", json_kind(&other)),
        )),
        None => Err(IntegrationError::validation(field, "is missing")),
    }
}

/// The address block is optional; when present its city must be a string.
fn optional_city(address: Option<Value>) -> Result<Option<String>> {
    let city = match address {
        None => return Ok(None),
        Some(Value::Object(mut map)) => map.remove("city"),
        Some(other) => {
            return Err(IntegrationError::validation(
                "user.address",
                format!("expected an object, got {}", json_kind(&other)),
            ))
        }
    };

    match city {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(city)) => Ok(Some(city).filter(|c| !c.trim().is_empty())),
        Some(other) => Err(IntegrationError::validation(
            "user.address.city",
            format!("expected a string, got {}", json_kind(&other)),
        )),
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
