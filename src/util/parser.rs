use serde_json::Value;

use crate::{data::models::Giveaway, error::FetchError};

pub const EXCLUDED_PLATFORM: &str = "DRM-Free";

pub fn parse(content: &str) -> Result<Vec<Giveaway>, FetchError> {
    let value: Value = serde_json::from_str(content)?;

    if !value.is_array() {
        return Err(FetchError::NotArray(kind(&value)));
    }

    let giveaways: Vec<Giveaway> = serde_json::from_value(value)?;
    Ok(filter(giveaways))
}

pub fn filter(mut giveaways: Vec<Giveaway>) -> Vec<Giveaway> {
    giveaways.retain(|g| !g.platforms.contains(EXCLUDED_PLATFORM));
    giveaways
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
