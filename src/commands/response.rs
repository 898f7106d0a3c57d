use anyhow::Result;
use serde_json::{Map, Value, json};

/// `{"success": true, ...payload}`. Non-object payloads go under `data`.
pub fn success(payload: Value) -> Value {
    let mut body = Map::new();
    body.insert("success".to_string(), Value::Bool(true));
    match payload {
        Value::Object(fields) => body.extend(fields),
        Value::Null => {}
        other => {
            body.insert("data".to_string(), other);
        }
    }
    Value::Object(body)
}

pub fn failure(error: &anyhow::Error) -> Value {
    json!({ "success": false, "error": error.to_string() })
}

pub fn print(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
