use anyhow::{Result, anyhow};
use serde_json::{Value, json};

use super::Context;
use super::response::{print, success};
use crate::cli::SettingsAction;

/// JSON literals keep their type, anything else is a plain string.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub async fn execute(ctx: &Context, action: SettingsAction) -> Result<()> {
    let store = ctx.settings();

    match action {
        SettingsAction::List => {
            let settings = store.load().await?;
            if ctx.json {
                return print(&success(json!({ "settings": settings })));
            }
            for (key, value) in &settings {
                println!("{} = {}", key, display(value));
            }
        }
        SettingsAction::Get { key } => {
            let value = store
                .get(&key)
                .await?
                .ok_or_else(|| anyhow!("Setting not found: {}", key))?;
            if ctx.json {
                return print(&success(json!({ "key": key, "value": value })));
            }
            println!("{}", display(&value));
        }
        SettingsAction::Set { key, value } => {
            store.set(&key, parse_value(&value)).await?;
            if ctx.json {
                return print(&success(json!({})));
            }
            println!("Saved {}", key);
        }
        SettingsAction::Unset { key } => {
            let removed = store.unset(&key).await?;
            if ctx.json {
                return print(&success(json!({ "removed": removed })));
            }
            if removed {
                println!("Removed {}", key);
            } else {
                println!("{} was not set", key);
            }
        }
    }
    Ok(())
}
