use anyhow::Result;
use serde_json::json;
use std::path::PathBuf;

use super::Context;
use super::response::{print, success};
use crate::io::location::{FixedLocation, LocationPicker, StdinPrompt};

fn picker_for(path: Option<PathBuf>) -> Box<dyn LocationPicker> {
    match path {
        Some(path) => Box::new(FixedLocation(Some(path))),
        None => Box::new(StdinPrompt),
    }
}

pub async fn export(ctx: &Context, path: Option<PathBuf>) -> Result<()> {
    let picker = picker_for(path);
    let summary = ctx.templates().export(picker.as_ref()).await?;

    if ctx.json {
        return print(&success(json!(summary)));
    }
    println!(
        "Exported {} templates to {}",
        summary.count,
        summary.path.display()
    );
    Ok(())
}

pub async fn import(ctx: &Context, path: Option<PathBuf>) -> Result<()> {
    let picker = picker_for(path);
    let templates = ctx.templates().import(picker.as_ref()).await?;

    if ctx.json {
        return print(&success(json!({
            "count": templates.len(),
            "templates": templates,
        })));
    }
    println!("Import complete, {} templates stored", templates.len());
    Ok(())
}
