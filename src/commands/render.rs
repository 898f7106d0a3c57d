use anyhow::{Context as _, Result};
use serde_json::json;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use super::Context;
use super::response::{print, success};
use crate::core::placeholder::{Variable, highlight_with, refresh_variables, render};
use crate::io::clipboard::copy_to_clipboard;
use crate::io::file_operations::write_file_safe;

pub const ANSI_HIGHLIGHT_OPEN: &str = "\x1b[1;33m";
pub const ANSI_HIGHLIGHT_CLOSE: &str = "\x1b[0m";

#[derive(Debug, Default, Clone)]
pub struct RenderOptions {
    pub interactive: bool,
    pub copy: bool,
    pub highlight: bool,
    pub output: Option<PathBuf>,
}

/// Variables of `content` with values taken from `--set` assignments.
fn resolve_variables(content: &str, assignments: Vec<(String, String)>) -> Vec<Variable> {
    let assigned: Vec<Variable> = assignments
        .into_iter()
        .map(|(name, value)| Variable::with_value(name, value))
        .collect();

    let variables = refresh_variables(content, &assigned);
    for var in &assigned {
        if !variables.iter().any(|v| v.name == var.name) {
            warn!("Ignoring unknown variable '{}'", var.name);
        }
    }
    variables
}

fn ask_for_missing(variables: &mut [Variable]) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    for var in variables.iter_mut().filter(|v| v.value.is_empty()) {
        eprint!("{}: ", var.name);
        io::stderr().flush()?;
        match lines.next() {
            Some(line) => var.value = line.context("Failed to read from stdin")?,
            None => break,
        }
    }
    Ok(())
}

pub async fn vars(ctx: &Context, id: &str, assignments: Vec<(String, String)>) -> Result<()> {
    let template = ctx.require_template(id).await?;
    let variables = resolve_variables(&template.content, assignments);

    if ctx.json {
        return print(&success(json!({ "variables": variables })));
    }

    if variables.is_empty() {
        println!("No variables");
    }
    for var in &variables {
        if var.value.is_empty() {
            println!("{}", var.name);
        } else {
            println!("{} = {}", var.name, var.value);
        }
    }
    Ok(())
}

pub async fn execute(
    ctx: &Context,
    id: &str,
    assignments: Vec<(String, String)>,
    options: RenderOptions,
) -> Result<()> {
    let template = ctx.require_template(id).await?;
    let mut variables = resolve_variables(&template.content, assignments);

    if options.interactive {
        ask_for_missing(&mut variables)?;
    }

    let rendered = render(&template.content, &variables);
    let unresolved = variables.iter().filter(|v| v.value.is_empty()).count();
    debug!(
        "Rendered '{}' with {} of {} variables filled",
        template.title,
        variables.len() - unresolved,
        variables.len()
    );
    if unresolved > 0 {
        info!("{} variables left unresolved", unresolved);
    }

    if let Some(path) = &options.output {
        write_file_safe(path, &rendered).await?;
        info!("Output written to: {}", path.display());
    }

    if options.copy {
        copy_to_clipboard(&rendered).await?;
    }

    if ctx.json {
        return print(&success(json!({
            "content": rendered,
            "variables": variables,
        })));
    }

    if options.output.is_none() {
        if options.highlight {
            println!(
                "{}",
                highlight_with(&rendered, ANSI_HIGHLIGHT_OPEN, ANSI_HIGHLIGHT_CLOSE)
            );
        } else {
            println!("{}", rendered);
        }
    }
    if options.copy {
        println!("Copied to clipboard");
    }
    Ok(())
}
