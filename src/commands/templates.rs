use anyhow::{Result, anyhow};
use serde_json::json;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::info;

use super::Context;
use super::render::{ANSI_HIGHLIGHT_CLOSE, ANSI_HIGHLIGHT_OPEN};
use super::response::{print, success};
use crate::core::placeholder::{extract_variables, highlight_with};
use crate::core::template::{Template, TemplateDraft};
use crate::io::file_operations::read_file_safe;

fn print_listing(templates: &[Template]) {
    if templates.is_empty() {
        println!("No templates");
        return;
    }
    let width = templates.iter().map(|t| t.id.len()).max().unwrap_or(0);
    for template in templates {
        println!("{:<width$}  {}", template.id, template.title, width = width);
    }
}

pub async fn list(ctx: &Context) -> Result<()> {
    let templates = ctx.templates().list().await?;
    if ctx.json {
        return print(&success(json!({ "templates": templates })));
    }
    print_listing(&templates);
    Ok(())
}

pub async fn search(ctx: &Context, query: &str) -> Result<()> {
    let templates = ctx.templates().search(query).await?;
    info!("{} templates match '{}'", templates.len(), query);
    if ctx.json {
        return print(&success(json!({ "templates": templates })));
    }
    print_listing(&templates);
    Ok(())
}

pub async fn show(ctx: &Context, id: &str) -> Result<()> {
    let template = ctx.require_template(id).await?;
    let variables = extract_variables(&template.content);

    if ctx.json {
        return print(&success(json!({
            "template": template,
            "variables": variables,
        })));
    }

    println!("{} ({})", template.title, template.id);
    if let Some(link) = &template.link {
        println!("Link: {}", link);
    }
    println!();
    if std::io::stdout().is_terminal() {
        println!(
            "{}",
            highlight_with(&template.content, ANSI_HIGHLIGHT_OPEN, ANSI_HIGHLIGHT_CLOSE)
        );
    } else {
        println!("{}", template.content);
    }
    if !variables.is_empty() {
        let names: Vec<&str> = variables.iter().map(|v| v.name.as_str()).collect();
        println!("\nVariables: {}", names.join(", "));
    }
    Ok(())
}

async fn read_content(content: Option<String>, file: Option<PathBuf>) -> Result<Option<String>> {
    match (content, file) {
        (Some(content), _) => Ok(Some(content)),
        (None, Some(path)) => Ok(Some(read_file_safe(&path).await?)),
        (None, None) => Ok(None),
    }
}

fn non_empty(link: Option<String>) -> Option<String> {
    link.filter(|l| !l.trim().is_empty())
}

fn report_saved(ctx: &Context, template: &Template, verb: &str) -> Result<()> {
    if ctx.json {
        return print(&success(json!({ "template": template })));
    }
    println!("{} template '{}' ({})", verb, template.title, template.id);
    Ok(())
}

pub async fn add(
    ctx: &Context,
    title: String,
    content: Option<String>,
    file: Option<PathBuf>,
    link: Option<String>,
) -> Result<()> {
    let content = read_content(content, file)
        .await?
        .ok_or_else(|| anyhow!("Either --content or --file is required"))?;

    let draft = TemplateDraft::New {
        title,
        content,
        link: non_empty(link),
    };
    let saved = ctx.templates().save(draft).await?;
    report_saved(ctx, &saved, "Created")
}

pub async fn edit(
    ctx: &Context,
    id: &str,
    title: Option<String>,
    content: Option<String>,
    file: Option<PathBuf>,
    link: Option<String>,
) -> Result<()> {
    let mut template = ctx.require_template(id).await?;

    if let Some(title) = title {
        template.title = title;
    }
    if let Some(content) = read_content(content, file).await? {
        template.content = content;
    }
    if link.is_some() {
        template.link = non_empty(link);
    }

    let saved = ctx.templates().save(TemplateDraft::Existing(template)).await?;
    report_saved(ctx, &saved, "Updated")
}

pub async fn delete(ctx: &Context, id: &str) -> Result<()> {
    ctx.templates().delete(id).await?;
    if ctx.json {
        return print(&success(json!({})));
    }
    println!("Deleted {}", id);
    Ok(())
}

pub async fn init(ctx: &Context) -> Result<()> {
    let added = ctx.templates().seed_defaults().await?;
    if ctx.json {
        return print(&success(json!({ "count": added })));
    }
    if added == 0 {
        println!("Templates already exist, nothing added");
    } else {
        println!("Added {} starter templates", added);
    }
    Ok(())
}
