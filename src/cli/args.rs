use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "promptbox", version)]
#[command(about = "Store, fill in and reuse prompt templates")]
pub struct Args {
    /// Directory holding templates and settings
    #[arg(long, global = true, env = "PROMPTBOX_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Print results as JSON objects with a `success` field
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all templates
    List,
    /// Show one template and its variables
    Show { id: String },
    /// Find templates whose title or content contains QUERY
    Search { query: String },
    /// Create a new template
    Add {
        #[arg(short = 't', long, value_parser = parse_title)]
        title: String,

        /// Template text, use {{name}} for variables
        #[arg(short = 'c', long, required_unless_present = "file", conflicts_with = "file")]
        content: Option<String>,

        /// Read template text from a file
        #[arg(short = 'f', long)]
        file: Option<PathBuf>,

        /// Reference URL
        #[arg(short = 'l', long)]
        link: Option<String>,
    },
    /// Change an existing template
    Edit {
        id: String,

        #[arg(short = 't', long, value_parser = parse_title)]
        title: Option<String>,

        #[arg(short = 'c', long, conflicts_with = "file")]
        content: Option<String>,

        #[arg(short = 'f', long)]
        file: Option<PathBuf>,

        /// Reference URL, an empty value removes it
        #[arg(short = 'l', long)]
        link: Option<String>,
    },
    /// Delete a template
    Delete { id: String },
    /// List the variables of a template
    Vars {
        id: String,

        /// Variable value as NAME=VALUE
        #[arg(short = 's', long = "set", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
    },
    /// Fill in a template's variables and print the result
    Render {
        id: String,

        /// Variable value as NAME=VALUE
        #[arg(short = 's', long = "set", value_parser = parse_assignment)]
        set: Vec<(String, String)>,

        /// Ask for every variable left empty
        #[arg(short = 'i', long)]
        interactive: bool,

        /// Copy the rendered prompt to the clipboard
        #[arg(long)]
        copy: bool,

        /// Mark unresolved placeholders
        #[arg(long)]
        highlight: bool,

        /// Write the rendered prompt to a file
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// Write all templates to a JSON file
    Export {
        /// Destination, asked for interactively when omitted
        path: Option<PathBuf>,
    },
    /// Merge templates from a JSON file
    Import {
        /// Source, asked for interactively when omitted
        path: Option<PathBuf>,
    },
    /// Add the starter templates if none exist
    Init,
    /// Read or change settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
pub enum SettingsAction {
    List,
    Get {
        key: String,
    },
    /// VALUE is parsed as JSON when possible, else stored as a string
    Set {
        key: String,
        value: String,
    },
    Unset {
        key: String,
    },
}

pub fn parse_title(raw: &str) -> Result<String, String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err("title must not be empty".to_string());
    }
    Ok(title.to_string())
}

pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in '{}'", raw));
    }
    Ok((name.to_string(), value.to_string()))
}
