pub mod render;
pub mod response;
pub mod settings;
pub mod templates;
pub mod transfer;

use crate::cli::Commands;
use crate::config::AppPaths;
use crate::core::settings::SettingsStore;
use crate::core::store::TemplateStore;
use crate::core::template::Template;
use anyhow::{Result, anyhow};

/// Shared state for one CLI invocation.
#[derive(Debug, Clone)]
pub struct Context {
    pub paths: AppPaths,
    pub json: bool,
}

impl Context {
    pub fn new(paths: AppPaths, json: bool) -> Self {
        Self { paths, json }
    }

    pub fn templates(&self) -> TemplateStore {
        TemplateStore::new(&self.paths.templates_file)
    }

    pub fn settings(&self) -> SettingsStore {
        SettingsStore::new(&self.paths.settings_file)
    }

    pub(crate) async fn require_template(&self, id: &str) -> Result<Template> {
        self.templates()
            .get(id)
            .await?
            .ok_or_else(|| anyhow!("Template not found: {}", id))
    }
}

pub async fn dispatch(command: Commands, ctx: &Context) -> Result<()> {
    match command {
        Commands::List => templates::list(ctx).await,
        Commands::Show { id } => templates::show(ctx, &id).await,
        Commands::Search { query } => templates::search(ctx, &query).await,
        Commands::Add {
            title,
            content,
            file,
            link,
        } => templates::add(ctx, title, content, file, link).await,
        Commands::Edit {
            id,
            title,
            content,
            file,
            link,
        } => templates::edit(ctx, &id, title, content, file, link).await,
        Commands::Delete { id } => templates::delete(ctx, &id).await,
        Commands::Vars { id, set } => render::vars(ctx, &id, set).await,
        Commands::Render {
            id,
            set,
            interactive,
            copy,
            highlight,
            output,
        } => {
            let options = render::RenderOptions {
                interactive,
                copy,
                highlight,
                output,
            };
            render::execute(ctx, &id, set, options).await
        }
        Commands::Export { path } => transfer::export(ctx, path).await,
        Commands::Import { path } => transfer::import(ctx, path).await,
        Commands::Init => templates::init(ctx).await,
        Commands::Settings { action } => settings::execute(ctx, action).await,
    }
}
