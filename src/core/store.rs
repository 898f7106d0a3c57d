use crate::config::defaults::DEFAULT_TEMPLATES;
use crate::core::template::{IncomingTemplate, Template, TemplateDraft};
use crate::error::{StoreError, StoreResult};
use crate::io::file_operations::{read_file_safe, read_if_exists, write_file_safe, write_json_pretty};
use crate::io::location::LocationPicker;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

pub const DEFAULT_EXPORT_NAME: &str = "ai-prompt-templates.json";

/// Source of fresh template ids.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub count: usize,
    pub path: PathBuf,
}

/// File-backed template collection.
///
/// Every operation reads the whole collection, applies its change and writes
/// it back. Callers must not run two operations on the same file at once.
pub struct TemplateStore {
    path: PathBuf,
    ids: Box<dyn IdGenerator>,
}

impl std::fmt::Debug for TemplateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl TemplateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_id_generator(path, UuidGenerator)
    }

    pub fn with_id_generator(path: impl Into<PathBuf>, ids: impl IdGenerator + 'static) -> Self {
        Self {
            path: path.into(),
            ids: Box::new(ids),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parsed collection, or `None` when the backing file does not exist.
    async fn load(&self) -> StoreResult<Option<Vec<Template>>> {
        let Some(data) = read_if_exists(&self.path).await? else {
            return Ok(None);
        };
        let templates =
            serde_json::from_str(&data).map_err(|e| StoreError::corrupt(&self.path, e))?;
        Ok(Some(templates))
    }

    async fn persist(&self, templates: &[Template]) -> StoreResult<()> {
        write_json_pretty(&self.path, templates).await
    }

    /// All templates in stored order. A missing file is an empty collection.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn list(&self) -> StoreResult<Vec<Template>> {
        let templates = self.load().await?.unwrap_or_default();
        debug!("Loaded {} templates", templates.len());
        Ok(templates)
    }

    pub async fn get(&self, id: &str) -> StoreResult<Option<Template>> {
        Ok(self.list().await?.into_iter().find(|t| t.id == id))
    }

    /// Case-insensitive match on title or content, in stored order.
    pub async fn search(&self, query: &str) -> StoreResult<Vec<Template>> {
        let needle = query.to_lowercase();
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|t| {
                t.title.to_lowercase().contains(&needle)
                    || t.content.to_lowercase().contains(&needle)
            })
            .collect())
    }

    /// Appends a new template under a fresh id, or replaces an existing one
    /// in place.
    #[instrument(skip(self, draft), fields(title = draft.title()))]
    pub async fn save(&self, draft: TemplateDraft) -> StoreResult<Template> {
        let mut templates = self.list().await?;

        let saved = match draft {
            TemplateDraft::New {
                title,
                content,
                link,
            } => {
                let template = Template {
                    id: self.ids.generate(),
                    title,
                    content,
                    link,
                };
                templates.push(template.clone());
                info!("Created template {}", template.id);
                template
            }
            TemplateDraft::Existing(mut template) => {
                match templates.iter_mut().find(|t| t.id == template.id) {
                    Some(slot) => {
                        *slot = template.clone();
                        info!("Updated template {}", template.id);
                    }
                    None => {
                        let stale = std::mem::replace(&mut template.id, self.ids.generate());
                        warn!(
                            "Template {} not found, saved as new template {}",
                            stale, template.id
                        );
                        templates.push(template.clone());
                    }
                }
                template
            }
        };

        self.persist(&templates).await?;
        Ok(saved)
    }

    /// Removes the template with `id`. Unknown ids are a no-op.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        let Some(mut templates) = self.load().await? else {
            return Err(StoreError::NotFound(self.path.clone()));
        };

        let before = templates.len();
        templates.retain(|t| t.id != id);
        if templates.len() == before {
            debug!("No template with id {}", id);
        } else {
            info!("Deleted template {}", id);
        }

        self.persist(&templates).await
    }

    /// Copies the collection to a location chosen by `picker`.
    #[instrument(skip(self, picker))]
    pub async fn export(&self, picker: &dyn LocationPicker) -> StoreResult<ExportSummary> {
        let Some(data) = read_if_exists(&self.path).await? else {
            return Err(StoreError::EmptySource(self.path.clone()));
        };

        let Some(destination) = picker.pick_destination(DEFAULT_EXPORT_NAME) else {
            return Err(StoreError::Cancelled("Export"));
        };

        let templates: Vec<Template> =
            serde_json::from_str(&data).map_err(|e| StoreError::corrupt(&self.path, e))?;
        write_file_safe(&destination, &data).await?;

        info!(
            "Exported {} templates to {}",
            templates.len(),
            destination.display()
        );
        Ok(ExportSummary {
            count: templates.len(),
            path: destination,
        })
    }

    /// Merges templates from a file chosen by `picker` into the collection.
    ///
    /// Incoming records without an id get a fresh one. A record whose id is
    /// already stored replaces that record at its position; the rest are
    /// appended. Returns the merged collection.
    #[instrument(skip(self, picker))]
    pub async fn import(&self, picker: &dyn LocationPicker) -> StoreResult<Vec<Template>> {
        let Some(source) = picker.pick_source() else {
            return Err(StoreError::Cancelled("Import"));
        };

        let data = read_file_safe(&source).await?;
        let incoming: Vec<IncomingTemplate> =
            serde_json::from_str(&data).map_err(|e| StoreError::MalformedInput {
                path: source.clone(),
                source: e,
            })?;
        debug!("Read {} templates from {}", incoming.len(), source.display());

        let incoming = incoming
            .into_iter()
            .map(|record| record.into_template(|| self.ids.generate()));

        let mut merged = self.list().await?;
        let (mut replaced, mut added) = (0, 0);
        for template in incoming {
            match merged.iter_mut().find(|t| t.id == template.id) {
                Some(slot) => {
                    *slot = template;
                    replaced += 1;
                }
                None => {
                    merged.push(template);
                    added += 1;
                }
            }
        }

        self.persist(&merged).await?;
        info!(
            "Imported from {}: {} replaced, {} added",
            source.display(),
            replaced,
            added
        );
        Ok(merged)
    }

    /// Writes the bundled starter templates when no collection exists yet.
    /// Returns how many were written.
    pub async fn seed_defaults(&self) -> StoreResult<usize> {
        if self.load().await?.is_some() {
            debug!("Templates file already exists, skipping defaults");
            return Ok(0);
        }

        let templates: Vec<Template> = DEFAULT_TEMPLATES
            .iter()
            .map(|(title, content, link)| Template {
                id: self.ids.generate(),
                title: title.to_string(),
                content: content.to_string(),
                link: link.map(str::to_string),
            })
            .collect();

        self.persist(&templates).await?;
        info!("Default templates initialized");
        Ok(templates.len())
    }
}
