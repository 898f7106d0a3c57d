use serde::{Deserialize, Serialize};

/// A stored prompt template.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Template {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Input to [`TemplateStore::save`](crate::core::store::TemplateStore::save).
///
/// A `New` draft never carries an id; the store assigns one. An `Existing`
/// draft replaces the stored record with the same id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateDraft {
    New {
        title: String,
        content: String,
        link: Option<String>,
    },
    Existing(Template),
}

impl TemplateDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        TemplateDraft::New {
            title: title.into(),
            content: content.into(),
            link: None,
        }
    }

    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        match &mut self {
            TemplateDraft::New { link, .. } => *link = Some(url.into()),
            TemplateDraft::Existing(template) => template.link = Some(url.into()),
        }
        self
    }

    pub fn title(&self) -> &str {
        match self {
            TemplateDraft::New { title, .. } => title,
            TemplateDraft::Existing(template) => &template.title,
        }
    }
}

impl From<Template> for TemplateDraft {
    fn from(template: Template) -> Self {
        TemplateDraft::Existing(template)
    }
}

/// Record shape accepted from import files, where `id` may be missing.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct IncomingTemplate {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl IncomingTemplate {
    /// Empty ids count as missing.
    pub fn into_template(self, generate: impl FnOnce() -> String) -> Template {
        let id = match self.id {
            Some(id) if !id.is_empty() => id,
            _ => generate(),
        };
        Template {
            id,
            title: self.title,
            content: self.content,
            link: self.link,
        }
    }
}
