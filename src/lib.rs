pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod io;

pub use crate::core::placeholder::{Variable, extract_variables, highlight, merge_variables, render};
pub use crate::core::settings::SettingsStore;
pub use crate::core::store::{IdGenerator, TemplateStore, UuidGenerator};
pub use crate::core::template::{Template, TemplateDraft};
pub use error::{StoreError, StoreResult};
