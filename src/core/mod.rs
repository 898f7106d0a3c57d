pub mod placeholder;
pub mod settings;
pub mod store;
pub mod template;
