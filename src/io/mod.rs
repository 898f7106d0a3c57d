pub mod clipboard;
pub mod file_operations;
pub mod location;
