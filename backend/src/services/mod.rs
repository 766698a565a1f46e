pub mod catalog;
pub mod user_directory;
