pub mod catalog;
pub mod config;
pub mod error;
pub mod select;
pub mod table;

pub use catalog::{Catalog, NovelRow};
pub use config::AppConfig;
pub use error::ShioriError;
