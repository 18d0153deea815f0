use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ShioriError;

/// One novel in a scraped catalog. Field names follow the catalog export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NovelRow {
    #[serde(rename = "Title")]
    pub title: String,
    pub score: f64,
    pub status: String,
    #[serde(rename = "Chapters")]
    pub chapters: u32,
    /// Possibly several authors joined by `&`.
    pub author: String,
    /// Estimated download time in seconds.
    #[serde(rename = "estimatedDownload")]
    pub estimated_download: f64,
}

impl NovelRow {
    pub fn main_author(&self) -> &str {
        main_author(&self.author)
    }
}

/// Catalog rows, addressed by their 0-based position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    rows: Vec<NovelRow>,
}

impl Catalog {
    pub fn new(rows: Vec<NovelRow>) -> Self {
        Self { rows }
    }

    /// Parse a JSON array of rows.
    pub fn from_json_str(json: &str) -> Result<Self, ShioriError> {
        let rows: Vec<NovelRow> = serde_json::from_str(json)?;
        Ok(Self { rows })
    }

    pub fn load(path: &Path) -> Result<Self, ShioriError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)
            .map_err(|e| ShioriError::Catalog(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), rows = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    pub fn rows(&self) -> &[NovelRow] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&NovelRow> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The first of several `&`-joined authors.
pub fn main_author(author: &str) -> &str {
    author.split('&').next().unwrap_or_default().trim()
}
