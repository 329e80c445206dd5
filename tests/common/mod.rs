//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};
use tempfile::TempDir;

/// Builder for creating test codelab source trees
pub struct CatalogTreeBuilder {
    temp_dir: TempDir,
}

impl CatalogTreeBuilder {
    /// Create a new builder with an empty source directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the source directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a codelab directory at `rel` whose `codelab.json` holds `content` verbatim
    pub fn with_codelab(self, rel: &str, content: &str) -> Self {
        let dir = self.temp_dir.path().join(rel);
        fs::create_dir_all(&dir).expect("Failed to create codelab dir");
        fs::write(dir.join("codelab.json"), content).expect("Failed to write codelab.json");
        self
    }

    /// Add a codelab built programmatically
    pub fn with_codelab_record(self, rel: &str, codelab: &CodelabBuilder) -> Self {
        let content = codelab.to_json();
        self.with_codelab(rel, &content)
    }

    /// Add a directory that holds no metadata file
    pub fn with_plain_dir(self, rel: &str) -> Self {
        fs::create_dir_all(self.temp_dir.path().join(rel)).expect("Failed to create dir");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for CatalogTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for codelab.json records
pub struct CodelabBuilder {
    fields: Map<String, Value>,
}

impl CodelabBuilder {
    /// Create a record with just a title
    pub fn new(title: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("title".to_string(), json!(title));
        Self { fields }
    }

    pub fn id(self, id: &str) -> Self {
        self.field("id", json!(id))
    }

    pub fn summary(self, summary: &str) -> Self {
        self.field("summary", json!(summary))
    }

    pub fn categories(self, categories: &[&str]) -> Self {
        self.field("categories", json!(categories))
    }

    pub fn tags(self, tags: &[&str]) -> Self {
        self.field("tags", json!(tags))
    }

    pub fn authors(self, authors: &[&str]) -> Self {
        self.field("authors", json!(authors))
    }

    pub fn duration(self, minutes: u64) -> Self {
        self.field("duration", json!(minutes))
    }

    pub fn updated(self, updated: &str) -> Self {
        self.field("updated", json!(updated))
    }

    pub fn status(self, status: &str) -> Self {
        self.field("status", json!(status))
    }

    /// Set an arbitrary raw field
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn to_json(&self) -> String {
        Value::Object(self.fields.clone()).to_string()
    }
}

/// Path of a file inside `dir` that does not exist yet
pub fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}
