//! Template registry. Populated once at startup, read-only afterwards.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::errors::AppError;
use crate::generation::catalog::default_templates;
use crate::generation::template::Template;

#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
}

impl TemplateRegistry {
    pub fn new(templates: Vec<Template>) -> Result<Self> {
        let mut seen = HashSet::new();
        for t in &templates {
            if t.id.trim().is_empty() {
                bail!("template '{}' has an empty id", t.name);
            }
            if !seen.insert(t.id.as_str()) {
                bail!("duplicate template id '{}'", t.id);
            }
        }
        Ok(Self { templates })
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read templates from {}", path.display()))?;
        let templates: Vec<Template> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid template catalog in {}", path.display()))?;
        Self::new(templates)
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn get_by_id(&self, id: &str) -> Result<&Template, AppError> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::TemplateNotFound(id.to_string()))
    }

    /// Templates whose id contains `tag`, case-insensitively, in catalog order.
    pub fn get_by_type_tag(&self, tag: &str) -> Vec<&Template> {
        let needle = tag.to_lowercase();
        self.templates
            .iter()
            .filter(|t| t.id.to_lowercase().contains(&needle))
            .collect()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self {
            templates: default_templates(),
        }
    }
}
