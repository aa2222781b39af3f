//! Content-type catalog: the fixed set of lead magnet kinds the scorer
//! ranks. Built once at startup and read-only afterwards.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Which side of the quality-vs-quantity trade-off a candidate favours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadPreference {
    Quality,
    Quantity,
    #[default]
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentTypeCandidate {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Business kinds this candidate is built for.
    #[serde(default)]
    pub business_kinds: Vec<String>,
    /// Fits any business kind at reduced weight when not listed explicitly.
    #[serde(default)]
    pub applies_to_any_business: bool,
    /// Declared order is preserved in fit analysis output.
    pub addressed_needs: Vec<String>,
    /// 1 (trivial) – 5 (needs a developer).
    pub technical_level: i64,
    #[serde(default)]
    pub lead_preference: LeadPreference,
    pub example: String,
}

impl ContentTypeCandidate {
    pub fn serves_business_kind(&self, kind: Option<&str>) -> bool {
        kind.is_some_and(|k| self.business_kinds.iter().any(|b| b == k))
    }
}

#[derive(Debug, Clone)]
pub struct ContentTypeCatalog {
    candidates: Vec<ContentTypeCandidate>,
}

impl ContentTypeCatalog {
    /// Validates and wraps a candidate list. Ids must be unique and technical
    /// levels within 1–5.
    pub fn new(candidates: Vec<ContentTypeCandidate>) -> Result<Self> {
        let mut seen = HashSet::new();
        for c in &candidates {
            if !seen.insert(c.id.as_str()) {
                bail!("duplicate content type id '{}'", c.id);
            }
            if !(1..=5).contains(&c.technical_level) {
                bail!(
                    "content type '{}' has technical_level {} (expected 1-5)",
                    c.id,
                    c.technical_level
                );
            }
        }
        Ok(Self { candidates })
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content types from {}", path.display()))?;
        let candidates: Vec<ContentTypeCandidate> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid content type catalog in {}", path.display()))?;
        Self::new(candidates)
    }

    pub fn candidates(&self) -> &[ContentTypeCandidate] {
        &self.candidates
    }

    pub fn get(&self, id: &str) -> Result<&ContentTypeCandidate, AppError> {
        self.candidates
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Content type {id} not found")))
    }
}

impl Default for ContentTypeCatalog {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
        }
    }
}

fn candidate(
    id: &str,
    name: &str,
    description: &str,
    business_kinds: &[&str],
    addressed_needs: &[&str],
    technical_level: i64,
    example: &str,
) -> ContentTypeCandidate {
    ContentTypeCandidate {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        business_kinds: business_kinds.iter().map(|s| s.to_string()).collect(),
        applies_to_any_business: false,
        addressed_needs: addressed_needs.iter().map(|s| s.to_string()).collect(),
        technical_level,
        lead_preference: LeadPreference::None,
        example: example.to_string(),
    }
}

fn any_business(mut c: ContentTypeCandidate) -> ContentTypeCandidate {
    c.applies_to_any_business = true;
    c
}

pub fn default_candidates() -> Vec<ContentTypeCandidate> {
    vec![
        candidate(
            "interactive_assessment",
            "Interactive Assessment Tool",
            "An interactive tool that evaluates the user's current situation and provides personalized recommendations.",
            &["service", "hybrid", "content"],
            &["knowledge", "complexity", "risk"],
            3,
            "A website performance analyzer that evaluates loading speed, mobile optimization, and provides specific improvement recommendations.",
        ),
        candidate(
            "calculator",
            "Value Calculator",
            "A calculator that helps users quantify potential savings, ROI, or other valuable metrics.",
            &["service", "product", "hybrid"],
            &["cost", "complexity", "risk"],
            3,
            "A savings calculator that shows how much money a customer could save by switching to your product or service.",
        ),
        candidate(
            "personalized_plan",
            "Personalized Plan Generator",
            "A tool that creates a custom plan or roadmap based on the user's specific situation.",
            &["service", "hybrid", "content"],
            &["knowledge", "complexity", "support"],
            4,
            "A marketing plan generator that creates a customized strategy based on business goals, target audience, and budget.",
        ),
        candidate(
            "diagnostic_tool",
            "Problem Diagnostic Tool",
            "A tool that helps users identify and diagnose specific problems or issues they're facing.",
            &["service", "product", "hybrid"],
            &["knowledge", "complexity", "support"],
            3,
            "A home plumbing diagnostic tool that helps identify potential issues based on symptoms and provides recommendations.",
        ),
        any_business(candidate(
            "interactive_quiz",
            "Interactive Quiz or Survey",
            "An engaging quiz that helps users learn something about themselves or their situation.",
            &[],
            &["knowledge", "complexity"],
            2,
            "A 'What type of [product/service] is right for you?' quiz that recommends specific options based on preferences.",
        )),
        any_business(candidate(
            "template_library",
            "Template or Resource Library",
            "A collection of templates, checklists, or resources tailored to the user's specific needs.",
            &[],
            &["time", "knowledge", "access"],
            2,
            "A customized collection of templates or resources based on the user's industry, role, or specific challenges.",
        )),
        candidate(
            "comparison_tool",
            "Comparison or Selection Tool",
            "A tool that helps users compare options or make a selection based on their criteria.",
            &["product", "hybrid", "content"],
            &["complexity", "knowledge", "risk"],
            3,
            "A product comparison tool that helps users find the right option based on their specific requirements and preferences.",
        ),
        candidate(
            "mini_course",
            "Personalized Mini-Course",
            "A short educational course with content tailored to the user's specific needs or level.",
            &["service", "content", "nonprofit"],
            &["knowledge", "support", "access"],
            3,
            "A 5-day email course with content adapted to the user's experience level, industry, or specific challenges.",
        ),
        candidate(
            "free_consultation",
            "Automated Consultation Scheduler",
            "A tool that qualifies leads and automatically schedules a personalized consultation.",
            &["service", "hybrid"],
            &["support", "knowledge", "complexity"],
            2,
            "A consultation booking tool that gathers information about the user's needs and schedules a call with the right expert.",
        ),
        candidate(
            "configurator",
            "Product or Service Configurator",
            "A tool that allows users to customize a product or service to their specific needs.",
            &["product", "hybrid"],
            &["complexity", "quality", "access"],
            4,
            "A custom solution builder that allows users to configure a product or service package based on their specific requirements.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = ContentTypeCatalog::new(default_candidates()).unwrap();
        assert_eq!(catalog.candidates().len(), 10);
    }

    #[test]
    fn test_wildcard_entries_are_explicit() {
        let catalog = ContentTypeCatalog::default();
        let wildcard: Vec<&str> = catalog
            .candidates()
            .iter()
            .filter(|c| c.applies_to_any_business)
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(wildcard, vec!["interactive_quiz", "template_library"]);
    }

    #[test]
    fn test_no_default_entry_has_lead_preference() {
        let catalog = ContentTypeCatalog::default();
        assert!(catalog
            .candidates()
            .iter()
            .all(|c| c.lead_preference == LeadPreference::None));
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let catalog = ContentTypeCatalog::default();
        assert!(catalog.get("calculator").is_ok());
        assert!(matches!(catalog.get("hologram"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut list = default_candidates();
        list.push(list[0].clone());
        let err = ContentTypeCatalog::new(list).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_out_of_range_technical_level_rejected() {
        let mut list = default_candidates();
        list[0].technical_level = 6;
        assert!(ContentTypeCatalog::new(list).is_err());
    }

    #[test]
    fn test_serves_business_kind_requires_literal_match() {
        let catalog = ContentTypeCatalog::default();
        let quiz = catalog.get("interactive_quiz").unwrap();
        assert!(!quiz.serves_business_kind(Some("service")));
        let calc = catalog.get("calculator").unwrap();
        assert!(calc.serves_business_kind(Some("product")));
        assert!(!calc.serves_business_kind(None));
    }

    #[test]
    fn test_load_from_file_applies_field_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{
                "id": "quality_audit",
                "name": "Quality Audit",
                "description": "Audit",
                "business_kinds": ["service"],
                "addressed_needs": ["quality"],
                "technical_level": 2,
                "lead_preference": "quality",
                "example": "An audit"
            }}]"#
        )
        .unwrap();

        let catalog = ContentTypeCatalog::load_from_file(file.path()).unwrap();
        let audit = catalog.get("quality_audit").unwrap();
        assert_eq!(audit.lead_preference, LeadPreference::Quality);
        assert!(!audit.applies_to_any_business);
    }

    #[test]
    fn test_load_from_missing_file_fails_with_context() {
        let err = ContentTypeCatalog::load_from_file(Path::new("/nonexistent/catalog.json"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read content types"));
    }
}
