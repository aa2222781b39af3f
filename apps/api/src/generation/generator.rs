//! Lead magnet generation: registry lookup followed by personalization.
//!
//! Flow: template id (or content-type tag → first matching template) →
//!       TemplateRegistry → render → RenderedContent.
//!
//! Lookup failures surface as `TemplateNotFound` before any rendering starts,
//! so a failed call never yields a partial payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::registry::TemplateRegistry;
use crate::generation::renderer::{render, RenderedContent};
use crate::models::business::{BusinessProfileInput, CustomerRecord};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Request body for lead magnet creation. `template_id` wins over
/// `content_type` when both are given.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadMagnetRequest {
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub business_profile: BusinessProfileInput,
    #[serde(default)]
    pub customer: Option<CustomerRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeadMagnet {
    pub lead_magnet_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub content: RenderedContent,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

pub fn render_template(
    registry: &TemplateRegistry,
    template_id: &str,
    profile: &BusinessProfileInput,
    customer: Option<&CustomerRecord>,
) -> Result<RenderedContent, AppError> {
    let template = registry.get_by_id(template_id)?;
    Ok(render(template, profile, customer))
}

/// Renders the first template (catalog order) whose id contains the
/// content-type tag.
pub fn render_for_content_type(
    registry: &TemplateRegistry,
    content_type: &str,
    profile: &BusinessProfileInput,
    customer: Option<&CustomerRecord>,
) -> Result<RenderedContent, AppError> {
    let template = registry
        .get_by_type_tag(content_type)
        .into_iter()
        .next()
        .ok_or_else(|| AppError::TemplateNotFound(content_type.to_string()))?;
    Ok(render(template, profile, customer))
}

pub fn create_lead_magnet(
    registry: &TemplateRegistry,
    request: &LeadMagnetRequest,
) -> Result<LeadMagnet, AppError> {
    let profile = &request.business_profile;
    let customer = request.customer.as_ref();

    let content = match (
        non_blank(request.template_id.as_deref()),
        non_blank(request.content_type.as_deref()),
    ) {
        (Some(template_id), _) => render_template(registry, template_id, profile, customer)?,
        (None, Some(content_type)) => {
            render_for_content_type(registry, content_type, profile, customer)?
        }
        (None, None) => {
            return Err(AppError::Validation(
                "either template_id or content_type is required".to_string(),
            ))
        }
    };

    let lead_magnet = LeadMagnet {
        lead_magnet_id: Uuid::new_v4(),
        created_at: Utc::now(),
        content,
    };

    info!(
        "Lead magnet {} created from template {} for {}",
        lead_magnet.lead_magnet_id, lead_magnet.content.template_id, lead_magnet.content.business_name
    );

    Ok(lead_magnet)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn acme() -> BusinessProfileInput {
        BusinessProfileInput {
            business_name: Some("Acme".to_string()),
            industry: Some("Web Design".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_unknown_template_is_template_not_found() {
        let registry = TemplateRegistry::default();
        let result = render_template(&registry, "nonexistent", &acme(), None);
        match result {
            Err(AppError::TemplateNotFound(id)) => assert_eq!(id, "nonexistent"),
            other => panic!("expected TemplateNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_render_template_by_id() {
        let registry = TemplateRegistry::default();
        let rendered =
            render_template(&registry, "website_performance_assessment", &acme(), None).unwrap();
        assert_eq!(rendered.template_name, "Website Performance Assessment");
        assert_eq!(rendered.title, "Acme Website Performance Assessment");
    }

    #[test]
    fn test_content_type_picks_first_matching_template() {
        let registry = TemplateRegistry::default();
        let rendered =
            render_for_content_type(&registry, "interactive_assessment", &acme(), None).unwrap();
        assert_eq!(rendered.template_id, "interactive_assessment");

        let rendered = render_for_content_type(&registry, "calculator", &acme(), None).unwrap();
        assert_eq!(rendered.template_id, "roi_calculator");
    }

    #[test]
    fn test_content_type_without_template_is_not_found() {
        let registry = TemplateRegistry::default();
        let result = render_for_content_type(&registry, "configurator", &acme(), None);
        assert!(matches!(result, Err(AppError::TemplateNotFound(_))));
    }

    #[test]
    fn test_create_prefers_template_id() {
        let registry = TemplateRegistry::default();
        let request = LeadMagnetRequest {
            content_type: Some("calculator".to_string()),
            template_id: Some("interactive_assessment".to_string()),
            business_profile: acme(),
            customer: None,
        };
        let lead_magnet = create_lead_magnet(&registry, &request).unwrap();
        assert_eq!(lead_magnet.content.template_id, "interactive_assessment");
        assert_eq!(lead_magnet.lead_magnet_id.get_version_num(), 4);
    }

    #[test]
    fn test_create_requires_template_or_content_type() {
        let registry = TemplateRegistry::default();
        let request = LeadMagnetRequest {
            template_id: Some("  ".to_string()),
            business_profile: acme(),
            ..Default::default()
        };
        assert!(matches!(
            create_lead_magnet(&registry, &request),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_create_ids_are_unique_but_content_is_stable() {
        let registry = TemplateRegistry::default();
        let request: LeadMagnetRequest = serde_json::from_value(json!({
            "content_type": "calculator",
            "business_profile": {"business_name": "Acme"},
            "customer": {"current_cost": 2500}
        }))
        .unwrap();
        let first = create_lead_magnet(&registry, &request).unwrap();
        let second = create_lead_magnet(&registry, &request).unwrap();
        assert_ne!(first.lead_magnet_id, second.lead_magnet_id);
        assert_eq!(first.content, second.content);
    }
}
