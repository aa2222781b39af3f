//! Personalization renderer.
//!
//! Two layers, always in this order:
//!   1. business level: token substitution over the whole template body
//!   2. customer level: optional pre-fill of calculator input defaults
//!
//! Title, introduction and call to action are derived per template kind and
//! are not part of the stored structure.

use serde::Serialize;
use tracing::warn;

use crate::generation::personalize::{Personalize, Substitutions};
use crate::generation::template::{CalculatorBody, Template, TemplateBody};
use crate::models::business::{BusinessProfileInput, CustomerRecord};

const DEFAULT_PRIMARY_COLOR: &str = "#4A90E2";
const DEFAULT_FONT: &str = "Arial, sans-serif";
const CONTACT_BUTTON: &str = "Contact Us Now";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallToAction {
    pub heading: String,
    pub button_text: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Branding {
    pub primary_color: String,
    pub logo_url: String,
    pub font: String,
}

impl Branding {
    fn from_profile(profile: &BusinessProfileInput) -> Self {
        Self {
            primary_color: profile
                .brand_color
                .clone()
                .unwrap_or_else(|| DEFAULT_PRIMARY_COLOR.to_string()),
            logo_url: profile.logo_url.clone().unwrap_or_default(),
            font: profile
                .brand_font
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedContent {
    pub template_id: String,
    pub template_name: String,
    pub business_name: String,
    pub title: String,
    pub introduction: String,
    #[serde(flatten)]
    pub body: TemplateBody,
    pub call_to_action: CallToAction,
    pub branding: Branding,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
}

/// Renders `template` for one business and, optionally, one end user.
/// Never fails: missing profile fields fall back to fixed defaults.
pub fn render(
    template: &Template,
    profile: &BusinessProfileInput,
    customer: Option<&CustomerRecord>,
) -> RenderedContent {
    let subs = Substitutions::from_profile(profile);
    let mut body = template.body.personalize(&subs);

    let customer = customer.filter(|c| !c.is_empty());
    if let (Some(customer), TemplateBody::Calculator(calculator)) = (customer, &mut body) {
        prefill_inputs(calculator, customer, &template.id);
    }

    let (title, introduction, call_to_action) = match &body {
        TemplateBody::Assessment(_) => (
            assessment_title(&template.id, profile),
            assessment_introduction(profile),
            assessment_call_to_action(profile),
        ),
        TemplateBody::Calculator(_) => (
            calculator_title(&template.id, profile),
            calculator_introduction(profile),
            calculator_call_to_action(profile),
        ),
    };

    RenderedContent {
        template_id: template.id.clone(),
        template_name: template.name.clone(),
        business_name: profile.name_or("Your Business").to_string(),
        title,
        introduction,
        body,
        call_to_action,
        branding: Branding::from_profile(profile),
        customer_name: customer.map(|c| c.name().to_string()),
        customer_email: customer.map(|c| c.email().to_string()),
    }
}

fn prefill_inputs(calculator: &mut CalculatorBody, customer: &CustomerRecord, template_id: &str) {
    for input in &mut calculator.inputs {
        let Some(value) = customer.get(input.id()) else {
            continue;
        };
        if !input.prefill(value) {
            warn!(
                "Ignoring pre-fill for input '{}' on template '{}': incompatible value {}",
                input.id(),
                template_id,
                value
            );
        }
    }
}

/// Space-joins the non-empty parts.
fn join_words(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// "Acme's" or, with no name, "our".
fn possessive(profile: &BusinessProfileInput) -> String {
    match profile.business_name.as_deref().filter(|n| !n.trim().is_empty()) {
        Some(name) => format!("{name}'s"),
        None => "our".to_string(),
    }
}

fn introduction(profile: &BusinessProfileInput, tool: &str, concern: &str, closing: &str) -> String {
    let mut text = format!("Welcome to {} {tool} tool. ", possessive(profile));
    if let Some(description) = profile.description() {
        text.push_str(&format!("As {description}, we understand {concern}. "));
    }
    text.push_str(closing);
    text
}

// ────────────────────────────────────────────────────────────────────────────
// Assessments
// ────────────────────────────────────────────────────────────────────────────

fn assessment_title(template_id: &str, profile: &BusinessProfileInput) -> String {
    let name = profile.name_or("Our");
    let id = template_id.to_lowercase();
    let suffix = if id.contains("website") {
        "Website Performance Assessment"
    } else if id.contains("marketing") {
        "Marketing Strategy Assessment"
    } else if id.contains("financial") {
        "Financial Health Assessment"
    } else {
        return join_words(&[name, profile.industry_or(""), "Assessment"]);
    };
    join_words(&[name, suffix])
}

fn assessment_introduction(profile: &BusinessProfileInput) -> String {
    introduction(
        profile,
        "assessment",
        "the challenges you face",
        "This assessment will help us understand your specific needs and provide personalized recommendations.",
    )
}

fn assessment_call_to_action(profile: &BusinessProfileInput) -> CallToAction {
    CallToAction {
        heading: format!(
            "Ready to take the next step with {}?",
            profile.name_or("us")
        ),
        button_text: CONTACT_BUTTON.to_string(),
        description: "Get personalized assistance based on your assessment results.".to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Calculators
// ────────────────────────────────────────────────────────────────────────────

fn calculator_title(template_id: &str, profile: &BusinessProfileInput) -> String {
    let id = template_id.to_lowercase();
    let kind = if id.contains("roi") {
        "ROI Calculator"
    } else if id.contains("savings") {
        "Savings Calculator"
    } else if id.contains("cost") {
        "Cost Calculator"
    } else {
        "Value Calculator"
    };
    join_words(&[profile.name_or("Our"), kind])
}

fn calculator_introduction(profile: &BusinessProfileInput) -> String {
    introduction(
        profile,
        "calculator",
        "the importance of making informed decisions",
        "This calculator will help you quantify the potential value and make the right choice for your needs.",
    )
}

fn calculator_call_to_action(profile: &BusinessProfileInput) -> CallToAction {
    CallToAction {
        heading: format!(
            "Ready to realize these benefits with {}?",
            profile.name_or("us")
        ),
        button_text: CONTACT_BUTTON.to_string(),
        description: "Get a personalized consultation based on your calculator results.".to_string(),
    }
}
