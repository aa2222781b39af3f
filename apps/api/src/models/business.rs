use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Business details supplied by the registration flow. Every field is
/// optional; rendering falls back to fixed defaults when one is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfileInput {
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub business_type: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub business_description: Option<String>,
    #[serde(default)]
    pub brand_color: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub brand_font: Option<String>,
}

impl BusinessProfileInput {
    pub fn name_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.business_name.as_deref().unwrap_or(default)
    }

    pub fn industry_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.industry.as_deref().unwrap_or(default)
    }

    /// Non-empty description, if one was given.
    pub fn description(&self) -> Option<&str> {
        self.business_description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
    }
}

/// Per-end-user data used to pre-fill a rendered lead magnet.
/// Any key matching a calculator input id becomes that input's default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerRecord(pub serde_json::Map<String, Value>);

impl CustomerRecord {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn name(&self) -> &str {
        self.text_field("name")
    }

    pub fn email(&self) -> &str {
        self.text_field("email")
    }

    fn text_field(&self, key: &str) -> &str {
        self.0.get(key).and_then(Value::as_str).unwrap_or("")
    }
}
