//! Template data model: typed, placeholder-bearing structures for each
//! renderable lead magnet shape.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::models::question::{Question, Responses};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(flatten)]
    pub body: TemplateBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TemplateBody {
    Assessment(AssessmentBody),
    Calculator(CalculatorBody),
}

impl TemplateBody {
    pub fn kind(&self) -> &'static str {
        match self {
            TemplateBody::Assessment(_) => "assessment",
            TemplateBody::Calculator(_) => "calculator",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Assessments
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentBody {
    pub questions: Vec<Question>,
    pub result_categories: Vec<ResultCategory>,
}

impl AssessmentBody {
    /// Sums the option points of every answered multiple-choice question.
    /// Unknown answers and unscored options count as zero.
    pub fn total_score(&self, responses: &Responses) -> u32 {
        self.questions
            .iter()
            .filter_map(|q| match q {
                Question::MultipleChoice(mc) => Some(mc),
                _ => None,
            })
            .map(|mc| {
                let picked: Vec<&str> = match responses.get(&mc.id) {
                    Some(Value::String(answer)) => vec![answer.as_str()],
                    Some(Value::Array(answers)) if mc.allow_multiple => {
                        answers.iter().filter_map(Value::as_str).collect()
                    }
                    _ => Vec::new(),
                };
                mc.options
                    .iter()
                    .filter(|o| picked.contains(&o.value.as_str()))
                    .filter_map(|o| o.score)
                    .sum::<u32>()
            })
            .sum()
    }

    /// First category whose inclusive range contains `score`.
    pub fn result_for_score(&self, score: u32) -> Option<&ResultCategory> {
        self.result_categories
            .iter()
            .find(|c| c.score_range.is_some_and(|r| r.contains(score)))
    }
}

/// Inclusive `[min, max]` band of total assessment points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRange(pub u32, pub u32);

impl ScoreRange {
    pub fn contains(&self, score: u32) -> bool {
        (self.0..=self.1).contains(&score)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultCategory {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_range: Option<ScoreRange>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Calculators
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorBody {
    pub inputs: Vec<Input>,
    /// Evaluated in order; later expressions may reference earlier ids.
    pub calculations: Vec<Calculation>,
    pub results: Vec<ResultDisplay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Input {
    Number(NumericInput),
    Text(TextInput),
}

impl Input {
    pub fn id(&self) -> &str {
        match self {
            Input::Number(i) => &i.id,
            Input::Text(i) => &i.id,
        }
    }

    /// Overrides the default with a customer-supplied value. Returns false
    /// (leaving the default untouched) when the value has the wrong shape.
    pub fn prefill(&mut self, value: &Value) -> bool {
        match self {
            Input::Number(input) => {
                let parsed = match value {
                    Value::Number(n) => Some(n.clone()),
                    Value::String(s) => parse_number(s.trim()),
                    _ => None,
                };
                match parsed {
                    Some(n) => {
                        input.default_value = n;
                        true
                    }
                    None => false,
                }
            }
            Input::Text(input) => {
                let text = match value {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    _ => return false,
                };
                input.default_value = Some(text);
                true
            }
        }
    }
}

/// Integer strings stay integers; anything else must be a finite float.
fn parse_number(text: &str) -> Option<Number> {
    if let Ok(i) = text.parse::<i64>() {
        return Some(Number::from(i));
    }
    text.parse::<f64>().ok().and_then(Number::from_f64)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericInput {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Number>,
    /// Kept as a JSON number so integer defaults stay integers on the wire.
    pub default_value: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextInput {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub id: String,
    pub expression: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultFormat {
    Currency,
    Percentage,
    Months,
    Number,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDisplay {
    pub id: String,
    pub label: String,
    pub format: ResultFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
