//! Business-level personalization: literal `[TOKEN]` substitution applied
//! to every string reachable from a template structure.
//!
//! `Personalize` produces a fresh value; the source template is never touched.

use crate::generation::template::{
    AssessmentBody, CalculatorBody, Calculation, Input, NumericInput, ResultCategory,
    ResultDisplay, TemplateBody, TextInput,
};
use crate::models::business::BusinessProfileInput;
use crate::models::question::{
    ChoiceOption, ConditionalQuestion, MultipleChoiceQuestion, OpenTextQuestion, Question,
    ScaleLabel, ScaleQuestion,
};

pub const BUSINESS_NAME_TOKEN: &str = "[BUSINESS_NAME]";
pub const INDUSTRY_TOKEN: &str = "[INDUSTRY]";
pub const BUSINESS_TYPE_TOKEN: &str = "[BUSINESS_TYPE]";

/// Token → replacement table, built once per render. Applied in fixed
/// order: business name, industry, business type.
#[derive(Debug, Clone)]
pub struct Substitutions {
    pairs: [(&'static str, String); 3],
}

impl Substitutions {
    pub fn from_profile(profile: &BusinessProfileInput) -> Self {
        Self {
            pairs: [
                (BUSINESS_NAME_TOKEN, profile.name_or("our").to_string()),
                (INDUSTRY_TOKEN, profile.industry_or("your industry").to_string()),
                (
                    BUSINESS_TYPE_TOKEN,
                    profile.business_type.clone().unwrap_or_default(),
                ),
            ],
        }
    }

    pub fn apply(&self, text: &str) -> String {
        self.pairs
            .iter()
            .fold(text.to_string(), |acc, (token, value)| {
                if acc.contains(token) {
                    acc.replace(token, value)
                } else {
                    acc
                }
            })
    }
}

/// Depth-first substitution over a template structure.
pub trait Personalize {
    fn personalize(&self, subs: &Substitutions) -> Self;
}

impl Personalize for String {
    fn personalize(&self, subs: &Substitutions) -> Self {
        subs.apply(self)
    }
}

impl<T: Personalize> Personalize for Option<T> {
    fn personalize(&self, subs: &Substitutions) -> Self {
        self.as_ref().map(|v| v.personalize(subs))
    }
}

impl<T: Personalize> Personalize for Vec<T> {
    fn personalize(&self, subs: &Substitutions) -> Self {
        self.iter().map(|v| v.personalize(subs)).collect()
    }
}

// ── questions ───────────────────────────────────────────────────────────────

impl Personalize for ChoiceOption {
    fn personalize(&self, subs: &Substitutions) -> Self {
        Self {
            value: self.value.clone(),
            text: self.text.personalize(subs),
            score: self.score,
        }
    }
}

impl Personalize for ScaleLabel {
    fn personalize(&self, subs: &Substitutions) -> Self {
        Self {
            value: self.value,
            label: self.label.personalize(subs),
        }
    }
}

impl Personalize for Question {
    fn personalize(&self, subs: &Substitutions) -> Self {
        match self {
            Question::MultipleChoice(q) => Question::MultipleChoice(MultipleChoiceQuestion {
                id: q.id.clone(),
                text: q.text.personalize(subs),
                options: q.options.personalize(subs),
                allow_multiple: q.allow_multiple,
            }),
            Question::Scale(q) => Question::Scale(ScaleQuestion {
                id: q.id.clone(),
                text: q.text.personalize(subs),
                min_value: q.min_value,
                max_value: q.max_value,
                labels: q.labels.personalize(subs),
            }),
            Question::OpenText(q) => Question::OpenText(OpenTextQuestion {
                id: q.id.clone(),
                text: q.text.personalize(subs),
                max_length: q.max_length,
            }),
            Question::Conditional(q) => Question::Conditional(ConditionalQuestion {
                id: q.id.clone(),
                text: q.text.personalize(subs),
                condition: q.condition.clone(),
            }),
        }
    }
}

// ── assessment bodies ───────────────────────────────────────────────────────

impl Personalize for ResultCategory {
    fn personalize(&self, subs: &Substitutions) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.personalize(subs),
            description: self.description.personalize(subs),
            score_range: self.score_range,
            recommendations: self.recommendations.personalize(subs),
        }
    }
}

impl Personalize for AssessmentBody {
    fn personalize(&self, subs: &Substitutions) -> Self {
        Self {
            questions: self.questions.personalize(subs),
            result_categories: self.result_categories.personalize(subs),
        }
    }
}

// ── calculator bodies ───────────────────────────────────────────────────────

impl Personalize for Input {
    fn personalize(&self, subs: &Substitutions) -> Self {
        match self {
            Input::Number(i) => Input::Number(NumericInput {
                id: i.id.clone(),
                label: i.label.personalize(subs),
                min: i.min.clone(),
                max: i.max.clone(),
                default_value: i.default_value.clone(),
                help_text: i.help_text.personalize(subs),
            }),
            Input::Text(i) => Input::Text(TextInput {
                id: i.id.clone(),
                label: i.label.personalize(subs),
                default_value: i.default_value.personalize(subs),
                placeholder: i.placeholder.personalize(subs),
                help_text: i.help_text.personalize(subs),
            }),
        }
    }
}

impl Personalize for Calculation {
    fn personalize(&self, subs: &Substitutions) -> Self {
        Self {
            id: self.id.clone(),
            expression: self.expression.personalize(subs),
        }
    }
}

impl Personalize for ResultDisplay {
    fn personalize(&self, subs: &Substitutions) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.personalize(subs),
            format: self.format,
            description: self.description.personalize(subs),
        }
    }
}

impl Personalize for CalculatorBody {
    fn personalize(&self, subs: &Substitutions) -> Self {
        Self {
            inputs: self.inputs.personalize(subs),
            calculations: self.calculations.personalize(subs),
            results: self.results.personalize(subs),
        }
    }
}

impl Personalize for TemplateBody {
    fn personalize(&self, subs: &Substitutions) -> Self {
        match self {
            TemplateBody::Assessment(body) => TemplateBody::Assessment(body.personalize(subs)),
            TemplateBody::Calculator(body) => TemplateBody::Calculator(body.personalize(subs)),
        }
    }
}
