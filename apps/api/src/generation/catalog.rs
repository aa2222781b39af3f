//! Built-in template catalog. Static data; replaced wholesale when
//! `TEMPLATES_PATH` points at a JSON catalog.

use serde_json::Number;

use crate::generation::template::{
    AssessmentBody, CalculatorBody, Calculation, Input, NumericInput, ResultCategory,
    ResultDisplay, ResultFormat, ScoreRange, Template, TemplateBody,
};
use crate::models::question::{ChoiceOption, MultipleChoiceQuestion, OpenTextQuestion, Question};

pub fn default_templates() -> Vec<Template> {
    vec![
        website_performance_assessment(),
        roi_calculator(),
        interactive_assessment(),
    ]
}

fn choice(id: &str, text: &str, options: &[(&str, &str)]) -> Question {
    Question::MultipleChoice(MultipleChoiceQuestion {
        id: id.to_string(),
        text: text.to_string(),
        options: options
            .iter()
            .map(|(value, text)| ChoiceOption::new(value, text))
            .collect(),
        allow_multiple: false,
    })
}

/// Single-select question whose options carry assessment points.
fn scored_choice(id: &str, text: &str, options: &[(&str, &str, u32)]) -> Question {
    Question::MultipleChoice(MultipleChoiceQuestion {
        id: id.to_string(),
        text: text.to_string(),
        options: options
            .iter()
            .map(|(value, text, score)| ChoiceOption {
                score: Some(*score),
                ..ChoiceOption::new(value, text)
            })
            .collect(),
        allow_multiple: false,
    })
}

fn category(
    id: &str,
    title: &str,
    description: &str,
    score_range: Option<ScoreRange>,
    recommendations: &[&str],
) -> ResultCategory {
    ResultCategory {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        score_range,
        recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
    }
}

fn number(
    id: &str,
    label: &str,
    min: Option<i64>,
    max: Option<i64>,
    default_value: i64,
    help_text: &str,
) -> Input {
    Input::Number(NumericInput {
        id: id.to_string(),
        label: label.to_string(),
        min: min.map(Number::from),
        max: max.map(Number::from),
        default_value: Number::from(default_value),
        help_text: Some(help_text.to_string()),
    })
}

fn calculation(id: &str, expression: &str) -> Calculation {
    Calculation {
        id: id.to_string(),
        expression: expression.to_string(),
    }
}

fn result(id: &str, label: &str, format: ResultFormat, description: &str) -> ResultDisplay {
    ResultDisplay {
        id: id.to_string(),
        label: label.to_string(),
        format,
        description: Some(description.to_string()),
    }
}

fn website_performance_assessment() -> Template {
    Template {
        id: "website_performance_assessment".to_string(),
        name: "Website Performance Assessment".to_string(),
        description: "An assessment that evaluates website performance and provides recommendations.".to_string(),
        body: TemplateBody::Assessment(AssessmentBody {
            questions: vec![
                scored_choice(
                    "website_speed",
                    "How would you rate your website's loading speed compared to other [INDUSTRY] sites?",
                    &[
                        ("very_slow", "Very slow (5+ seconds)", 0),
                        ("slow", "Somewhat slow (3-5 seconds)", 1),
                        ("average", "Average (2-3 seconds)", 2),
                        ("fast", "Fast (1-2 seconds)", 3),
                        ("very_fast", "Very fast (under 1 second)", 4),
                    ],
                ),
                scored_choice(
                    "mobile_friendly",
                    "Is your website optimized for mobile devices?",
                    &[
                        ("not_at_all", "Not at all", 0),
                        ("somewhat", "Somewhat, but needs improvement", 2),
                        ("mostly", "Mostly optimized", 3),
                        ("fully", "Fully optimized", 4),
                        ("unsure", "I'm not sure", 0),
                    ],
                ),
                scored_choice(
                    "content_quality",
                    "How would you rate the quality and relevance of your website content for [INDUSTRY] buyers?",
                    &[
                        ("poor", "Poor - outdated or minimal content", 1),
                        ("fair", "Fair - some good content but inconsistent", 2),
                        ("good", "Good - mostly relevant and up-to-date", 3),
                        ("excellent", "Excellent - comprehensive and engaging", 4),
                    ],
                ),
                scored_choice(
                    "conversion_elements",
                    "Does your website have clear calls-to-action (CTAs) and conversion elements?",
                    &[
                        ("none", "No CTAs or conversion elements", 1),
                        ("few", "A few basic CTAs", 2),
                        ("some", "Some CTAs but not strategically placed", 3),
                        ("many", "Multiple strategic CTAs throughout the site", 4),
                    ],
                ),
                scored_choice(
                    "seo_status",
                    "How would you describe your website's SEO (Search Engine Optimization)?",
                    &[
                        ("none", "No SEO work has been done", 0),
                        ("basic", "Basic SEO elements are in place", 2),
                        ("moderate", "Moderate SEO work with some keyword targeting", 3),
                        ("advanced", "Advanced SEO strategy with regular updates", 4),
                        ("unsure", "I'm not sure", 0),
                    ],
                ),
            ],
            result_categories: vec![
                category(
                    "needs_improvement",
                    "Your Website Needs Significant Improvements",
                    "Based on your responses, your website has several areas that need attention to effectively attract and convert visitors.",
                    Some(ScoreRange(0, 10)),
                    &[
                        "Improve your website's loading speed to reduce bounce rates",
                        "Optimize your website for mobile devices",
                        "Develop a content strategy with relevant, engaging content",
                        "Implement clear calls-to-action throughout your site",
                        "Develop a basic SEO strategy to improve search visibility",
                    ],
                ),
                category(
                    "average_performance",
                    "Your Website Has Average Performance",
                    "Your website has some strong elements but also opportunities for improvement to maximize its effectiveness.",
                    Some(ScoreRange(11, 15)),
                    &[
                        "Fine-tune your website's loading speed for optimal performance",
                        "Enhance mobile responsiveness across all pages",
                        "Expand your content to address customer pain points more effectively",
                        "Optimize placement and design of conversion elements",
                        "Develop a more comprehensive SEO strategy",
                    ],
                ),
                category(
                    "high_performance",
                    "Your Website Is Performing Well",
                    "Congratulations! Your website is performing well in most areas, with just a few opportunities for enhancement.",
                    Some(ScoreRange(16, 20)),
                    &[
                        "Consider advanced performance optimizations for even faster loading",
                        "Implement A/B testing to further improve conversion rates",
                        "Develop more personalized content for different audience segments",
                        "Explore advanced SEO techniques to dominate your niche",
                        "Talk to [BUSINESS_NAME] specialists about interactive elements to increase engagement",
                    ],
                ),
            ],
        }),
    }
}

fn roi_calculator() -> Template {
    Template {
        id: "roi_calculator".to_string(),
        name: "ROI Calculator".to_string(),
        description: "A calculator that helps users estimate the return on investment.".to_string(),
        body: TemplateBody::Calculator(CalculatorBody {
            inputs: vec![
                number(
                    "current_cost",
                    "Current Monthly Cost",
                    Some(0),
                    None,
                    1000,
                    "Enter your current monthly spending in this area",
                ),
                number(
                    "expected_savings",
                    "Expected Savings Percentage",
                    Some(0),
                    Some(100),
                    20,
                    "Estimated percentage savings with [BUSINESS_NAME] solutions",
                ),
                number(
                    "implementation_cost",
                    "Implementation Cost",
                    Some(0),
                    None,
                    5000,
                    "One-time cost to implement [BUSINESS_NAME] solutions",
                ),
                number(
                    "time_period",
                    "Time Period (Months)",
                    Some(1),
                    Some(60),
                    12,
                    "Number of months to calculate ROI",
                ),
            ],
            calculations: vec![
                calculation("monthly_savings", "current_cost * (expected_savings / 100)"),
                calculation("total_savings", "monthly_savings * time_period"),
                calculation("net_savings", "total_savings - implementation_cost"),
                calculation("roi_percentage", "(net_savings / implementation_cost) * 100"),
                calculation("break_even_months", "implementation_cost / monthly_savings"),
            ],
            results: vec![
                result(
                    "monthly_savings",
                    "Estimated Monthly Savings",
                    ResultFormat::Currency,
                    "Your estimated monthly savings with [BUSINESS_NAME] services",
                ),
                result(
                    "total_savings",
                    "Total Savings Over Time Period",
                    ResultFormat::Currency,
                    "Your total savings over the selected time period",
                ),
                result(
                    "net_savings",
                    "Net Savings (After Implementation)",
                    ResultFormat::Currency,
                    "Your net savings after accounting for implementation costs",
                ),
                result(
                    "roi_percentage",
                    "Return on Investment (ROI)",
                    ResultFormat::Percentage,
                    "Your percentage return on investment",
                ),
                result(
                    "break_even_months",
                    "Break-Even Point",
                    ResultFormat::Months,
                    "Number of months until you recover your implementation costs",
                ),
            ],
        }),
    }
}

fn interactive_assessment() -> Template {
    Template {
        id: "interactive_assessment".to_string(),
        name: "Interactive Assessment Tool".to_string(),
        description: "An interactive tool to assess customer needs and provide tailored recommendations.".to_string(),
        body: TemplateBody::Assessment(AssessmentBody {
            questions: vec![
                Question::OpenText(OpenTextQuestion {
                    id: "customer_needs".to_string(),
                    text: "What are your customers' primary needs in [INDUSTRY]?".to_string(),
                    max_length: None,
                }),
                choice(
                    "business_goals",
                    "What are your primary business goals?",
                    &[
                        ("increase_sales", "Increase sales"),
                        ("generate_leads", "Generate leads"),
                        ("improve_engagement", "Improve engagement"),
                    ],
                ),
            ],
            result_categories: vec![category(
                "growth_opportunity",
                "Growth Opportunity Identified",
                "Based on your responses, [BUSINESS_NAME] experts have identified key areas for growth and improvement.",
                None,
                &[
                    "Focus on improving customer engagement strategies.",
                    "Develop a targeted lead generation campaign.",
                    "Optimize your sales funnel for better conversions.",
                ],
            )],
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::Responses;
    use serde_json::{json, Value};

    #[test]
    fn test_default_template_ids() {
        let ids: Vec<String> = default_templates().into_iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            vec!["website_performance_assessment", "roi_calculator", "interactive_assessment"]
        );
    }

    #[test]
    fn test_website_ranges_cover_zero_to_twenty() {
        let template = website_performance_assessment();
        let TemplateBody::Assessment(body) = &template.body else {
            panic!("website template must be an assessment");
        };
        for score in 0..=20 {
            assert!(body.result_for_score(score).is_some(), "no category for {score}");
        }
    }

    #[test]
    fn test_roi_calculations_reference_known_ids() {
        let template = roi_calculator();
        let TemplateBody::Calculator(body) = &template.body else {
            panic!("roi template must be a calculator");
        };
        assert_eq!(body.inputs.len(), 4);
        assert_eq!(body.calculations.len(), 5);
        for result in &body.results {
            assert!(
                body.calculations.iter().any(|c| c.id == result.id),
                "result {} has no calculation",
                result.id
            );
        }
    }

    #[test]
    fn test_website_option_points_span_score_ranges() {
        let template = website_performance_assessment();
        let TemplateBody::Assessment(body) = &template.body else {
            panic!("website template must be an assessment");
        };
        let best: Responses = body
            .questions
            .iter()
            .filter_map(|q| match q {
                Question::MultipleChoice(mc) => mc
                    .options
                    .iter()
                    .max_by_key(|o| o.score)
                    .map(|o| (mc.id.clone(), Value::String(o.value.clone()))),
                _ => None,
            })
            .collect();
        assert_eq!(body.total_score(&best), 20);
        assert_eq!(
            body.result_for_score(body.total_score(&best)).map(|c| c.id.as_str()),
            Some("high_performance")
        );

        let worst: Responses = json!({
            "website_speed": "very_slow",
            "mobile_friendly": "unsure",
            "content_quality": "poor",
            "conversion_elements": "none",
            "seo_status": "none"
        })
        .as_object()
        .cloned()
        .unwrap();
        assert_eq!(body.total_score(&worst), 2);
        assert_eq!(
            body.result_for_score(body.total_score(&worst)).map(|c| c.id.as_str()),
            Some("needs_improvement")
        );
    }
}
