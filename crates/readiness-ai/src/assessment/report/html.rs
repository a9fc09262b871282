//! Placeholder substitution over the static report template. The template
//! itself is presentation-only; everything it displays is computed by the
//! report assembler.

use super::super::domain::ServiceArea;
use super::AssessmentReport;
use std::fmt::Write as _;

const TEMPLATE: &str = include_str!("template.html");

/// Renders the personalized HTML report by substituting `{{name}}`
/// placeholders in the bundled template. All free-text values are escaped;
/// the list and matrix fragments are built here from escaped parts.
pub fn render(report: &AssessmentReport) -> String {
    let mut vars: Vec<(String, String)> = vec![
        ("company_name".into(), escape_html(&report.contact.company)),
        ("contact_name".into(), escape_html(&report.contact.name)),
        (
            "industry".into(),
            escape_html(&title_case(
                report.industry.as_deref().unwrap_or("Not specified"),
            )),
        ),
        (
            "company_size".into(),
            escape_html(report.company_size.as_deref().unwrap_or("Not specified")),
        ),
        (
            "assessment_date".into(),
            report.assessment_date.format("%B %d, %Y").to_string(),
        ),
        ("overall_score".into(), report.overall_score.to_string()),
        (
            "overall_description".into(),
            escape_html(report.overall_description),
        ),
        ("priority_matrix".into(), priority_matrix_html(report)),
        (
            "top_priority_area".into(),
            escape_html(report.top_priority_area),
        ),
    ];

    for area in ServiceArea::ordered() {
        let prefix = template_prefix(area);
        let recommendation = &report.recommendations[&area];
        vars.push((format!("{prefix}_score"), recommendation.score.to_string()));
        vars.push((
            format!("{prefix}_level"),
            recommendation.level.label().to_string(),
        ));
        vars.push((
            format!("{prefix}_priority"),
            recommendation.priority.label().to_string(),
        ));
        vars.push((
            format!("{prefix}_priority_class"),
            recommendation.priority.css_class().to_string(),
        ));
        vars.push((
            format!("{prefix}_recommendations"),
            recommendations_html(&recommendation.recommendations),
        ));
    }

    let mut rendered = TEMPLATE.to_string();
    for (key, value) in vars {
        rendered = rendered.replace(&format!("{{{{{key}}}}}"), &value);
    }
    rendered
}

const fn template_prefix(area: ServiceArea) -> &'static str {
    match area {
        ServiceArea::MarketingSales => "marketing",
        ServiceArea::CustomerService => "customer_service",
        ServiceArea::BusinessProcess => "business_process",
        ServiceArea::DataAnalytics => "data_analytics",
    }
}

fn recommendations_html(recommendations: &[&'static str]) -> String {
    let mut html = String::new();
    for recommendation in recommendations {
        writeln!(html, "<li>{}</li>", escape_html(recommendation)).expect("write list item");
    }
    html
}

fn priority_matrix_html(report: &AssessmentReport) -> String {
    let mut html = String::new();
    for entry in &report.priority_ranking {
        write!(
            html,
            concat!(
                "<div class=\"priority-item priority-{rank}\">",
                "<div>Priority {rank}</div>",
                "<div class=\"priority-area\">{area}</div>",
                "<div class=\"priority-detail\">{score}% - {level}</div>",
                "</div>\n"
            ),
            rank = entry.rank,
            area = escape_html(entry.area_name),
            score = entry.score,
            level = entry.level.label(),
        )
        .expect("write matrix entry");
    }
    html
}

fn title_case(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut at_word_start = true;
    for c in raw.chars() {
        if c.is_alphanumeric() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = true;
        }
    }
    result
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
