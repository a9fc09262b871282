use crate::infra::RecordingMailer;
use chrono::Local;
use clap::Args;
use readiness_ai::assessment::report::html;
use readiness_ai::assessment::{
    AnswerValue, AssessmentReport, AssessmentService, AssessmentSubmission, ScoreCalculator,
};
use readiness_ai::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Write the rendered HTML report to this path
    #[arg(long)]
    pub(crate) report_html: Option<PathBuf>,
    /// Skip the legacy single-score portion of the demo
    #[arg(long)]
    pub(crate) skip_legacy: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let mailer = Arc::new(RecordingMailer::default());
    let service = AssessmentService::new(Some(mailer.clone()));

    let submission = demo_submission();
    let outcome = service
        .submit(submission.clone())
        .expect("demo submission carries required fields");

    println!("=== AI Readiness Assessment Demo ===");
    println!();
    println!("Submitter: Morgan Avery <morgan@hillsidedental.com>");
    println!("Company:   Hillside Dental Group");
    println!();
    println!(
        "Overall AI readiness: {}%",
        outcome.overall_score
    );
    println!();
    println!("Service area breakdown:");
    for (_, recommendation) in &outcome.recommendations {
        println!(
            "  {:<45} {:>3}%  {} ({} priority)",
            recommendation.area_name,
            recommendation.score,
            recommendation.level.label(),
            recommendation.priority.label(),
        );
        for action in &recommendation.recommendations {
            println!("    - {action}");
        }
    }
    println!();
    println!("Report URL: {}", outcome.report_url);

    for message in mailer.messages() {
        println!();
        println!("Captured notification: {}", message.subject);
    }

    if let Some(path) = args.report_html {
        let contact = submission
            .contact()
            .expect("demo submission carries required fields");
        let scores = ScoreCalculator::standard().score(&submission.answers);
        let report = AssessmentReport::assemble(
            &submission,
            contact,
            scores,
            Local::now().date_naive(),
        );
        std::fs::write(&path, html::render(&report))?;
        println!();
        println!("Rendered HTML report written to {}", path.display());
    }

    if !args.skip_legacy {
        let legacy = service
            .submit_legacy(legacy_demo_submission())
            .expect("demo submission carries required fields");
        println!();
        println!("=== Legacy single-score form ===");
        println!("Score: {}%", legacy.score);
        println!("Recommendation: {}", legacy.recommendation);
    }

    Ok(())
}

fn demo_submission() -> AssessmentSubmission {
    let mut submission = AssessmentSubmission {
        name: Some("Morgan Avery".to_string()),
        email: Some("morgan@hillsidedental.com".to_string()),
        phone: Some("555-0147".to_string()),
        company: Some("Hillside Dental Group".to_string()),
        ..AssessmentSubmission::default()
    };
    insert_single(&mut submission, "employees", "11-50");
    insert_single(&mut submission, "industry", "healthcare");
    insert_multi(&mut submission, "current_tools", &["crm", "cloud"]);
    insert_single(&mut submission, "budget", "5k-10k");
    insert_single(&mut submission, "timeline", "3-6-months");
    insert_multi(
        &mut submission,
        "goals",
        &["efficiency", "customer-experience"],
    );
    insert_single(
        &mut submission,
        "additional_info",
        "Three locations, front desk is overwhelmed with scheduling calls",
    );
    submission
}

fn legacy_demo_submission() -> AssessmentSubmission {
    let mut submission = AssessmentSubmission {
        name: Some("Morgan Avery".to_string()),
        email: Some("morgan@hillsidedental.com".to_string()),
        phone: None,
        company: Some("Hillside Dental Group".to_string()),
        ..AssessmentSubmission::default()
    };
    insert_single(&mut submission, "current_tech", "medium");
    insert_single(&mut submission, "team_size", "small");
    insert_single(&mut submission, "budget", "medium");
    insert_single(&mut submission, "urgency", "soon");
    insert_single(&mut submission, "data_usage", "moderate");
    insert_single(&mut submission, "automation_interest", "interested");
    submission
}

fn insert_single(submission: &mut AssessmentSubmission, question: &str, token: &str) {
    submission
        .answers
        .insert(question.to_string(), AnswerValue::Single(token.to_string()));
}

fn insert_multi(submission: &mut AssessmentSubmission, question: &str, tokens: &[&str]) {
    submission.answers.insert(
        question.to_string(),
        AnswerValue::Multi(tokens.iter().map(|token| token.to_string()).collect()),
    );
}
