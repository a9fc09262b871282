use super::common::{
    build_failing_service, build_service, build_unconfigured_service, submission,
};
use crate::assessment::domain::ValidationError;

#[test]
fn submit_scores_and_notifies() {
    let (service, mailer) = build_service();

    let outcome = service.submit(submission()).expect("submission is valid");

    assert_eq!(outcome.overall_score, 97);
    assert_eq!(outcome.service_area_scores.business_process, 91);
    assert!(outcome.email_sent);
    assert_eq!(
        outcome.report_url,
        "/api/report/jordan_dot_reyes_at_example_dot_com"
    );

    let messages = mailer.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages[0].subject,
        "New AI Assessment Submission - Overall Score: 97%"
    );
    assert!(messages[0].body.contains("Company: Reyes Logistics"));
    assert!(messages[0].body.contains("Current Tools: crm, analytics, cloud"));
    assert!(messages[0]
        .body
        .contains("Additional Info: Interested in a pilot next quarter"));
}

#[test]
fn missing_required_field_skips_scoring_and_mail() {
    let (service, mailer) = build_service();

    let mut incomplete = submission();
    incomplete.company = Some("   ".to_string());

    let err = service.submit(incomplete).expect_err("company is blank");
    assert_eq!(err, ValidationError::MissingField("company"));
    assert_eq!(err.to_string(), "Missing required field: company");
    assert!(mailer.messages().is_empty());
}

#[test]
fn unconfigured_mailer_reports_email_not_sent() {
    let service = build_unconfigured_service();

    let outcome = service.submit(submission()).expect("submission is valid");
    assert!(!outcome.email_sent);
    assert_eq!(outcome.overall_score, 97);
}

#[test]
fn failing_mailer_never_fails_the_submission() {
    let service = build_failing_service();

    let outcome = service.submit(submission()).expect("submission is valid");
    assert!(!outcome.email_sent);
    assert_eq!(outcome.overall_score, 97);

    let legacy = service
        .submit_legacy(submission())
        .expect("submission is valid");
    assert!(!legacy.email_sent);
}

#[test]
fn legacy_submission_uses_the_flat_scorer() {
    let (service, mailer) = build_service();

    // The four-area answers match none of the legacy keys, so the legacy
    // path falls back to its fixed midpoint.
    let outcome = service
        .submit_legacy(submission())
        .expect("submission is valid");
    assert_eq!(outcome.score, 50);
    assert!(outcome.recommendation.starts_with("Good foundation!"));
    assert!(outcome.email_sent);

    let messages = mailer.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0]
        .subject
        .starts_with("New AI Assessment: 50% Readiness"));
}

#[test]
fn sample_report_decodes_the_identifier() {
    let (service, _mailer) = build_service();

    let report = service.sample_report("casey_at_example_dot_org");

    assert_eq!(report.contact.email, "casey@example.org");
    assert_eq!(report.contact.name, "Sample User");
    assert_eq!(report.contact.company, "Sample Company");
    assert_eq!(report.overall_score, 83);
    assert_eq!(report.top_priority_area, "Marketing & Sales AI Solutions");
}
