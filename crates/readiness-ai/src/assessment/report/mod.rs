pub mod html;

use super::domain::{AssessmentSubmission, ContactDetails, ServiceArea};
use super::recommendation::{recommendations_for_scores, AreaRecommendation, Priority, ReadinessTier};
use super::scoring::ServiceAreaScores;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// One row of the priority-ordered category ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedArea {
    pub rank: usize,
    pub area: ServiceArea,
    pub area_name: &'static str,
    pub score: u8,
    pub level: ReadinessTier,
    pub priority: Priority,
}

/// Fully assembled report payload; created per request and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub contact: ContactDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    pub assessment_date: NaiveDate,
    pub overall_score: u8,
    pub overall_description: &'static str,
    pub area_scores: ServiceAreaScores,
    pub recommendations: BTreeMap<ServiceArea, AreaRecommendation>,
    pub priority_ranking: Vec<RankedArea>,
    pub top_priority_area: &'static str,
}

impl AssessmentReport {
    pub fn assemble(
        submission: &AssessmentSubmission,
        contact: ContactDetails,
        scores: ServiceAreaScores,
        today: NaiveDate,
    ) -> Self {
        let recommendations = recommendations_for_scores(&scores);
        let priority_ranking = priority_ranking(&recommendations);
        let top_priority_area = priority_ranking
            .first()
            .map(|entry| entry.area_name)
            .unwrap_or(ServiceArea::BusinessProcess.label());
        let overall_score = overall_score(&scores);

        Self {
            contact,
            industry: submission.answer_token("industry").map(str::to_string),
            company_size: submission.answer_token("employees").map(str::to_string),
            assessment_date: today,
            overall_score,
            overall_description: overall_description(overall_score),
            area_scores: scores,
            recommendations,
            priority_ranking,
            top_priority_area,
        }
    }
}

/// Weighted mean of the four area scores, floored. Weights are integer
/// basis points summing to 100 (see [`ServiceArea::weight_points`]), so the
/// division is exact integer arithmetic.
pub fn overall_score(scores: &ServiceAreaScores) -> u8 {
    let weighted: u32 = scores
        .entries()
        .iter()
        .map(|(area, score)| area.weight_points() * u32::from(*score))
        .sum();
    (weighted / 100) as u8
}

/// Narrative framing for the overall score on the rendered report.
pub fn overall_description(overall_score: u8) -> &'static str {
    if overall_score >= 80 {
        "Excellent! Your business is highly ready for AI implementation across multiple areas."
    } else if overall_score >= 60 {
        "Great! You have a solid foundation for AI adoption with strong potential in key areas."
    } else if overall_score >= 40 {
        "Good potential! Some preparation needed, but you're well-positioned to benefit from AI."
    } else {
        "Perfect starting point! AI can provide significant value as you build your digital foundation."
    }
}

/// Orders areas by priority, most urgent first. Ties keep the area
/// declaration order: the outer loop walks priorities, the inner loop walks
/// the recommendation map in declaration order.
pub fn priority_ranking(
    recommendations: &BTreeMap<ServiceArea, AreaRecommendation>,
) -> Vec<RankedArea> {
    let mut ranking = Vec::with_capacity(recommendations.len());
    for priority in Priority::ordered() {
        for (area, recommendation) in recommendations {
            if recommendation.priority == priority {
                ranking.push(RankedArea {
                    rank: ranking.len() + 1,
                    area: *area,
                    area_name: recommendation.area_name,
                    score: recommendation.score,
                    level: recommendation.level,
                    priority,
                });
            }
        }
    }
    ranking
}
