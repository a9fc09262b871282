use super::domain::ServiceArea;
use super::scoring::ServiceAreaScores;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Qualitative readiness level derived from a normalized area score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadinessTier {
    Basic,
    Developing,
    Advanced,
    Expert,
}

/// Score ranges scanned in order; closed on both ends and partitioning
/// [0,100] with no gaps, so 25 belongs to the first range and 26 to the
/// second.
const TIER_RANGES: [(u8, u8, ReadinessTier); 4] = [
    (0, 25, ReadinessTier::Basic),
    (26, 50, ReadinessTier::Developing),
    (51, 75, ReadinessTier::Advanced),
    (76, 100, ReadinessTier::Expert),
];

impl ReadinessTier {
    pub fn for_score(score: u8) -> Self {
        for (min, max, tier) in TIER_RANGES {
            if score >= min && score <= max {
                return tier;
            }
        }
        ReadinessTier::Basic
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Developing => "Developing",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }

    pub const fn priority(self) -> Priority {
        match self {
            Self::Basic => Priority::Low,
            Self::Developing => Priority::Medium,
            Self::Advanced => Priority::High,
            Self::Expert => Priority::VeryHigh,
        }
    }
}

/// Urgency label used to rank areas for recommendation ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl Priority {
    /// Most urgent first; ranking walks this order and breaks ties by area
    /// declaration order.
    pub const fn ordered() -> [Self; 4] {
        [Self::VeryHigh, Self::High, Self::Medium, Self::Low]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Low => "low-priority",
            Self::Medium => "medium-priority",
            Self::High => "high-priority",
            Self::VeryHigh => "very-high-priority",
        }
    }
}

/// Personalized guidance for one service area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaRecommendation {
    pub score: u8,
    pub level: ReadinessTier,
    pub priority: Priority,
    pub recommendations: Vec<&'static str>,
    pub area_name: &'static str,
}

/// Builds the per-area recommendation set, keyed by area in declaration
/// order.
pub fn recommendations_for_scores(
    scores: &ServiceAreaScores,
) -> BTreeMap<ServiceArea, AreaRecommendation> {
    let mut recommendations = BTreeMap::new();
    for (area, score) in scores.entries() {
        let level = ReadinessTier::for_score(score);
        recommendations.insert(
            area,
            AreaRecommendation {
                score,
                level,
                priority: level.priority(),
                recommendations: recommended_actions(area, level).to_vec(),
                area_name: area.label(),
            },
        );
    }
    recommendations
}

/// Fixed action list for every (area, tier) pair.
pub fn recommended_actions(area: ServiceArea, tier: ReadinessTier) -> [&'static str; 4] {
    match (area, tier) {
        (ServiceArea::MarketingSales, ReadinessTier::Basic) => [
            "Start with basic email marketing automation",
            "Implement simple lead capture forms",
            "Set up basic customer segmentation",
            "Consider entry-level CRM with AI features",
        ],
        (ServiceArea::MarketingSales, ReadinessTier::Developing) => [
            "Implement marketing automation workflows",
            "Add AI-powered lead scoring",
            "Create personalized email campaigns",
            "Integrate social media automation",
        ],
        (ServiceArea::MarketingSales, ReadinessTier::Advanced) => [
            "Deploy predictive lead scoring",
            "Implement advanced customer segmentation",
            "Add AI-powered content personalization",
            "Create omnichannel marketing campaigns",
        ],
        (ServiceArea::MarketingSales, ReadinessTier::Expert) => [
            "Implement advanced predictive analytics",
            "Deploy AI-powered customer journey optimization",
            "Add real-time personalization engines",
            "Create custom AI marketing solutions",
        ],
        (ServiceArea::CustomerService, ReadinessTier::Basic) => [
            "Implement basic FAQ chatbot",
            "Set up automated email responses",
            "Create simple ticket routing system",
            "Add basic customer feedback collection",
        ],
        (ServiceArea::CustomerService, ReadinessTier::Developing) => [
            "Deploy intelligent chatbot with NLP",
            "Implement automated ticket prioritization",
            "Add sentiment analysis for customer communications",
            "Create self-service knowledge base",
        ],
        (ServiceArea::CustomerService, ReadinessTier::Advanced) => [
            "Deploy advanced conversational AI",
            "Implement predictive customer support",
            "Add voice assistant integration",
            "Create proactive customer outreach",
        ],
        (ServiceArea::CustomerService, ReadinessTier::Expert) => [
            "Implement AI-powered customer success prediction",
            "Deploy advanced voice and video AI support",
            "Add real-time emotion detection",
            "Create fully autonomous customer service agents",
        ],
        (ServiceArea::BusinessProcess, ReadinessTier::Basic) => [
            "Automate simple repetitive tasks",
            "Implement basic document management",
            "Set up automated invoicing",
            "Create simple workflow automation",
        ],
        (ServiceArea::BusinessProcess, ReadinessTier::Developing) => [
            "Deploy robotic process automation (RPA)",
            "Implement intelligent document processing",
            "Add automated approval workflows",
            "Create inventory management automation",
        ],
        (ServiceArea::BusinessProcess, ReadinessTier::Advanced) => [
            "Implement AI-powered process optimization",
            "Deploy predictive maintenance systems",
            "Add intelligent resource allocation",
            "Create end-to-end process automation",
        ],
        (ServiceArea::BusinessProcess, ReadinessTier::Expert) => [
            "Deploy autonomous business processes",
            "Implement AI-driven decision making",
            "Add self-optimizing workflows",
            "Create intelligent business orchestration",
        ],
        (ServiceArea::DataAnalytics, ReadinessTier::Basic) => [
            "Set up basic analytics dashboards",
            "Implement simple reporting automation",
            "Create basic customer analytics",
            "Add performance tracking metrics",
        ],
        (ServiceArea::DataAnalytics, ReadinessTier::Developing) => [
            "Deploy predictive analytics models",
            "Implement customer behavior analysis",
            "Add business intelligence dashboards",
            "Create automated insights generation",
        ],
        (ServiceArea::DataAnalytics, ReadinessTier::Advanced) => [
            "Implement machine learning models",
            "Deploy real-time analytics systems",
            "Add advanced forecasting capabilities",
            "Create custom analytics solutions",
        ],
        (ServiceArea::DataAnalytics, ReadinessTier::Expert) => [
            "Deploy advanced AI/ML platforms",
            "Implement autonomous analytics systems",
            "Add real-time decision engines",
            "Create self-learning analytics models",
        ],
    }
}
