pub mod legacy;
pub mod table;

pub use table::{AreaPoints, QuestionRule, ScoringTable, SelectKind};

use super::domain::{AnswerSet, AnswerValue, ServiceArea};
use serde::{Deserialize, Serialize};

/// Normalized per-area readiness scores, each in 0..=100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAreaScores {
    pub marketing_sales: u8,
    pub customer_service: u8,
    pub business_process: u8,
    pub data_analytics: u8,
}

impl ServiceAreaScores {
    pub const fn for_area(&self, area: ServiceArea) -> u8 {
        match area {
            ServiceArea::MarketingSales => self.marketing_sales,
            ServiceArea::CustomerService => self.customer_service,
            ServiceArea::BusinessProcess => self.business_process,
            ServiceArea::DataAnalytics => self.data_analytics,
        }
    }

    /// Scores paired with their area, in declaration order.
    pub fn entries(&self) -> [(ServiceArea, u8); 4] {
        let mut entries = [(ServiceArea::MarketingSales, 0); 4];
        for (slot, area) in entries.iter_mut().zip(ServiceArea::ordered()) {
            *slot = (area, self.for_area(area));
        }
        entries
    }
}

/// Stateless calculator applying the scoring table to an answer set.
#[derive(Debug, Clone)]
pub struct ScoreCalculator {
    table: ScoringTable,
}

impl ScoreCalculator {
    pub fn standard() -> Self {
        Self::new(ScoringTable::standard())
    }

    pub fn new(table: ScoringTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ScoringTable {
        &self.table
    }

    /// Sums contributions across all recognized answers and normalizes each
    /// area to 0-100. Unknown question identifiers, unknown option tokens,
    /// and value shapes that do not match the question kind are ignored.
    pub fn score(&self, answers: &AnswerSet) -> ServiceAreaScores {
        let mut raw = RawTotals::default();

        for question in self.table.questions() {
            let Some(value) = answers.get(question.id) else {
                continue;
            };

            match (question.kind, value) {
                (SelectKind::Multi, AnswerValue::Multi(tokens)) => {
                    for token in tokens {
                        if let Some(points) = question.points_for(token) {
                            raw.add(points);
                        }
                    }
                }
                (SelectKind::Single, AnswerValue::Single(token)) => {
                    if let Some(points) = question.points_for(token) {
                        raw.add(points);
                    }
                }
                _ => {}
            }
        }

        let max = self.table.max_points();
        ServiceAreaScores {
            marketing_sales: normalize(raw.marketing_sales, max.marketing_sales),
            customer_service: normalize(raw.customer_service, max.customer_service),
            business_process: normalize(raw.business_process, max.business_process),
            data_analytics: normalize(raw.data_analytics, max.data_analytics),
        }
    }
}

#[derive(Debug, Default)]
struct RawTotals {
    marketing_sales: u32,
    customer_service: u32,
    business_process: u32,
    data_analytics: u32,
}

impl RawTotals {
    fn add(&mut self, points: AreaPoints) {
        self.marketing_sales += u32::from(points.marketing_sales);
        self.customer_service += u32::from(points.customer_service);
        self.business_process += u32::from(points.business_process);
        self.data_analytics += u32::from(points.data_analytics);
    }
}

/// `min(100, floor((raw / max) * 100))`; multi-select answers can push the
/// raw sum past the per-question maxima, so the clamp is load-bearing.
fn normalize(raw: u32, max: u16) -> u8 {
    if max == 0 {
        return 0;
    }
    let scaled = raw * 100 / u32::from(max);
    scaled.min(100) as u8
}
