use super::super::domain::ServiceArea;

/// Point contribution of one answer token, split across the four service
/// areas. Order of the constructor arguments follows the declaration order
/// of [`ServiceArea`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaPoints {
    pub marketing_sales: u16,
    pub customer_service: u16,
    pub business_process: u16,
    pub data_analytics: u16,
}

impl AreaPoints {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(
        marketing_sales: u16,
        customer_service: u16,
        business_process: u16,
        data_analytics: u16,
    ) -> Self {
        Self {
            marketing_sales,
            customer_service,
            business_process,
            data_analytics,
        }
    }

    pub const fn for_area(&self, area: ServiceArea) -> u16 {
        match area {
            ServiceArea::MarketingSales => self.marketing_sales,
            ServiceArea::CustomerService => self.customer_service,
            ServiceArea::BusinessProcess => self.business_process,
            ServiceArea::DataAnalytics => self.data_analytics,
        }
    }
}

/// Whether a question accepts one option or a set of options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectKind {
    Single,
    Multi,
}

/// Scoring rule for one question: the identifier used in the submission
/// body and the per-area contribution of every recognized option token.
#[derive(Debug, Clone)]
pub struct QuestionRule {
    pub id: &'static str,
    pub kind: SelectKind,
    pub options: Vec<(&'static str, AreaPoints)>,
}

impl QuestionRule {
    pub fn points_for(&self, token: &str) -> Option<AreaPoints> {
        self.options
            .iter()
            .find(|(option, _)| *option == token)
            .map(|(_, points)| *points)
    }

    /// Highest single-option contribution this question can make to an area.
    fn max_for(&self, area: ServiceArea) -> u16 {
        self.options
            .iter()
            .map(|(_, points)| points.for_area(area))
            .max()
            .unwrap_or(0)
    }
}

/// Static, process-wide scoring configuration. The per-area normalization
/// constants are derived from the option tables at construction time so the
/// two can never drift apart.
#[derive(Debug, Clone)]
pub struct ScoringTable {
    questions: Vec<QuestionRule>,
    max_points: AreaPoints,
}

impl ScoringTable {
    pub fn standard() -> Self {
        Self::from_questions(standard_question_rules())
    }

    pub fn from_questions(questions: Vec<QuestionRule>) -> Self {
        let max_points = derive_max_points(&questions);
        Self {
            questions,
            max_points,
        }
    }

    pub fn questions(&self) -> &[QuestionRule] {
        &self.questions
    }

    /// Maximum achievable raw point total per area, used to scale raw sums
    /// into the 0-100 range.
    pub fn max_points(&self) -> AreaPoints {
        self.max_points
    }
}

fn derive_max_points(questions: &[QuestionRule]) -> AreaPoints {
    let mut totals = AreaPoints::ZERO;
    for question in questions {
        totals.marketing_sales += question.max_for(ServiceArea::MarketingSales);
        totals.customer_service += question.max_for(ServiceArea::CustomerService);
        totals.business_process += question.max_for(ServiceArea::BusinessProcess);
        totals.data_analytics += question.max_for(ServiceArea::DataAnalytics);
    }
    totals
}

fn standard_question_rules() -> Vec<QuestionRule> {
    vec![
        QuestionRule {
            id: "employees",
            kind: SelectKind::Single,
            options: vec![
                ("1-10", AreaPoints::new(5, 5, 5, 5)),
                ("11-50", AreaPoints::new(10, 10, 10, 10)),
                ("51-200", AreaPoints::new(15, 15, 15, 15)),
                ("200+", AreaPoints::new(20, 20, 20, 20)),
            ],
        },
        QuestionRule {
            id: "industry",
            kind: SelectKind::Single,
            options: vec![
                ("technology", AreaPoints::new(15, 15, 10, 20)),
                ("healthcare", AreaPoints::new(5, 15, 15, 15)),
                ("finance", AreaPoints::new(10, 10, 20, 20)),
                ("retail", AreaPoints::new(20, 15, 15, 15)),
                ("manufacturing", AreaPoints::new(5, 10, 20, 15)),
                ("education", AreaPoints::new(10, 15, 15, 10)),
                ("professional-services", AreaPoints::new(15, 15, 15, 15)),
                ("other", AreaPoints::new(10, 10, 10, 10)),
            ],
        },
        QuestionRule {
            id: "current_tools",
            kind: SelectKind::Multi,
            options: vec![
                ("crm", AreaPoints::new(10, 10, 5, 5)),
                ("analytics", AreaPoints::new(5, 5, 5, 15)),
                ("automation", AreaPoints::new(5, 5, 15, 5)),
                ("cloud", AreaPoints::new(5, 5, 10, 10)),
                ("social-media", AreaPoints::new(10, 5, 0, 5)),
                ("email-marketing", AreaPoints::new(10, 5, 5, 5)),
                ("none", AreaPoints::ZERO),
            ],
        },
        QuestionRule {
            id: "budget",
            kind: SelectKind::Single,
            options: vec![
                ("under-1k", AreaPoints::new(5, 10, 5, 5)),
                ("1k-5k", AreaPoints::new(10, 15, 10, 10)),
                ("5k-10k", AreaPoints::new(15, 15, 15, 15)),
                ("10k-25k", AreaPoints::new(20, 20, 20, 20)),
                ("25k+", AreaPoints::new(25, 25, 25, 25)),
            ],
        },
        QuestionRule {
            id: "timeline",
            kind: SelectKind::Single,
            options: vec![
                ("immediately", AreaPoints::new(15, 15, 15, 15)),
                ("1-3-months", AreaPoints::new(12, 12, 12, 12)),
                ("3-6-months", AreaPoints::new(8, 8, 8, 8)),
                ("6-12-months", AreaPoints::new(5, 5, 5, 5)),
                ("exploring", AreaPoints::new(2, 2, 2, 2)),
            ],
        },
        QuestionRule {
            id: "goals",
            kind: SelectKind::Multi,
            options: vec![
                ("efficiency", AreaPoints::new(5, 5, 15, 5)),
                ("cost-reduction", AreaPoints::new(5, 10, 15, 5)),
                ("customer-experience", AreaPoints::new(15, 20, 5, 5)),
                ("data-insights", AreaPoints::new(10, 5, 5, 20)),
                ("competitive-advantage", AreaPoints::new(15, 10, 10, 15)),
                ("automation", AreaPoints::new(10, 15, 20, 5)),
            ],
        },
    ]
}
