use super::domain::{Jurisdiction, Provider, StateCode, ACTIVE_STATUS};
use super::metrics::{Metric, MetricValue, PassFail};
use super::round_half_up;
use serde::Serialize;

const SCOPE_MATCH_THRESHOLD: f64 = 60.0;

/// Flattened, display-ready provider shared by partitioning, ranking and
/// comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformedProvider {
    pub id: String,
    /// Catalog identifier before any per-state suffix was applied.
    pub source_id: String,
    pub name: String,
    pub jurisdiction: Jurisdiction,
    pub score: f64,
    pub website: Option<String>,
    pub website_secondary: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub rto_code: String,
    pub price: Option<f64>,
    pub organisation_type: String,
    pub status: String,
    pub metrics: MetricTable,
    pub raw_scores: RawCategoryScores,
}

impl TransformedProvider {
    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_STATUS
    }

    /// The details handed to the enquiry form for this provider.
    pub fn enquiry_target(&self, state: StateCode) -> EnquiryTarget {
        EnquiryTarget {
            provider_id: self.id.clone(),
            provider_name: self.name.clone(),
            state,
        }
    }

    pub(crate) fn localized_for(&self, state: StateCode) -> Self {
        Self {
            id: format!("{}-{}", self.source_id, state.code().to_ascii_lowercase()),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricTable {
    #[serde(rename = "ASQA Registration")]
    pub asqa_registration: PassFail,
    #[serde(rename = "Scope Match")]
    pub scope_match: PassFail,
    #[serde(rename = "Page Speed")]
    pub page_speed: u32,
    #[serde(rename = "Mobile Usability")]
    pub mobile_usability: u32,
    #[serde(rename = "Course Completeness")]
    pub course_completeness: u8,
    #[serde(rename = "Price Transparency")]
    pub price_transparency: u8,
    #[serde(rename = "Google Reviews")]
    pub google_reviews: f64,
    #[serde(rename = "Review Volume")]
    pub review_volume: u32,
    #[serde(rename = "Review Recency")]
    pub review_recency: u8,
}

impl MetricTable {
    pub fn value(&self, metric: Metric) -> MetricValue {
        match metric {
            Metric::AsqaRegistration => MetricValue::Check(self.asqa_registration),
            Metric::ScopeMatch => MetricValue::Check(self.scope_match),
            Metric::PageSpeed => MetricValue::Number(f64::from(self.page_speed)),
            Metric::MobileUsability => MetricValue::Number(f64::from(self.mobile_usability)),
            Metric::CourseCompleteness => {
                MetricValue::Number(f64::from(self.course_completeness))
            }
            Metric::PriceTransparency => MetricValue::Number(f64::from(self.price_transparency)),
            Metric::GoogleReviews => MetricValue::Number(self.google_reviews),
            Metric::ReviewVolume => MetricValue::Number(f64::from(self.review_volume)),
            Metric::ReviewRecency => MetricValue::Number(f64::from(self.review_recency)),
        }
    }

    /// Display strings for every metric, in table order.
    pub fn formatted(&self) -> Vec<(Metric, String)> {
        Metric::ordered()
            .into_iter()
            .map(|metric| (metric, metric.format(self.value(metric))))
            .collect()
    }
}

/// The audit group scores the ranking strategies read directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RawCategoryScores {
    pub regulatory: f64,
    pub ux: f64,
    pub intent: f64,
    pub authority: f64,
    pub commercial: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnquiryTarget {
    pub provider_id: String,
    pub provider_name: String,
    pub state: StateCode,
}

pub fn transform_provider(provider: &Provider) -> TransformedProvider {
    let groups = &provider.audit.groups;
    let raw_scores = RawCategoryScores {
        regulatory: groups.regulatory.score,
        ux: groups.ux.score,
        intent: groups.intent.score,
        authority: groups.authority.score,
        commercial: groups.commercial.score,
    };

    TransformedProvider {
        id: provider.id.clone(),
        source_id: provider.id.clone(),
        name: provider.name.clone(),
        jurisdiction: provider.jurisdiction,
        score: provider.primary_score,
        website: provider.website.clone(),
        website_secondary: provider.website_secondary.clone(),
        phone: provider.phone.clone(),
        email: provider.email.clone(),
        rto_code: provider.rto_code.clone(),
        price: provider.price,
        organisation_type: provider.organisation_type.clone(),
        status: provider.status.clone(),
        metrics: metric_table(provider.is_active(), provider.primary_score, &raw_scores),
        raw_scores,
    }
}

pub fn transform_all(providers: &[Provider]) -> Vec<TransformedProvider> {
    providers.iter().map(transform_provider).collect()
}

fn metric_table(active: bool, primary_score: f64, raw: &RawCategoryScores) -> MetricTable {
    MetricTable {
        asqa_registration: PassFail::from_bool(active),
        scope_match: PassFail::from_bool(raw.regulatory >= SCOPE_MATCH_THRESHOLD),
        page_speed: round_half_up(raw.ux) as u32,
        mobile_usability: round_half_up((raw.ux + raw.intent) / 2.0) as u32,
        course_completeness: star_rating(raw.intent),
        price_transparency: star_rating(raw.commercial),
        google_reviews: round_half_up((3.0 + raw.authority / 50.0) * 10.0) / 10.0,
        review_volume: round_half_up(10.0 + primary_score * 2.0) as u32,
        review_recency: star_rating(raw.authority),
    }
}

/// Map a 0-100 score onto a 1-5 scale.
fn star_rating(score: f64) -> u8 {
    round_half_up(score / 20.0).clamp(1.0, 5.0) as u8
}
