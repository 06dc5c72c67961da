use super::IntentStrategy;
use serde::Serialize;

/// Analysis copy shown while no strategy is active.
pub const DEFAULT_ANALYSIS: &str = "Tailoring analysis to your specific intent markers.";

/// Persona and copy presented alongside a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrategyProfile {
    pub strategy: IntentStrategy,
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub advice: &'static str,
    pub analysis: &'static str,
}

static COMPLIANCE: StrategyProfile = StrategyProfile {
    strategy: IntentStrategy::Compliance,
    name: "Guardian",
    role: "Compliance Specialist",
    description: "Focuses on regulatory alignment, status, and registration validity.",
    advice: "I've selected providers with active ASQA status and high regulatory scores to ensure your qualification is fully recognized.",
    analysis: "The Guardian has verified these providers against ASQA registration markers. We prioritize active status and clean regulatory history to ensure your qualification is secure.",
};

static VALUE: StrategyProfile = StrategyProfile {
    strategy: IntentStrategy::Value,
    name: "Optimizer",
    role: "Budget Strategist",
    description: "Prioritizes cost-efficiency without compromising registration status.",
    advice: "I've found the most competitive pricing in your state while maintaining a baseline of digital maturity and compliance.",
    analysis: "The Optimizer has analyzed the cost-to-quality ratio. These providers offer the most competitive pricing while maintaining high digital baseline standards.",
};

static AUTHORITY: StrategyProfile = StrategyProfile {
    strategy: IntentStrategy::Authority,
    name: "Authority",
    role: "Quality Auditor",
    description: "Highlights providers with the highest trust scores and reviews.",
    advice: "These providers lead the market in social proof, review recency, and overall trust signals. Recommended for institutional prestige.",
    analysis: "The Quality Auditor has scanned social proof and review recency. These providers are current market leaders in student satisfaction and institutional trust.",
};

static STUDENT_FIRST: StrategyProfile = StrategyProfile {
    strategy: IntentStrategy::StudentFirst,
    name: "Sonic",
    role: "UX Researcher",
    description: "Focuses on digital experience, speed, and mobile usability.",
    advice: "For the best mobile experience and modern learning interfaces, these providers have the highest UX and Performance scores.",
    analysis: "Our UX Researcher has benchmarked mobile usability and page speed. These providers offer the friction-less digital learning experience required for modern study.",
};

impl IntentStrategy {
    pub fn profile(self) -> &'static StrategyProfile {
        match self {
            Self::Compliance => &COMPLIANCE,
            Self::Value => &VALUE,
            Self::Authority => &AUTHORITY,
            Self::StudentFirst => &STUDENT_FIRST,
        }
    }
}

impl StrategyProfile {
    pub fn all() -> [&'static StrategyProfile; 4] {
        IntentStrategy::ordered().map(IntentStrategy::profile)
    }
}
