use serde::Serialize;

/// The closed set of scoring categories reported by the scoring service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKey {
    ProductTechnology,
    MarketOpportunity,
    BusinessModel,
    Financials,
    Team,
    Traction,
    Competition,
    RiskAssessment,
}

pub fn category_order() -> &'static [CategoryKey] {
    &[
        CategoryKey::ProductTechnology,
        CategoryKey::MarketOpportunity,
        CategoryKey::BusinessModel,
        CategoryKey::Financials,
        CategoryKey::Team,
        CategoryKey::Traction,
        CategoryKey::Competition,
        CategoryKey::RiskAssessment,
    ]
}

impl CategoryKey {
    /// Wire key used in the `breakdown` mapping.
    pub fn key(self) -> &'static str {
        match self {
            CategoryKey::ProductTechnology => "product_technology",
            CategoryKey::MarketOpportunity => "market_opportunity",
            CategoryKey::BusinessModel => "business_model",
            CategoryKey::Financials => "financials",
            CategoryKey::Team => "team",
            CategoryKey::Traction => "traction",
            CategoryKey::Competition => "competition",
            CategoryKey::RiskAssessment => "risk_assessment",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryKey::ProductTechnology => "Product/Technology",
            CategoryKey::MarketOpportunity => "Market opportunity",
            CategoryKey::BusinessModel => "Business model",
            CategoryKey::Financials => "Financials",
            CategoryKey::Team => "Team",
            CategoryKey::Traction => "Traction",
            CategoryKey::Competition => "Competition",
            CategoryKey::RiskAssessment => "Risk assessment",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        category_order().iter().copied().find(|c| c.key() == key)
    }
}
