//! Rate estimation inputs and their categorical domains.
//!
//! This module defines the [`RateInputs`] struct and the enums for every
//! categorical factor of the daily-rate formula. Each enum is a closed
//! domain: an out-of-range string fails deserialization at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Skill seniority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    /// Junior practitioner.
    Junior,
    /// Mid-level practitioner.
    MidLevel,
    /// Senior practitioner.
    Senior,
    /// Expert or lead practitioner.
    ExpertLead,
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkillLevel::Junior => "Junior",
            SkillLevel::MidLevel => "Mid-level",
            SkillLevel::Senior => "Senior",
            SkillLevel::ExpertLead => "Expert/Lead",
        };
        f.write_str(label)
    }
}

/// Area of specialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialization {
    /// General software development.
    GeneralDevelopment,
    /// Frontend development.
    FrontendDevelopment,
    /// Backend development.
    BackendDevelopment,
    /// Full-stack development.
    FullStackDevelopment,
    /// Data science and machine learning.
    DataScienceMl,
    /// DevOps and cloud engineering.
    DevopsCloud,
    /// Mobile development.
    MobileDevelopment,
    /// UI/UX design.
    UiUxDesign,
    /// Project management.
    ProjectManagement,
    /// Consulting.
    Consulting,
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Specialization::GeneralDevelopment => "General Development",
            Specialization::FrontendDevelopment => "Frontend Development",
            Specialization::BackendDevelopment => "Backend Development",
            Specialization::FullStackDevelopment => "Full-stack Development",
            Specialization::DataScienceMl => "Data Science/ML",
            Specialization::DevopsCloud => "DevOps/Cloud",
            Specialization::MobileDevelopment => "Mobile Development",
            Specialization::UiUxDesign => "UI/UX Design",
            Specialization::ProjectManagement => "Project Management",
            Specialization::Consulting => "Consulting",
        };
        f.write_str(label)
    }
}

/// Target market location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketLocation {
    /// France, Paris.
    FranceParis,
    /// France, outside Paris.
    FranceOtherCities,
    /// Germany.
    Germany,
    /// United Kingdom.
    Uk,
    /// Netherlands.
    Netherlands,
    /// Switzerland.
    Switzerland,
    /// United States.
    Usa,
    /// Global or fully remote market.
    GlobalRemote,
}

impl fmt::Display for MarketLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MarketLocation::FranceParis => "France (Paris)",
            MarketLocation::FranceOtherCities => "France (Other cities)",
            MarketLocation::Germany => "Germany",
            MarketLocation::Uk => "UK",
            MarketLocation::Netherlands => "Netherlands",
            MarketLocation::Switzerland => "Switzerland",
            MarketLocation::Usa => "USA",
            MarketLocation::GlobalRemote => "Global/Remote",
        };
        f.write_str(label)
    }
}

/// Industry focus of the client base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    /// Tech / SaaS.
    TechSaas,
    /// Finance and banking.
    FinanceBanking,
    /// Healthcare.
    Healthcare,
    /// E-commerce.
    Ecommerce,
    /// Media and entertainment.
    MediaEntertainment,
    /// Consulting.
    Consulting,
    /// Government.
    Government,
    /// General / unspecified industry.
    General,
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Industry::TechSaas => "Tech/SaaS",
            Industry::FinanceBanking => "Finance/Banking",
            Industry::Healthcare => "Healthcare",
            Industry::Ecommerce => "E-commerce",
            Industry::MediaEntertainment => "Media/Entertainment",
            Industry::Consulting => "Consulting",
            Industry::Government => "Government",
            Industry::General => "General",
        };
        f.write_str(label)
    }
}

/// Highest education level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    /// High school.
    HighSchool,
    /// Bachelor's degree.
    BachelorsDegree,
    /// Master's degree.
    MastersDegree,
    /// PhD.
    Phd,
    /// Self-taught.
    SelfTaught,
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::BachelorsDegree => "Bachelor's Degree",
            EducationLevel::MastersDegree => "Master's Degree",
            EducationLevel::Phd => "PhD",
            EducationLevel::SelfTaught => "Self-taught",
        };
        f.write_str(label)
    }
}

/// Market demand for the skill set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandLevel {
    /// Low demand.
    Low,
    /// Medium demand.
    Medium,
    /// High demand.
    High,
    /// Very high demand.
    VeryHigh,
}

impl fmt::Display for DemandLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DemandLevel::Low => "Low",
            DemandLevel::Medium => "Medium",
            DemandLevel::High => "High",
            DemandLevel::VeryHigh => "Very High",
        };
        f.write_str(label)
    }
}

/// Business impact of the typical engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessImpact {
    /// Low impact.
    Low,
    /// Medium impact.
    Medium,
    /// High impact.
    High,
    /// Critical impact.
    Critical,
}

impl fmt::Display for BusinessImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BusinessImpact::Low => "Low",
            BusinessImpact::Medium => "Medium",
            BusinessImpact::High => "High",
            BusinessImpact::Critical => "Critical",
        };
        f.write_str(label)
    }
}

/// Size of the typical client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientSize {
    /// Startup.
    Startup,
    /// Small business.
    SmallBusiness,
    /// Mid-size company.
    MidSizeCompany,
    /// Large enterprise.
    LargeEnterprise,
}

impl fmt::Display for ClientSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ClientSize::Startup => "Startup",
            ClientSize::SmallBusiness => "Small Business",
            ClientSize::MidSizeCompany => "Mid-size Company",
            ClientSize::LargeEnterprise => "Large Enterprise",
        };
        f.write_str(label)
    }
}

/// Strength of the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioStrength {
    /// Basic portfolio.
    Basic,
    /// Good portfolio.
    Good,
    /// Strong portfolio.
    Strong,
    /// Exceptional portfolio.
    Exceptional,
}

impl fmt::Display for PortfolioStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PortfolioStrength::Basic => "Basic",
            PortfolioStrength::Good => "Good",
            PortfolioStrength::Strong => "Strong",
            PortfolioStrength::Exceptional => "Exceptional",
        };
        f.write_str(label)
    }
}

/// Work mode. Accepted alongside the rate inputs for form compatibility
/// but carries no multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkMode {
    /// Remote work.
    Remote,
    /// On-site work.
    OnSite,
    /// Hybrid work.
    Hybrid,
}

impl fmt::Display for WorkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WorkMode::Remote => "Remote",
            WorkMode::OnSite => "On-site",
            WorkMode::Hybrid => "Hybrid",
        };
        f.write_str(label)
    }
}

/// The full set of inputs to the daily-rate estimator.
///
/// Every categorical field is a closed enum; `years_experience` is the only
/// field validated at calculation time (0–20 inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateInputs {
    /// Years of professional experience, 0–20 inclusive.
    pub years_experience: u8,
    /// Skill seniority level.
    pub skill_level: SkillLevel,
    /// Area of specialization.
    pub specialization: Specialization,
    /// Target market location.
    pub market_location: MarketLocation,
    /// Industry focus.
    pub industry: Industry,
    /// Whether the freelancer holds professional certifications.
    pub has_certifications: bool,
    /// Highest education level.
    pub education: EducationLevel,
    /// Market demand for the skill set.
    pub demand_level: DemandLevel,
    /// Business impact of the typical engagement.
    pub business_impact: BusinessImpact,
    /// Whether an urgency premium applies.
    pub urgency_premium: bool,
    /// Size of the typical client.
    pub client_size: ClientSize,
    /// Strength of the portfolio.
    pub portfolio_strength: PortfolioStrength,
}
