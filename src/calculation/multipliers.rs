//! Categorical multiplier tables for the daily-rate formula.
//!
//! Each function maps one closed input domain to its dimensionless scaling
//! factor. The tables are part of the calculation contract and are fixed
//! in code rather than configuration.

use rust_decimal::Decimal;

use crate::models::{
    BusinessImpact, ClientSize, DemandLevel, EducationLevel, Industry, MarketLocation,
    PortfolioStrength, SkillLevel, Specialization,
};

fn dec_tenths(tenths: i64) -> Decimal {
    Decimal::new(tenths, 1)
}

/// Multiplier for the skill seniority level.
pub fn skill_multiplier(level: SkillLevel) -> Decimal {
    match level {
        SkillLevel::Junior => dec_tenths(8),
        SkillLevel::MidLevel => dec_tenths(10),
        SkillLevel::Senior => dec_tenths(13),
        SkillLevel::ExpertLead => dec_tenths(16),
    }
}

/// Multiplier for the area of specialization.
pub fn specialization_multiplier(specialization: Specialization) -> Decimal {
    match specialization {
        Specialization::GeneralDevelopment => dec_tenths(10),
        Specialization::FrontendDevelopment => dec_tenths(11),
        Specialization::BackendDevelopment => dec_tenths(12),
        Specialization::FullStackDevelopment => dec_tenths(13),
        Specialization::DataScienceMl => dec_tenths(15),
        Specialization::DevopsCloud => dec_tenths(14),
        Specialization::MobileDevelopment => dec_tenths(12),
        Specialization::UiUxDesign => dec_tenths(11),
        Specialization::ProjectManagement => dec_tenths(12),
        Specialization::Consulting => dec_tenths(14),
    }
}

/// Multiplier for the target market location.
pub fn location_multiplier(location: MarketLocation) -> Decimal {
    match location {
        MarketLocation::FranceParis => dec_tenths(12),
        MarketLocation::FranceOtherCities => dec_tenths(10),
        MarketLocation::Germany => dec_tenths(13),
        MarketLocation::Uk => dec_tenths(14),
        MarketLocation::Netherlands => dec_tenths(13),
        MarketLocation::Switzerland => dec_tenths(18),
        MarketLocation::Usa => dec_tenths(16),
        MarketLocation::GlobalRemote => dec_tenths(11),
    }
}

/// Multiplier for the industry focus.
pub fn industry_multiplier(industry: Industry) -> Decimal {
    match industry {
        Industry::TechSaas => dec_tenths(12),
        Industry::FinanceBanking => dec_tenths(14),
        Industry::Healthcare => dec_tenths(11),
        Industry::Ecommerce => dec_tenths(11),
        Industry::MediaEntertainment => dec_tenths(9),
        Industry::Consulting => dec_tenths(13),
        Industry::Government => dec_tenths(8),
        Industry::General => dec_tenths(10),
    }
}

/// Multiplier applied when the freelancer holds professional
/// certifications.
pub const CERTIFICATION_MULTIPLIER: Decimal = Decimal::from_parts(11, 0, 0, false, 1);

/// Multiplier for the education level. Only an advanced degree moves the
/// rate; everything else is neutral.
pub fn education_multiplier(education: EducationLevel) -> Decimal {
    match education {
        EducationLevel::MastersDegree | EducationLevel::Phd => dec_tenths(11),
        EducationLevel::HighSchool
        | EducationLevel::BachelorsDegree
        | EducationLevel::SelfTaught => Decimal::ONE,
    }
}

/// Multiplier for the market demand level.
pub fn demand_multiplier(demand: DemandLevel) -> Decimal {
    match demand {
        DemandLevel::Low => dec_tenths(8),
        DemandLevel::Medium => dec_tenths(10),
        DemandLevel::High => dec_tenths(12),
        DemandLevel::VeryHigh => dec_tenths(14),
    }
}

/// Multiplier for the business impact of the typical engagement.
pub fn business_impact_multiplier(impact: BusinessImpact) -> Decimal {
    match impact {
        BusinessImpact::Low => dec_tenths(9),
        BusinessImpact::Medium => dec_tenths(10),
        BusinessImpact::High => dec_tenths(12),
        BusinessImpact::Critical => dec_tenths(14),
    }
}

/// Multiplier applied when an urgency premium is charged.
pub const URGENCY_MULTIPLIER: Decimal = Decimal::from_parts(12, 0, 0, false, 1);

/// Multiplier for the size of the typical client.
pub fn client_size_multiplier(size: ClientSize) -> Decimal {
    match size {
        ClientSize::Startup => dec_tenths(8),
        ClientSize::SmallBusiness => dec_tenths(9),
        ClientSize::MidSizeCompany => dec_tenths(10),
        ClientSize::LargeEnterprise => dec_tenths(13),
    }
}

/// Multiplier for the portfolio strength.
pub fn portfolio_multiplier(strength: PortfolioStrength) -> Decimal {
    match strength {
        PortfolioStrength::Basic => dec_tenths(9),
        PortfolioStrength::Good => dec_tenths(10),
        PortfolioStrength::Strong => dec_tenths(11),
        PortfolioStrength::Exceptional => dec_tenths(13),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_skill_table_values() {
        assert_eq!(skill_multiplier(SkillLevel::Junior), dec("0.8"));
        assert_eq!(skill_multiplier(SkillLevel::MidLevel), dec("1.0"));
        assert_eq!(skill_multiplier(SkillLevel::Senior), dec("1.3"));
        assert_eq!(skill_multiplier(SkillLevel::ExpertLead), dec("1.6"));
    }

    #[test]
    fn test_specialization_table_values() {
        assert_eq!(
            specialization_multiplier(Specialization::GeneralDevelopment),
            dec("1.0")
        );
        assert_eq!(
            specialization_multiplier(Specialization::DataScienceMl),
            dec("1.5")
        );
        assert_eq!(
            specialization_multiplier(Specialization::DevopsCloud),
            dec("1.4")
        );
        assert_eq!(
            specialization_multiplier(Specialization::UiUxDesign),
            dec("1.1")
        );
    }

    #[test]
    fn test_location_table_values() {
        assert_eq!(location_multiplier(MarketLocation::FranceParis), dec("1.2"));
        assert_eq!(
            location_multiplier(MarketLocation::FranceOtherCities),
            dec("1.0")
        );
        assert_eq!(location_multiplier(MarketLocation::Switzerland), dec("1.8"));
        assert_eq!(location_multiplier(MarketLocation::Usa), dec("1.6"));
        assert_eq!(
            location_multiplier(MarketLocation::GlobalRemote),
            dec("1.1")
        );
    }

    #[test]
    fn test_industry_table_values() {
        assert_eq!(industry_multiplier(Industry::TechSaas), dec("1.2"));
        assert_eq!(industry_multiplier(Industry::FinanceBanking), dec("1.4"));
        assert_eq!(
            industry_multiplier(Industry::MediaEntertainment),
            dec("0.9")
        );
        assert_eq!(industry_multiplier(Industry::Government), dec("0.8"));
        assert_eq!(industry_multiplier(Industry::General), dec("1.0"));
    }

    #[test]
    fn test_certification_and_urgency_constants() {
        assert_eq!(CERTIFICATION_MULTIPLIER, dec("1.1"));
        assert_eq!(URGENCY_MULTIPLIER, dec("1.2"));
    }

    #[test]
    fn test_only_advanced_degrees_move_the_rate() {
        assert_eq!(
            education_multiplier(EducationLevel::MastersDegree),
            dec("1.1")
        );
        assert_eq!(education_multiplier(EducationLevel::Phd), dec("1.1"));
        assert_eq!(
            education_multiplier(EducationLevel::HighSchool),
            Decimal::ONE
        );
        assert_eq!(
            education_multiplier(EducationLevel::BachelorsDegree),
            Decimal::ONE
        );
        assert_eq!(
            education_multiplier(EducationLevel::SelfTaught),
            Decimal::ONE
        );
    }

    #[test]
    fn test_demand_and_impact_table_values() {
        assert_eq!(demand_multiplier(DemandLevel::Low), dec("0.8"));
        assert_eq!(demand_multiplier(DemandLevel::VeryHigh), dec("1.4"));
        assert_eq!(
            business_impact_multiplier(BusinessImpact::Low),
            dec("0.9")
        );
        assert_eq!(
            business_impact_multiplier(BusinessImpact::Critical),
            dec("1.4")
        );
    }

    #[test]
    fn test_client_and_portfolio_table_values() {
        assert_eq!(client_size_multiplier(ClientSize::Startup), dec("0.8"));
        assert_eq!(
            client_size_multiplier(ClientSize::LargeEnterprise),
            dec("1.3")
        );
        assert_eq!(portfolio_multiplier(PortfolioStrength::Basic), dec("0.9"));
        assert_eq!(
            portfolio_multiplier(PortfolioStrength::Exceptional),
            dec("1.3")
        );
    }
}
