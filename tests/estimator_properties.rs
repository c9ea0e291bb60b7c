//! Property-based tests for the daily-rate estimator.
//!
//! These cover the algebraic guarantees of the formula over the whole
//! input domain: the output shape, determinism, monotonicity in
//! experience, and the certification scaling.

use proptest::prelude::*;

use tjm_engine::calculation::estimate_daily_rate;
use tjm_engine::models::{
    BusinessImpact, ClientSize, DemandLevel, EducationLevel, Industry, MarketLocation,
    PortfolioStrength, RateInputs, SkillLevel, Specialization,
};

fn arb_skill() -> impl Strategy<Value = SkillLevel> {
    prop_oneof![
        Just(SkillLevel::Junior),
        Just(SkillLevel::MidLevel),
        Just(SkillLevel::Senior),
        Just(SkillLevel::ExpertLead),
    ]
}

fn arb_specialization() -> impl Strategy<Value = Specialization> {
    prop_oneof![
        Just(Specialization::GeneralDevelopment),
        Just(Specialization::FrontendDevelopment),
        Just(Specialization::BackendDevelopment),
        Just(Specialization::FullStackDevelopment),
        Just(Specialization::DataScienceMl),
        Just(Specialization::DevopsCloud),
        Just(Specialization::MobileDevelopment),
        Just(Specialization::UiUxDesign),
        Just(Specialization::ProjectManagement),
        Just(Specialization::Consulting),
    ]
}

fn arb_location() -> impl Strategy<Value = MarketLocation> {
    prop_oneof![
        Just(MarketLocation::FranceParis),
        Just(MarketLocation::FranceOtherCities),
        Just(MarketLocation::Germany),
        Just(MarketLocation::Uk),
        Just(MarketLocation::Netherlands),
        Just(MarketLocation::Switzerland),
        Just(MarketLocation::Usa),
        Just(MarketLocation::GlobalRemote),
    ]
}

fn arb_industry() -> impl Strategy<Value = Industry> {
    prop_oneof![
        Just(Industry::TechSaas),
        Just(Industry::FinanceBanking),
        Just(Industry::Healthcare),
        Just(Industry::Ecommerce),
        Just(Industry::MediaEntertainment),
        Just(Industry::Consulting),
        Just(Industry::Government),
        Just(Industry::General),
    ]
}

fn arb_education() -> impl Strategy<Value = EducationLevel> {
    prop_oneof![
        Just(EducationLevel::HighSchool),
        Just(EducationLevel::BachelorsDegree),
        Just(EducationLevel::MastersDegree),
        Just(EducationLevel::Phd),
        Just(EducationLevel::SelfTaught),
    ]
}

fn arb_demand() -> impl Strategy<Value = DemandLevel> {
    prop_oneof![
        Just(DemandLevel::Low),
        Just(DemandLevel::Medium),
        Just(DemandLevel::High),
        Just(DemandLevel::VeryHigh),
    ]
}

fn arb_impact() -> impl Strategy<Value = BusinessImpact> {
    prop_oneof![
        Just(BusinessImpact::Low),
        Just(BusinessImpact::Medium),
        Just(BusinessImpact::High),
        Just(BusinessImpact::Critical),
    ]
}

fn arb_client_size() -> impl Strategy<Value = ClientSize> {
    prop_oneof![
        Just(ClientSize::Startup),
        Just(ClientSize::SmallBusiness),
        Just(ClientSize::MidSizeCompany),
        Just(ClientSize::LargeEnterprise),
    ]
}

fn arb_portfolio() -> impl Strategy<Value = PortfolioStrength> {
    prop_oneof![
        Just(PortfolioStrength::Basic),
        Just(PortfolioStrength::Good),
        Just(PortfolioStrength::Strong),
        Just(PortfolioStrength::Exceptional),
    ]
}

fn arb_inputs() -> impl Strategy<Value = RateInputs> {
    (
        (
            0u8..=20,
            arb_skill(),
            arb_specialization(),
            arb_location(),
            arb_industry(),
            any::<bool>(),
        ),
        (
            arb_education(),
            arb_demand(),
            arb_impact(),
            any::<bool>(),
            arb_client_size(),
            arb_portfolio(),
        ),
    )
        .prop_map(
            |(
                (years, skill, specialization, location, industry, certifications),
                (education, demand, impact, urgency, client_size, portfolio),
            )| {
                RateInputs {
                    years_experience: years,
                    skill_level: skill,
                    specialization,
                    market_location: location,
                    industry,
                    has_certifications: certifications,
                    education,
                    demand_level: demand,
                    business_impact: impact,
                    urgency_premium: urgency,
                    client_size,
                    portfolio_strength: portfolio,
                }
            },
        )
}

proptest! {
    #[test]
    fn estimate_is_a_positive_multiple_of_25(inputs in arb_inputs()) {
        let rate = estimate_daily_rate(&inputs).unwrap();
        prop_assert!(rate > 0);
        prop_assert_eq!(rate % 25, 0);
    }

    #[test]
    fn estimate_is_deterministic(inputs in arb_inputs()) {
        prop_assert_eq!(
            estimate_daily_rate(&inputs).unwrap(),
            estimate_daily_rate(&inputs).unwrap()
        );
    }

    #[test]
    fn estimate_is_monotone_in_experience(
        inputs in arb_inputs(),
        a in 0u8..=20,
        b in 0u8..=20,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_rate = estimate_daily_rate(&RateInputs {
            years_experience: low,
            ..inputs
        })
        .unwrap();
        let high_rate = estimate_daily_rate(&RateInputs {
            years_experience: high,
            ..inputs
        })
        .unwrap();
        prop_assert!(low_rate <= high_rate);
    }

    #[test]
    fn certifications_scale_the_rate_by_about_ten_percent(inputs in arb_inputs()) {
        let without = estimate_daily_rate(&RateInputs {
            has_certifications: false,
            ..inputs
        })
        .unwrap();
        let with = estimate_daily_rate(&RateInputs {
            has_certifications: true,
            ..inputs
        })
        .unwrap();

        // Both values are rounded to the nearest 25, so each can sit up to
        // 12.5 away from the exact product; 12.5 + 1.1 * 12.5 = 26.25.
        let drift = with as f64 - 1.1 * without as f64;
        prop_assert!(
            drift.abs() <= 26.25,
            "with = {}, without = {}, drift = {}",
            with,
            without,
            drift
        );
    }

    #[test]
    fn years_beyond_the_table_are_rejected(
        inputs in arb_inputs(),
        years in 21u8..,
    ) {
        let result = estimate_daily_rate(&RateInputs {
            years_experience: years,
            ..inputs
        });
        prop_assert!(result.is_err());
    }
}
