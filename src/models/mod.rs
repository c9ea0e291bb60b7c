//! Core data models for the TJM Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod estimate;
mod profile;
mod rate;
mod session;

pub use estimate::{IncomeProjection, RateEstimate, RateRange};
pub use profile::{
    FreelancerProfile, ProspectProfile, RawDailyRate, RawFreelancerProfile, RawProspectProfile,
    RawRemoteFlag, RawSkills,
};
pub use rate::{
    BusinessImpact, ClientSize, DemandLevel, EducationLevel, Industry, MarketLocation,
    PortfolioStrength, RateInputs, SkillLevel, Specialization, WorkMode,
};
pub use session::{MailThread, ProfileData, SessionState, UserType};
