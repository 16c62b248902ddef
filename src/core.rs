mod break_even;
mod home;
mod ownership;
mod plan;
mod usage;

pub use self::{
    break_even::{BreakEvenPoint, find_break_even},
    home::HomeChargingQuote,
    ownership::{OwnershipMonthly, OwnershipProjection},
    plan::{PlanQuote, recommend},
    usage::{CommuteProfile, UsageEstimate},
};
