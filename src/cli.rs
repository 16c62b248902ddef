use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    config::Config,
    core::CommuteProfile,
    quantity::{consumption::WattHoursPerKilometre, distance::Kilometres},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    /// Constants table. Built-in defaults apply when the file does not exist.
    #[clap(long = "config", env = "BAASLINE_CONFIG", default_value = "baasline.toml")]
    pub config_path: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate usage and render the full plan comparison.
    #[clap(name = "estimate")]
    Estimate(Box<EstimateArgs>),

    /// Emit the comparison as a JSON document.
    #[clap(name = "export")]
    Export(Box<ExportArgs>),
}

#[derive(Parser)]
pub struct EstimateArgs {
    #[clap(flatten)]
    pub commute: CommuteArgs,

    #[clap(flatten)]
    pub horizon: HorizonArgs,
}

#[derive(Parser)]
pub struct ExportArgs {
    #[clap(flatten)]
    pub commute: CommuteArgs,

    #[clap(flatten)]
    pub horizon: HorizonArgs,

    /// Write the payload to the file instead of standard output.
    #[clap(long)]
    pub output: Option<PathBuf>,
}

#[derive(Copy, Clone, Parser)]
pub struct CommuteArgs {
    /// Typical one-day commute distance in kilometres.
    #[clap(long = "daily-km", default_value = "0", env = "DAILY_KM")]
    pub daily_distance: Kilometres,

    /// Commuting days per month.
    #[clap(long = "days-per-month", default_value = "26", env = "DAYS_PER_MONTH")]
    pub days_per_month: f64,

    /// Longest single trip expected in a month, in kilometres.
    #[clap(long = "longest-trip-km", default_value = "0", env = "LONGEST_TRIP_KM")]
    pub longest_trip: Kilometres,

    /// Vehicle energy consumption in watt-hours per kilometre.
    #[clap(long = "consumption-wh-per-km", default_value = "35", env = "CONSUMPTION_WH_PER_KM")]
    pub consumption: WattHoursPerKilometre,
}

impl CommuteArgs {
    #[must_use]
    pub fn to_profile(self) -> CommuteProfile {
        CommuteProfile::builder()
            .daily_distance(self.daily_distance)
            .days_per_month(self.days_per_month)
            .longest_trip(self.longest_trip)
            .consumption(self.consumption)
            .build()
    }
}

#[derive(Copy, Clone, Parser)]
pub struct HorizonArgs {
    /// Comparison horizon in years.
    #[clap(
        long = "horizon-years",
        env = "HORIZON_YEARS",
        value_parser = clap::value_parser!(u32).range(1..=10),
    )]
    pub horizon_years: Option<u32>,
}

impl HorizonArgs {
    #[must_use]
    pub fn resolve(self, config: &Config) -> u32 {
        self.horizon_years.unwrap_or(config.horizon_years)
    }
}
