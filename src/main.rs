mod cli;
mod config;
mod core;
mod prelude;
mod quantity;
mod report;
mod tables;

use clap::Parser;

use crate::{
    cli::{Args, Command},
    config::Config,
    prelude::*,
    report::Report,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_target(false).without_time().init();

    let args = Args::parse();
    let config = Config::read_from(&args.config_path)?;
    config.validate()?;

    match args.command {
        Command::Estimate(estimate_args) => {
            let horizon_years = estimate_args.horizon.resolve(&config);
            let report =
                Report::build(&config, estimate_args.commute.to_profile(), horizon_years);
            info!(
                monthly_distance = %report.usage.monthly_distance,
                monthly_energy = %report.usage.monthly_energy,
                swaps = report.usage.swaps_ceil,
                "Estimated usage"
            );
            if let Some(entry) = report.plans.iter().find(|entry| entry.recommended) {
                info!(
                    tier = %entry.plan.name,
                    monthly_cost = %entry.quote.monthly_cost,
                    "Cheapest tier for the current usage"
                );
            }

            println!("{}", tables::build_usage_table(&report.usage));
            println!("{}", tables::build_plans_table(&report.plans, horizon_years));
            println!("{}", tables::build_ownership_table(&report.ownership));
            println!("{}", tables::build_break_even_table(&report.break_even));
            println!("{}", tables::build_home_charging_table(&report.home_charging));
            Ok(())
        }

        Command::Export(export_args) => {
            let horizon_years = export_args.horizon.resolve(&config);
            let report =
                Report::build(&config, export_args.commute.to_profile(), horizon_years);
            let payload = serde_json::to_string_pretty(&report)?;
            match export_args.output {
                Some(path) => {
                    std::fs::write(&path, payload)?;
                    info!(path = %path.display(), "Wrote the payload");
                }
                None => println!("{payload}"),
            }
            Ok(())
        }
    }
}
