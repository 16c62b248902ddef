use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{BreakEvenPoint, HomeChargingQuote, UsageEstimate},
    report::{BreakEvenReport, OwnershipReport, PlanReport},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

#[must_use]
pub fn build_usage_table(usage: &UsageEstimate) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Monthly distance", "Energy use", "Distance per swap", "Swaps needed"]);
    table.add_row(vec![
        Cell::new(usage.monthly_distance).set_alignment(CellAlignment::Right),
        Cell::new(usage.monthly_energy).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.1} km", usage.distance_per_swap.0))
            .set_alignment(CellAlignment::Right),
        Cell::new(format!("{}/mo", usage.swaps_ceil)).set_alignment(CellAlignment::Right),
    ]);
    table
}

#[must_use]
pub fn build_plans_table(plans: &[PlanReport], horizon_years: u32) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Tier".to_string(),
        "Fee".to_string(),
        "Cap".to_string(),
        "Status".to_string(),
        "Overage".to_string(),
        "Monthly".to_string(),
        "Per km".to_string(),
        format!("Over {horizon_years}y"),
    ]);
    for entry in plans {
        let mut name_cell = Cell::new(&entry.plan.name);
        if entry.recommended {
            name_cell = name_cell.add_attribute(Attribute::Bold).fg(Color::Green);
        }
        table.add_row(vec![
            name_cell,
            Cell::new(entry.plan.fixed_fee).set_alignment(CellAlignment::Right),
            Cell::new(entry.plan.included_energy_cap).set_alignment(CellAlignment::Right),
            if entry.quote.within_cap {
                Cell::new("within cap").fg(Color::Green)
            } else {
                Cell::new(format!("over by {}", entry.quote.overage_energy)).fg(Color::Red)
            },
            Cell::new(entry.quote.overage_cost).set_alignment(CellAlignment::Right).fg(
                if entry.quote.overage_cost.0 > 0.0 { Color::Red } else { Color::Reset },
            ),
            Cell::new(entry.quote.monthly_cost).set_alignment(CellAlignment::Right),
            Cell::new(entry.quote.cost_per_km).set_alignment(CellAlignment::Right),
            Cell::new(entry.horizon_cost).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[must_use]
pub fn build_ownership_table(ownership: &OwnershipReport) -> Table {
    let projection = &ownership.projection;
    let monthly = &ownership.monthly;

    let mut table = new_table();
    table.set_header(vec![
        "Packs bought",
        "Invested",
        "Used",
        "Leftover",
        "Amortized rate",
        "Monthly",
        "Per km",
    ]);
    table.add_row(vec![
        Cell::new(projection.packs_purchased).set_alignment(CellAlignment::Right),
        Cell::new(projection.invested_cost).set_alignment(CellAlignment::Right),
        Cell::new(projection.used_cost).set_alignment(CellAlignment::Right).fg(Color::Green),
        Cell::new(projection.wasted_cost).set_alignment(CellAlignment::Right).fg(
            if projection.wasted_cost.0 > 0.0 { Color::DarkYellow } else { Color::Reset },
        ),
        Cell::new(monthly.amortized_rate).set_alignment(CellAlignment::Right),
        Cell::new(monthly.monthly_cost).set_alignment(CellAlignment::Right),
        Cell::new(monthly.cost_per_km).set_alignment(CellAlignment::Right),
    ]);
    table
}

#[must_use]
pub fn build_break_even_table(rows: &[BreakEvenReport]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Against", "Break-even", "Distance", "Swaps", "From now"]);
    for row in rows {
        match &row.point {
            Some(point) => table.add_row(break_even_cells(&row.against, point)),
            None => table.add_row(vec![
                Cell::new(&row.against),
                Cell::new("—").set_alignment(CellAlignment::Center),
                Cell::new("—").set_alignment(CellAlignment::Center),
                Cell::new("—").set_alignment(CellAlignment::Center),
                Cell::new("—").set_alignment(CellAlignment::Center),
            ]),
        };
    }
    table
}

fn break_even_cells(against: &str, point: &BreakEvenPoint) -> Vec<Cell> {
    vec![
        Cell::new(against),
        Cell::new(point.threshold_energy).set_alignment(CellAlignment::Right),
        Cell::new(point.equivalent_distance).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.1}/mo", point.equivalent_swaps)).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:+.1} kWh", point.delta_from_current.0))
            .set_alignment(CellAlignment::Right)
            .fg(if point.delta_from_current.0 >= 0.0 { Color::DarkYellow } else { Color::Green }),
    ]
}

#[must_use]
pub fn build_home_charging_table(quote: &HomeChargingQuote) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Energy billed", "Monthly", "Per km"]);
    table.add_row(vec![
        Cell::new(quote.billed_energy).set_alignment(CellAlignment::Right),
        Cell::new(quote.monthly_cost).set_alignment(CellAlignment::Right),
        Cell::new(quote.cost_per_km).set_alignment(CellAlignment::Right),
    ]);
    table
}
