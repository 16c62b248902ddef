use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Vehicle energy consumption, kept in watt-hours per kilometre.
///
/// The energy quantities are kept in kilowatt-hours, so the cross-type
/// conversions scale by 1000.
pub type WattHoursPerKilometre = Quantity<f64, -1, 1, 0>;

impl Display for WattHoursPerKilometre {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} Wh/km", self.0)
    }
}

impl Debug for WattHoursPerKilometre {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}Wh/km", self.0)
    }
}
