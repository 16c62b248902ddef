use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Rupees per kilowatt-hour.
pub type KilowattHourRate = Quantity<f64, 0, -1, 1>;

impl Display for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{:.2}/kWh", self.0)
    }
}

impl Debug for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{:.2}/kWh", self.0)
    }
}

/// Rupees per kilometre.
pub type KilometreRate = Quantity<f64, -1, 0, 1>;

impl Display for KilometreRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{:.2}/km", self.0)
    }
}

impl Debug for KilometreRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{:.2}/km", self.0)
    }
}
