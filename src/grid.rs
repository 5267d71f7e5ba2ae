//! Grid aggregate: current load plus the owned plant list.

use crate::plant::Plant;

/// A power grid with a demand figure and its generation units.
///
/// The grid exclusively owns its plants and is read-only once built.
/// No invariant ties `load` to capacity, so utilization may exceed 100%.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Current demand.
    pub load: f64,
    /// Plants in catalog order.
    pub plants: Vec<Plant>,
}

impl Grid {
    /// Creates a grid from a load value and its plants.
    pub fn new(load: f64, plants: Vec<Plant>) -> Self {
        Self { load, plants }
    }

    /// Sum of capacity over plants whose status is `Active`.
    pub fn active_capacity(&self) -> f64 {
        self.plants
            .iter()
            .filter(|p| p.status.is_active())
            .map(|p| p.capacity)
            .sum()
    }

    /// Load as a percentage of active capacity.
    ///
    /// Not guarded against zero capacity: the result is `+inf` for a
    /// positive load and `NaN` for a zero load.
    pub fn utilization_pct(&self) -> f64 {
        self.load / self.active_capacity() * 100.0
    }
}
