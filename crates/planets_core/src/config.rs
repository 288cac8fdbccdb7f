use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BODY_COUNT, DEFAULT_MAX_RADIUS, G, MASS_PER_UNIT, MAX_INPUT_VALUE};
use crate::error::{Result, SimError};
use crate::types::{ForceLaw, WindowPreset};

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of planets to generate
    pub body_count: u32,
    /// Largest planet radius; radii are drawn from 1..=max_radius
    pub max_radius: u32,
    /// Window the planets are scattered across
    pub window: WindowPreset,
    /// Random seed, `None` seeds from OS entropy
    pub seed: Option<u64>,
    /// Gravitational constant
    pub gravitational_constant: f64,
    /// Planet density
    pub mass_per_unit: f64,
    pub force_law: ForceLaw,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            body_count: DEFAULT_BODY_COUNT,
            max_radius: DEFAULT_MAX_RADIUS,
            window: WindowPreset::default(),
            seed: None,
            gravitational_constant: G,
            mass_per_unit: MASS_PER_UNIT,
            force_law: ForceLaw::default(),
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<()> {
        check_input("body_count", self.body_count)?;
        check_input("max_radius", self.max_radius)?;
        check_positive("gravitational_constant", self.gravitational_constant)?;
        check_positive("mass_per_unit", self.mass_per_unit)?;
        Ok(())
    }

    /// Window size as floats, [width, height]
    pub fn window_size(&self) -> [f64; 2] {
        let [w, h] = self.window.size();
        [w as f64, h as f64]
    }
}

fn check_input(field: &'static str, value: u32) -> Result<()> {
    if (1..=MAX_INPUT_VALUE).contains(&value) {
        Ok(())
    } else {
        Err(SimError::InvalidConfig {
            field,
            reason: format!("{value} is outside 1..={MAX_INPUT_VALUE}"),
        })
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidConfig {
            field,
            reason: format!("{value} must be finite and greater than zero"),
        })
    }
}
