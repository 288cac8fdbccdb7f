use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{FULL_HD_SIZE, HD_SIZE};
use crate::error::{Result, SimError};

/// A circular planet.
///
/// Radius and mass are fixed at construction; only position and velocity
/// change while the simulation runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Window coordinates: origin top-left, y grows downwards
    pub position: DVec2,
    /// Units per second
    pub velocity: DVec2,
    radius: f64,
    mass: f64,
}

impl Body {
    /// Body at rest with mass derived from its area: `mass_per_unit * π * r²`
    pub fn new(position: DVec2, radius: f64, mass_per_unit: f64) -> Result<Self> {
        check_radius(radius)?;
        Self::with_mass(position, DVec2::ZERO, radius, mass_per_unit * circle_area(radius))
    }

    /// Body with an explicit mass and initial velocity
    pub fn with_mass(position: DVec2, velocity: DVec2, radius: f64, mass: f64) -> Result<Self> {
        check_radius(radius)?;
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidMass(mass));
        }
        Ok(Self {
            position,
            velocity,
            radius,
            mass,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

fn check_radius(radius: f64) -> Result<()> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidRadius(radius))
    }
}

pub fn circle_area(radius: f64) -> f64 {
    std::f64::consts::PI * radius * radius
}

/// Window size presets offered at setup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowPreset {
    /// 1280x720
    #[default]
    Hd,
    /// 1920x1080
    FullHd,
}

impl WindowPreset {
    /// [width, height] in pixels
    pub fn size(&self) -> [u32; 2] {
        match self {
            Self::Hd => HD_SIZE,
            Self::FullHd => FULL_HD_SIZE,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Hd => "HD (1280x720)",
            Self::FullHd => "Full HD (1920x1080)",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Hd => Self::FullHd,
            Self::FullHd => Self::Hd,
        }
    }
}

/// Which mass term the pairwise attraction uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForceLaw {
    /// `G * m_k² / R²`: the classic planets behavior
    #[default]
    MassSquared,
    /// `G * m_k / R²`: Newtonian gravity
    Newtonian,
}

impl ForceLaw {
    pub fn name(&self) -> &'static str {
        match self {
            Self::MassSquared => "G*m^2/R^2",
            Self::Newtonian => "G*m/R^2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mass_from_area() {
        let b = Body::new(DVec2::new(3.0, 4.0), 2.0, 1_000_000.0).unwrap();
        assert_relative_eq!(b.mass(), 1_000_000.0 * std::f64::consts::PI * 4.0);
        assert_eq!(b.velocity, DVec2::ZERO);
        assert_eq!(b.radius(), 2.0);
    }

    #[test]
    fn test_rejects_bad_radius() {
        assert_eq!(
            Body::new(DVec2::ZERO, 0.0, 1.0),
            Err(SimError::InvalidRadius(0.0))
        );
        assert_eq!(
            Body::new(DVec2::ZERO, -3.0, 1.0),
            Err(SimError::InvalidRadius(-3.0))
        );
        assert!(Body::new(DVec2::ZERO, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_rejects_bad_mass() {
        assert_eq!(
            Body::with_mass(DVec2::ZERO, DVec2::ZERO, 1.0, -1.0),
            Err(SimError::InvalidMass(-1.0))
        );
        // Zero density gives zero mass
        assert_eq!(
            Body::new(DVec2::ZERO, 1.0, 0.0),
            Err(SimError::InvalidMass(0.0))
        );
        assert!(Body::with_mass(DVec2::ZERO, DVec2::ZERO, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_window_presets() {
        assert_eq!(WindowPreset::Hd.size(), [1280, 720]);
        assert_eq!(WindowPreset::FullHd.size(), [1920, 1080]);
        assert_eq!(WindowPreset::Hd.toggled(), WindowPreset::FullHd);
        assert_eq!(WindowPreset::default(), WindowPreset::Hd);
    }
}
