use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Physical cabinet dimensions in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CabinetSize {
    /// Cabinet width in millimeters.
    pub width_mm: u32,
    /// Cabinet height in millimeters.
    pub height_mm: u32,
}

impl CabinetSize {
    pub const fn new(width_mm: u32, height_mm: u32) -> Self {
        Self {
            width_mm,
            height_mm,
        }
    }

    /// Cabinet width in meters.
    pub fn width_m(&self) -> f64 {
        f64::from(self.width_mm) / 1000.0
    }

    /// Cabinet height in meters.
    pub fn height_m(&self) -> f64 {
        f64::from(self.height_mm) / 1000.0
    }

    /// Whether the cabinet is square.
    pub fn is_square(&self) -> bool {
        self.width_mm == self.height_mm
    }
}

impl Default for CabinetSize {
    fn default() -> Self {
        Self::new(500, 500)
    }
}

impl std::fmt::Display for CabinetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} mm", self.width_mm, self.height_mm)
    }
}

/// A named LED panel specification.
///
/// Power and weight are attributed per cabinet unit regardless of
/// orientation. `pixel_density` is the number of pixels one cabinet
/// produces along one edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelModel {
    pub name: String,
    /// Pixels produced per cabinet along one edge.
    pub pixel_density: f64,
    /// Power draw of one cabinet in watts.
    pub power_per_cabinet_w: f64,
    /// Weight of one cabinet in kilograms.
    pub weight_per_cabinet_kg: f64,
    pub cabinet_size: CabinetSize,
    /// Whether the panel may additionally be arranged along an arc.
    pub is_curved: bool,
}

impl Default for PanelModel {
    fn default() -> Self {
        Self {
            name: "New Panel".to_string(),
            pixel_density: 256.0,
            power_per_cabinet_w: 150.0,
            weight_per_cabinet_kg: 8.0,
            cabinet_size: CabinetSize::default(),
            is_curved: false,
        }
    }
}

impl PanelModel {
    /// Check the model invariants: a non-empty name and strictly positive
    /// density, power, weight, and cabinet dimensions.
    pub fn validate(&self) -> ModelResult<()> {
        if self.name.trim().is_empty() {
            return Err(ModelError::MissingField("name".to_string()));
        }
        if !self.pixel_density.is_finite() || self.pixel_density <= 0.0 {
            return Err(ModelError::ValueOutOfRange {
                field: "pixel_density".to_string(),
                value: self.pixel_density.to_string(),
            });
        }
        if !self.power_per_cabinet_w.is_finite() || self.power_per_cabinet_w <= 0.0 {
            return Err(ModelError::ValueOutOfRange {
                field: "power_per_cabinet_w".to_string(),
                value: self.power_per_cabinet_w.to_string(),
            });
        }
        if !self.weight_per_cabinet_kg.is_finite() || self.weight_per_cabinet_kg <= 0.0 {
            return Err(ModelError::ValueOutOfRange {
                field: "weight_per_cabinet_kg".to_string(),
                value: self.weight_per_cabinet_kg.to_string(),
            });
        }
        if self.cabinet_size.width_mm == 0 {
            return Err(ModelError::ValueOutOfRange {
                field: "cabinet_size.width_mm".to_string(),
                value: "0".to_string(),
            });
        }
        if self.cabinet_size.height_mm == 0 {
            return Err(ModelError::ValueOutOfRange {
                field: "cabinet_size.height_mm".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for PanelModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.cabinet_size)
    }
}
