//! Request and result value objects.
//!
//! All three types are ephemeral values created fresh per calculation;
//! nothing is mutated after construction and nothing persists beyond the
//! call that produced it.

use serde::{Deserialize, Serialize};

use crate::aspect::{AspectFormat, AspectRatio};
use crate::units::LengthUnit;

/// Circular arrangement parameters, independent of the rectangular wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcParameters {
    /// Circle diameter in the request's unit.
    pub diameter: f64,
    /// Angular span in degrees, within (0, 360].
    pub degrees: f64,
}

/// Raw inputs for one sizing calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingRequest {
    /// Catalog name of the panel model.
    pub model: String,
    /// Wall width in `unit`s.
    pub width: f64,
    /// Wall height in `unit`s.
    pub height: f64,
    pub unit: LengthUnit,
    /// Requested aspect-ratio form.
    #[serde(default)]
    pub aspect_format: AspectFormat,
    /// Optional circular arrangement, sized alongside the rectangle.
    #[serde(default)]
    pub arc: Option<ArcParameters>,
}

impl SizingRequest {
    pub fn new(model: impl Into<String>, width: f64, height: f64, unit: LengthUnit) -> Self {
        Self {
            model: model.into(),
            width,
            height,
            unit,
            aspect_format: AspectFormat::Reduced,
            arc: None,
        }
    }

    pub fn with_arc(mut self, diameter: f64, degrees: f64) -> Self {
        self.arc = Some(ArcParameters { diameter, degrees });
        self
    }

    pub fn with_aspect_format(mut self, format: AspectFormat) -> Self {
        self.aspect_format = format;
        self
    }
}

/// Derived metrics for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingResult {
    pub total_width_pixels: u32,
    pub total_height_pixels: u32,
    pub total_cabinets: u32,
    pub total_power_watts: f64,
    pub total_weight_kg: f64,
    pub aspect_ratio: AspectRatio,
    /// Present only when arc parameters were supplied.
    pub arc_cabinet_count: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builders() {
        let request = SizingRequest::new("CRYSTAL 1.9MM", 2.0, 1.0, LengthUnit::Meters)
            .with_arc(1.0, 180.0)
            .with_aspect_format(AspectFormat::Decimal);
        assert_eq!(request.model, "CRYSTAL 1.9MM");
        assert_eq!(
            request.arc,
            Some(ArcParameters {
                diameter: 1.0,
                degrees: 180.0
            })
        );
        assert_eq!(request.aspect_format, AspectFormat::Decimal);
    }

    #[test]
    fn test_request_serde_defaults() {
        let request: SizingRequest = serde_json::from_str(
            r#"{"model": "PL 4.8MM", "width": 3.0, "height": 2.0, "unit": "meters"}"#,
        )
        .unwrap();
        assert_eq!(request.aspect_format, AspectFormat::Reduced);
        assert!(request.arc.is_none());
    }
}
