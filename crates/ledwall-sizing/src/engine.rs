//! The sizing calculation engine.
//!
//! Pure functions mapping physical dimensions and a panel model to derived
//! pixel, cabinet, power, weight, and aspect-ratio metrics. Fractional
//! cabinet counts are kept fractional per axis; pixel totals round per
//! axis and the cabinet total ceilings the fractional product.

use ledwall_paneldb::{PanelCatalog, PanelDbError, PanelModel};
use tracing::debug;

use crate::aspect::{AspectFormat, AspectRatio};
use crate::error::{Result, SizingError};
use crate::types::{SizingRequest, SizingResult};
use crate::units::{to_meters, LengthUnit};

/// Minimum number of cabinets needed to cover an arc of a circle.
///
/// `degrees` must lie in (0, 360]; `diameter_m` and `cabinet_width_m` must
/// be strictly positive. The arc path reports cabinet count only.
pub fn arc_cabinet_count(diameter_m: f64, degrees: f64, cabinet_width_m: f64) -> Result<u32> {
    if !(degrees > 0.0 && degrees <= 360.0) {
        return Err(SizingError::InvalidArcAngle { degrees });
    }
    if !diameter_m.is_finite() || diameter_m <= 0.0 {
        return Err(SizingError::degenerate("arc diameter", diameter_m));
    }
    if !cabinet_width_m.is_finite() || cabinet_width_m <= 0.0 {
        return Err(SizingError::degenerate("cabinet width", cabinet_width_m));
    }

    let circumference = std::f64::consts::PI * diameter_m;
    let arc_length = circumference * degrees / 360.0;
    Ok((arc_length / cabinet_width_m).ceil() as u32)
}

/// Pixel, cabinet, power, weight, and aspect metrics for a flat wall.
///
/// Dimensions are in meters. A zero width is a legal degenerate wall and
/// yields zero metrics with an undefined aspect ratio; a zero height is
/// rejected before any division.
pub fn rectangular(
    model: &PanelModel,
    width_m: f64,
    height_m: f64,
    format: AspectFormat,
) -> Result<SizingResult> {
    model.validate().map_err(PanelDbError::from)?;
    if !width_m.is_finite() || width_m < 0.0 {
        return Err(SizingError::degenerate("width", width_m));
    }
    if !height_m.is_finite() || height_m <= 0.0 {
        return Err(SizingError::degenerate("height", height_m));
    }

    let cabinets_across_width = width_m / model.cabinet_size.width_m();
    let cabinets_across_height = height_m / model.cabinet_size.height_m();

    // f64::round rounds half away from zero. Pixel totals round per axis,
    // so they are not necessarily a multiple of the per-cabinet count when
    // the wall is not an exact multiple of the cabinet size.
    let total_width_pixels = (cabinets_across_width * model.pixel_density).round() as u32;
    let total_height_pixels = (cabinets_across_height * model.pixel_density).round() as u32;

    // Ceiling of the fractional product, not the product of per-axis
    // ceilings.
    let total_cabinets = (cabinets_across_width * cabinets_across_height).ceil() as u32;

    let aspect_ratio = match format {
        AspectFormat::Reduced => AspectRatio::reduced(total_width_pixels, total_height_pixels),
        AspectFormat::Decimal => AspectRatio::decimal(width_m, height_m),
    };

    Ok(SizingResult {
        total_width_pixels,
        total_height_pixels,
        total_cabinets,
        total_power_watts: f64::from(total_cabinets) * model.power_per_cabinet_w,
        total_weight_kg: f64::from(total_cabinets) * model.weight_per_cabinet_kg,
        aspect_ratio,
        arc_cabinet_count: None,
    })
}

fn convert_dimension(dimension: &'static str, value: f64, unit: LengthUnit) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(SizingError::degenerate(dimension, value));
    }
    to_meters(value, unit)
}

/// Assemble a complete [`SizingResult`] from a request against a catalog.
///
/// Resolves the model, converts units, computes the rectangular metrics,
/// and adds the arc cabinet count when arc parameters are present. Any
/// failure in a sub-step aborts the whole calculation.
pub fn calculate(catalog: &PanelCatalog, request: &SizingRequest) -> Result<SizingResult> {
    let model = catalog.lookup(&request.model)?;

    let width_m = convert_dimension("width", request.width, request.unit)?;
    let height_m = convert_dimension("height", request.height, request.unit)?;

    let mut result = rectangular(model, width_m, height_m, request.aspect_format)?;

    if let Some(arc) = &request.arc {
        let diameter_m = convert_dimension("arc diameter", arc.diameter, request.unit)?;
        result.arc_cabinet_count = Some(arc_cabinet_count(
            diameter_m,
            arc.degrees,
            model.cabinet_size.width_m(),
        )?);
    }

    debug!(
        model = %model.name,
        width_px = result.total_width_pixels,
        height_px = result.total_height_pixels,
        cabinets = result.total_cabinets,
        "sized wall"
    );

    Ok(result)
}
