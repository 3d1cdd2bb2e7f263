use ledwall_paneldb::{CabinetSize, PanelCatalog, PanelDbError, PanelModel};
use ledwall_sizing::{
    arc_cabinet_count, calculate, rectangular, AspectFormat, AspectRatio, LengthUnit,
    SizingError, SizingRequest,
};

fn catalog() -> PanelCatalog {
    PanelCatalog::builtin()
}

#[test]
fn test_one_meter_square_crystal_wall() {
    let request = SizingRequest::new("CRYSTAL 1.9MM", 1.0, 1.0, LengthUnit::Meters);
    let result = calculate(&catalog(), &request).unwrap();

    assert_eq!(result.total_width_pixels, 512);
    assert_eq!(result.total_height_pixels, 512);
    assert_eq!(result.total_cabinets, 4);
    assert_eq!(result.total_power_watts, 600.0);
    assert_eq!(result.total_weight_kg, 32.0);
    assert_eq!(
        result.aspect_ratio,
        AspectRatio::Reduced {
            width: 1,
            height: 1
        }
    );
    assert!(result.arc_cabinet_count.is_none());
}

#[test]
fn test_millimeter_inputs_convert_before_sizing() {
    let request = SizingRequest::new("CRYSTAL 1.9MM", 2000.0, 1000.0, LengthUnit::Millimeters);
    let result = calculate(&catalog(), &request).unwrap();

    assert_eq!(result.total_width_pixels, 1024);
    assert_eq!(result.total_height_pixels, 512);
    assert_eq!(result.total_cabinets, 8);
    assert_eq!(
        result.aspect_ratio,
        AspectRatio::Reduced {
            width: 2,
            height: 1
        }
    );
}

#[test]
fn test_full_circle_arc_count() {
    // circumference = pi, cabinet width 0.5 m => ceil(2 pi) = 7
    assert_eq!(arc_cabinet_count(1.0, 360.0, 0.5).unwrap(), 7);
}

#[test]
fn test_arc_alongside_rectangle() {
    let request =
        SizingRequest::new("CRYSTAL 1.9MM", 1.0, 1.0, LengthUnit::Meters).with_arc(1.0, 360.0);
    let result = calculate(&catalog(), &request).unwrap();

    assert_eq!(result.arc_cabinet_count, Some(7));
    // The rectangular metrics are unaffected by the arc path.
    assert_eq!(result.total_cabinets, 4);
}

#[test]
fn test_arc_diameter_uses_request_unit() {
    let request = SizingRequest::new("CRYSTAL 1.9MM", 1000.0, 1000.0, LengthUnit::Millimeters)
        .with_arc(1000.0, 360.0);
    let result = calculate(&catalog(), &request).unwrap();
    assert_eq!(result.arc_cabinet_count, Some(7));
}

#[test]
fn test_arc_partial_sweep() {
    // quarter circle of a 4 m circle: arc length = pi => 7 cabinets of 0.5 m
    assert_eq!(arc_cabinet_count(4.0, 90.0, 0.5).unwrap(), 7);
    // half of that sweep needs no more than half the cabinets, rounded up
    assert_eq!(arc_cabinet_count(4.0, 45.0, 0.5).unwrap(), 4);
}

#[test]
fn test_arc_angle_bounds() {
    assert!(matches!(
        arc_cabinet_count(1.0, 0.0, 0.5),
        Err(SizingError::InvalidArcAngle { .. })
    ));
    assert!(matches!(
        arc_cabinet_count(1.0, 361.0, 0.5),
        Err(SizingError::InvalidArcAngle { .. })
    ));
    assert!(arc_cabinet_count(1.0, 360.0, 0.5).is_ok());
    assert!(arc_cabinet_count(1.0, 0.1, 0.5).is_ok());
}

#[test]
fn test_arc_rejects_degenerate_diameter() {
    assert!(matches!(
        arc_cabinet_count(0.0, 180.0, 0.5),
        Err(SizingError::DegenerateDimension { .. })
    ));
    assert!(matches!(
        arc_cabinet_count(-2.0, 180.0, 0.5),
        Err(SizingError::DegenerateDimension { .. })
    ));
}

#[test]
fn test_zero_height_is_rejected() {
    let request = SizingRequest::new("CRYSTAL 1.9MM", 1.0, 0.0, LengthUnit::Meters);
    let err = calculate(&catalog(), &request).unwrap_err();
    assert!(matches!(
        err,
        SizingError::DegenerateDimension { dimension, .. } if dimension == "height"
    ));
}

#[test]
fn test_negative_width_is_rejected() {
    let request = SizingRequest::new("CRYSTAL 1.9MM", -1.0, 1.0, LengthUnit::Meters);
    let err = calculate(&catalog(), &request).unwrap_err();
    assert!(matches!(
        err,
        SizingError::DegenerateDimension { dimension, .. } if dimension == "width"
    ));
}

#[test]
fn test_zero_width_yields_zero_metrics() {
    let request = SizingRequest::new("CRYSTAL 1.9MM", 0.0, 1.0, LengthUnit::Meters);
    let result = calculate(&catalog(), &request).unwrap();

    assert_eq!(result.total_width_pixels, 0);
    assert_eq!(result.total_cabinets, 0);
    assert_eq!(result.total_power_watts, 0.0);
    assert_eq!(result.total_weight_kg, 0.0);
    assert_eq!(result.aspect_ratio, AspectRatio::Undefined);
}

#[test]
fn test_unknown_model_aborts_calculation() {
    let request = SizingRequest::new("MESH 10MM", 1.0, 1.0, LengthUnit::Meters);
    let err = calculate(&catalog(), &request).unwrap_err();
    assert!(matches!(
        err,
        SizingError::Panel(PanelDbError::UnknownModel(name)) if name == "MESH 10MM"
    ));
}

#[test]
fn test_decimal_aspect_uses_physical_dimensions() {
    let request = SizingRequest::new("CRYSTAL 1.9MM", 1.92, 1.08, LengthUnit::Meters)
        .with_aspect_format(AspectFormat::Decimal);
    let result = calculate(&catalog(), &request).unwrap();
    assert_eq!(result.aspect_ratio, AspectRatio::Decimal(1.78));
}

#[test]
fn test_cabinet_total_ceilings_the_product() {
    // 2.3 x 1.1 fractional cabinets: ceil(2.53) = 3, not ceil(2.3) * ceil(1.1) = 6
    let request = SizingRequest::new("CRYSTAL 1.9MM", 1.15, 0.55, LengthUnit::Meters);
    let result = calculate(&catalog(), &request).unwrap();

    assert_eq!(result.total_cabinets, 3);
    assert_eq!(result.total_width_pixels, 589);
    assert_eq!(result.total_height_pixels, 282);
}

#[test]
fn test_square_wall_reduces_to_one_to_one_for_square_cabinets() {
    let catalog = catalog();
    for model in catalog.iter().filter(|m| m.cabinet_size.is_square()) {
        let request = SizingRequest::new(&model.name, 2.0, 2.0, LengthUnit::Meters);
        let result = calculate(&catalog, &request).unwrap();
        assert_eq!(
            result.aspect_ratio,
            AspectRatio::Reduced {
                width: 1,
                height: 1
            },
            "model {}",
            model.name
        );
    }
}

#[test]
fn test_standee_cabinets_are_not_square() {
    // 640x1920 mm cabinets: a 1.28 x 1.92 m wall is exactly 2 x 1 cabinets
    let request = SizingRequest::new("LED Standee 2.5MM", 1.28, 1.92, LengthUnit::Meters);
    let result = calculate(&catalog(), &request).unwrap();

    assert_eq!(result.total_width_pixels, 512);
    assert_eq!(result.total_height_pixels, 256);
    assert_eq!(result.total_cabinets, 2);
    assert_eq!(result.total_power_watts, 1200.0);
    assert_eq!(result.total_weight_kg, 100.0);
}

#[test]
fn test_feet_and_inches_inputs() {
    // 10 ft = 3.048 m => 6.096 cabinets across
    let request = SizingRequest::new("CRYSTAL 1.9MM", 10.0, 10.0, LengthUnit::Feet);
    let result = calculate(&catalog(), &request).unwrap();
    assert_eq!(result.total_width_pixels, (6.096f64 * 256.0).round() as u32);

    let request = SizingRequest::new("CRYSTAL 1.9MM", 40.0, 40.0, LengthUnit::Inches);
    assert!(calculate(&catalog(), &request).is_ok());
}

#[test]
fn test_synthetic_catalog_injection() {
    let synthetic = PanelCatalog::from_models(vec![PanelModel {
        name: "Test 5MM".to_string(),
        pixel_density: 100.0,
        power_per_cabinet_w: 200.0,
        weight_per_cabinet_kg: 10.0,
        cabinet_size: CabinetSize::new(1000, 1000),
        is_curved: false,
    }])
    .unwrap();

    let request = SizingRequest::new("Test 5MM", 3.0, 2.0, LengthUnit::Meters);
    let result = calculate(&synthetic, &request).unwrap();

    assert_eq!(result.total_width_pixels, 300);
    assert_eq!(result.total_height_pixels, 200);
    assert_eq!(result.total_cabinets, 6);
    assert_eq!(result.total_power_watts, 1200.0);
    assert_eq!(result.total_weight_kg, 60.0);
}

#[test]
fn test_rectangular_rejects_invalid_model() {
    let mut model = PanelModel::default();
    model.cabinet_size = CabinetSize::new(0, 500);
    let err = rectangular(&model, 1.0, 1.0, AspectFormat::Reduced).unwrap_err();
    assert!(matches!(err, SizingError::Panel(_)));
}
