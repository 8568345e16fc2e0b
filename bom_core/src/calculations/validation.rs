//! Request validation.
//!
//! Runs once before any section is computed and collects every problem
//! instead of stopping at the first. Derived geometry (leg length, cavity,
//! door leaves, panel cuts) is only checked once the raw inputs are sound, since a
//! negative length makes every derived check fail as well.

use super::doors::door_leaf_size;
use super::geometry::{EnclosureFrame, Envelope};
use super::panels::panel_size_mm;
use super::inputs::{Face, MaterialConfiguration, StructuralDimensions, TableConfiguration};
use crate::errors::{CalcError, CalcResult};
use crate::profiles::SERIES_20_FACE_MM;
use crate::settings::FabricationSettings;

/// Validate a request.
///
/// One problem is returned as-is; several come back as
/// [`CalcError::ValidationFailed`].
pub fn validate(
    dims: &StructuralDimensions,
    table: &TableConfiguration,
    material: &MaterialConfiguration,
    settings: &FabricationSettings,
) -> CalcResult<()> {
    let mut issues = input_issues(dims, material);
    if issues.is_empty() {
        issues = derived_issues(dims, table, material, settings);
    }
    match CalcError::from_issues(issues) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Problems with the raw numbers, before any geometry is derived
pub(crate) fn input_issues(dims: &StructuralDimensions, material: &MaterialConfiguration) -> Vec<CalcError> {
    let mut issues = Vec::new();
    for (field, value) in dims.fields() {
        if let Some(err) = positive(field, value) {
            issues.push(err);
        }
    }
    if material.include_panels {
        if let Some(err) = positive("thickness", material.thickness_mm) {
            issues.push(err);
        }
    }
    issues
}

fn positive(field: &str, value: f64) -> Option<CalcError> {
    if !value.is_finite() {
        Some(CalcError::invalid_dimension(field, value.to_string(), "Must be a finite number"))
    } else if value <= 0.0 {
        Some(CalcError::invalid_dimension(field, value.to_string(), "Must be greater than zero"))
    } else {
        None
    }
}

fn derived_issues(
    dims: &StructuralDimensions,
    table: &TableConfiguration,
    material: &MaterialConfiguration,
    settings: &FabricationSettings,
) -> Vec<CalcError> {
    let mut issues = Vec::new();

    if table.include_table && dims.height_mm <= settings.table_foot_offset_mm {
        issues.push(CalcError::invalid_dimension(
            "height",
            dims.height_mm.to_string(),
            format!("Table height must exceed the {} mm foot offset", settings.table_foot_offset_mm),
        ));
    }

    if table.include_enclosure || material.include_panels {
        let frame = EnclosureFrame::resolve(dims, settings);
        let (length, width, height) = frame.cavity_mm();
        let mut cavity_ok = true;
        for (field, raw, cavity) in [
            ("length", dims.length_mm, length),
            ("width", dims.width_mm, width),
            ("height", dims.height_mm, height),
        ] {
            if cavity <= 0.0 {
                cavity_ok = false;
                issues.push(CalcError::invalid_dimension(
                    field,
                    raw.to_string(),
                    format!("Leaves no room inside the frame (cavity {cavity} mm)"),
                ));
            }
        }
        if cavity_ok && material.include_panels {
            issues.extend(panel_issues(dims, &frame, material, settings));
        }
    }

    if table.include_doors {
        let envelope = Envelope::from_dimensions(dims, SERIES_20_FACE_MM);
        let door_type = table.door_config.door_type;
        for face in table.door_config.active_faces() {
            let (face_width, face_height) = envelope.face_size_mm(face);
            let (width, height, _) = door_leaf_size(face_width, face_height, door_type, settings);
            let width_field = if face.spans_length() { "length" } else { "width" };
            for (field, raw, leaf) in [
                (width_field, face_width, width),
                ("height", face_height, height),
            ] {
                if leaf <= 0.0 {
                    issues.push(door_issue(field, raw, face, door_type.code(), leaf));
                }
            }
        }
    }

    issues
}

fn panel_issues(
    dims: &StructuralDimensions,
    frame: &EnclosureFrame,
    material: &MaterialConfiguration,
    settings: &FabricationSettings,
) -> Vec<CalcError> {
    let mut issues = Vec::new();
    for face in material.panel_config.active_faces() {
        let (width, height) = panel_size_mm(frame, face, material, settings);
        let (width_field, height_field) = face_fields(face);
        for (field, cut) in [(width_field, width), (height_field, height)] {
            if cut <= 0.0 {
                issues.push(CalcError::invalid_dimension(
                    field,
                    raw_value(dims, field).to_string(),
                    format!(
                        "Too small for a {} mm panel on the {face} face (cut {cut} mm)",
                        material.thickness_mm
                    ),
                ));
            }
        }
    }
    issues
}

fn raw_value(dims: &StructuralDimensions, field: &str) -> f64 {
    dims.fields()
        .into_iter()
        .find(|(name, _)| *name == field)
        .map_or(f64::NAN, |(_, value)| value)
}

/// Source dimension behind each axis of a face
fn face_fields(face: Face) -> (&'static str, &'static str) {
    match face {
        Face::Top | Face::Bottom => ("length", "width"),
        Face::Front | Face::Back => ("length", "height"),
        Face::Left | Face::Right => ("width", "height"),
    }
}

fn door_issue(field: &str, raw: f64, face: Face, door_type: &str, leaf: f64) -> CalcError {
    CalcError::invalid_dimension(
        field,
        raw.to_string(),
        format!("Too small for a {door_type} door on the {face} face (leaf {leaf} mm)"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::inputs::{DoorConfiguration, DoorType, PanelConfig};

    fn settings() -> FabricationSettings {
        FabricationSettings::default()
    }

    fn everything() -> TableConfiguration {
        TableConfiguration {
            include_table: true,
            include_enclosure: true,
            mount_enclosure_to_table: true,
            include_doors: true,
            door_config: DoorConfiguration::for_faces(&Face::DOOR_FACES, DoorType::Bifold),
        }
    }

    fn panels(thickness_mm: f64) -> MaterialConfiguration {
        MaterialConfiguration {
            thickness_mm,
            include_panels: true,
            panel_config: PanelConfig::all(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_request() {
        let dims = StructuralDimensions::outside(1000.0, 600.0, 900.0);
        assert!(validate(&dims, &everything(), &panels(3.0), &settings()).is_ok());
    }

    #[test]
    fn test_zero_length_rejected() {
        let dims = StructuralDimensions::outside(0.0, 600.0, 900.0);
        let err = validate(&dims, &TableConfiguration::table_only(), &MaterialConfiguration::default(), &settings())
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSION");
        assert_eq!(err.field(), Some("length"));
    }

    #[test]
    fn test_raw_checks_apply_without_sections() {
        let dims = StructuralDimensions::outside(1000.0, -5.0, 900.0);
        let err = validate(&dims, &TableConfiguration::default(), &MaterialConfiguration::default(), &settings())
            .unwrap_err();
        assert_eq!(err.field(), Some("width"));
    }

    #[test]
    fn test_non_finite_rejected() {
        let dims = StructuralDimensions::outside(f64::NAN, 600.0, 900.0);
        let err = validate(&dims, &TableConfiguration::default(), &MaterialConfiguration::default(), &settings())
            .unwrap_err();
        assert_eq!(err.field(), Some("length"));
        assert!(err.to_string().contains("finite"));
    }

    #[test]
    fn test_thickness_only_checked_with_panels() {
        let dims = StructuralDimensions::outside(1000.0, 600.0, 900.0);
        let ignored = MaterialConfiguration {
            thickness_mm: 0.0,
            ..Default::default()
        };
        assert!(validate(&dims, &TableConfiguration::default(), &ignored, &settings()).is_ok());

        let err = validate(&dims, &TableConfiguration::default(), &panels(0.0), &settings()).unwrap_err();
        assert_eq!(err.field(), Some("thickness"));
    }

    #[test]
    fn test_issues_are_collected() {
        let dims = StructuralDimensions::outside(0.0, -1.0, 900.0);
        let err = validate(&dims, &TableConfiguration::default(), &panels(-2.0), &settings()).unwrap_err();
        match err {
            CalcError::ValidationFailed { errors } => {
                let fields: Vec<_> = errors.iter().filter_map(|e| e.field()).collect();
                assert_eq!(fields, vec!["length", "width", "thickness"]);
            }
            other => panic!("expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_table_shorter_than_foot_offset() {
        let dims = StructuralDimensions::outside(1000.0, 600.0, 40.0);
        let err = validate(&dims, &TableConfiguration::table_only(), &MaterialConfiguration::default(), &settings())
            .unwrap_err();
        assert_eq!(err.field(), Some("height"));
        assert!(err.to_string().contains("foot offset"));
    }

    #[test]
    fn test_enclosure_without_cavity() {
        // 30 mm outside leaves -10 mm inside a 20-series frame
        let dims = StructuralDimensions::outside(30.0, 600.0, 900.0);
        let err = validate(&dims, &TableConfiguration::enclosure_only(), &MaterialConfiguration::default(), &settings())
            .unwrap_err();
        assert_eq!(err.field(), Some("length"));

        // inside dimensions always leave a cavity in plan
        let inside = StructuralDimensions::inside(30.0, 30.0, 900.0);
        assert!(validate(&inside, &TableConfiguration::enclosure_only(), &MaterialConfiguration::default(), &settings()).is_ok());
    }

    #[test]
    fn test_enclosure_too_short_for_rails() {
        // a large span needs 60 mm of rail stack
        let dims = StructuralDimensions::outside(1600.0, 600.0, 50.0);
        let err = validate(&dims, &TableConfiguration::enclosure_only(), &MaterialConfiguration::default(), &settings())
            .unwrap_err();
        assert_eq!(err.field(), Some("height"));
    }

    #[test]
    fn test_door_too_small() {
        let dims = StructuralDimensions::outside(1000.0, 10.0, 900.0);
        let config = TableConfiguration {
            include_doors: true,
            door_config: DoorConfiguration::for_faces(&[Face::Left], DoorType::Bifold),
            ..Default::default()
        };
        // 10 / 2 - 6 < 0
        let err = validate(&dims, &config, &MaterialConfiguration::default(), &settings()).unwrap_err();
        assert_eq!(err.field(), Some("width"));
        assert!(err.to_string().contains("left"));
    }

    #[test]
    fn test_in_channel_panel_too_small() {
        // 60 mm outside leaves a 20 mm cavity; a 40 mm sheet takes 2 x 21 mm
        let dims = StructuralDimensions::outside(60.0, 600.0, 900.0);
        let material = MaterialConfiguration {
            thickness_mm: 40.0,
            include_panels: true,
            panel_config: PanelConfig::for_faces(&[Face::Top]),
            ..Default::default()
        };
        let err = validate(&dims, &TableConfiguration::enclosure_only(), &material, &settings()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSION");
        assert_eq!(err.field(), Some("length"));
        assert!(err.to_string().contains("top"));

        // the same sheet on a larger frame is fine
        let roomy = StructuralDimensions::outside(1000.0, 600.0, 900.0);
        assert!(validate(&roomy, &TableConfiguration::enclosure_only(), &material, &settings()).is_ok());
    }

    #[test]
    fn test_derived_checks_skipped_when_inputs_invalid() {
        let dims = StructuralDimensions::outside(-1.0, 600.0, 10.0);
        let err = validate(&dims, &everything(), &MaterialConfiguration::default(), &settings()).unwrap_err();
        // only the raw length problem, not the cascade it would cause
        assert_eq!(err.field(), Some("length"));
    }
}
