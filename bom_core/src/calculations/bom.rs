//! # Bill of Materials
//!
//! The aggregator: validate the request once, run each section according to
//! its flag, then build a summary across everything that was computed.
//!
//! ## Example
//!
//! ```rust
//! use bom_core::calculations::inputs::{MaterialConfiguration, StructuralDimensions, TableConfiguration};
//! use bom_core::calculations::bom::compute_bill_of_materials;
//! use bom_core::hardware::HardwarePart;
//!
//! let dims = StructuralDimensions::outside(1000.0, 600.0, 900.0);
//! let bom = compute_bill_of_materials(&dims, &TableConfiguration::table_only(), &MaterialConfiguration::default())
//!     .unwrap();
//!
//! assert!(bom.table.is_computed());
//! assert!(!bom.enclosure.is_requested());
//! assert_eq!(bom.summary.hardware.get(HardwarePart::LevelingFoot), 4);
//! ```

use serde::{Deserialize, Serialize};

use super::inputs::{DoorType, MaterialConfiguration, StructuralDimensions, TableConfiguration};
use super::{doors, enclosure, mounting, panels, table, validation};
use super::{CompositionWarning, DoorResult, EnclosureResult, MountingResult, PanelResult, Section, TableResult};
use crate::cut_list::{CutList, LengthTotals};
use crate::errors::{CalcError, CalcResult};
use crate::hardware::HardwareList;
use crate::settings::{self, FabricationSettings};

/// A complete, self-contained calculation request.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Printer enclosure",
///   "dimensions": { "length_mm": 1000.0, "width_mm": 600.0, "height_mm": 900.0, "is_outside_dimension": true },
///   "table": { "include_enclosure": true, "include_doors": true,
///              "door_config": { "front_door": true, "door_type": "BIFOLD" } },
///   "material": { "material_type": "acrylic", "thickness_mm": 3.0, "include_panels": true,
///                 "panel_config": { "top": true, "left": true, "right": true, "back": true } }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomRequest {
    /// Human-readable name for the build
    #[serde(default)]
    pub label: String,

    pub dimensions: StructuralDimensions,

    #[serde(default)]
    pub table: TableConfiguration,

    #[serde(default)]
    pub material: MaterialConfiguration,
}

impl BomRequest {
    /// Create a request
    pub fn new(
        label: impl Into<String>,
        dimensions: StructuralDimensions,
        table: TableConfiguration,
        material: MaterialConfiguration,
    ) -> Self {
        BomRequest {
            label: label.into(),
            dimensions,
            table,
            material,
        }
    }

    /// Parse a request from JSON.
    ///
    /// The door type is accepted in any case and with "-"/"_" separators. An
    /// unknown door type is reported as [`CalcError::InvalidDoorType`] rather
    /// than a generic deserialization error, together with any bad dimension
    /// or thickness in the same request.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let mut value: serde_json::Value = serde_json::from_str(json).map_err(CalcError::serialization)?;

        let mut door_issue = None;
        if let Some(door_type) = value.pointer_mut("/table/door_config/door_type") {
            if let Some(raw) = door_type.as_str() {
                let parsed = match raw.parse::<DoorType>() {
                    Ok(parsed) => parsed,
                    Err(err) => {
                        door_issue = Some(err);
                        DoorType::default()
                    }
                };
                *door_type = serde_json::Value::String(parsed.code().to_string());
            }
        }

        let request: BomRequest = serde_json::from_value(value).map_err(CalcError::serialization)?;
        if let Some(err) = door_issue {
            let mut issues = validation::input_issues(&request.dimensions, &request.material);
            if issues.is_empty() {
                return Err(err);
            }
            issues.push(err);
            return Err(CalcError::ValidationFailed { errors: issues });
        }
        Ok(request)
    }

    /// Compute with the process-wide settings
    pub fn compute(&self) -> CalcResult<BillOfMaterialsResult> {
        self.compute_with(settings::global())
    }

    /// Compute with explicit settings
    pub fn compute_with(&self, settings: &FabricationSettings) -> CalcResult<BillOfMaterialsResult> {
        compute_bill_of_materials_with(&self.dimensions, &self.table, &self.material, settings)
    }
}

/// Totals across every computed section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BomSummary {
    /// Identical cuts merged across sections
    pub cut_list: CutList,

    /// Stock length needed per profile (mm)
    pub extrusion_totals: LengthTotals,

    /// All hardware, merged
    pub hardware: HardwareList,

    /// Panels plus door leaves (mm²)
    pub sheet_area_mm2: f64,
}

/// The full manifest.
///
/// Sections whose flag was off are [`Section::NotRequested`]; they are never
/// zero-filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillOfMaterialsResult {
    pub table: Section<TableResult>,
    pub enclosure: Section<EnclosureResult>,
    pub mounting: Section<MountingResult>,
    pub doors: Section<DoorResult>,
    pub panels: Section<PanelResult>,
    pub summary: BomSummary,
    pub warnings: Vec<CompositionWarning>,
}

impl BillOfMaterialsResult {
    /// Names of the sections that were computed
    pub fn computed_sections(&self) -> Vec<&'static str> {
        [
            ("table", self.table.is_computed()),
            ("enclosure", self.enclosure.is_computed()),
            ("mounting", self.mounting.is_computed()),
            ("doors", self.doors.is_computed()),
            ("panels", self.panels.is_computed()),
        ]
        .into_iter()
        .filter_map(|(name, computed)| computed.then_some(name))
        .collect()
    }
}

/// Compute a bill of materials with the process-wide settings
pub fn compute_bill_of_materials(
    dims: &StructuralDimensions,
    table_config: &TableConfiguration,
    material_config: &MaterialConfiguration,
) -> CalcResult<BillOfMaterialsResult> {
    compute_bill_of_materials_with(dims, table_config, material_config, settings::global())
}

/// Compute a bill of materials with explicit settings.
///
/// Validation runs first and rejects the whole request on any problem; no
/// partial manifest is returned.
#[tracing::instrument(
    skip_all,
    fields(
        length_mm = dims.length_mm,
        width_mm = dims.width_mm,
        height_mm = dims.height_mm,
        outside = dims.is_outside_dimension
    )
)]
pub fn compute_bill_of_materials_with(
    dims: &StructuralDimensions,
    table_config: &TableConfiguration,
    material_config: &MaterialConfiguration,
    settings: &FabricationSettings,
) -> CalcResult<BillOfMaterialsResult> {
    validation::validate(dims, table_config, material_config, settings)?;

    let table = table::compute(dims, table_config, settings);
    let enclosure = enclosure::compute(dims, table_config, settings);
    let mounting = mounting::compute(table_config);
    let doors = doors::compute(dims, table_config, settings);
    let panels = panels::compute(dims, material_config, settings);

    let mut warnings = Vec::new();
    if let Section::Omitted { reason } = &mounting {
        warnings.push(*reason);
    }
    warnings.extend(doors::warnings(table_config));
    warnings.extend(panels::warnings(material_config, table_config));
    for warning in &warnings {
        tracing::warn!(%warning, "composition warning");
    }

    let summary = summarize(&table, &enclosure, &mounting, &doors, &panels);

    let result = BillOfMaterialsResult {
        table,
        enclosure,
        mounting,
        doors,
        panels,
        summary,
        warnings,
    };
    tracing::debug!(sections = ?result.computed_sections(), "bill of materials computed");
    Ok(result)
}

fn summarize(
    table: &Section<TableResult>,
    enclosure: &Section<EnclosureResult>,
    mounting: &Section<MountingResult>,
    doors: &Section<DoorResult>,
    panels: &Section<PanelResult>,
) -> BomSummary {
    let segments = table
        .computed()
        .into_iter()
        .flat_map(|t| t.segments())
        .chain(enclosure.computed().into_iter().flat_map(|e| e.segments()));
    let cut_list = CutList::from_segments(segments);
    let extrusion_totals = cut_list.totals.clone();

    let mut hardware = HardwareList::new();
    for section_hardware in [
        table.computed().map(|t| &t.hardware),
        enclosure.computed().map(|e| &e.hardware),
        mounting.computed().map(|m| &m.hardware),
        doors.computed().map(|d| &d.hardware),
    ]
    .into_iter()
    .flatten()
    {
        hardware.merge(section_hardware);
    }

    let sheet_area_mm2 = panels.computed().map_or(0.0, |p| p.total_area_mm2)
        + doors.computed().map_or(0.0, |d| d.total_area_mm2);

    BomSummary {
        cut_list,
        extrusion_totals,
        hardware,
        sheet_area_mm2,
    }
}
