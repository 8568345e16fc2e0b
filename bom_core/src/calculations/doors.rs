//! # Door Calculation
//!
//! One door per flagged face (front, back, left, right). Door leaves are
//! sized from the outer face of the enclosure envelope:
//!
//! | type     | leaf width            | leaf height           | leaves |
//! |----------|-----------------------|-----------------------|--------|
//! | STANDARD | w - standard clearance | h - standard clearance | 1 |
//! | BIFOLD   | w / 2 - bifold clearance | h - bifold clearance | 2 |
//! | AWNING   | w - standard clearance | h - hinge allowance  | 1 |
//!
//! A bi-fold face is reported as a single [`DoorPanel`] entry with
//! `leaves: 2`; `width_mm` is the size of one leaf.
//!
//! Hardware is a per-door kit multiplied by the number of active doors, so
//! `include_doors` with no faces flagged yields the kit at zero quantities
//! and an empty panel list.

use serde::{Deserialize, Serialize};

use super::geometry::Envelope;
use super::inputs::{DoorType, Face, StructuralDimensions, TableConfiguration};
use super::{CompositionWarning, Section};
use crate::hardware::{HardwareList, HardwarePart};
use crate::profiles::SERIES_20_FACE_MM;
use crate::settings::FabricationSettings;

/// A cut door leaf (or matching pair of leaves)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorPanel {
    /// Face the door hangs on
    pub face: Face,

    /// Door style
    pub door_type: DoorType,

    /// Width of one leaf (mm)
    pub width_mm: f64,

    /// Height of one leaf (mm)
    pub height_mm: f64,

    /// Number of identical leaves to cut
    pub leaves: u32,

    /// Fitting note
    pub note: String,
}

impl DoorPanel {
    /// Sheet area of all leaves (mm²)
    pub fn area_mm2(&self) -> f64 {
        self.width_mm * self.height_mm * self.leaves as f64
    }
}

/// Doors section of the manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorResult {
    /// Door style applied to every door
    pub door_type: DoorType,

    /// Number of faces with a door
    pub active_doors: u32,

    /// One entry per door face, in front/back/left/right order
    pub panels: Vec<DoorPanel>,

    /// Hinges, handles and fasteners for all doors
    pub hardware: HardwareList,

    /// Sheet area of all leaves (mm²)
    pub total_area_mm2: f64,
}

/// Hardware kit for one door of the given type
pub fn per_door_hardware(door_type: DoorType) -> HardwareList {
    let kit: &[(HardwarePart, u32)] = match door_type {
        DoorType::Standard => &[
            (HardwarePart::Hinge, 2),
            (HardwarePart::Handle, 1),
            (HardwarePart::SlidingTNut, 4),
            (HardwarePart::ButtonHeadScrew, 8),
            (HardwarePart::CornerBracket, 4),
            (HardwarePart::SpringTNut, 2),
        ],
        // two frame hinges plus two between the leaves
        DoorType::Bifold => &[
            (HardwarePart::Hinge, 4),
            (HardwarePart::Handle, 1),
            (HardwarePart::SlidingTNut, 4),
            (HardwarePart::ButtonHeadScrew, 16),
            (HardwarePart::CornerBracket, 8),
            (HardwarePart::SpringTNut, 2),
        ],
        DoorType::Awning => &[
            (HardwarePart::Hinge, 2),
            (HardwarePart::Handle, 1),
            (HardwarePart::SlidingTNut, 4),
            (HardwarePart::ButtonHeadScrew, 12),
            (HardwarePart::CornerBracket, 4),
            (HardwarePart::SpringTNut, 4),
            (HardwarePart::LidStay, 2),
        ],
    };
    kit.iter().copied().collect()
}

/// Leaf (width, height) and leaf count for a face of the given outer size
pub fn door_leaf_size(
    face_width_mm: f64,
    face_height_mm: f64,
    door_type: DoorType,
    settings: &FabricationSettings,
) -> (f64, f64, u32) {
    match door_type {
        DoorType::Standard => (
            face_width_mm - settings.standard_door_clearance_mm,
            face_height_mm - settings.standard_door_clearance_mm,
            1,
        ),
        DoorType::Bifold => (
            face_width_mm / 2.0 - settings.bifold_door_clearance_mm,
            face_height_mm - settings.bifold_door_clearance_mm,
            2,
        ),
        DoorType::Awning => (
            face_width_mm - settings.standard_door_clearance_mm,
            face_height_mm - settings.awning_hinge_clearance_mm,
            1,
        ),
    }
}

/// Compute the doors section if requested
pub fn compute(dims: &StructuralDimensions, config: &TableConfiguration, settings: &FabricationSettings) -> Section<DoorResult> {
    if !config.include_doors {
        return Section::NotRequested;
    }
    Section::Computed(calculate(dims, config, settings))
}

/// Door arithmetic. Expects validated input (every active leaf positive).
pub fn calculate(dims: &StructuralDimensions, config: &TableConfiguration, settings: &FabricationSettings) -> DoorResult {
    let envelope = Envelope::from_dimensions(dims, SERIES_20_FACE_MM);
    let door_config = &config.door_config;
    let door_type = door_config.door_type;

    let panels: Vec<DoorPanel> = door_config
        .active_faces()
        .into_iter()
        .map(|face| {
            let (face_width, face_height) = envelope.face_size_mm(face);
            let (width_mm, height_mm, leaves) = door_leaf_size(face_width, face_height, door_type, settings);
            DoorPanel {
                face,
                door_type,
                width_mm,
                height_mm,
                leaves,
                note: door_note(door_type, settings),
            }
        })
        .collect();

    let active_doors = panels.len() as u32;
    let total_area_mm2 = panels.iter().map(DoorPanel::area_mm2).sum();

    DoorResult {
        door_type,
        active_doors,
        panels,
        hardware: per_door_hardware(door_type).scaled(active_doors),
        total_area_mm2,
    }
}

/// Advisory warnings for the doors section
pub fn warnings(config: &TableConfiguration) -> Vec<CompositionWarning> {
    if config.include_doors && config.door_config.active_faces().is_empty() {
        vec![CompositionWarning::NoDoorFaceSelected]
    } else {
        Vec::new()
    }
}

fn door_note(door_type: DoorType, settings: &FabricationSettings) -> String {
    match door_type {
        DoorType::Standard => format!(
            "Side-hinged, {} mm clearance on each dimension",
            settings.standard_door_clearance_mm
        ),
        DoorType::Bifold => format!(
            "Split bi-fold, 2 leaves, {} mm clearance per leaf",
            settings.bifold_door_clearance_mm
        ),
        DoorType::Awning => format!(
            "Top-hinged, {} mm hinge allowance at the top",
            settings.awning_hinge_clearance_mm
        ),
    }
}
