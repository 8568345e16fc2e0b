//! # Table Calculation
//!
//! A rectangular bench: 2060 apron rails around the top, a 4040 leg at each
//! corner standing on a foot bracket and levelling foot.
//!
//! ## Assumptions
//!
//! - Rails run the full outer length and width; the corner joint is made
//!   with corner connectors and a triple bracket, not by butting into the leg
//! - Leg length is the outer height less the foot offset
//! - Hardware is a fixed multiple of the four corners, independent of size
//!
//! ## Example
//!
//! ```rust
//! use bom_core::calculations::table;
//! use bom_core::calculations::inputs::StructuralDimensions;
//! use bom_core::settings::FabricationSettings;
//!
//! let dims = StructuralDimensions::outside(1000.0, 600.0, 900.0);
//! let result = table::calculate(&dims, &FabricationSettings::default());
//!
//! assert_eq!(result.rails[0].length_mm, 1000.0);
//! assert_eq!(result.rails[1].length_mm, 600.0);
//! assert_eq!(result.leg_length_mm, 860.0);
//! ```

use serde::{Deserialize, Serialize};

use super::geometry::Envelope;
use super::inputs::{StructuralDimensions, TableConfiguration};
use super::Section;
use crate::cut_list::{ExtrusionSegment, LengthTotals};
use crate::hardware::{HardwareList, HardwarePart};
use crate::profiles::ExtrusionProfile;
use crate::settings::FabricationSettings;

/// Apron rail profile
pub const RAIL_PROFILE: ExtrusionProfile = ExtrusionProfile::P2060;

/// Leg profile
pub const LEG_PROFILE: ExtrusionProfile = ExtrusionProfile::P4040;

/// A table always has four corners
pub const TABLE_CORNERS: u32 = 4;

/// Hardware at one corner of the table
pub const PER_CORNER_HARDWARE: [(HardwarePart, u32); 8] = [
    (HardwarePart::CornerConnector60, 2),
    (HardwarePart::TripleBracket, 1),
    (HardwarePart::SlidingTNut, 10),
    (HardwarePart::CapScrew, 6),
    (HardwarePart::ButtonHeadScrew, 4),
    (HardwarePart::LowProfileScrew, 2),
    (HardwarePart::FootBracket, 1),
    (HardwarePart::LevelingFoot, 1),
];

/// Table section of the manifest.
///
/// ## JSON Example
///
/// ```json
/// {
///   "envelope": { "length_mm": 1000.0, "width_mm": 600.0, "height_mm": 900.0 },
///   "rails": [
///     { "label": "Table rail (length)", "profile": "2060", "length_mm": 1000.0, "quantity": 2 },
///     { "label": "Table rail (width)", "profile": "2060", "length_mm": 600.0, "quantity": 2 }
///   ],
///   "legs": { "label": "Table leg", "profile": "4040", "length_mm": 860.0, "quantity": 4 },
///   "leg_length_mm": 860.0,
///   "hardware": { "CornerConnector60": 8, "TripleBracket": 4, "...": 0 },
///   "total_lengths": { "2060": 3200.0, "4040": 3440.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableResult {
    /// Outer footprint of the table
    pub envelope: Envelope,

    /// Length-axis rails, then width-axis rails
    pub rails: Vec<ExtrusionSegment>,

    /// The four legs
    pub legs: ExtrusionSegment,

    /// Length of one leg (mm)
    pub leg_length_mm: f64,

    /// Corner hardware
    pub hardware: HardwareList,

    /// Stock length per profile (mm)
    pub total_lengths: LengthTotals,
}

impl TableResult {
    /// Every extrusion segment in the section
    pub fn segments(&self) -> impl Iterator<Item = &ExtrusionSegment> {
        self.rails.iter().chain(std::iter::once(&self.legs))
    }
}

/// Fixed hardware for one table
pub fn table_hardware() -> HardwareList {
    PER_CORNER_HARDWARE
        .iter()
        .map(|(part, per_corner)| (*part, per_corner * TABLE_CORNERS))
        .collect()
}

/// Compute the table section if requested
pub fn compute(dims: &StructuralDimensions, config: &TableConfiguration, settings: &FabricationSettings) -> Section<TableResult> {
    if !config.include_table {
        return Section::NotRequested;
    }
    Section::Computed(calculate(dims, settings))
}

/// Table arithmetic. Expects validated input (height above the foot offset).
pub fn calculate(dims: &StructuralDimensions, settings: &FabricationSettings) -> TableResult {
    let envelope = Envelope::from_dimensions(dims, LEG_PROFILE.width_mm());
    let leg_length_mm = envelope.height_mm - settings.table_foot_offset_mm;

    let rails = vec![
        ExtrusionSegment::new("Table rail (length)", RAIL_PROFILE, envelope.length_mm, 2),
        ExtrusionSegment::new("Table rail (width)", RAIL_PROFILE, envelope.width_mm, 2),
    ];
    let legs = ExtrusionSegment::new("Table leg", LEG_PROFILE, leg_length_mm, TABLE_CORNERS);

    let mut total_lengths = LengthTotals::new();
    for segment in rails.iter().chain(std::iter::once(&legs)) {
        total_lengths.add_segment(segment);
    }

    TableResult {
        envelope,
        rails,
        legs,
        leg_length_mm,
        hardware: table_hardware(),
        total_lengths,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> FabricationSettings {
        FabricationSettings::default()
    }

    #[test]
    fn test_reference_table() {
        let dims = StructuralDimensions::outside(1000.0, 600.0, 900.0);
        let result = calculate(&dims, &settings());

        assert_eq!(result.rails.len(), 2);
        assert_eq!(result.rails[0].profile, ExtrusionProfile::P2060);
        assert_eq!(result.rails[0].length_mm, 1000.0);
        assert_eq!(result.rails[0].quantity, 2);
        assert_eq!(result.rails[1].length_mm, 600.0);

        assert_eq!(result.legs.profile, ExtrusionProfile::P4040);
        assert_eq!(result.legs.quantity, 4);
        assert_eq!(result.legs.length_mm, 900.0 - settings().table_foot_offset_mm);

        assert_eq!(result.total_lengths.get(ExtrusionProfile::P2060), 3200.0);
        assert_eq!(result.total_lengths.get(ExtrusionProfile::P4040), 4.0 * 860.0);
    }

    #[test]
    fn test_leg_length_tracks_height() {
        for height in [300.0, 750.0, 1234.5] {
            let result = calculate(&StructuralDimensions::outside(800.0, 500.0, height), &settings());
            assert_eq!(result.leg_length_mm, height - 40.0);
        }
    }

    #[test]
    fn test_custom_foot_offset() {
        let custom = FabricationSettings {
            table_foot_offset_mm: 65.0,
            ..FabricationSettings::default()
        };
        let result = calculate(&StructuralDimensions::outside(800.0, 500.0, 765.0), &custom);
        assert_eq!(result.leg_length_mm, 700.0);
    }

    #[test]
    fn test_inside_dimensions_add_leg_width() {
        let result = calculate(&StructuralDimensions::inside(920.0, 520.0, 900.0), &settings());
        assert_eq!(result.rails[0].length_mm, 1000.0);
        assert_eq!(result.rails[1].length_mm, 600.0);
    }

    #[test]
    fn test_hardware_is_fixed() {
        let small = calculate(&StructuralDimensions::outside(400.0, 400.0, 500.0), &settings());
        let large = calculate(&StructuralDimensions::outside(3000.0, 1200.0, 1100.0), &settings());
        assert_eq!(small.hardware, large.hardware);

        let hw = &small.hardware;
        assert_eq!(hw.get(HardwarePart::CornerConnector60), 8);
        assert_eq!(hw.get(HardwarePart::TripleBracket), 4);
        assert_eq!(hw.get(HardwarePart::SlidingTNut), 40);
        assert_eq!(hw.get(HardwarePart::CapScrew), 24);
        assert_eq!(hw.get(HardwarePart::ButtonHeadScrew), 16);
        assert_eq!(hw.get(HardwarePart::LowProfileScrew), 8);
        assert_eq!(hw.get(HardwarePart::FootBracket), 4);
        assert_eq!(hw.get(HardwarePart::LevelingFoot), 4);
    }

    #[test]
    fn test_compute_respects_flag() {
        let dims = StructuralDimensions::outside(1000.0, 600.0, 900.0);
        let off = compute(&dims, &TableConfiguration::default(), &settings());
        assert_eq!(off, Section::NotRequested);

        let on = compute(&dims, &TableConfiguration::table_only(), &settings());
        assert!(on.is_computed());
        assert_eq!(on.computed().unwrap().segments().count(), 3);
    }
}
