//! # Mounting Calculation
//!
//! Fixes the enclosure's bottom frame onto the table's apron rails. Needs
//! both a table and an enclosure; if either is missing the section is
//! omitted with a [`CompositionWarning::MountingIncomplete`].

use serde::{Deserialize, Serialize};

use super::inputs::TableConfiguration;
use super::{CompositionWarning, Section};
use crate::hardware::{HardwareList, HardwarePart};
use crate::profiles::ExtrusionProfile;

/// Enclosure bottom corners fixed to the table
pub const MOUNT_POINTS: u32 = 4;

/// Mounting section of the manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountingResult {
    /// Connectors and fasteners
    pub hardware: HardwareList,

    /// Assembly note
    pub instructions: String,
}

/// Compute the mounting section if requested
pub fn compute(config: &TableConfiguration) -> Section<MountingResult> {
    if !config.mount_enclosure_to_table {
        return Section::NotRequested;
    }
    if !(config.include_table && config.include_enclosure) {
        return Section::Omitted {
            reason: CompositionWarning::MountingIncomplete {
                has_table: config.include_table,
                has_enclosure: config.include_enclosure,
            },
        };
    }
    Section::Computed(calculate())
}

/// Mounting hardware and instructions (fixed, size-independent)
pub fn calculate() -> MountingResult {
    let connectors = MOUNT_POINTS * 2;
    let fasteners = connectors * 2;
    let hardware = HardwareList::new()
        .with(HardwarePart::CornerConnector40, connectors)
        .with(HardwarePart::SlidingTNut, fasteners)
        .with(HardwarePart::CapScrew, fasteners);

    let instructions = format!(
        "Set the enclosure on the table so its {bottom} bottom rails sit flush on the {rail} apron rails. \
         At each of the {MOUNT_POINTS} bottom corners fit two 40-series corner connectors, one per rail \
         direction ({connectors} total), fixed with sliding T-nuts and cap screws into the top slot of \
         the {rail} rail ({fasteners} of each).",
        bottom = ExtrusionProfile::P2020,
        rail = ExtrusionProfile::P2060,
    );

    MountingResult { hardware, instructions }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(table: bool, enclosure: bool) -> TableConfiguration {
        TableConfiguration {
            include_table: table,
            include_enclosure: enclosure,
            mount_enclosure_to_table: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_mounting_hardware() {
        let section = compute(&config(true, true));
        let result = section.computed().unwrap();
        assert_eq!(result.hardware.get(HardwarePart::CornerConnector40), 8);
        assert_eq!(result.hardware.get(HardwarePart::SlidingTNut), 16);
        assert_eq!(result.hardware.get(HardwarePart::CapScrew), 16);
        assert!(result.instructions.contains("2060"));
        assert!(result.instructions.contains("8 total"));
    }

    #[test]
    fn test_not_requested() {
        let mut cfg = config(true, true);
        cfg.mount_enclosure_to_table = false;
        assert_eq!(compute(&cfg), Section::NotRequested);
    }

    #[test]
    fn test_missing_prerequisite_is_omitted() {
        assert_eq!(
            compute(&config(true, false)),
            Section::Omitted {
                reason: CompositionWarning::MountingIncomplete {
                    has_table: true,
                    has_enclosure: false
                }
            }
        );
        assert!(matches!(compute(&config(false, false)), Section::Omitted { .. }));
        assert!(matches!(compute(&config(false, true)), Section::Omitted { .. }));
    }
}
