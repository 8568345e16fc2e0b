//! # BOM Calculations
//!
//! Each manifest section has its own calculator module following the
//! same pattern:
//!
//! - `*Result` - Section results (JSON-serializable)
//! - `compute(dims, config, settings) -> Section<*Result>` - checks the
//!   section's feature flag and prerequisites
//! - `calculate(...) -> *Result` - the raw arithmetic, assuming validated input
//!
//! [`bom::compute_bill_of_materials`] validates once up front and then runs
//! every section. After validation nothing can fail: a section whose
//! prerequisites are missing is reported as [`Section::Omitted`] with a
//! [`CompositionWarning`], never as an error.
//!
//! ## Available Sections
//!
//! - [`table`] - 2060 apron rails on 4040 legs
//! - [`enclosure`] - 2020/2040 box frame with span-dependent top rails
//! - [`mounting`] - fixing the enclosure to the table
//! - [`doors`] - door leaves and hinge hardware per active face
//! - [`panels`] - sheet panel cut sizes per face

pub mod bom;
pub mod doors;
pub mod enclosure;
pub mod geometry;
pub mod inputs;
pub mod mounting;
pub mod panels;
pub mod table;
pub mod validation;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use bom::{compute_bill_of_materials, compute_bill_of_materials_with, BillOfMaterialsResult, BomRequest, BomSummary};
pub use doors::{DoorPanel, DoorResult};
pub use enclosure::EnclosureResult;
pub use geometry::{EnclosureFrame, Envelope, ProfileSelection};
pub use inputs::{
    DoorConfiguration, DoorType, Face, MaterialConfiguration, PanelConfig, PanelMount, StructuralDimensions,
    TableConfiguration,
};
pub use mounting::MountingResult;
pub use panels::{PanelCut, PanelResult};
pub use table::TableResult;

/// One optional section of the manifest.
///
/// Distinguishes "the flag was off" from "requested but could not be built"
/// from "built", so a computed all-zero section is never confused with an
/// absent one.
///
/// ## JSON
///
/// ```json
/// { "status": "not_requested" }
/// { "status": "omitted", "data": { "reason": { "kind": "no_door_face_selected" } } }
/// { "status": "computed", "data": { ... } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Section<T> {
    /// Feature flag was off
    NotRequested,
    /// Requested, but a prerequisite section is missing
    Omitted { reason: CompositionWarning },
    /// Section result
    Computed(T),
}

impl<T> Section<T> {
    /// The result, if computed
    pub fn computed(&self) -> Option<&T> {
        match self {
            Section::Computed(result) => Some(result),
            _ => None,
        }
    }

    /// True when the section was built
    pub fn is_computed(&self) -> bool {
        matches!(self, Section::Computed(_))
    }

    /// True unless the feature flag was off
    pub fn is_requested(&self) -> bool {
        !matches!(self, Section::NotRequested)
    }

    /// Short status name, matching the JSON tag
    pub fn status(&self) -> &'static str {
        match self {
            Section::NotRequested => "not_requested",
            Section::Omitted { .. } => "omitted",
            Section::Computed(_) => "computed",
        }
    }
}

/// Advisory, non-fatal notes about how the request was put together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompositionWarning {
    /// Mounting was requested without both a table and an enclosure
    MountingIncomplete { has_table: bool, has_enclosure: bool },
    /// Doors were requested but no door face was flagged
    NoDoorFaceSelected,
    /// Panels were requested but no face was flagged
    NoPanelFaceSelected,
    /// A face carries both a door and a solid panel
    DoorAndPanelOnSameFace { face: Face },
}

impl std::fmt::Display for CompositionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompositionWarning::MountingIncomplete { has_table, has_enclosure } => {
                let missing = match (*has_table, *has_enclosure) {
                    (false, false) => "table and enclosure",
                    (false, true) => "table",
                    _ => "enclosure",
                };
                write!(f, "Mounting skipped: build has no {missing}")
            }
            CompositionWarning::NoDoorFaceSelected => {
                write!(f, "Doors requested but no door face selected")
            }
            CompositionWarning::NoPanelFaceSelected => {
                write!(f, "Panels requested but no face selected")
            }
            CompositionWarning::DoorAndPanelOnSameFace { face } => {
                write!(f, "The {face} face has both a door and a panel")
            }
        }
    }
}
