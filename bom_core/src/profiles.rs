//! Standard Extrusion Profiles
//!
//! V-slot / T-slot aluminium extrusion designations used for framing.
//! The designation is the cross-section in millimetres: a 2040 is 20 mm
//! wide and 40 mm tall.
//!
//! ## Orientation
//!
//! Horizontal rails are mounted with the long side vertical, so a 2040 top
//! rail adds 40 mm to the frame height but only 20 mm to the footprint.
//! That is why the enclosure footprint grows by the same amount whatever
//! top profile the size rule picks.

use serde::{Deserialize, Serialize};

/// Width of the 20-series slot face every enclosure rail presents to the
/// footprint (mm)
pub const SERIES_20_FACE_MM: f64 = 20.0;

/// Extrusion profile designation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExtrusionProfile {
    /// 20 x 20 mm, the general-purpose enclosure profile
    #[serde(rename = "2020")]
    P2020,
    /// 20 x 40 mm, stiffer top rails on long spans
    #[serde(rename = "2040")]
    P2040,
    /// 20 x 60 mm, table apron rails
    #[serde(rename = "2060")]
    P2060,
    /// 40 x 40 mm, table legs
    #[serde(rename = "4040")]
    P4040,
}

impl ExtrusionProfile {
    /// All catalog profiles, smallest first
    pub const ALL: [ExtrusionProfile; 4] = [
        ExtrusionProfile::P2020,
        ExtrusionProfile::P2040,
        ExtrusionProfile::P2060,
        ExtrusionProfile::P4040,
    ];

    /// Profiles the enclosure can select between
    pub const ENCLOSURE: [ExtrusionProfile; 2] = [ExtrusionProfile::P2020, ExtrusionProfile::P2040];

    /// Cross-section (width, height) in mm
    pub fn cross_section_mm(&self) -> (f64, f64) {
        match self {
            ExtrusionProfile::P2020 => (20.0, 20.0),
            ExtrusionProfile::P2040 => (20.0, 40.0),
            ExtrusionProfile::P2060 => (20.0, 60.0),
            ExtrusionProfile::P4040 => (40.0, 40.0),
        }
    }

    /// Face width in mm (the narrow side)
    pub fn width_mm(&self) -> f64 {
        self.cross_section_mm().0
    }

    /// Height in mm when mounted as a horizontal rail (the tall side)
    pub fn height_mm(&self) -> f64 {
        self.cross_section_mm().1
    }

    /// Designation as printed on stock ("2020", "2040", ...)
    pub fn designation(&self) -> &'static str {
        match self {
            ExtrusionProfile::P2020 => "2020",
            ExtrusionProfile::P2040 => "2040",
            ExtrusionProfile::P2060 => "2060",
            ExtrusionProfile::P4040 => "4040",
        }
    }

    /// Number of T-slots around the perimeter
    pub fn slot_count(&self) -> u32 {
        match self {
            ExtrusionProfile::P2020 => 4,
            ExtrusionProfile::P2040 => 6,
            ExtrusionProfile::P2060 => 8,
            ExtrusionProfile::P4040 => 8,
        }
    }

    /// Parse a designation, accepting an optional "P" prefix
    pub fn from_designation(designation: &str) -> Option<Self> {
        let trimmed = designation.trim().trim_start_matches(['P', 'p']);
        Self::ALL.iter().copied().find(|p| p.designation() == trimmed)
    }
}

impl std::fmt::Display for ExtrusionProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.designation())
    }
}
