//! Frame geometry shared by the section calculators.
//!
//! ## Envelope
//!
//! Users give either the outer frame size or the inner cavity they need.
//! [`Envelope::from_dimensions`] turns either into the outer envelope by
//! adding one frame member on each side when the input is a cavity. Height
//! is always the full outer height.
//!
//! ## Profile Selection
//!
//! Long spans sag, so at or above the threshold the enclosure's top rails
//! step up to 2040. The bottom rails sit on the table or floor and stay
//! 2020, and the verticals are in compression and stay 2020 at any size:
//!
//! | span            | top  | bottom | vertical |
//! |-----------------|------|--------|----------|
//! | < threshold     | 2020 | 2020   | 2020     |
//! | >= threshold    | 2040 | 2020   | 2020     |

use serde::{Deserialize, Serialize};

use super::inputs::{Face, StructuralDimensions};
use crate::profiles::{ExtrusionProfile, SERIES_20_FACE_MM};
use crate::settings::FabricationSettings;

/// Outer frame size (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub length_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
}

impl Envelope {
    /// Normalize dimensions to the outer envelope for a frame whose members
    /// are `frame_width_mm` wide in plan
    pub fn from_dimensions(dims: &StructuralDimensions, frame_width_mm: f64) -> Self {
        let grow = if dims.is_outside_dimension { 0.0 } else { 2.0 * frame_width_mm };
        Envelope {
            length_mm: dims.length_mm + grow,
            width_mm: dims.width_mm + grow,
            height_mm: dims.height_mm,
        }
    }

    /// Longest horizontal span
    pub fn span_mm(&self) -> f64 {
        self.length_mm.max(self.width_mm)
    }

    /// Outer (width, height) of a face. Top/bottom faces report
    /// (length, width).
    pub fn face_size_mm(&self, face: Face) -> (f64, f64) {
        match face {
            Face::Top | Face::Bottom => (self.length_mm, self.width_mm),
            Face::Front | Face::Back => (self.length_mm, self.height_mm),
            Face::Left | Face::Right => (self.width_mm, self.height_mm),
        }
    }
}

/// Profiles chosen for each rail group of the enclosure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSelection {
    pub top: ExtrusionProfile,
    pub bottom: ExtrusionProfile,
    pub vertical: ExtrusionProfile,
}

impl ProfileSelection {
    /// Apply the span rule to an envelope
    pub fn for_envelope(envelope: &Envelope, settings: &FabricationSettings) -> Self {
        let top = if envelope.span_mm() >= settings.large_span_threshold_mm {
            ExtrusionProfile::P2040
        } else {
            ExtrusionProfile::P2020
        };
        ProfileSelection {
            top,
            bottom: ExtrusionProfile::P2020,
            vertical: ExtrusionProfile::P2020,
        }
    }

    /// True when the top rails differ from the rest of the frame
    pub fn is_mixed(&self) -> bool {
        self.top != self.bottom
    }

    /// Height consumed by the top and bottom rails together
    pub fn rail_stack_height_mm(&self) -> f64 {
        self.top.height_mm() + self.bottom.height_mm()
    }
}

/// Enclosure frame: envelope, profile choice and derived cavity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnclosureFrame {
    pub envelope: Envelope,
    pub profiles: ProfileSelection,
}

impl EnclosureFrame {
    /// Resolve the enclosure frame for a request
    pub fn resolve(dims: &StructuralDimensions, settings: &FabricationSettings) -> Self {
        let envelope = Envelope::from_dimensions(dims, SERIES_20_FACE_MM);
        let profiles = ProfileSelection::for_envelope(&envelope, settings);
        EnclosureFrame { envelope, profiles }
    }

    /// Length of each vertical post
    pub fn vertical_length_mm(&self) -> f64 {
        self.envelope.height_mm - self.profiles.rail_stack_height_mm()
    }

    /// Width rails fit between the length rails
    pub fn width_rail_length_mm(&self) -> f64 {
        self.envelope.width_mm - 2.0 * SERIES_20_FACE_MM
    }

    /// Inner cavity (length, width, height)
    pub fn cavity_mm(&self) -> (f64, f64, f64) {
        (
            self.envelope.length_mm - 2.0 * SERIES_20_FACE_MM,
            self.envelope.width_mm - 2.0 * SERIES_20_FACE_MM,
            self.vertical_length_mm(),
        )
    }

    /// Cavity opening (width, height) seen through a face. Top/bottom
    /// report (length, width).
    pub fn face_opening_mm(&self, face: Face) -> (f64, f64) {
        let (length, width, height) = self.cavity_mm();
        match face {
            Face::Top | Face::Bottom => (length, width),
            Face::Front | Face::Back => (length, height),
            Face::Left | Face::Right => (width, height),
        }
    }
}
