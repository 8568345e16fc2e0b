//! # Enclosure Calculation
//!
//! A rectangular box frame: four top rails, four bottom rails and four
//! vertical posts. The top rail profile depends on the span (see
//! [`geometry`](super::geometry)); bottom rails and posts are always 2020.
//!
//! ## Cuts
//!
//! - Length rails run the full outer length
//! - Width rails fit between the length rails (outer width - 2 x 20)
//! - Posts fill the height between the bottom and top rails
//!
//! ## Corner Hardware
//!
//! | frame    | 20-series | 40-series | 20/40 mixed |
//! |----------|-----------|-----------|-------------|
//! | all 2020 | 16        | 0         | 0           |
//! | 2040 top | 8         | 4         | 8           |
//!
//! All three connector types are listed in both cases. Angle corners,
//! T-nuts and screws are a fixed count regardless of size.
//!
//! ## Example
//!
//! ```rust
//! use bom_core::calculations::enclosure;
//! use bom_core::calculations::inputs::StructuralDimensions;
//! use bom_core::profiles::ExtrusionProfile;
//! use bom_core::settings::FabricationSettings;
//!
//! let dims = StructuralDimensions::outside(1600.0, 600.0, 900.0);
//! let result = enclosure::calculate(&dims, &FabricationSettings::default());
//!
//! assert_eq!(result.profiles.top, ExtrusionProfile::P2040);
//! assert_eq!(result.top.get(ExtrusionProfile::P2020), 0.0);
//! assert_eq!(result.vertical.get(ExtrusionProfile::P2020), 4.0 * 840.0);
//! ```

use serde::{Deserialize, Serialize};

use super::geometry::{EnclosureFrame, Envelope, ProfileSelection};
use super::inputs::{StructuralDimensions, TableConfiguration};
use super::Section;
use crate::cut_list::{ExtrusionSegment, LengthTotals};
use crate::hardware::{HardwareList, HardwarePart};
use crate::profiles::ExtrusionProfile;
use crate::settings::FabricationSettings;

/// Corners of a box frame
pub const FRAME_CORNERS: u32 = 8;

/// Size-independent enclosure hardware
pub const FIXED_HARDWARE: [(HardwarePart, u32); 3] = [
    (HardwarePart::AngleCorner, 8),
    (HardwarePart::SlidingTNut, 48),
    (HardwarePart::ButtonHeadScrew, 48),
];

/// Enclosure section of the manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnclosureResult {
    /// Outer frame size after inside/outside normalization
    pub envelope: Envelope,

    /// Profiles chosen by the span rule
    pub profiles: ProfileSelection,

    /// Top rails: length pair, then width pair
    pub top_rails: Vec<ExtrusionSegment>,

    /// Bottom rails: length pair, then width pair
    pub bottom_rails: Vec<ExtrusionSegment>,

    /// The four posts
    pub verticals: ExtrusionSegment,

    /// Top rail length per profile (2020 and 2040 always present)
    pub top: LengthTotals,

    /// Bottom rail length per profile (2020 and 2040 always present)
    pub bottom: LengthTotals,

    /// Post length per profile (2020 and 2040 always present)
    pub vertical: LengthTotals,

    /// Sum of top, bottom and vertical
    pub totals: LengthTotals,

    /// Corner connectors and fasteners
    pub hardware: HardwareList,
}

impl EnclosureResult {
    /// Every extrusion segment in the section
    pub fn segments(&self) -> impl Iterator<Item = &ExtrusionSegment> {
        self.top_rails
            .iter()
            .chain(self.bottom_rails.iter())
            .chain(std::iter::once(&self.verticals))
    }
}

/// Compute the enclosure section if requested
pub fn compute(
    dims: &StructuralDimensions,
    config: &TableConfiguration,
    settings: &FabricationSettings,
) -> Section<EnclosureResult> {
    if !config.include_enclosure {
        return Section::NotRequested;
    }
    Section::Computed(calculate(dims, settings))
}

/// Enclosure arithmetic. Expects validated input (positive cavity).
pub fn calculate(dims: &StructuralDimensions, settings: &FabricationSettings) -> EnclosureResult {
    let frame = EnclosureFrame::resolve(dims, settings);
    let profiles = frame.profiles;
    tracing::debug!(
        span_mm = frame.envelope.span_mm(),
        top = %profiles.top,
        "enclosure profile selection"
    );

    let top_rails = rail_pair("Top rail", profiles.top, &frame);
    let bottom_rails = rail_pair("Bottom rail", profiles.bottom, &frame);
    let verticals = ExtrusionSegment::new("Vertical post", profiles.vertical, frame.vertical_length_mm(), 4);

    let top = bucket(&top_rails);
    let bottom = bucket(&bottom_rails);
    let vertical = bucket(std::slice::from_ref(&verticals));

    let mut totals = LengthTotals::seeded(&ExtrusionProfile::ENCLOSURE);
    totals.merge(&top);
    totals.merge(&bottom);
    totals.merge(&vertical);

    EnclosureResult {
        envelope: frame.envelope,
        profiles,
        top_rails,
        bottom_rails,
        verticals,
        top,
        bottom,
        vertical,
        totals,
        hardware: enclosure_hardware(&profiles),
    }
}

/// Corner connectors for a profile combination plus the fixed fasteners
pub fn enclosure_hardware(profiles: &ProfileSelection) -> HardwareList {
    // Two connectors per corner: one for each horizontal meeting the post.
    let (cc20, cc40, cc60) = if profiles.is_mixed() {
        // Bottom corners stay 20-series; each top corner has one 2040-to-2040
        // rail joint and two posts entering a 40 mm face.
        (FRAME_CORNERS, 4, FRAME_CORNERS)
    } else {
        (FRAME_CORNERS * 2, 0, 0)
    };

    let mut hardware = HardwareList::new()
        .with(HardwarePart::CornerConnector20, cc20)
        .with(HardwarePart::CornerConnector40, cc40)
        .with(HardwarePart::CornerConnector60, cc60);
    for (part, qty) in FIXED_HARDWARE {
        hardware.add(part, qty);
    }
    hardware
}

fn rail_pair(prefix: &str, profile: ExtrusionProfile, frame: &EnclosureFrame) -> Vec<ExtrusionSegment> {
    vec![
        ExtrusionSegment::new(format!("{prefix} (length)"), profile, frame.envelope.length_mm, 2),
        ExtrusionSegment::new(format!("{prefix} (width)"), profile, frame.width_rail_length_mm(), 2),
    ]
}

fn bucket(segments: &[ExtrusionSegment]) -> LengthTotals {
    let mut totals = LengthTotals::seeded(&ExtrusionProfile::ENCLOSURE);
    for segment in segments {
        totals.add_segment(segment);
    }
    totals
}
