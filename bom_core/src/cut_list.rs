//! # Extrusion Segments and Cut Lists
//!
//! [`ExtrusionSegment`] is one line of a section's extrusion schedule:
//! a profile, a cut length and how many pieces. [`CutList`] merges the
//! segments of every computed section into the list you take to the saw,
//! and [`LengthTotals`] sums stock length per profile for ordering.
//!
//! ## Example
//!
//! ```rust
//! use bom_core::cut_list::{CutList, ExtrusionSegment};
//! use bom_core::profiles::ExtrusionProfile;
//!
//! let top = ExtrusionSegment::new("Top rail (length)", ExtrusionProfile::P2020, 1000.0, 2);
//! let bottom = ExtrusionSegment::new("Bottom rail (length)", ExtrusionProfile::P2020, 1000.0, 2);
//!
//! let cuts = CutList::from_segments([&top, &bottom]);
//! assert_eq!(cuts.items.len(), 1);
//! assert_eq!(cuts.items[0].quantity, 4);
//! assert_eq!(cuts.totals.get(ExtrusionProfile::P2020), 4000.0);
//! ```

use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::profiles::ExtrusionProfile;

/// Cut lengths closer than this are treated as the same cut (mm)
pub const CUT_RESOLUTION_MM: f64 = 0.1;

/// A run of identical extrusion pieces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtrusionSegment {
    /// What the piece is for (e.g., "Leg", "Top rail (width)")
    pub label: String,

    /// Extrusion profile
    pub profile: ExtrusionProfile,

    /// Cut length of one piece (mm)
    pub length_mm: f64,

    /// Number of pieces
    pub quantity: u32,
}

impl ExtrusionSegment {
    /// Create a segment
    pub fn new(label: impl Into<String>, profile: ExtrusionProfile, length_mm: f64, quantity: u32) -> Self {
        ExtrusionSegment {
            label: label.into(),
            profile,
            length_mm,
            quantity,
        }
    }

    /// Length of all pieces together (mm)
    pub fn total_length_mm(&self) -> f64 {
        self.length_mm * self.quantity as f64
    }
}

/// Total extrusion length per profile (mm).
///
/// A seeded entry stays in the map at zero so callers can tell "this build
/// uses 2040 but not at this size" apart from "2040 does not apply here".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LengthTotals(BTreeMap<ExtrusionProfile, f64>);

impl LengthTotals {
    /// Empty totals
    pub fn new() -> Self {
        Self::default()
    }

    /// Totals with an explicit zero entry for each profile
    pub fn seeded(profiles: &[ExtrusionProfile]) -> Self {
        LengthTotals(profiles.iter().map(|p| (*p, 0.0)).collect())
    }

    /// Add `length_mm` to a profile's total
    pub fn add(&mut self, profile: ExtrusionProfile, length_mm: f64) {
        *self.0.entry(profile).or_insert(0.0) += length_mm;
    }

    /// Add every piece of a segment
    pub fn add_segment(&mut self, segment: &ExtrusionSegment) {
        self.add(segment.profile, segment.total_length_mm());
    }

    /// Total for a profile (0 when absent)
    pub fn get(&self, profile: ExtrusionProfile) -> f64 {
        self.0.get(&profile).copied().unwrap_or(0.0)
    }

    /// Whether the profile has an entry, even a zero one
    pub fn contains(&self, profile: ExtrusionProfile) -> bool {
        self.0.contains_key(&profile)
    }

    /// Add every entry of `other`
    pub fn merge(&mut self, other: &LengthTotals) {
        for (profile, length) in other.iter() {
            self.add(profile, length);
        }
    }

    /// Iterate in profile order
    pub fn iter(&self) -> impl Iterator<Item = (ExtrusionProfile, f64)> + '_ {
        self.0.iter().map(|(p, l)| (*p, *l))
    }

    /// Sum over all profiles (mm)
    pub fn grand_total_mm(&self) -> f64 {
        self.0.values().sum()
    }
}

/// One consolidated cut: every piece of this profile at this length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutItem {
    pub profile: ExtrusionProfile,
    pub length_mm: f64,
    pub quantity: u32,
    /// Segment labels that asked for this cut, first-seen order
    pub used_for: Vec<String>,
}

/// Consolidated cut list across sections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CutList {
    /// Cuts sorted by profile, longest first within a profile
    pub items: Vec<CutItem>,

    /// Stock length needed per profile (mm)
    pub totals: LengthTotals,
}

impl CutList {
    /// Merge segments into a cut list.
    ///
    /// Segments with a zero quantity are skipped. Lengths are grouped at
    /// [`CUT_RESOLUTION_MM`]; the first length seen for a group is kept.
    /// Totals sum the exact segment lengths, so they match the sections.
    pub fn from_segments<'a>(segments: impl IntoIterator<Item = &'a ExtrusionSegment>) -> Self {
        let mut grouped: BTreeMap<(ExtrusionProfile, Reverse<i64>), CutItem> = BTreeMap::new();
        let mut totals = LengthTotals::new();

        for segment in segments {
            if segment.quantity == 0 {
                continue;
            }
            totals.add(segment.profile, segment.total_length_mm());
            let key = (segment.profile, Reverse(length_key(segment.length_mm)));
            let item = grouped.entry(key).or_insert_with(|| CutItem {
                profile: segment.profile,
                length_mm: segment.length_mm,
                quantity: 0,
                used_for: Vec::new(),
            });
            item.quantity += segment.quantity;
            if !item.used_for.iter().any(|l| l == &segment.label) {
                item.used_for.push(segment.label.clone());
            }
        }

        let items: Vec<CutItem> = grouped.into_values().collect();
        CutList { items, totals }
    }

    /// Total number of pieces to cut
    pub fn piece_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// True when nothing needs cutting
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn length_key(length_mm: f64) -> i64 {
    (length_mm / CUT_RESOLUTION_MM).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_total() {
        let legs = ExtrusionSegment::new("Leg", ExtrusionProfile::P4040, 860.0, 4);
        assert_eq!(legs.total_length_mm(), 3440.0);
    }

    #[test]
    fn test_seeded_totals_keep_zero() {
        let totals = LengthTotals::seeded(&ExtrusionProfile::ENCLOSURE);
        assert!(totals.contains(ExtrusionProfile::P2040));
        assert_eq!(totals.get(ExtrusionProfile::P2040), 0.0);
        assert!(!totals.contains(ExtrusionProfile::P4040));

        let json = serde_json::to_string(&totals).unwrap();
        assert_eq!(json, r#"{"2020":0.0,"2040":0.0}"#);
    }

    #[test]
    fn test_cut_list_groups_and_sorts() {
        let segments = vec![
            ExtrusionSegment::new("Top rail (width)", ExtrusionProfile::P2020, 560.0, 2),
            ExtrusionSegment::new("Vertical", ExtrusionProfile::P2020, 860.0, 4),
            ExtrusionSegment::new("Bottom rail (width)", ExtrusionProfile::P2020, 560.0, 2),
            ExtrusionSegment::new("Leg", ExtrusionProfile::P4040, 860.0, 4),
            ExtrusionSegment::new("Unused", ExtrusionProfile::P2040, 500.0, 0),
        ];
        let cuts = CutList::from_segments(&segments);

        assert_eq!(cuts.items.len(), 3);
        // 2020 first, longest first
        assert_eq!(cuts.items[0].profile, ExtrusionProfile::P2020);
        assert_eq!(cuts.items[0].length_mm, 860.0);
        assert_eq!(cuts.items[1].length_mm, 560.0);
        assert_eq!(cuts.items[1].quantity, 4);
        assert_eq!(cuts.items[1].used_for, vec!["Top rail (width)", "Bottom rail (width)"]);
        assert_eq!(cuts.items[2].profile, ExtrusionProfile::P4040);

        assert_eq!(cuts.piece_count(), 12);
        assert_eq!(cuts.totals.get(ExtrusionProfile::P2020), 860.0 * 4.0 + 560.0 * 4.0);
        assert!(!cuts.totals.contains(ExtrusionProfile::P2040));
    }

    #[test]
    fn test_near_identical_lengths_merge() {
        let a = ExtrusionSegment::new("A", ExtrusionProfile::P2020, 500.0, 1);
        let b = ExtrusionSegment::new("B", ExtrusionProfile::P2020, 500.04, 1);
        let c = ExtrusionSegment::new("C", ExtrusionProfile::P2020, 500.5, 1);
        let cuts = CutList::from_segments([&a, &b, &c]);
        assert_eq!(cuts.items.len(), 2);
        assert_eq!(cuts.items[1].quantity, 2);
    }

    #[test]
    fn test_merged_cuts_keep_exact_totals() {
        let a = ExtrusionSegment::new("A", ExtrusionProfile::P2020, 500.0, 3);
        let b = ExtrusionSegment::new("B", ExtrusionProfile::P2020, 500.04, 2);
        let cuts = CutList::from_segments([&a, &b]);

        assert_eq!(cuts.items.len(), 1);
        assert_eq!(cuts.items[0].quantity, 5);
        let expected = a.total_length_mm() + b.total_length_mm();
        assert!((cuts.totals.get(ExtrusionProfile::P2020) - expected).abs() < 1e-9);
    }
}
