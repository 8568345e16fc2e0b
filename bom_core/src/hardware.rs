//! Hardware catalog and quantity lists
//!
//! Every purchasable fastener or bracket the calculator can call for, plus
//! [`HardwareList`], an ordered part-to-quantity map. The map is a
//! `BTreeMap` so serialized output is stable between runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Purchasable hardware part
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HardwarePart {
    /// Inside corner connector for 20-series joints
    CornerConnector20,
    /// Inside corner connector for 40-series joints
    CornerConnector40,
    /// Mixed corner connector joining a 20 mm face to a 40 mm face
    CornerConnector60,
    /// Three-way cube bracket
    TripleBracket,
    /// Stamped 90° angle corner
    AngleCorner,
    /// Drop-in sliding T-nut
    SlidingTNut,
    /// Spring-loaded T-nut (stays put in a vertical slot)
    SpringTNut,
    /// Socket cap screw
    CapScrew,
    /// Button head screw
    ButtonHeadScrew,
    /// Low-profile screw for connectors under panels
    LowProfileScrew,
    /// Leg foot bracket
    FootBracket,
    /// Adjustable levelling foot
    LevelingFoot,
    /// Door hinge
    Hinge,
    /// Door handle
    Handle,
    /// Door frame corner bracket
    CornerBracket,
    /// Lid stay / gas strut for top-hinged doors
    LidStay,
}

impl HardwarePart {
    /// Every part in catalog order
    pub const ALL: [HardwarePart; 16] = [
        HardwarePart::CornerConnector20,
        HardwarePart::CornerConnector40,
        HardwarePart::CornerConnector60,
        HardwarePart::TripleBracket,
        HardwarePart::AngleCorner,
        HardwarePart::SlidingTNut,
        HardwarePart::SpringTNut,
        HardwarePart::CapScrew,
        HardwarePart::ButtonHeadScrew,
        HardwarePart::LowProfileScrew,
        HardwarePart::FootBracket,
        HardwarePart::LevelingFoot,
        HardwarePart::Hinge,
        HardwarePart::Handle,
        HardwarePart::CornerBracket,
        HardwarePart::LidStay,
    ];

    /// Shopping-list name
    pub fn display_name(&self) -> &'static str {
        match self {
            HardwarePart::CornerConnector20 => "Corner connector (20 series)",
            HardwarePart::CornerConnector40 => "Corner connector (40 series)",
            HardwarePart::CornerConnector60 => "Corner connector (20/40 mixed)",
            HardwarePart::TripleBracket => "Triple corner bracket",
            HardwarePart::AngleCorner => "Angle corner",
            HardwarePart::SlidingTNut => "Sliding T-nut",
            HardwarePart::SpringTNut => "Spring-loaded T-nut",
            HardwarePart::CapScrew => "Cap screw",
            HardwarePart::ButtonHeadScrew => "Button head screw",
            HardwarePart::LowProfileScrew => "Low-profile screw",
            HardwarePart::FootBracket => "Foot bracket",
            HardwarePart::LevelingFoot => "Levelling foot",
            HardwarePart::Hinge => "Hinge",
            HardwarePart::Handle => "Handle",
            HardwarePart::CornerBracket => "Corner bracket",
            HardwarePart::LidStay => "Lid stay",
        }
    }
}

impl std::fmt::Display for HardwarePart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Ordered part-to-quantity map.
///
/// Entries with a zero quantity are kept: a section that lists a part at
/// zero is telling the caller the part applies to this build but none are
/// needed at this size.
///
/// ```rust
/// use bom_core::hardware::{HardwareList, HardwarePart};
///
/// let mut list = HardwareList::new();
/// list.add(HardwarePart::SlidingTNut, 16);
/// list.add(HardwarePart::SlidingTNut, 4);
/// assert_eq!(list.get(HardwarePart::SlidingTNut), 20);
/// assert_eq!(list.get(HardwarePart::Hinge), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HardwareList(BTreeMap<HardwarePart, u32>);

impl HardwareList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `part`, creating the entry if needed
    pub fn add(&mut self, part: HardwarePart, quantity: u32) {
        *self.0.entry(part).or_insert(0) += quantity;
    }

    /// Builder-style [`add`](Self::add)
    pub fn with(mut self, part: HardwarePart, quantity: u32) -> Self {
        self.add(part, quantity);
        self
    }

    /// Quantity of `part` (0 when absent)
    pub fn get(&self, part: HardwarePart) -> u32 {
        self.0.get(&part).copied().unwrap_or(0)
    }

    /// Whether `part` has an entry, even a zero one
    pub fn contains(&self, part: HardwarePart) -> bool {
        self.0.contains_key(&part)
    }

    /// Add every entry of `other` into this list
    pub fn merge(&mut self, other: &HardwareList) {
        for (part, quantity) in other.iter() {
            self.add(part, quantity);
        }
    }

    /// Multiply every quantity by `factor`
    pub fn scaled(&self, factor: u32) -> HardwareList {
        HardwareList(self.0.iter().map(|(part, qty)| (*part, qty * factor)).collect())
    }

    /// Iterate entries in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (HardwarePart, u32)> + '_ {
        self.0.iter().map(|(part, qty)| (*part, *qty))
    }

    /// Sum of all quantities
    pub fn total_pieces(&self) -> u32 {
        self.0.values().sum()
    }

    /// True when every entry is zero (or there are none)
    pub fn is_all_zero(&self) -> bool {
        self.0.values().all(|qty| *qty == 0)
    }

    /// Number of distinct parts listed
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no parts are listed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(HardwarePart, u32)> for HardwareList {
    fn from_iter<I: IntoIterator<Item = (HardwarePart, u32)>>(iter: I) -> Self {
        let mut list = HardwareList::new();
        for (part, quantity) in iter {
            list.add(part, quantity);
        }
        list
    }
}
