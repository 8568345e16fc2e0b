//! Request types: dimensions, door, panel and table configuration.
//!
//! These mirror the form a user fills in. They are read-only values; the
//! calculator never mutates them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// Overall size of the build.
///
/// ## JSON Example
///
/// ```json
/// { "length_mm": 1000.0, "width_mm": 600.0, "height_mm": 900.0, "is_outside_dimension": true }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StructuralDimensions {
    /// Length along the front face (mm)
    pub length_mm: f64,

    /// Depth front to back (mm)
    pub width_mm: f64,

    /// Full outer height (mm), never adjusted for inside/outside
    pub height_mm: f64,

    /// `true`: length/width are the outer frame envelope.
    /// `false`: length/width are the usable inner cavity.
    pub is_outside_dimension: bool,
}

impl StructuralDimensions {
    /// Outside-dimension constructor
    pub fn outside(length_mm: f64, width_mm: f64, height_mm: f64) -> Self {
        StructuralDimensions {
            length_mm,
            width_mm,
            height_mm,
            is_outside_dimension: true,
        }
    }

    /// Inside (cavity) dimension constructor
    pub fn inside(length_mm: f64, width_mm: f64, height_mm: f64) -> Self {
        StructuralDimensions {
            is_outside_dimension: false,
            ..Self::outside(length_mm, width_mm, height_mm)
        }
    }

    /// (field name, value) for each axis, in validation order
    pub fn fields(&self) -> [(&'static str, f64); 3] {
        [
            ("length", self.length_mm),
            ("width", self.width_mm),
            ("height", self.height_mm),
        ]
    }
}

/// Door style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DoorType {
    /// Side-hinged single leaf
    #[default]
    Standard,
    /// Two leaves folding against each other
    #[serde(alias = "BI_FOLD")]
    Bifold,
    /// Top-hinged, swings up
    Awning,
}

impl DoorType {
    /// All door types
    pub const ALL: [DoorType; 3] = [DoorType::Standard, DoorType::Bifold, DoorType::Awning];

    /// Canonical name ("STANDARD", "BIFOLD", "AWNING")
    pub fn code(&self) -> &'static str {
        match self {
            DoorType::Standard => "STANDARD",
            DoorType::Bifold => "BIFOLD",
            DoorType::Awning => "AWNING",
        }
    }
}

impl FromStr for DoorType {
    type Err = CalcError;

    /// Case-insensitive; also accepts "bi-fold" and "bi_fold"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace(['-', '_'], "").as_str() {
            "STANDARD" => Ok(DoorType::Standard),
            "BIFOLD" => Ok(DoorType::Bifold),
            "AWNING" => Ok(DoorType::Awning),
            _ => Err(CalcError::invalid_door_type(s)),
        }
    }
}

impl std::fmt::Display for DoorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One of the six faces of the enclosure box
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Face {
    Top,
    Bottom,
    Left,
    Right,
    Back,
    Front,
}

impl Face {
    /// All faces in panel schedule order
    pub const ALL: [Face; 6] = [Face::Top, Face::Bottom, Face::Left, Face::Right, Face::Back, Face::Front];

    /// Faces that can carry a door, in door schedule order
    pub const DOOR_FACES: [Face; 4] = [Face::Front, Face::Back, Face::Left, Face::Right];

    /// Lower-case name
    pub fn name(&self) -> &'static str {
        match self {
            Face::Top => "top",
            Face::Bottom => "bottom",
            Face::Left => "left",
            Face::Right => "right",
            Face::Back => "back",
            Face::Front => "front",
        }
    }

    /// True for the two faces that lie in the horizontal plane
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Face::Top | Face::Bottom)
    }

    /// True for faces whose width runs along the length axis
    pub fn spans_length(&self) -> bool {
        matches!(self, Face::Top | Face::Bottom | Face::Back | Face::Front)
    }
}

impl FromStr for Face {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Face::ALL
            .iter()
            .copied()
            .find(|f| f.name() == lower)
            .ok_or_else(|| format!("unknown face '{s}' (expected top, bottom, left, right, back or front)"))
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which faces get a door, and what kind
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorConfiguration {
    pub front_door: bool,
    pub back_door: bool,
    pub left_door: bool,
    pub right_door: bool,
    pub door_type: DoorType,
}

impl DoorConfiguration {
    /// Door on the given face?
    pub fn has_door(&self, face: Face) -> bool {
        match face {
            Face::Front => self.front_door,
            Face::Back => self.back_door,
            Face::Left => self.left_door,
            Face::Right => self.right_door,
            Face::Top | Face::Bottom => false,
        }
    }

    /// Faces with a door, in door schedule order
    pub fn active_faces(&self) -> Vec<Face> {
        Face::DOOR_FACES.iter().copied().filter(|f| self.has_door(*f)).collect()
    }

    /// Build from a list of faces; top and bottom are ignored
    pub fn for_faces(faces: &[Face], door_type: DoorType) -> Self {
        DoorConfiguration {
            front_door: faces.contains(&Face::Front),
            back_door: faces.contains(&Face::Back),
            left_door: faces.contains(&Face::Left),
            right_door: faces.contains(&Face::Right),
            door_type,
        }
    }
}

/// Which faces get a solid sheet panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
    pub back: bool,
    pub front: bool,
}

impl PanelConfig {
    /// Panel on the given face?
    pub fn has_panel(&self, face: Face) -> bool {
        match face {
            Face::Top => self.top,
            Face::Bottom => self.bottom,
            Face::Left => self.left,
            Face::Right => self.right,
            Face::Back => self.back,
            Face::Front => self.front,
        }
    }

    /// Faces with a panel, in panel schedule order
    pub fn active_faces(&self) -> Vec<Face> {
        Face::ALL.iter().copied().filter(|f| self.has_panel(*f)).collect()
    }

    /// Build from a list of faces
    pub fn for_faces(faces: &[Face]) -> Self {
        PanelConfig {
            top: faces.contains(&Face::Top),
            bottom: faces.contains(&Face::Bottom),
            left: faces.contains(&Face::Left),
            right: faces.contains(&Face::Right),
            back: faces.contains(&Face::Back),
            front: faces.contains(&Face::Front),
        }
    }

    /// Every face panelled
    pub fn all() -> Self {
        Self::for_faces(&Face::ALL)
    }
}

/// How sheets attach to the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelMount {
    /// Captured in the extrusion T-slots
    #[default]
    InChannel,
    /// Screwed over the outside of the frame
    Surface,
}

/// Sheet material for panels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialConfiguration {
    /// Free-text material name (e.g., "acrylic", "polycarbonate", "dibond")
    pub material_type: String,

    /// Sheet thickness (mm)
    pub thickness_mm: f64,

    /// Compute the panel section at all
    #[serde(default)]
    pub include_panels: bool,

    /// Faces to panel
    #[serde(default)]
    pub panel_config: PanelConfig,

    /// Mounting style
    #[serde(default)]
    pub mount: PanelMount,
}

impl Default for MaterialConfiguration {
    fn default() -> Self {
        MaterialConfiguration {
            material_type: "acrylic".to_string(),
            thickness_mm: 3.0,
            include_panels: false,
            panel_config: PanelConfig::default(),
            mount: PanelMount::InChannel,
        }
    }
}

/// Which sections to build
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfiguration {
    pub include_table: bool,
    pub include_enclosure: bool,
    pub mount_enclosure_to_table: bool,
    pub include_doors: bool,
    pub door_config: DoorConfiguration,
}

impl TableConfiguration {
    /// Table only
    pub fn table_only() -> Self {
        TableConfiguration {
            include_table: true,
            ..Default::default()
        }
    }

    /// Enclosure only
    pub fn enclosure_only() -> Self {
        TableConfiguration {
            include_enclosure: true,
            ..Default::default()
        }
    }
}
