//! # Panel Calculation
//!
//! Sheet panel cut sizes for each flagged face of the enclosure.
//!
//! ## Mounting
//!
//! - **In-channel**: the sheet sits inside the frame, so each dimension is the
//!   cavity opening minus an inset on both edges. The inset is
//!   `panel_edge_clearance + thickness x panel_inset_per_mm_thickness`, so a
//!   thicker sheet is cut smaller.
//! - **Surface**: the sheet covers the outer face of the frame.
//!
//! The cavity uses the same profile selection as the enclosure, so a span
//! that moves the top rails to 2040 also shortens the side panels.
//!
//! ## Example
//!
//! ```rust
//! use bom_core::calculations::inputs::{Face, MaterialConfiguration, PanelConfig, StructuralDimensions};
//! use bom_core::calculations::panels;
//! use bom_core::settings::FabricationSettings;
//!
//! let material = MaterialConfiguration {
//!     thickness_mm: 4.0,
//!     include_panels: true,
//!     panel_config: PanelConfig::for_faces(&[Face::Top]),
//!     ..Default::default()
//! };
//! let dims = StructuralDimensions::outside(1000.0, 600.0, 900.0);
//! let result = panels::calculate(&dims, &material, &FabricationSettings::default());
//!
//! // 960 x 560 opening, less a 3 mm inset on each edge
//! assert_eq!(result.panels[0].width_mm, 954.0);
//! assert_eq!(result.panels[0].height_mm, 554.0);
//! ```

use serde::{Deserialize, Serialize};

use super::geometry::EnclosureFrame;
use super::inputs::{Face, MaterialConfiguration, PanelMount, StructuralDimensions, TableConfiguration};
use super::{CompositionWarning, Section};
use crate::settings::FabricationSettings;

/// One sheet to cut
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelCut {
    /// Face the sheet closes
    pub face: Face,

    /// Cut width (mm); length axis for top, bottom, front and back
    pub width_mm: f64,

    /// Cut height (mm); width axis for top and bottom
    pub height_mm: f64,

    /// width x height (mm²)
    pub area_mm2: f64,
}

impl PanelCut {
    fn new(face: Face, width_mm: f64, height_mm: f64) -> Self {
        PanelCut {
            face,
            width_mm,
            height_mm,
            area_mm2: width_mm * height_mm,
        }
    }
}

/// Panels section of the manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelResult {
    /// Sheet material name
    pub material_type: String,

    /// Sheet thickness (mm)
    pub thickness_mm: f64,

    /// How the sheets attach
    pub mount: PanelMount,

    /// One cut per flagged face, top/bottom/left/right/back/front order
    pub panels: Vec<PanelCut>,

    /// Sum of panel areas (mm²)
    pub total_area_mm2: f64,
}

/// Inset taken off each edge of an in-channel sheet
pub fn edge_inset_mm(thickness_mm: f64, settings: &FabricationSettings) -> f64 {
    settings.panel_edge_clearance_mm + thickness_mm * settings.panel_inset_per_mm_thickness
}

/// Cut size for one face, before any validation
pub fn panel_size_mm(
    frame: &EnclosureFrame,
    face: Face,
    material: &MaterialConfiguration,
    settings: &FabricationSettings,
) -> (f64, f64) {
    match material.mount {
        PanelMount::InChannel => {
            let (width, height) = frame.face_opening_mm(face);
            let inset = 2.0 * edge_inset_mm(material.thickness_mm, settings);
            (width - inset, height - inset)
        }
        PanelMount::Surface => frame.envelope.face_size_mm(face),
    }
}

/// Compute the panels section if requested
pub fn compute(
    dims: &StructuralDimensions,
    material: &MaterialConfiguration,
    settings: &FabricationSettings,
) -> Section<PanelResult> {
    if !material.include_panels {
        return Section::NotRequested;
    }
    Section::Computed(calculate(dims, material, settings))
}

/// Panel arithmetic. Expects validated input (every cut size positive).
pub fn calculate(
    dims: &StructuralDimensions,
    material: &MaterialConfiguration,
    settings: &FabricationSettings,
) -> PanelResult {
    let frame = EnclosureFrame::resolve(dims, settings);

    let panels: Vec<PanelCut> = material
        .panel_config
        .active_faces()
        .into_iter()
        .map(|face| {
            let (width, height) = panel_size_mm(&frame, face, material, settings);
            PanelCut::new(face, width, height)
        })
        .collect();

    let total_area_mm2 = panels.iter().map(|p| p.area_mm2).sum();

    PanelResult {
        material_type: material.material_type.clone(),
        thickness_mm: material.thickness_mm,
        mount: material.mount,
        panels,
        total_area_mm2,
    }
}

/// Advisory warnings for the panels section
pub fn warnings(material: &MaterialConfiguration, table: &TableConfiguration) -> Vec<CompositionWarning> {
    if !material.include_panels {
        return Vec::new();
    }
    let faces = material.panel_config.active_faces();
    if faces.is_empty() {
        return vec![CompositionWarning::NoPanelFaceSelected];
    }
    if !table.include_doors {
        return Vec::new();
    }
    faces
        .into_iter()
        .filter(|face| table.door_config.has_door(*face))
        .map(|face| CompositionWarning::DoorAndPanelOnSameFace { face })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::inputs::{DoorConfiguration, DoorType, PanelConfig};

    fn settings() -> FabricationSettings {
        FabricationSettings::default()
    }

    fn material(faces: &[Face], thickness_mm: f64, mount: PanelMount) -> MaterialConfiguration {
        MaterialConfiguration {
            material_type: "polycarbonate".to_string(),
            thickness_mm,
            include_panels: true,
            panel_config: PanelConfig::for_faces(faces),
            mount,
        }
    }

    fn dims() -> StructuralDimensions {
        StructuralDimensions::outside(1000.0, 600.0, 900.0)
    }

    #[test]
    fn test_in_channel_sizes() {
        let result = calculate(&dims(), &material(&Face::ALL, 4.0, PanelMount::InChannel), &settings());
        let sizes: Vec<(Face, f64, f64)> = result.panels.iter().map(|p| (p.face, p.width_mm, p.height_mm)).collect();

        // cavity 960 x 560 x 860, less 2 x 3 mm
        assert_eq!(
            sizes,
            vec![
                (Face::Top, 954.0, 554.0),
                (Face::Bottom, 954.0, 554.0),
                (Face::Left, 554.0, 854.0),
                (Face::Right, 554.0, 854.0),
                (Face::Back, 954.0, 854.0),
                (Face::Front, 954.0, 854.0),
            ]
        );
    }

    #[test]
    fn test_in_channel_fits_inside_cavity() {
        let frame = EnclosureFrame::resolve(&dims(), &settings());
        let (cavity_w, cavity_h) = frame.face_opening_mm(Face::Top);

        let mut last_width = f64::INFINITY;
        for thickness in [3.0, 6.0, 12.0] {
            let result = calculate(&dims(), &material(&[Face::Top], thickness, PanelMount::InChannel), &settings());
            let panel = &result.panels[0];
            assert!(panel.width_mm < cavity_w, "t={thickness}");
            assert!(panel.height_mm < cavity_h, "t={thickness}");
            assert!(panel.width_mm < last_width, "thicker sheet must be cut smaller");
            last_width = panel.width_mm;
        }
    }

    #[test]
    fn test_inset_grows_with_thickness() {
        assert_eq!(edge_inset_mm(3.0, &settings()), 2.5);
        assert_eq!(edge_inset_mm(12.0, &settings()), 7.0);

        let custom = FabricationSettings {
            panel_edge_clearance_mm: 2.0,
            panel_inset_per_mm_thickness: 1.0,
            ..settings()
        };
        let result = calculate(&dims(), &material(&[Face::Top], 4.0, PanelMount::InChannel), &custom);
        assert_eq!(result.panels[0].width_mm, 960.0 - 12.0);
    }

    #[test]
    fn test_surface_uses_outer_face() {
        let result = calculate(
            &dims(),
            &material(&[Face::Top, Face::Left, Face::Front], 3.0, PanelMount::Surface),
            &settings(),
        );
        assert_eq!(result.panels[0].width_mm, 1000.0);
        assert_eq!(result.panels[0].height_mm, 600.0);
        assert_eq!(result.panels[1].width_mm, 600.0);
        assert_eq!(result.panels[1].height_mm, 900.0);
        assert_eq!(result.panels[2].width_mm, 1000.0);
        assert_eq!(result.panels[2].height_mm, 900.0);
    }

    #[test]
    fn test_large_span_shortens_side_panels() {
        let small = calculate(
            &StructuralDimensions::outside(1499.0, 600.0, 900.0),
            &material(&[Face::Left], 4.0, PanelMount::InChannel),
            &settings(),
        );
        let large = calculate(
            &StructuralDimensions::outside(1500.0, 600.0, 900.0),
            &material(&[Face::Left], 4.0, PanelMount::InChannel),
            &settings(),
        );
        assert_eq!(small.panels[0].height_mm - large.panels[0].height_mm, 20.0);
    }

    #[test]
    fn test_toggling_face_removes_exactly_its_area() {
        let all = calculate(&dims(), &material(&Face::ALL, 4.0, PanelMount::InChannel), &settings());

        for face in Face::ALL {
            let remaining: Vec<Face> = Face::ALL.iter().copied().filter(|f| *f != face).collect();
            let fewer = calculate(&dims(), &material(&remaining, 4.0, PanelMount::InChannel), &settings());
            let face_area = all.panels.iter().find(|p| p.face == face).map(|p| p.area_mm2).unwrap();
            assert_eq!(all.total_area_mm2 - fewer.total_area_mm2, face_area, "{face}");
        }
    }

    #[test]
    fn test_total_area_sums_flagged_faces() {
        let result = calculate(&dims(), &material(&[Face::Back, Face::Top], 4.0, PanelMount::InChannel), &settings());
        assert_eq!(result.panels.len(), 2);
        assert_eq!(result.total_area_mm2, 954.0 * 554.0 + 954.0 * 854.0);
        assert_eq!(result.material_type, "polycarbonate");
    }

    #[test]
    fn test_no_faces() {
        let mat = material(&[], 4.0, PanelMount::InChannel);
        let section = compute(&dims(), &mat, &settings());
        let result = section.computed().unwrap();
        assert!(result.panels.is_empty());
        assert_eq!(result.total_area_mm2, 0.0);
        assert_eq!(
            warnings(&mat, &TableConfiguration::default()),
            vec![CompositionWarning::NoPanelFaceSelected]
        );
    }

    #[test]
    fn test_not_requested() {
        let mat = MaterialConfiguration::default();
        assert_eq!(compute(&dims(), &mat, &settings()), Section::NotRequested);
        assert!(warnings(&mat, &TableConfiguration::default()).is_empty());
    }

    #[test]
    fn test_door_and_panel_on_same_face_warns() {
        let mat = material(&[Face::Front, Face::Top], 4.0, PanelMount::InChannel);
        let table = TableConfiguration {
            include_enclosure: true,
            include_doors: true,
            door_config: DoorConfiguration::for_faces(&[Face::Front, Face::Back], DoorType::Standard),
            ..Default::default()
        };
        assert_eq!(
            warnings(&mat, &table),
            vec![CompositionWarning::DoorAndPanelOnSameFace { face: Face::Front }]
        );

        // door flags are ignored when doors are off
        let no_doors = TableConfiguration {
            include_doors: false,
            ..table
        };
        assert!(warnings(&mat, &no_doors).is_empty());
    }
}
