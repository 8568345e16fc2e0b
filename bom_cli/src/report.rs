//! Plain-text rendering of a bill of materials

use std::fmt::Write;

use bom_core::calculations::{BillOfMaterialsResult, Section};
use bom_core::hardware::HardwareList;
use bom_core::profiles::ExtrusionProfile;
use bom_core::units::{Meters, Millimeters, SqM, SqMm};

const RULE: &str = "═══════════════════════════════════════";

/// Render a manifest as a shop report
pub fn render(label: &str, bom: &BillOfMaterialsResult) -> String {
    let mut out = String::new();
    let title = if label.is_empty() { "BILL OF MATERIALS".to_string() } else { label.to_uppercase() };

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "  {title}");
    let _ = writeln!(out, "{RULE}");

    let _ = writeln!(out);
    let _ = writeln!(out, "Sections:");
    for (name, status) in [
        ("table", bom.table.status()),
        ("enclosure", bom.enclosure.status()),
        ("mounting", bom.mounting.status()),
        ("doors", bom.doors.status()),
        ("panels", bom.panels.status()),
    ] {
        let _ = writeln!(out, "  {name:<10} {status}");
    }

    if let Section::Computed(enclosure) = &bom.enclosure {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Enclosure frame: top {}, bottom {}, posts {}",
            enclosure.profiles.top, enclosure.profiles.bottom, enclosure.profiles.vertical
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Cut list:");
    if bom.summary.cut_list.is_empty() {
        let _ = writeln!(out, "  (no extrusion)");
    }
    for item in &bom.summary.cut_list.items {
        let _ = writeln!(
            out,
            "  {:>3} x {} @ {:>7.1} mm   {}",
            item.quantity,
            item.profile,
            item.length_mm,
            item.used_for.join(", ")
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Stock needed:");
    for (profile, length_mm) in bom.summary.extrusion_totals.iter() {
        let _ = writeln!(out, "  {:<6} {:>8.3} m", profile.designation(), metres(length_mm));
    }

    if let Section::Computed(doors) = &bom.doors {
        let _ = writeln!(out);
        let _ = writeln!(out, "Doors ({}, {} active):", doors.door_type, doors.active_doors);
        for panel in &doors.panels {
            let _ = writeln!(
                out,
                "  {:<6} {} x {:.1} x {:.1} mm   {}",
                panel.face.name(),
                panel.leaves,
                panel.width_mm,
                panel.height_mm,
                panel.note
            );
        }
    }

    if let Section::Computed(panels) = &bom.panels {
        let _ = writeln!(out);
        let _ = writeln!(out, "Panels ({} {} mm):", panels.material_type, panels.thickness_mm);
        for panel in &panels.panels {
            let _ = writeln!(out, "  {:<6} {:.1} x {:.1} mm", panel.face.name(), panel.width_mm, panel.height_mm);
        }
    }

    if let Section::Computed(mounting) = &bom.mounting {
        let _ = writeln!(out);
        let _ = writeln!(out, "Mounting:");
        let _ = writeln!(out, "  {}", mounting.instructions);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Hardware:");
    write_hardware(&mut out, &bom.summary.hardware);

    if bom.summary.sheet_area_mm2 > 0.0 {
        let _ = writeln!(out);
        let _ = writeln!(out, "Sheet area: {:.3} m²", square_metres(bom.summary.sheet_area_mm2));
    }

    if !bom.warnings.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Warnings:");
        for warning in &bom.warnings {
            let _ = writeln!(out, "  [WARN] {warning}");
        }
    }

    let _ = writeln!(out, "{RULE}");
    out
}

/// Render the extrusion catalog
pub fn render_profiles() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Profile  Section (mm)  Slots");
    for profile in ExtrusionProfile::ALL {
        let (width, height) = profile.cross_section_mm();
        let _ = writeln!(
            out,
            "{:<8} {:>4} x {:<6} {:>5}",
            profile.designation(),
            width,
            height,
            profile.slot_count()
        );
    }
    out
}

fn write_hardware(out: &mut String, hardware: &HardwareList) {
    let mut any = false;
    for (part, qty) in hardware.iter().filter(|(_, qty)| *qty > 0) {
        let _ = writeln!(out, "  {:>4} x {}", qty, part);
        any = true;
    }
    if !any {
        let _ = writeln!(out, "  (none)");
    }
}

fn metres(length_mm: f64) -> f64 {
    Meters::from(Millimeters(length_mm)).value()
}

fn square_metres(area_mm2: f64) -> f64 {
    SqM::from(SqMm(area_mm2)).value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bom_core::calculations::{
        compute_bill_of_materials_with, MaterialConfiguration, StructuralDimensions, TableConfiguration,
    };
    use bom_core::settings::FabricationSettings;

    #[test]
    fn test_table_report() {
        let bom = compute_bill_of_materials_with(
            &StructuralDimensions::outside(1000.0, 600.0, 900.0),
            &TableConfiguration::table_only(),
            &MaterialConfiguration::default(),
            &FabricationSettings::default(),
        )
        .unwrap();
        let text = render("Bench", &bom);

        assert!(text.contains("BENCH"));
        assert!(text.contains("4 x 4040 @   860.0 mm"));
        assert!(text.contains("Levelling foot"));
        assert!(text.contains("enclosure  not_requested"));
        assert!(!text.contains("Warnings:"));
    }

    #[test]
    fn test_profiles_listing() {
        let text = render_profiles();
        for profile in ExtrusionProfile::ALL {
            assert!(text.contains(profile.designation()));
        }
    }

    #[test]
    fn test_unit_helpers() {
        assert_eq!(metres(3440.0), 3.44);
        assert_eq!(square_metres(2_000_000.0), 2.0);
    }
}
