//! # Fabrication Settings
//!
//! Every shop constant the calculator uses: the span at which the top rails
//! step up to 2040, the leg foot offset, door clearances and the panel inset.
//!
//! Settings are plain data. Calculation functions take them by reference,
//! and [`global`] provides a process-wide instance for callers that do not
//! want to thread them through. The global is set at most once, explicitly,
//! through [`install`], and falls back to [`FabricationSettings::default`]
//! on first read.
//!
//! ## JSON
//!
//! Missing fields take their defaults, so a settings file only needs the
//! values that differ from stock:
//!
//! ```json
//! { "large_span_threshold_mm": 1200.0, "table_foot_offset_mm": 55.0 }
//! ```

use std::path::Path;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

static GLOBAL: OnceCell<FabricationSettings> = OnceCell::new();

/// Tunable shop constants (all millimetres).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FabricationSettings {
    /// Envelope span at or above which the enclosure top rails use 2040
    pub large_span_threshold_mm: f64,

    /// Height taken up by the foot bracket and levelling foot under each leg
    pub table_foot_offset_mm: f64,

    /// Clearance taken off each dimension of a standard door
    pub standard_door_clearance_mm: f64,

    /// Clearance taken off each leaf of a bi-fold door
    pub bifold_door_clearance_mm: f64,

    /// Height allowance for the top hinge line of an awning door
    pub awning_hinge_clearance_mm: f64,

    /// Fixed part of the inset taken off each edge of an in-channel panel
    pub panel_edge_clearance_mm: f64,

    /// Inset added per millimetre of sheet thickness, on each edge
    pub panel_inset_per_mm_thickness: f64,
}

impl Default for FabricationSettings {
    fn default() -> Self {
        FabricationSettings {
            large_span_threshold_mm: 1500.0,
            table_foot_offset_mm: 40.0,
            standard_door_clearance_mm: 4.0,
            bifold_door_clearance_mm: 6.0,
            awning_hinge_clearance_mm: 12.0,
            panel_edge_clearance_mm: 1.0,
            panel_inset_per_mm_thickness: 0.5,
        }
    }
}

impl FabricationSettings {
    /// Check every value is finite and positive
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("large_span_threshold_mm", self.large_span_threshold_mm),
            ("table_foot_offset_mm", self.table_foot_offset_mm),
            ("standard_door_clearance_mm", self.standard_door_clearance_mm),
            ("bifold_door_clearance_mm", self.bifold_door_clearance_mm),
            ("awning_hinge_clearance_mm", self.awning_hinge_clearance_mm),
            ("panel_edge_clearance_mm", self.panel_edge_clearance_mm),
            ("panel_inset_per_mm_thickness", self.panel_inset_per_mm_thickness),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_setting(field, value.to_string(), "Must be a positive number"));
            }
        }
        Ok(())
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: FabricationSettings = serde_json::from_str(json).map_err(CalcError::serialization)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn from_json_file(path: &Path) -> CalcResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read settings", path.display().to_string(), e.to_string()))?;
        let settings = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), "loaded fabrication settings");
        Ok(settings)
    }
}

/// Install the process-wide settings.
///
/// Must run before the first call to [`global`]; once the global has been
/// read or installed it cannot change.
pub fn install(settings: FabricationSettings) -> CalcResult<()> {
    settings.validate()?;
    GLOBAL.set(settings).map_err(|_| CalcError::Internal {
        message: "fabrication settings already initialized".to_string(),
    })?;
    tracing::debug!("installed process-wide fabrication settings");
    Ok(())
}

/// Process-wide settings, initialized to the defaults on first use
pub fn global() -> &'static FabricationSettings {
    GLOBAL.get_or_init(FabricationSettings::default)
}
