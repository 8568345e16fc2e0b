//! # Project Data Structures
//!
//! A `Project` groups the builds for one job. Projects serialize to `.fwp`
//! (Framewright project) files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, maker, job info, timestamps)
//! ├── settings: FabricationSettings (shop constants for this job)
//! └── items: HashMap<Uuid, BomRequest> (one request per build)
//! ```
//!
//! Only requests are stored. Results are recomputed on demand, so a file
//! never holds a manifest that disagrees with its own settings.
//!
//! ## Example
//!
//! ```rust
//! use bom_core::calculations::{BomRequest, MaterialConfiguration, StructuralDimensions, TableConfiguration};
//! use bom_core::project::Project;
//!
//! let mut project = Project::new("Sam Maker", "FW-0042", "Print Lab");
//! project.add_item(BomRequest::new(
//!     "Bench",
//!     StructuralDimensions::outside(1200.0, 700.0, 850.0),
//!     TableConfiguration::table_only(),
//!     MaterialConfiguration::default(),
//! ));
//!
//! let (_, bench) = project.find_by_label("bench").unwrap();
//! assert_eq!(bench.dimensions.length_mm, 1200.0);
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{BillOfMaterialsResult, BomRequest};
use crate::errors::{CalcError, CalcResult};
use crate::settings::FabricationSettings;

/// Current schema version for .fwp files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// File extension for project files
pub const PROJECT_EXTENSION: &str = "fwp";

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, maker, job info)
    pub meta: ProjectMetadata,

    /// Shop constants used for every item in this project
    #[serde(default)]
    pub settings: FabricationSettings,

    /// All build requests, keyed by UUID
    pub items: HashMap<Uuid, BomRequest>,
}

impl Project {
    /// Create a new empty project with default settings.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bom_core::project::Project;
    ///
    /// let project = Project::new("Sam Maker", "FW-0001", "Print Lab");
    /// assert_eq!(project.meta.maker, "Sam Maker");
    /// ```
    pub fn new(maker: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                maker: maker.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: FabricationSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add a request to the project.
    ///
    /// Returns the UUID assigned to the item.
    pub fn add_item(&mut self, item: BomRequest) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a request by UUID.
    ///
    /// Returns the removed request if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<BomRequest> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Get a request by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&BomRequest> {
        self.items.get(id)
    }

    /// Find a request by label (case-insensitive).
    ///
    /// Labels are not required to be unique; when several match, the one
    /// with the lowest UUID wins so the choice is stable across runs.
    pub fn find_by_label(&self, label: &str) -> CalcResult<(Uuid, &BomRequest)> {
        self.items
            .iter()
            .filter(|(_, item)| item.label.eq_ignore_ascii_case(label))
            .min_by_key(|(id, _)| **id)
            .map(|(id, item)| (*id, item))
            .ok_or_else(|| CalcError::ItemNotFound {
                label: label.to_string(),
            })
    }

    /// Items sorted by label, then UUID
    pub fn sorted_items(&self) -> Vec<(Uuid, &BomRequest)> {
        let mut items: Vec<(Uuid, &BomRequest)> = self.items.iter().map(|(id, item)| (*id, item)).collect();
        items.sort_by(|a, b| a.1.label.cmp(&b.1.label).then(a.0.cmp(&b.0)));
        items
    }

    /// Compute one item with this project's settings
    pub fn compute_item(&self, id: &Uuid) -> CalcResult<BillOfMaterialsResult> {
        let item = self.get_item(id).ok_or_else(|| CalcError::ItemNotFound { label: id.to_string() })?;
        item.compute_with(&self.settings)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of items in the project
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Person building the job
    pub maker: String,

    /// Job number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{MaterialConfiguration, StructuralDimensions, TableConfiguration};

    fn request(label: &str) -> BomRequest {
        BomRequest::new(
            label,
            StructuralDimensions::outside(1000.0, 600.0, 900.0),
            TableConfiguration::table_only(),
            MaterialConfiguration::default(),
        )
    }

    #[test]
    fn test_project_creation() {
        let project = Project::new("Sam Maker", "FW-0001", "Print Lab");
        assert_eq!(project.meta.maker, "Sam Maker");
        assert_eq!(project.meta.job_id, "FW-0001");
        assert_eq!(project.meta.client, "Print Lab");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
        assert_eq!(project.settings, FabricationSettings::default());
    }

    #[test]
    fn test_project_serialization() {
        let mut project = Project::new("Sam Maker", "FW-0042", "Print Lab");
        project.add_item(request("Bench"));
        let json = serde_json::to_string_pretty(&project).unwrap();

        assert!(json.contains("Sam Maker"));
        assert!(json.contains("large_span_threshold_mm"));

        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.job_id, "FW-0042");
        assert_eq!(roundtrip.items, project.items);
    }

    #[test]
    fn test_missing_settings_take_defaults() {
        let project = Project::new("A", "B", "C");
        let mut value = serde_json::to_value(&project).unwrap();
        value.as_object_mut().unwrap().remove("settings");
        let parsed: Project = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.settings, FabricationSettings::default());
    }

    #[test]
    fn test_add_remove_item() {
        let mut project = Project::new("Maker", "FW-0001", "Client");

        let id = project.add_item(request("Bench"));
        assert_eq!(project.item_count(), 1);
        assert!(project.get_item(&id).is_some());

        let removed = project.remove_item(&id);
        assert!(removed.is_some());
        assert_eq!(project.item_count(), 0);
        assert!(project.remove_item(&id).is_none());
    }

    #[test]
    fn test_find_by_label() {
        let mut project = Project::new("Maker", "FW-0001", "Client");
        let bench = project.add_item(request("Bench"));
        project.add_item(request("Enclosure"));

        let (id, item) = project.find_by_label("BENCH").unwrap();
        assert_eq!(id, bench);
        assert_eq!(item.label, "Bench");

        let err = project.find_by_label("Shelf").unwrap_err();
        assert_eq!(err.error_code(), "ITEM_NOT_FOUND");
    }

    #[test]
    fn test_sorted_items() {
        let mut project = Project::new("Maker", "FW-0001", "Client");
        project.add_item(request("Zeta"));
        project.add_item(request("Alpha"));
        let labels: Vec<_> = project.sorted_items().iter().map(|(_, i)| i.label.clone()).collect();
        assert_eq!(labels, vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn test_compute_item_uses_project_settings() {
        let mut project = Project::new("Maker", "FW-0001", "Client");
        project.settings.table_foot_offset_mm = 100.0;
        let id = project.add_item(request("Bench"));

        let bom = project.compute_item(&id).unwrap();
        assert_eq!(bom.table.computed().unwrap().leg_length_mm, 800.0);

        let missing = project.compute_item(&Uuid::new_v4()).unwrap_err();
        assert_eq!(missing.error_code(), "ITEM_NOT_FOUND");
    }
}
