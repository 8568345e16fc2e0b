//! # bom_core - Extrusion Bill-of-Materials Engine
//!
//! `bom_core` turns the size of a workbench or enclosure built from 20-series
//! aluminium extrusion into a manifest of cut lengths, hardware counts and
//! sheet panel sizes. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions from a request to a manifest
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types that name the offending field
//! - **Deterministic**: identical requests give identical output
//!
//! ## Quick Start
//!
//! ```rust
//! use bom_core::calculations::{
//!     compute_bill_of_materials, MaterialConfiguration, StructuralDimensions, TableConfiguration,
//! };
//!
//! let dims = StructuralDimensions::outside(1000.0, 600.0, 900.0);
//! let config = TableConfiguration {
//!     include_table: true,
//!     include_enclosure: true,
//!     mount_enclosure_to_table: true,
//!     ..Default::default()
//! };
//!
//! let bom = compute_bill_of_materials(&dims, &config, &MaterialConfiguration::default()).unwrap();
//! let json = serde_json::to_string_pretty(&bom).unwrap();
//! assert!(json.contains("\"status\": \"computed\""));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - request types and the section calculators
//! - [`profiles`] - extrusion profile catalog
//! - [`hardware`] - hardware parts and counted lists
//! - [`cut_list`] - extrusion segments, length totals and the merged cut list
//! - [`settings`] - tunable shop constants
//! - [`project`] - project container for a job's builds
//! - [`units`] - type-safe unit wrappers
//! - [`errors`] - structured error types
//! - [`file_io`] - file operations with atomic saves and locking

pub mod calculations;
pub mod cut_list;
pub mod errors;
#[cfg(not(target_arch = "wasm32"))]
pub mod file_io;
pub mod hardware;
pub mod profiles;
pub mod project;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute_bill_of_materials, BillOfMaterialsResult, BomRequest};
pub use errors::{CalcError, CalcResult};
#[cfg(not(target_arch = "wasm32"))]
pub use file_io::{load_project, save_project, FileLock};
pub use project::{Project, ProjectMetadata};
pub use settings::FabricationSettings;
