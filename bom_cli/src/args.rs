//! CLI argument definitions using clap derive

use std::path::PathBuf;

use bom_core::calculations::{DoorType, Face};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "framewright")]
#[command(author, version, about = "Extrusion table and enclosure bill-of-materials calculator")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Fabrication settings JSON file (missing fields take their defaults)
    #[arg(long, global = true, env = "FRAMEWRIGHT_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print JSON instead of the text report
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute a bill of materials from command-line dimensions
    Calc(CalcArgs),

    /// Compute a bill of materials from a request JSON file
    Run(RunArgs),

    /// Project file management
    #[command(subcommand)]
    Project(ProjectCommands),

    /// List the extrusion profile catalog
    Profiles,
}

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Length along the front face
    #[arg(long)]
    pub length: f64,

    /// Depth front to back
    #[arg(long)]
    pub width: f64,

    /// Overall height
    #[arg(long)]
    pub height: f64,

    /// Length, width and height are in inches (thickness stays in mm)
    #[arg(long)]
    pub inches: bool,

    /// Length and width are the inner cavity rather than the outer frame
    #[arg(long)]
    pub inside: bool,

    /// Include the table
    #[arg(long)]
    pub table: bool,

    /// Include the enclosure
    #[arg(long)]
    pub enclosure: bool,

    /// Mount the enclosure on the table
    #[arg(long)]
    pub mount: bool,

    /// Faces that get a door (front, back, left, right)
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    pub doors: Option<Vec<Face>>,

    /// Door style: standard, bifold or awning
    #[arg(long, default_value = "standard")]
    pub door_type: DoorType,

    /// Faces that get a sheet panel (top, bottom, left, right, back, front)
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    pub panels: Option<Vec<Face>>,

    /// Panel material name
    #[arg(long, default_value = "acrylic")]
    pub material: String,

    /// Panel thickness in mm
    #[arg(long, default_value_t = 3.0)]
    pub thickness: f64,

    /// Screw panels over the outside of the frame instead of into the slots
    #[arg(long)]
    pub surface_panels: bool,

    /// Add the request to this project file (created if missing)
    #[arg(long, requires = "label")]
    pub save: Option<PathBuf>,

    /// Label for the build
    #[arg(long)]
    pub label: Option<String>,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Request JSON file
    pub request: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// Create an empty project file
    New {
        /// Path to the new .fwp file
        path: PathBuf,

        /// Person building the job
        #[arg(long, default_value = "")]
        maker: String,

        /// Job number
        #[arg(long, default_value = "")]
        job: String,

        /// Client name
        #[arg(long, default_value = "")]
        client: String,
    },

    /// List the builds in a project
    List {
        /// Project file
        path: PathBuf,
    },

    /// Compute builds in a project with the project's settings
    Calc {
        /// Project file
        path: PathBuf,

        /// Only this build (case-insensitive)
        #[arg(long)]
        label: Option<String>,
    },
}
