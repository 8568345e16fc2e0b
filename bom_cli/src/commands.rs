//! Subcommand implementations

use std::path::Path;

use bom_core::calculations::{
    BillOfMaterialsResult, BomRequest, DoorConfiguration, MaterialConfiguration, PanelConfig, PanelMount,
    StructuralDimensions, TableConfiguration,
};
use bom_core::errors::{CalcError, CalcResult};
use bom_core::file_io::{load_project, load_project_with_lock_check, save_project, FileLock, LockInfo};
use bom_core::profiles::ExtrusionProfile;
use bom_core::project::Project;
use bom_core::settings::{self, FabricationSettings};
use bom_core::units::{Inches, Millimeters};
use serde::Serialize;
use serde_json::json;

use crate::args::{CalcArgs, GlobalOpts, ProjectCommands, RunArgs};
use crate::report;

/// `framewright calc`
pub fn calc(args: CalcArgs, global: &GlobalOpts) -> CalcResult<()> {
    let settings = active_settings(global)?;
    let request = request_from_args(&args);
    let bom = request.compute_with(settings)?;

    if let Some(path) = &args.save {
        add_to_project(path, request.clone())?;
    }
    print_bom(&request.label, &bom, global)
}

/// `framewright run <request.json>`
pub fn run(args: RunArgs, global: &GlobalOpts) -> CalcResult<()> {
    let settings = active_settings(global)?;
    let contents = std::fs::read_to_string(&args.request)
        .map_err(|e| CalcError::file_error("read request", args.request.display().to_string(), e.to_string()))?;
    let request = BomRequest::from_json(&contents)?;
    tracing::debug!(label = %request.label, "loaded request");

    let bom = request.compute_with(settings)?;
    print_bom(&request.label, &bom, global)
}

/// `framewright project ...`
pub fn project(cmd: ProjectCommands, global: &GlobalOpts) -> CalcResult<()> {
    match cmd {
        ProjectCommands::New {
            path,
            maker,
            job,
            client,
        } => project_new(&path, maker, job, client, global),
        ProjectCommands::List { path } => project_list(&path, global),
        ProjectCommands::Calc { path, label } => project_calc(&path, label.as_deref(), global),
    }
}

/// `framewright profiles`
pub fn profiles(global: &GlobalOpts) -> CalcResult<()> {
    if global.json {
        let catalog: Vec<_> = ExtrusionProfile::ALL
            .iter()
            .map(|p| {
                json!({
                    "designation": p.designation(),
                    "width_mm": p.width_mm(),
                    "height_mm": p.height_mm(),
                    "slot_count": p.slot_count(),
                })
            })
            .collect();
        println!("{}", to_json(&catalog)?);
    } else {
        print!("{}", report::render_profiles());
    }
    Ok(())
}

/// Settings from `--settings` when given, installed as the process-wide
/// settings; otherwise the defaults.
fn active_settings(global: &GlobalOpts) -> CalcResult<&'static FabricationSettings> {
    if let Some(path) = &global.settings {
        let loaded = FabricationSettings::from_json_file(path)?;
        settings::install(loaded)?;
    }
    Ok(settings::global())
}

fn request_from_args(args: &CalcArgs) -> BomRequest {
    let to_mm = |value: f64| {
        if args.inches {
            Millimeters::from(Inches(value)).value()
        } else {
            value
        }
    };
    let dimensions = StructuralDimensions {
        length_mm: to_mm(args.length),
        width_mm: to_mm(args.width),
        height_mm: to_mm(args.height),
        is_outside_dimension: !args.inside,
    };

    let door_faces = args.doors.clone().unwrap_or_default();
    let table = TableConfiguration {
        include_table: args.table,
        include_enclosure: args.enclosure,
        mount_enclosure_to_table: args.mount,
        include_doors: args.doors.is_some(),
        door_config: DoorConfiguration::for_faces(&door_faces, args.door_type),
    };

    let panel_faces = args.panels.clone().unwrap_or_default();
    let material = MaterialConfiguration {
        material_type: args.material.clone(),
        thickness_mm: args.thickness,
        include_panels: args.panels.is_some(),
        panel_config: PanelConfig::for_faces(&panel_faces),
        mount: if args.surface_panels {
            PanelMount::Surface
        } else {
            PanelMount::InChannel
        },
    };

    BomRequest::new(args.label.clone().unwrap_or_default(), dimensions, table, material)
}

fn add_to_project(path: &Path, request: BomRequest) -> CalcResult<()> {
    let lock = FileLock::acquire(path, current_user())?;
    let mut project = if path.exists() {
        load_project(path)?
    } else {
        tracing::info!(path = %path.display(), "creating project");
        Project::default()
    };

    let label = request.label.clone();
    let id = project.add_item(request);
    save_project(&project, path)?;
    drop(lock);

    tracing::info!(%id, label = %label, "build saved");
    eprintln!("Saved '{}' to {}", label, path.display());
    Ok(())
}

fn project_new(path: &Path, maker: String, job: String, client: String, global: &GlobalOpts) -> CalcResult<()> {
    if path.exists() {
        return Err(CalcError::file_error("create", path.display().to_string(), "file already exists"));
    }
    let mut project = Project::new(maker, job, client);
    project.settings = active_settings(global)?.clone();
    save_project(&project, path)?;

    if global.json {
        println!("{}", to_json(&project.meta)?);
    } else {
        println!("Created project {}", path.display());
    }
    Ok(())
}

fn project_list(path: &Path, global: &GlobalOpts) -> CalcResult<()> {
    let project = load_checking_lock(path)?;
    let items = project.sorted_items();

    if global.json {
        let listing: Vec<_> = items
            .iter()
            .map(|(id, request)| json!({ "id": id, "label": request.label, "request": request }))
            .collect();
        println!("{}", to_json(&listing)?);
        return Ok(());
    }

    println!(
        "{} ({}) - {} build(s)",
        project.meta.job_id,
        project.meta.client,
        project.item_count()
    );
    for (_, request) in items {
        let dims = &request.dimensions;
        println!(
            "  {:<24} {} x {} x {} mm ({})",
            request.label,
            dims.length_mm,
            dims.width_mm,
            dims.height_mm,
            if dims.is_outside_dimension { "outside" } else { "inside" }
        );
    }
    Ok(())
}

fn project_calc(path: &Path, label: Option<&str>, global: &GlobalOpts) -> CalcResult<()> {
    let project = load_checking_lock(path)?;
    if global.settings.is_some() {
        tracing::info!("project settings take precedence over --settings");
    }

    let items = match label {
        Some(label) => vec![project.find_by_label(label)?],
        None => project.sorted_items(),
    };

    let mut results = Vec::with_capacity(items.len());
    for (id, request) in items {
        let bom = request.compute_with(&project.settings)?;
        results.push((id, request, bom));
    }

    if global.json {
        let listing: Vec<_> = results
            .iter()
            .map(|(id, request, bom)| json!({ "id": id, "label": request.label, "bom": bom }))
            .collect();
        println!("{}", to_json(&listing)?);
    } else {
        for (_, request, bom) in &results {
            print!("{}", report::render(&request.label, bom));
        }
    }
    Ok(())
}

/// Load for reading, warning when another process holds the lock
fn load_checking_lock(path: &Path) -> CalcResult<Project> {
    let (project, lock) = load_project_with_lock_check(path)?;
    if let Some(LockInfo {
        user_id,
        machine,
        locked_at,
        ..
    }) = lock
    {
        tracing::warn!(%user_id, %machine, %locked_at, "project is locked for editing");
        eprintln!(
            "Note: {} is being edited by {} on {} since {}; results may change",
            path.display(),
            user_id,
            machine,
            locked_at.format("%Y-%m-%d %H:%M UTC")
        );
    }
    Ok(project)
}

fn print_bom(label: &str, bom: &BillOfMaterialsResult, global: &GlobalOpts) -> CalcResult<()> {
    if global.json {
        println!("{}", to_json(bom)?);
    } else {
        print!("{}", report::render(label, bom));
    }
    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> CalcResult<String> {
    serde_json::to_string_pretty(value).map_err(CalcError::serialization)
}

fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "framewright".to_string())
}
