//! # Radiant CLI Application
//!
//! Terminal front end for the radiant_core design engine: interactive
//! project entry, full design reports, and .rad file load/save.
//!
//! ```text
//! radiant_cli              interactive project entry
//! radiant_cli --demo       report a built-in two-room example
//! radiant_cli --load FILE  report an existing .rad project
//! ```

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use radiant_core::calculations::{calculate_room, RoomResults};
use radiant_core::display::{
    area_from_display, area_unit, format_area, format_length, format_load, format_power,
    format_spacing, format_spacing_summary, format_temperature, length_from_display, length_unit,
    temp_from_display, temp_unit, u_value_unit,
};
use radiant_core::errors::{CalcError, CalcResult};
use radiant_core::file_io::{load_project_with_lock_check, save_project, FileLock};
use radiant_core::layout::{build_layout, FloorLayout, TileKind};
use radiant_core::materials::{select_materials, MaterialSelection};
use radiant_core::normalize::{normalize, SettingsSi};
use radiant_core::presets::{
    FloorCover, GlazingType, InstallMethod, InsulationPeriod, JoistSpacing, Region, UnitSystem,
};
use radiant_core::project::{Project, ProjectSettings, RoomInput};
use radiant_core::summary::{aggregate, ProjectSummary};

const RULE: &str = "══════════════════════════════════════════════";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let result = match args.first().map(String::as_str) {
        None => run_interactive(),
        Some("--demo") => print_report(&demo_project()),
        Some("--load") => match args.get(1) {
            Some(path) => run_load(Path::new(path)),
            None => {
                eprintln!("--load requires a file path");
                print_usage();
                return ExitCode::FAILURE;
            }
        },
        Some("--help") | Some("-h") => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Some(other) => {
            eprintln!("Unknown option: {}", other);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("Usage: radiant_cli [OPTION]");
    println!();
    println!("  (no option)    interactive project entry");
    println!("  --demo         report a built-in two-room example");
    println!("  --load FILE    report an existing .rad project file");
    println!("  --help         show this help");
}

fn print_error(error: &CalcError) {
    eprintln!("Error: {}", error);
    if error.is_recoverable() {
        eprintln!("The file is in use; retry once the other session closes it.");
    }
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

// ============================================================================
// Commands
// ============================================================================

fn run_interactive() -> CalcResult<()> {
    println!("Radiant CLI - Floor Heating Design Calculator");
    println!("=============================================");
    println!();

    let name = prompt_string("Project name [New Project]: ", "New Project");
    let contractor = prompt_string("Contractor []: ", "");
    let address = prompt_string("Site address []: ", "");
    let mut project = Project::new(name, contractor, address);

    let region = prompt_region();
    project.settings = ProjectSettings::new_for_region(region);
    let system = region.unit_system();

    project.settings.insulation_period = Some(prompt_period());

    let outdoor_default = match system {
        UnitSystem::Metric => -3.0,
        UnitSystem::Imperial => 27.0,
    };
    project.settings.outdoor_design_temp = Some(prompt_f64(
        &format!(
            "Outdoor design temperature ({}) [{}]: ",
            temp_unit(system),
            outdoor_default
        ),
        outdoor_default,
    ));
    project.settings.indoor_temp = prompt_f64(
        &format!(
            "Indoor design temperature ({}) [{}]: ",
            temp_unit(system),
            project.settings.indoor_temp
        ),
        project.settings.indoor_temp,
    );

    let typical_ach = region.defaults().infiltration_ach;
    if let Some(ach) = prompt_optional_f64(&format!(
        "Infiltration ACH (typical {:.2}, Enter for period preset): ",
        typical_ach
    )) {
        project.settings.infiltration_ach = Some(ach);
    }

    if let Some(glazing) = prompt_glazing() {
        project.settings.glazing = Some(glazing);
    }

    if prompt_bool("Override fabric U-values? [y/N]: ", false) {
        let unit = u_value_unit(system);
        project.settings.u_overrides.wall =
            prompt_optional_f64(&format!("  Wall U ({}, Enter to keep preset): ", unit));
        project.settings.u_overrides.window =
            prompt_optional_f64(&format!("  Window U ({}, Enter to keep preset): ", unit));
        project.settings.u_overrides.door =
            prompt_optional_f64(&format!("  Door U ({}, Enter to keep preset): ", unit));
        project.settings.u_overrides.roof =
            prompt_optional_f64(&format!("  Roof U ({}, Enter to keep preset): ", unit));
        project.settings.u_overrides.floor =
            prompt_optional_f64(&format!("  Floor U ({}, Enter to keep preset): ", unit));
    }

    loop {
        println!();
        println!("--- Room {} ---", project.room_count() + 1);
        let room = prompt_room(project.room_count() + 1, system);
        project.add_room(room);
        if !prompt_bool("Add another room? [y/N]: ", false) {
            break;
        }
    }

    println!();
    print_report(&project)?;

    println!();
    let path = prompt_string("Save project to (.rad path, Enter to skip): ", "");
    if !path.is_empty() {
        save_with_lock(&project, Path::new(&path))?;
        println!("Saved {}", path);
    }

    Ok(())
}

fn run_load(path: &Path) -> CalcResult<()> {
    let (project, lock) = load_project_with_lock_check(path)?;
    if let Some(info) = lock {
        println!(
            "Note: {} is locked by {} ({}) since {}",
            path.display(),
            info.user_id,
            info.machine,
            info.locked_at.to_rfc3339()
        );
        println!();
    }
    print_report(&project)
}

fn save_with_lock(project: &Project, path: &Path) -> CalcResult<()> {
    let user = env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "radiant".to_string());
    let _lock = FileLock::acquire(path, user)?;
    save_project(project, path)
}

fn demo_project() -> Project {
    let mut project = Project::new("Demo House", "Radiant Demo", "1 Example Lane");
    project.settings = ProjectSettings::new_for_region(Region::Uk);
    project.settings.insulation_period = Some(InsulationPeriod::Pre1980);
    project.settings.outdoor_design_temp = Some(-5.0);

    project.add_room(RoomInput {
        name: "Kitchen".to_string(),
        length_m: 4.0,
        width_m: 3.0,
        height_m: 2.4,
        exterior_wall_length_m: 7.0,
        window_area_m2: 1.5,
        door_area_m2: 0.0,
        ceiling_exposed: false,
        floor_exposed: false,
        floor_on_ground: false,
        setpoint_c: None,
        install_method: InstallMethod::Drilling,
        joist_spacing: Some(JoistSpacing::In16),
        floor_cover: None,
    });

    project.add_room(RoomInput {
        name: "Bedroom".to_string(),
        length_m: 4.0,
        width_m: 3.5,
        height_m: 2.4,
        exterior_wall_length_m: 7.5,
        window_area_m2: 1.8,
        door_area_m2: 0.0,
        ceiling_exposed: true,
        floor_exposed: false,
        floor_on_ground: false,
        setpoint_c: Some(18.0),
        install_method: InstallMethod::HangingSnake,
        joist_spacing: Some(JoistSpacing::In16),
        floor_cover: Some(FloorCover::EngineeredWood),
    });

    project
}

// ============================================================================
// Report
// ============================================================================

fn print_report(project: &Project) -> CalcResult<()> {
    let si = normalize(&project.settings)?;
    let system = project.settings.region.unit_system();

    print_header(project, &si, system);

    for room in &project.rooms {
        let results = calculate_room(room, &si)?;
        let materials = select_materials(&results, room)?;
        let layout = match room.joist_spacing {
            Some(joist) if room.install_method.requires_joist_spacing() => Some(build_layout(
                room.length_m,
                room.width_m,
                joist,
                materials.load_band,
                room.install_method,
            )?),
            _ => None,
        };
        print_room(room, &results, &materials, layout.as_ref(), system);
    }

    let summary = aggregate(&project.rooms, &si)?;
    print_summary(&summary, system);

    println!();
    println!("JSON Output (for scripts/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&summary) {
        println!("{}", json);
    }

    Ok(())
}

fn print_header(project: &Project, si: &SettingsSi, system: UnitSystem) {
    println!("{}", RULE);
    println!("  PROJECT: {}", project.meta.name);
    println!("{}", RULE);
    if !project.meta.contractor.is_empty() {
        println!("  Contractor: {}", project.meta.contractor);
    }
    if !project.meta.address.is_empty() {
        println!("  Site:       {}", project.meta.address);
    }
    println!();
    println!("Settings:");
    println!("  Region:   {}", project.settings.region.display_name());
    println!("  Standard: {}", project.settings.standards_mode.display_name());
    println!("  Period:   {}", si.insulation_period);
    println!(
        "  Indoor:   {}   Outdoor: {}",
        format_temperature(si.indoor_temp_c, system),
        format_temperature(si.outdoor_temp_c, system)
    );
}

fn print_room(
    room: &RoomInput,
    results: &RoomResults,
    materials: &MaterialSelection,
    layout: Option<&FloorLayout>,
    system: UnitSystem,
) {
    println!();
    println!("{}", RULE);
    println!("  ROOM: {}", room.name);
    println!("{}", RULE);
    println!();
    println!("Geometry:");
    println!(
        "  Floor:    {} ({} x {})",
        format_area(room.floor_area_m2(), system),
        format_length(room.length_m, system),
        format_length(room.width_m, system)
    );
    println!("  Method:   {}", room.install_method);
    if let Some(joist) = room.joist_spacing {
        println!("  Joists:   {} on centers", joist.display_name());
    }
    if let Some(cover) = room.floor_cover {
        println!("  Covering: {}", cover);
    }
    println!();
    println!("Heat Loss:");
    println!("  Fabric:      {}", format_power(results.q_fabric_w, system));
    println!("  Ventilation: {}", format_power(results.q_vent_w, system));
    println!("  Bridging:    {}", format_power(results.q_psi_w, system));
    if results.q_ground_w > 0.0 {
        println!("  Ground:      {}", format_power(results.q_ground_w, system));
    }
    println!("  Subtotal:    {}", format_power(results.q_before_factors_w, system));
    println!(
        "  Design:      {}  ({})",
        format_power(results.q_after_factors_w, system),
        format_load(results.load_w_per_m2, system)
    );
    println!();
    println!("Water:");
    println!(
        "  Supply temperature: {}",
        format_temperature(results.water_temp_c, system)
    );
    if let (Some(r), Some(u)) = (results.cover_r_value, results.cover_u_value) {
        println!("  Covering R {:.2} (U {:.1}) raises the supply target", r, u);
    }
    println!();
    println!("Materials:");
    println!(
        "  Band:   {} ({})",
        materials.load_band,
        materials.load_band.code()
    );
    println!("  Tube:   {}", materials.tube_size);
    println!("  Tubing: {} ft ({} m)", materials.tubing_ft, materials.tubing_m);
    match system {
        UnitSystem::Metric => {
            println!("  Loops:  {} x {:.1} m", materials.loops, materials.m_per_loop)
        }
        UnitSystem::Imperial => {
            println!("  Loops:  {} x {:.1} ft", materials.loops, materials.ft_per_loop)
        }
    }
    println!(
        "  Fins:   {} pairs ({} halves)",
        materials.fin_pairs, materials.fin_halves
    );
    if let Some(mm) = materials.fin_spacing_mm {
        println!("  Fin spacing: {}", format_spacing(mm, system));
    }
    if let Some(mm) = materials.tubing_spacing_mm {
        println!("  Tube pitch:  {}", format_spacing(mm, system));
    }
    if materials.hanging_supports > 0 {
        println!("  Supports: {}", materials.hanging_supports);
    }
    if materials.open_web_clips > 0 {
        println!("  Clips:    {}", materials.open_web_clips);
    }
    if materials.topdown_clips > 0 {
        println!(
            "  Clips:    {}   Brackets: {}",
            materials.topdown_clips, materials.topdown_brackets
        );
    }
    if materials.supplemental_recommended {
        println!(
            "  [!] Supplemental heat recommended ({:.1} BTU/hr·ft²)",
            materials.load_btu_hr_ft2
        );
    }

    if let Some(layout) = layout {
        let fins = tile_count(layout, TileKind::FinBlock);
        let bridges = tile_count(layout, TileKind::PipeBridge);
        let caps = tile_count(layout, TileKind::EndCap);
        println!();
        println!("Layout:");
        println!(
            "  Grid:     {} x {} blocks ({:.2} m x {:.2} m each)",
            layout.cols, layout.rows, layout.block_width_m, layout.block_height_m
        );
        println!(
            "  Coverage: {} of {}",
            format_area(layout.covered_area_m2, system),
            format_area(room.floor_area_m2(), system)
        );
        println!(
            "  Tiles:    {} fin blocks, {} pipe bridges, {} end caps",
            fins, bridges, caps
        );
    }

    for warning in &results.warnings {
        println!();
        println!("  [!] {}", warning);
    }
}

fn tile_count(layout: &FloorLayout, kind: TileKind) -> usize {
    layout.tiles.iter().filter(|t| t.kind == kind).count()
}

fn print_summary(summary: &ProjectSummary, system: UnitSystem) {
    println!();
    println!("{}", RULE);
    println!("  PROJECT SUMMARY");
    println!("{}", RULE);
    println!();
    println!("  Rooms:        {}", summary.room_count);
    println!("  Floor area:   {}", format_area(summary.total_floor_area_m2, system));
    println!("  Heat loss:    {}", format_power(summary.total_heat_loss_w, system));
    println!("  Avg density:  {}", format_load(summary.avg_load_w_per_m2, system));
    println!("  Avg water:    {}", format_temperature(summary.avg_water_temp_c, system));
    println!("  Tubing:       {}", format_length(summary.total_tubing_m as f64, system));
    println!("  Fin pairs:    {}", summary.total_fin_pairs);
    println!("  Clips:        {}", summary.total_clips);
    println!("  Loops:        {}", summary.total_loops);
    println!("  Fin spacing:  {}", format_spacing_summary(summary.fin_spacing, system));
    println!("  Tube pitch:   {}", format_spacing_summary(summary.tubing_spacing, system));
    if !summary.notes.is_empty() {
        println!();
        println!("  Notes:");
        for note in &summary.notes {
            println!("  [!] {}", note);
        }
    }
}

// ============================================================================
// Prompts
// ============================================================================

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt).parse().unwrap_or(default)
}

fn prompt_optional_f64(prompt: &str) -> Option<f64> {
    let input = prompt_line(prompt);
    if input.is_empty() {
        None
    } else {
        input.parse().ok()
    }
}

fn prompt_string(prompt: &str, default: &str) -> String {
    let input = prompt_line(prompt);
    if input.is_empty() {
        default.to_string()
    } else {
        input
    }
}

fn prompt_bool(prompt: &str, default: bool) -> bool {
    match prompt_line(prompt).to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}

fn prompt_region() -> Region {
    println!("Regions:");
    for region in Region::ALL {
        println!("  {:<12} {}", region.code(), region.display_name());
    }
    loop {
        let input = prompt_string("Region [US]: ", "US");
        match Region::from_str_flexible(&input) {
            Ok(region) => return region,
            Err(e) => println!("  {}", e),
        }
    }
}

fn prompt_period() -> InsulationPeriod {
    println!("Construction periods: PRE_1980, 1980-2000, 2001-2015, 2016+");
    loop {
        let input = prompt_string("Period [2001-2015]: ", "2001-2015");
        match InsulationPeriod::from_str_flexible(&input) {
            Ok(period) => return period,
            Err(e) => println!("  {}", e),
        }
    }
}

fn prompt_glazing() -> Option<GlazingType> {
    loop {
        let input = prompt_line("Glazing (single/double/triple, Enter to skip): ");
        if input.is_empty() {
            return None;
        }
        match GlazingType::from_str_flexible(&input) {
            Ok(glazing) => return Some(glazing),
            Err(e) => println!("  {}", e),
        }
    }
}

fn prompt_method() -> InstallMethod {
    println!("Install methods:");
    for method in InstallMethod::ALL {
        println!("  {:<14} {}", method.code(), method.display_name());
    }
    loop {
        let input = prompt_string("Method [DRILLING]: ", "DRILLING");
        match InstallMethod::from_str_flexible(&input) {
            Ok(method) => return method,
            Err(e) => println!("  {}", e),
        }
    }
}

fn prompt_joist() -> JoistSpacing {
    loop {
        let input = prompt_string("Joist spacing (12/16/19/24 in) [16]: ", "16");
        match JoistSpacing::from_str_flexible(&input) {
            Ok(joist) => return joist,
            Err(e) => println!("  {}", e),
        }
    }
}

fn prompt_cover() -> Option<FloorCover> {
    println!("Floor coverings (Enter to skip):");
    for cover in FloorCover::ALL {
        println!("  {:<22} R {:.2}", cover.display_name(), cover.r_value());
    }
    loop {
        let input = prompt_line("Covering []: ");
        if input.is_empty() {
            return None;
        }
        match FloorCover::from_str_flexible(&input) {
            Ok(cover) => return Some(cover),
            Err(e) => println!("  {}", e),
        }
    }
}

fn prompt_room(index: usize, system: UnitSystem) -> RoomInput {
    let default_name = format!("Room {}", index);
    let name = prompt_string(&format!("Room name [{}]: ", default_name), &default_name);

    let unit = length_unit(system);
    let (dl, dw, dh) = match system {
        UnitSystem::Metric => (4.0, 3.0, 2.4),
        UnitSystem::Imperial => (13.0, 10.0, 8.0),
    };
    let length_display = prompt_f64(&format!("Length ({}) [{}]: ", unit, dl), dl);
    let width_display = prompt_f64(&format!("Width ({}) [{}]: ", unit, dw), dw);
    let height_display = prompt_f64(&format!("Ceiling height ({}) [{}]: ", unit, dh), dh);

    let exterior_default = length_display + width_display;
    let exterior_display = prompt_f64(
        &format!("Exterior wall length ({}) [{:.1}]: ", unit, exterior_default),
        exterior_default,
    );

    let window_default = match system {
        UnitSystem::Metric => 1.5,
        UnitSystem::Imperial => 16.0,
    };
    let window_display = prompt_f64(
        &format!("Window area ({}) [{}]: ", area_unit(system), window_default),
        window_default,
    );
    let door_display = prompt_f64(&format!("Exterior door area ({}) [0]: ", area_unit(system)), 0.0);

    let ceiling_exposed = prompt_bool("Ceiling below roof or unheated space? [y/N]: ", false);
    let floor_exposed = prompt_bool("Floor over outside or unheated space? [y/N]: ", false);
    let floor_on_ground = prompt_bool("Floor on ground (slab on grade)? [y/N]: ", false);

    let setpoint_c = prompt_optional_f64(&format!(
        "Room setpoint ({}, Enter for project indoor): ",
        temp_unit(system)
    ))
    .map(|value| temp_from_display(value, system));

    let install_method = prompt_method();
    let joist_spacing = if install_method.requires_joist_spacing() {
        Some(prompt_joist())
    } else {
        None
    };
    let floor_cover = prompt_cover();

    RoomInput {
        name,
        length_m: length_from_display(length_display, system),
        width_m: length_from_display(width_display, system),
        height_m: length_from_display(height_display, system),
        exterior_wall_length_m: length_from_display(exterior_display, system),
        window_area_m2: area_from_display(window_display, system),
        door_area_m2: area_from_display(door_display, system),
        ceiling_exposed,
        floor_exposed,
        floor_on_ground,
        setpoint_c,
        install_method,
        joist_spacing,
        floor_cover,
    }
}
