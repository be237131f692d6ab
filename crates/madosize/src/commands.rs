use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info, warn};

use madosize_core::events;
use madosize_core::{
    Display, DisplaySet, FocusLocator, FrameField, FrameSpace, MadoConfig, SystemDisplays,
    SystemFocusLocator, WindowHandle, WindowSnapshot, current_focused_window,
};

use crate::table;

const NO_FOCUSED_WINDOW: &str = "No focused window available";

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let config = load_config_with_warning();

    match matches.subcommand() {
        Some(("show", sub_matches)) => handle_show_command(sub_matches, &config),
        Some(("move", sub_matches)) => handle_move_command(sub_matches, &config),
        Some(("resize", sub_matches)) => handle_resize_command(sub_matches, &config),
        Some(("center", sub_matches)) => handle_center_command(sub_matches, &config),
        Some(("maximize", sub_matches)) => handle_maximize_command(sub_matches, &config),
        Some(("list", sub_matches)) => handle_list_command(sub_matches, &config),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

fn load_config_with_warning() -> MadoConfig {
    match MadoConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.madosize/config.toml and ./.madosize/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            MadoConfig::default()
        }
    }
}

/// JSON shape of `show`, so "nothing selected" is still a valid document.
#[derive(Serialize)]
struct ShowOutput<'a> {
    selected: bool,
    window: Option<&'a WindowSnapshot>,
}

fn handle_show_command(
    matches: &ArgMatches,
    config: &MadoConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json") || config.json_output();
    let space: FrameSpace = matches
        .get_one::<String>("space")
        .map(String::as_str)
        .unwrap_or("screen")
        .parse()?;

    info!(
        event = "cli.show_started",
        space = %space,
        json_output = json_output
    );

    let locator = SystemFocusLocator::from_config(config);
    let snapshot = current_focused_window(&locator).and_then(|handle| handle.snapshot(space));

    if json_output {
        let output = ShowOutput {
            selected: snapshot.is_some(),
            window: snapshot.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        match &snapshot {
            Some(snapshot) => print_snapshot(snapshot),
            None => println!("Mado: Nothing Selected"),
        }
    }

    info!(event = "cli.show_completed", selected = snapshot.is_some());
    Ok(())
}

fn handle_move_command(
    matches: &ArgMatches,
    config: &MadoConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let changes = collect_changes(
        matches,
        &[("x", FrameField::X), ("y", FrameField::Y)],
    );
    apply_frame_change("move", matches, config, |handle| handle.set_fields(&changes))
}

fn handle_resize_command(
    matches: &ArgMatches,
    config: &MadoConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let changes = collect_changes(
        matches,
        &[("width", FrameField::Width), ("height", FrameField::Height)],
    );

    if let Some((field, value)) = changes.iter().find(|(_, value)| *value < 0.0) {
        eprintln!("Invalid size: {:?} must not be negative (got {})", field, value);
        error!(event = "cli.resize_invalid_size", value = value);
        return Err("Invalid size".into());
    }

    apply_frame_change("resize", matches, config, |handle| handle.set_fields(&changes))
}

fn handle_center_command(
    matches: &ArgMatches,
    config: &MadoConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    apply_frame_change("center", matches, config, WindowHandle::center)
}

fn handle_maximize_command(
    matches: &ArgMatches,
    config: &MadoConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    apply_frame_change("maximize", matches, config, WindowHandle::maximize)
}

/// Pair each present argument with the field it sets.
fn collect_changes(matches: &ArgMatches, fields: &[(&str, FrameField)]) -> Vec<(FrameField, f64)> {
    fields
        .iter()
        .filter_map(|(name, field)| matches.get_one::<f64>(name).map(|value| (*field, *value)))
        .collect()
}

/// Run one write against the focused window, then print what the window
/// actually ended up with.
fn apply_frame_change(
    command: &'static str,
    matches: &ArgMatches,
    config: &MadoConfig,
    change: impl FnOnce(&WindowHandle) -> bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json") || config.json_output();

    info!(event = "cli.frame_change_started", command = command);

    let handle = require_focused_window(config)?;
    let applied = change(&handle);

    let Some(snapshot) = handle.snapshot(FrameSpace::Screen) else {
        eprintln!("Window geometry is no longer readable after {}", command);
        error!(event = "cli.frame_change_failed", command = command, reason = "unreadable");
        return Err("Window geometry is no longer readable".into());
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print_snapshot(&snapshot);
    }

    if !applied {
        eprintln!("The window did not accept the {} request.", command);
        error!(event = "cli.frame_change_failed", command = command, reason = "rejected");
        return Err(format!("Window rejected {}", command).into());
    }

    info!(event = "cli.frame_change_completed", command = command);
    Ok(())
}

fn require_focused_window(config: &MadoConfig) -> Result<WindowHandle, Box<dyn std::error::Error>> {
    match SystemFocusLocator::from_config(config).focused_window() {
        Ok(handle) => Ok(handle),
        Err(e) => {
            eprintln!("{}: {}", NO_FOCUSED_WINDOW, e);
            events::log_mado_error(&e);
            Err(NO_FOCUSED_WINDOW.into())
        }
    }
}

fn print_snapshot(snapshot: &WindowSnapshot) {
    let frame = snapshot.frame();

    println!("Mado: {}", snapshot.app_title().unwrap_or("Unknown"));
    if let Some(title) = snapshot.window_title() {
        println!("Window:  {}", title);
    }
    println!("Space:   {}", snapshot.space());
    println!("x:       {}", frame.origin.x.round() as i64);
    println!("y:       {}", frame.origin.y.round() as i64);
    println!("width:   {}", frame.size.width.round() as i64);
    println!("height:  {}", frame.size.height.round() as i64);
    match snapshot.display_index() {
        Some(index) => println!("Display: {}", index),
        None => println!("Display: -"),
    }
}

fn handle_list_command(
    matches: &ArgMatches,
    config: &MadoConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("displays", sub_matches)) => handle_list_displays(sub_matches, config),
        _ => {
            error!(event = "cli.list_subcommand_unknown");
            Err("Unknown list subcommand".into())
        }
    }
}

#[derive(Serialize)]
struct DisplayRow<'a> {
    index: usize,
    primary: bool,
    #[serde(flatten)]
    display: &'a Display,
}

fn handle_list_displays(
    matches: &ArgMatches,
    config: &MadoConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json") || config.json_output();

    info!(
        event = "cli.list_displays_started",
        json_output = json_output
    );

    let displays = DisplaySet::snapshot(&SystemDisplays);

    if json_output {
        let rows: Vec<DisplayRow> = displays
            .iter()
            .enumerate()
            .map(|(index, display)| DisplayRow {
                index,
                primary: index == 0,
                display,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if displays.is_empty() {
        println!("No displays found.");
    } else {
        println!("Displays:");
        table::print_displays_table(&displays);
    }

    info!(
        event = "cli.list_displays_completed",
        count = displays.len()
    );
    Ok(())
}
