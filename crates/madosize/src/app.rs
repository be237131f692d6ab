use clap::{Arg, ArgAction, ArgGroup, Command};

pub fn build_cli() -> Command {
    Command::new("madosize")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Move, resize, center and maximize the focused window")
        .long_about(
            "madosize reads the frame of the window that currently has keyboard focus and \
             lets you change it in coordinates relative to the display that window is on. \
             Requires accessibility permission on macOS.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        // Show subcommand
        .subcommand(
            Command::new("show")
                .about("Show the focused window's title and frame")
                .arg(json_arg())
                .arg(
                    Arg::new("space")
                        .long("space")
                        .short('s')
                        .help("Coordinate space of the printed frame")
                        .value_parser(["screen", "desktop", "local"])
                        .default_value("screen"),
                ),
        )
        // Move subcommand
        .subcommand(
            Command::new("move")
                .about("Move the focused window, relative to its display")
                .arg(coordinate_arg("x", "New left edge"))
                .arg(coordinate_arg("y", "New bottom edge"))
                .group(
                    ArgGroup::new("position")
                        .args(["x", "y"])
                        .required(true)
                        .multiple(true),
                )
                .arg(json_arg()),
        )
        // Resize subcommand
        .subcommand(
            Command::new("resize")
                .about("Resize the focused window, keeping its bottom-left corner")
                .arg(coordinate_arg("width", "New width"))
                .arg(coordinate_arg("height", "New height"))
                .group(
                    ArgGroup::new("dimensions")
                        .args(["width", "height"])
                        .required(true)
                        .multiple(true),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("center")
                .about("Center the focused window on its display's usable area")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("maximize")
                .about("Make the focused window fill its display's usable area")
                .arg(json_arg()),
        )
        // List subcommand
        .subcommand(
            Command::new("list")
                .about("List system resources")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("displays")
                        .about("List connected displays")
                        .arg(json_arg()),
                ),
        )
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Output in JSON format")
        .action(ArgAction::SetTrue)
}

fn coordinate_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .value_parser(clap::value_parser!(f64))
        .allow_negative_numbers(true)
}
