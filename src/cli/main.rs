//! Command-line interface entry point for `StudentPlanner`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use student_planner::config::Config;
use student_planner::info;
use student_planner::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use student_planner::store::Store;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let store = Store::new(&config.paths.data_dir);
    let today = chrono::Local::now().date_naive();

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Dashboard { date } => {
            commands::dashboard::run(&store, date.unwrap_or(today));
        }
        Command::Course { subcommand } => {
            commands::course::run(subcommand, &store);
        }
        Command::Event { subcommand } => {
            commands::event::run(subcommand, &store, today);
        }
        Command::Week { date, offset } => {
            commands::week::run(&store, date.unwrap_or(today), offset);
        }
        Command::Simulate { courses } => {
            commands::simulate::run(&store, &courses);
        }
        Command::Scale => commands::scale::run(),
        Command::Report {
            output,
            format,
            date,
        } => {
            commands::report::run(
                &store,
                output.as_deref(),
                &format,
                date.unwrap_or(today),
                &config,
            );
        }
    }
}
