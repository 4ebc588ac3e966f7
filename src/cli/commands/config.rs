//! Config command handler

use super::confirm;
use crate::args::ConfigSubcommand;
use student_planner::config::Config;

/// Dispatch config subcommands; no subcommand shows everything
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand.unwrap_or(ConfigSubcommand::Get { key: None }) {
        ConfigSubcommand::Get { key: None } => show_all(config),
        ConfigSubcommand::Get { key: Some(key) } => match config.get(&key) {
            Some(value) => println!("{value}"),
            None => {
                eprintln!("✗ Unknown config key: '{key}'");
                std::process::exit(1);
            }
        },
        ConfigSubcommand::Set { key, value } => {
            update(config, |c| c.set(&key, &value), &format!("Set {key} = {value}"));
        }
        ConfigSubcommand::Unset { key } => {
            update(
                config,
                |c| c.unset(&key, defaults),
                &format!("Reset {key} to default"),
            );
        }
        ConfigSubcommand::Reset => reset(),
    }
}

fn show_all(config: &Config) {
    println!("\n=== Configuration ===\n");
    print!("{config}");
    println!("\n(file: {})", Config::get_config_file_path().display());
}

/// Apply `change`, save, and report `done`; any failure exits with status 1
fn update(config: &mut Config, change: impl FnOnce(&mut Config) -> Result<(), String>, done: &str) {
    if let Err(e) = change(config) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    if let Err(e) = config.save() {
        eprintln!("✗ Failed to save config: {e}");
        std::process::exit(1);
    }
    println!("✓ {done}");
}

fn reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }
    if !confirm("Reset config to defaults?") {
        println!("✗ Reset cancelled");
        return;
    }
    match Config::reset() {
        Ok(()) => println!("✓ Config reset to defaults"),
        Err(e) => {
            eprintln!("✗ Failed to remove config file: {e}");
            std::process::exit(1);
        }
    }
}
