//! CLI argument definitions for `StudentPlanner`

use chrono::NaiveDate;
use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use student_planner::config::ConfigOverrides;
use student_planner::logger::Level;
use student_planner::models::EventKind;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Event type argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum EventKindArg {
    /// Class session
    Class,
    /// Exam
    Exam,
    /// Assignment
    Assignment,
    /// Deadline
    Deadline,
}

impl From<EventKindArg> for EventKind {
    fn from(arg: EventKindArg) -> Self {
        match arg {
            EventKindArg::Class => Self::Class,
            EventKindArg::Exam => Self::Exam,
            EventKindArg::Assignment => Self::Assignment,
            EventKindArg::Deadline => Self::Deadline,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `data_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum CourseSubcommand {
    /// Record a completed course.
    Add {
        /// Course name
        #[arg(short, long)]
        name: String,
        /// Credit weight
        #[arg(short, long, default_value_t = 3)]
        credits: u32,
        /// Grade as a letter (A+ .. F) or a number on the 4.0 scale
        #[arg(short, long, default_value = "4.0")]
        grade: String,
        /// Semester label (e.g., 2024-1)
        #[arg(short, long)]
        semester: String,
    },
    /// List courses grouped by semester, newest first.
    List,
    /// Delete a course by id.
    Remove {
        /// Course id
        #[arg(value_name = "ID")]
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum EventSubcommand {
    /// Add an event to the calendar.
    Add {
        /// Event title
        #[arg(short, long)]
        title: String,
        /// Event type
        #[arg(short = 'k', long = "type", value_enum, default_value = "class")]
        kind: EventKindArg,
        /// Date (YYYY-MM-DD); defaults to today
        #[arg(short, long, value_name = "DATE")]
        date: Option<NaiveDate>,
        /// Time of day (HH:MM)
        #[arg(long, value_name = "HH:MM")]
        time: Option<String>,
    },
    /// List all events grouped by date.
    List,
    /// Delete an event by id.
    Remove {
        /// Event id
        #[arg(value_name = "ID")]
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Show the dashboard: CPA, performance, today's events and GPA trend.
    Dashboard {
        /// Reference date (YYYY-MM-DD); defaults to today
        #[arg(long, value_name = "DATE")]
        date: Option<NaiveDate>,
    },
    /// Manage recorded courses and grades.
    Course {
        #[command(subcommand)]
        subcommand: CourseSubcommand,
    },
    /// Manage calendar events.
    Event {
        #[command(subcommand)]
        subcommand: EventSubcommand,
    },
    /// Show the Monday-to-Sunday schedule for a week.
    Week {
        /// Any date inside the week (YYYY-MM-DD); defaults to today
        #[arg(long, value_name = "DATE")]
        date: Option<NaiveDate>,
        /// Move by whole weeks (e.g., -1 for last week)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i64,
    },
    /// Project your CPA with hypothetical future courses.
    ///
    /// Each COURSE is `CREDITS:GRADE` or `NAME=CREDITS:GRADE`, where GRADE is a
    /// letter (A+ .. F) or a number on the 4.0 scale.
    Simulate {
        /// Hypothetical courses
        #[arg(value_name = "COURSE")]
        courses: Vec<String>,
    },
    /// Print the letter grade scale.
    Scale,
    /// Export the dashboard as a Markdown or HTML report.
    Report {
        /// Output file path (defaults to the configured reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,

        /// Reference date (YYYY-MM-DD); defaults to today
        #[arg(long, value_name = "DATE")]
        date: Option<NaiveDate>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "studentplanner",
    about = "Student Planner: grades, GPA simulation and a weekly academic calendar",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the data directory for this run
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the reports directory for this run
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            data_dir: None,
            reports_dir: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_event_kind_conversion() {
        assert_eq!(EventKind::from(EventKindArg::Exam), EventKind::Exam);
        assert_eq!(EventKind::from(EventKindArg::Deadline), EventKind::Deadline);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli(Command::Scale).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.data_dir.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli(Command::Config { subcommand: None });
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.data_dir = Some(PathBuf::from("/srv/planner"));
        cli.reports_dir = Some(PathBuf::from("/srv/reports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.data_dir, Some("/srv/planner".to_string()));
        assert_eq!(overrides.reports_dir, Some("/srv/reports".to_string()));
    }

    #[test]
    fn test_parse_course_add() {
        let cli = Cli::try_parse_from([
            "studentplanner",
            "course",
            "add",
            "--name",
            "Operating Systems",
            "--credits",
            "4",
            "--grade",
            "B+",
            "--semester",
            "2024-2",
        ])
        .unwrap();
        match cli.command {
            Command::Course {
                subcommand:
                    CourseSubcommand::Add {
                        name,
                        credits,
                        grade,
                        semester,
                    },
            } => {
                assert_eq!(name, "Operating Systems");
                assert_eq!(credits, 4);
                assert_eq!(grade, "B+");
                assert_eq!(semester, "2024-2");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_event_add_with_date() {
        let cli = Cli::try_parse_from([
            "studentplanner",
            "event",
            "add",
            "--title",
            "Final",
            "--type",
            "exam",
            "--date",
            "2025-06-10",
            "--time",
            "08:00",
        ])
        .unwrap();
        match cli.command {
            Command::Event {
                subcommand: EventSubcommand::Add { kind, date, time, .. },
            } => {
                assert_eq!(kind, EventKindArg::Exam);
                assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 10));
                assert_eq!(time.as_deref(), Some("08:00"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_week_negative_offset() {
        let cli = Cli::try_parse_from(["studentplanner", "week", "--offset", "-1"]).unwrap();
        assert!(matches!(cli.command, Command::Week { offset: -1, date: None }));
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        assert!(Cli::try_parse_from(["studentplanner", "dashboard", "--date", "2025-13-01"]).is_err());
    }
}
