//! 命令行参数

use std::path::PathBuf;

use clap::Parser;
use month_calendar_core::WeekStart;

#[derive(Debug, Default, Parser)]
#[command(name = "month-calendar")]
#[command(version, about = "A month calendar in your terminal, one appointment per day")]
pub struct Cli {
    /// Appointment file (defaults to the data directory)
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Configuration file (defaults to the config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep appointments in memory only; nothing is written to disk
    #[arg(long, conflicts_with = "data_file")]
    pub ephemeral: bool,

    /// First day of the week: sunday or monday
    #[arg(long, value_name = "DAY")]
    pub week_start: Option<WeekStart>,

    /// Log file (defaults to the data directory)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
