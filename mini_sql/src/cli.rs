//! Command line arguments.

use clap::Parser;
use log::LevelFilter;

/// Print the mini-sql benchmark workload to stdout.
///
/// Pipe the output into a database client, e.g. `mini-sql | sqlite3 bench.db`.
#[derive(Parser, Debug)]
#[command(name = "mini-sql")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
  /// Workload scale: 10x this many inserts, this many selects, updates and deletes
  #[arg(short, long, env = "MINI_SQL_SCALE", default_value_t = constants::DEFAULT_SCALE)]
  pub scale: u64,

  /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
  pub verbose: u8,

  /// Only log errors
  #[arg(short, long)]
  pub quiet: bool,
}

impl Cli {
  pub fn log_level(&self) -> LevelFilter {
    if self.quiet {
      return LevelFilter::Error;
    }
    return match self.verbose {
      0 => LevelFilter::Warn,
      1 => LevelFilter::Info,
      2 => LevelFilter::Debug,
      _ => LevelFilter::Trace,
    };
  }
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
