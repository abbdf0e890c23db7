use anyhow::{Context, Result};
use clap::Parser;
use std::io::BufWriter;

use mini_sql::{Emitter, Workload};

mod cli;

use cli::Cli;

fn init_logging(cli: &Cli) {
  env_logger::Builder::new()
    .filter_level(cli.log_level())
    .parse_default_env()
    .target(env_logger::Target::Stderr)
    .init();
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_logging(&cli);

  let workload = Workload::new(cli.scale).context("invalid --scale")?;
  log::debug!(
    "scale {scale}, {count} statements",
    scale = workload.scale(),
    count = workload.statement_count()
  );

  let stdout = std::io::stdout();
  let mut emitter = Emitter::new(BufWriter::new(stdout.lock()));
  emitter
    .emit(&workload)
    .context("failed to write workload to stdout")?;
  emitter.finish().context("failed to flush stdout")?;

  return Ok(());
}
