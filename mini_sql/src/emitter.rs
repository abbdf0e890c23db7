use std::fmt;
use std::io::Write;

use crate::error::EmitError;
use crate::statement::{Statement, StatementKind, Workload};

/// Per-kind statement counters collected while emitting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
  pub create_table: u64,
  pub create_index: u64,
  pub insert: u64,
  pub select: u64,
  pub update: u64,
  pub delete: u64,
}

impl Tally {
  pub fn record(&mut self, kind: StatementKind) {
    *self.slot(kind) += 1;
  }

  pub fn get(&self, kind: StatementKind) -> u64 {
    return match kind {
      StatementKind::CreateTable => self.create_table,
      StatementKind::CreateIndex => self.create_index,
      StatementKind::Insert => self.insert,
      StatementKind::Select => self.select,
      StatementKind::Update => self.update,
      StatementKind::Delete => self.delete,
    };
  }

  pub fn total(&self) -> u64 {
    StatementKind::ALL.iter().map(|kind| self.get(*kind)).sum()
  }

  fn slot(&mut self, kind: StatementKind) -> &mut u64 {
    return match kind {
      StatementKind::CreateTable => &mut self.create_table,
      StatementKind::CreateIndex => &mut self.create_index,
      StatementKind::Insert => &mut self.insert,
      StatementKind::Select => &mut self.select,
      StatementKind::Update => &mut self.update,
      StatementKind::Delete => &mut self.delete,
    };
  }
}

impl fmt::Display for Tally {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} statements", self.total())?;
    for (idx, kind) in StatementKind::ALL.iter().enumerate() {
      let sep = if idx == 0 { " (" } else { ", " };
      write!(f, "{sep}{kind}: {}", self.get(*kind))?;
    }
    f.write_str(")")
  }
}

/// Writes workloads to an output stream, one statement per line.
///
/// Write errors are returned as-is and never retried; a closed pipe on the
/// reading side ends the run.
pub struct Emitter<W: Write> {
  out: W,
}

impl<W: Write> Emitter<W> {
  pub fn new(out: W) -> Self {
    return Self { out };
  }

  pub fn emit(&mut self, workload: &Workload) -> Result<Tally, EmitError> {
    let mut tally = Tally::default();
    let mut phase: Option<StatementKind> = None;

    for stmt in workload.statements() {
      if phase != Some(stmt.kind) {
        log::debug!(
          "emitting {count} {kind} statement(s)",
          count = workload.count(stmt.kind),
          kind = stmt.kind
        );
        phase = Some(stmt.kind);
      }

      self.write_statement(&stmt)?;
      tally.record(stmt.kind);
    }

    log::info!("scale {}: emitted {tally}", workload.scale());
    return Ok(tally);
  }

  /// Flushes pending output and hands back the underlying writer.
  pub fn finish(mut self) -> Result<W, EmitError> {
    self.out.flush()?;
    return Ok(self.out);
  }

  fn write_statement(&mut self, stmt: &Statement) -> Result<(), EmitError> {
    log::trace!("{stmt}");
    self.out.write_all(stmt.sql.as_bytes())?;
    self.out.write_all(b"\n")?;
    return Ok(());
  }
}

/// Renders the whole workload into a string.
pub fn render(workload: &Workload) -> String {
  let mut out = String::new();
  for stmt in workload.statements() {
    out.push_str(&stmt.sql);
    out.push('\n');
  }
  return out;
}

#[cfg(test)]
#[path = "emitter_test.rs"]
mod tests;
