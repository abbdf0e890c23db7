//! The statements that make up a workload and the order they are produced in.

use std::borrow::Cow;
use std::fmt;

use constants::*;

use crate::error::EmitError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatementKind {
  CreateTable,
  CreateIndex,
  Insert,
  Select,
  Update,
  Delete,
}

impl StatementKind {
  pub const ALL: [StatementKind; 6] = [
    StatementKind::CreateTable,
    StatementKind::CreateIndex,
    StatementKind::Insert,
    StatementKind::Select,
    StatementKind::Update,
    StatementKind::Delete,
  ];

  pub fn as_str(&self) -> &'static str {
    return match self {
      StatementKind::CreateTable => "create table",
      StatementKind::CreateIndex => "create index",
      StatementKind::Insert => "insert",
      StatementKind::Select => "select",
      StatementKind::Update => "update",
      StatementKind::Delete => "delete",
    };
  }
}

impl fmt::Display for StatementKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A single line of the workload. `Display` yields the SQL text without the
/// trailing newline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statement {
  pub kind: StatementKind,
  pub sql: Cow<'static, str>,
}

impl Statement {
  pub fn create_table() -> Self {
    return Self {
      kind: StatementKind::CreateTable,
      sql: Cow::Borrowed(CREATE_TABLE_QUERY),
    };
  }

  pub fn create_index(sql: &'static str) -> Self {
    return Self {
      kind: StatementKind::CreateIndex,
      sql: Cow::Borrowed(sql),
    };
  }

  pub fn insert(i: u64) -> Self {
    return Self {
      kind: StatementKind::Insert,
      sql: format!("insert into {TABLE} (a, b) values ({i}, '{INSERT_PREFIX}{i}');").into(),
    };
  }

  pub fn select(i: u64) -> Self {
    let a = i * SELECT_STRIDE;
    return Self {
      kind: StatementKind::Select,
      sql: format!("select * from {TABLE} where a = {a};").into(),
    };
  }

  pub fn update(i: u64) -> Self {
    let a = i * UPDATE_STRIDE;
    return Self {
      kind: StatementKind::Update,
      sql: format!("update {TABLE} set b = '{UPDATE_PREFIX}{i}' where a = {a};").into(),
    };
  }

  pub fn delete(i: u64) -> Self {
    let n = i * DELETE_STRIDE;
    return Self {
      kind: StatementKind::Delete,
      sql: format!("delete from {TABLE} where b = '{INSERT_PREFIX}{n}';").into(),
    };
  }
}

impl fmt::Display for Statement {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.sql)
  }
}

/// A workload of a given scale.
///
/// Inserts run over `[0, 10 * scale)`; selects, updates and deletes each run
/// over `[0, scale)`. Every stride product stays below `10 * scale`, and
/// [`Workload::new`] rejects scales whose total statement count `13 * scale + 3`
/// does not fit in a `u64`, which bounds all of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Workload {
  scale: u64,
  inserts: u64,
}

impl Workload {
  pub fn new(scale: u64) -> Result<Self, EmitError> {
    if checked_statement_count(scale).is_none() {
      return Err(EmitError::ScaleOverflow { scale });
    }
    return Ok(Self {
      scale,
      inserts: scale * INSERTS_PER_SCALE,
    });
  }

  pub fn scale(&self) -> u64 {
    self.scale
  }

  /// Number of statements [`Workload::statements`] yields.
  pub fn statement_count(&self) -> u64 {
    expected_statement_count(self.scale)
  }

  pub fn count(&self, kind: StatementKind) -> u64 {
    return match kind {
      StatementKind::CreateTable => 1,
      StatementKind::CreateIndex => CREATE_INDEX_QUERIES.len() as u64,
      StatementKind::Insert => self.inserts,
      StatementKind::Select | StatementKind::Update | StatementKind::Delete => self.scale,
    };
  }

  /// Lazily yields every statement in emission order.
  pub fn statements(&self) -> impl Iterator<Item = Statement> {
    let Self { scale, inserts } = *self;

    std::iter::once(Statement::create_table())
      .chain(CREATE_INDEX_QUERIES.into_iter().map(Statement::create_index))
      .chain((0..inserts).map(Statement::insert))
      .chain((0..scale).map(Statement::select))
      .chain((0..scale).map(Statement::update))
      .chain((0..scale).map(Statement::delete))
  }
}

impl Default for Workload {
  fn default() -> Self {
    return Self {
      scale: DEFAULT_SCALE,
      inserts: DEFAULT_SCALE * INSERTS_PER_SCALE,
    };
  }
}

#[cfg(test)]
#[path = "statement_test.rs"]
mod tests;
