pub const DEFAULT_SCALE: u64 = 100;

/// Number of rows inserted per unit of scale.
pub const INSERTS_PER_SCALE: u64 = 10;

pub const SELECT_STRIDE: u64 = 3;
pub const UPDATE_STRIDE: u64 = 4;
pub const DELETE_STRIDE: u64 = 5;

pub const TABLE: &str = "x";

pub const INSERT_PREFIX: &str = "foo";
pub const UPDATE_PREFIX: &str = "bar";

pub const CREATE_TABLE_QUERY: &str = "create table x (a int, b string);";

pub const CREATE_INDEX_QUERIES: [&str; 2] = [
  "create index i on x (a);",
  "create index j on x (b);",
];

const SCHEMA_STATEMENTS: u64 = 1 + CREATE_INDEX_QUERIES.len() as u64;
const STATEMENTS_PER_SCALE: u64 = INSERTS_PER_SCALE + 3;

/// Total number of statements a workload of the given scale emits, or `None`
/// when that number does not fit in a `u64`.
pub const fn checked_statement_count(scale: u64) -> Option<u64> {
  return match STATEMENTS_PER_SCALE.checked_mul(scale) {
    Some(n) => n.checked_add(SCHEMA_STATEMENTS),
    None => None,
  };
}

/// Like [`checked_statement_count`] but saturates at `u64::MAX`, which is not
/// a real count. Callers with an unvalidated scale should use the checked form.
pub const fn expected_statement_count(scale: u64) -> u64 {
  return match checked_statement_count(scale) {
    Some(n) => n,
    None => u64::MAX,
  };
}
