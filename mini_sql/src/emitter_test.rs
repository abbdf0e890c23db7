use super::*;
use std::io;

struct ClosedPipe;

impl Write for ClosedPipe {
  fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
    Err(io::Error::from(io::ErrorKind::BrokenPipe))
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

fn emit(scale: u64) -> (Vec<u8>, Tally) {
  let workload = Workload::new(scale).unwrap();
  let mut emitter = Emitter::new(Vec::new());
  let tally = emitter.emit(&workload).unwrap();
  (emitter.finish().unwrap(), tally)
}

#[test]
fn emits_one_statement_per_line() {
  let (out, tally) = emit(1);
  let text = String::from_utf8(out).unwrap();

  let mut expected = String::from(
    "create table x (a int, b string);\n\
     create index i on x (a);\n\
     create index j on x (b);\n",
  );
  for i in 0..10 {
    expected.push_str(&format!("insert into x (a, b) values ({i}, 'foo{i}');\n"));
  }
  expected.push_str(
    "select * from x where a = 0;\n\
     update x set b = 'bar0' where a = 0;\n\
     delete from x where b = 'foo0';\n",
  );

  assert_eq!(text, expected);
  assert_eq!(tally.total(), 16);
  assert_eq!(tally.insert, 10);
}

#[test]
fn scale_zero_tally() {
  let (out, tally) = emit(0);
  assert_eq!(out.iter().filter(|b| **b == b'\n').count(), 3);
  assert_eq!(
    tally,
    Tally {
      create_table: 1,
      create_index: 2,
      ..Tally::default()
    }
  );
}

#[test]
fn reference_scale_line_count() {
  let (out, tally) = emit(100);
  let text = String::from_utf8(out).unwrap();

  assert_eq!(text.lines().count(), 1303);
  assert_eq!(tally.insert, 1000);
  assert_eq!(tally.select, 100);
  assert_eq!(tally.update, 100);
  assert_eq!(tally.delete, 100);
  assert_eq!(
    text.lines().last(),
    Some("delete from x where b = 'foo495';")
  );
}

#[test]
fn output_is_deterministic() {
  let (first, first_tally) = emit(13);
  let (second, second_tally) = emit(13);
  assert_eq!(first, second);
  assert_eq!(first_tally, second_tally);

  let workload = Workload::new(13).unwrap();
  assert_eq!(render(&workload).into_bytes(), first);
}

#[test]
fn emitter_can_run_twice() {
  let workload = Workload::new(2).unwrap();
  let mut emitter = Emitter::new(Vec::new());
  emitter.emit(&workload).unwrap();
  emitter.emit(&workload).unwrap();

  let out = emitter.finish().unwrap();
  let once = render(&workload);
  assert_eq!(out, format!("{once}{once}").into_bytes());
}

#[test]
fn write_failure_is_propagated() {
  let workload = Workload::default();
  let mut emitter = Emitter::new(ClosedPipe);
  let err = emitter.emit(&workload).unwrap_err();

  match err {
    EmitError::Io(err) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
    other => panic!("unexpected error: {other}"),
  }
}

#[test]
fn tally_display() {
  let (_, tally) = emit(1);
  assert_eq!(
    tally.to_string(),
    "16 statements (create table: 1, create index: 2, insert: 10, select: 1, update: 1, delete: 1)"
  );
}
