use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
  #[error("failed to write statement: {0}")]
  Io(#[from] std::io::Error),

  #[error("scale {scale} overflows the statement count")]
  ScaleOverflow { scale: u64 },
}
