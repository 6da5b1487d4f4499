//! 错误定义 Error definitions

use thiserror::Error;

/// 结果类型 Result type
pub type Result<T> = std::result::Result<T, SplineError>;

/// 错误类型 Error type
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SplineError {
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("decode error: {0}")]
  Decode(#[from] bitcode::Error),

  #[error("radix bits must be in 1..=64, got {0}")]
  InvalidRadixBits(u32),

  #[error("keys must be sorted")]
  NotSorted,

  #[error("invalid model file: {0}")]
  Parse(String),
}
