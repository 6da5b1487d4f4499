//! 错误定义 Error definitions

use thiserror::Error;

/// 结果类型 Result type
pub type Result<T> = std::result::Result<T, RmiError>;

/// 错误类型 Error type
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RmiError {
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("branch factor must be positive")]
  InvalidBranchFactor,

  #[error("keys/positions length mismatch: {keys} keys, {positions} positions")]
  LenMismatch { keys: usize, positions: usize },

  #[error("keys must be sorted")]
  NotSorted,

  #[error("stage2 has {got} leaves, branch factor is {expect}")]
  LeafCountMismatch { got: usize, expect: usize },
}
