//! Stage model types
//! 级模型类型

use serde::{Deserialize, Serialize};

/// Root line: routes a key toward a leaf index
/// 根直线：将键路由到叶下标
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Stage1 {
  pub slope: f64,
  pub intercept: f64,
}

impl Stage1 {
  #[inline]
  #[must_use]
  pub fn predict(&self, x: f64) -> f64 {
    self.slope.mul_add(x, self.intercept)
  }
}

/// Leaf line with the signed residual extremes seen at training time
/// 带训练期带符号残差极值的叶直线
///
/// A leaf with no routed keys is all zeros: a constant model predicting
/// position 0 with zero error bounds.
/// 未被路由到任何键的叶全为零：常量模型，预测位置 0，误差界为零。
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Leaf {
  pub slope: f64,
  pub intercept: f64,
  pub min_error: i64,
  pub max_error: i64,
}

impl Leaf {
  #[inline]
  #[must_use]
  pub fn predict(&self, x: f64) -> f64 {
    self.slope.mul_add(x, self.intercept)
  }
}
