//! Segment type
//! 段类型

use linear_fit::Key;
use serde::{Deserialize, Serialize};

/// One linear segment: predicted = slope * key + intercept
/// 一个线性段：predicted = slope * key + intercept
///
/// `[start_position, end_position]` is inclusive; across a whole model the
/// segment ranges partition the position space with no gaps or overlaps.
/// `[start_position, end_position]` 为闭区间；整个模型的段区间无缝无重叠地
/// 划分位置空间。
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Segment<K: Key> {
  /// First key covered by this segment
  /// 段覆盖的第一个键
  pub start_key: K,
  pub slope: f64,
  pub intercept: f64,
  /// Ceiling of the max absolute residual observed while fitting
  /// 拟合期间观测到的最大绝对残差向上取整
  pub max_error: u64,
  pub start_position: usize,
  pub end_position: usize,
}
