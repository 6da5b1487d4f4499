//! Knot and radix table entry types
//! 结点与基数表条目类型

/// Spline knot: piecewise-linear interpolation restarts here
/// 样条结点：分段线性插值在此重新开始
///
/// Knot keys are non-decreasing; the first knot is always `(keys[0], 0)`.
/// 结点键单调不减；第一个结点恒为 `(keys[0], 0)`。
#[derive(bitcode::Encode, bitcode::Decode, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Knot {
  pub key: u64,
  pub position: usize,
}

/// First knot index for a radix prefix
/// 某基数前缀对应的第一个结点下标
///
/// Only observed prefixes are recorded, in increasing order; lookup takes
/// the nearest lower recorded prefix.
/// 仅记录出现过的前缀，按递增顺序存储；查找取最近的不大于该前缀的条目。
#[derive(bitcode::Encode, bitcode::Decode, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RadixEntry {
  pub radix_key: u64,
  pub knot_idx: usize,
}
