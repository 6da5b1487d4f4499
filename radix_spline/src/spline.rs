//! RadixSpline model and query
//! RadixSpline 模型与查询

use std::mem::size_of;

use crate::{
  Knot, RadixEntry, Result, SplineError,
  build::{build_knots, build_radix_table},
};

/// RadixSpline model (no data ownership)
/// RadixSpline 模型（不持有数据）
#[derive(bitcode::Encode, bitcode::Decode, Clone, Debug)]
pub struct RadixSpline {
  pub error_bound: u64,
  pub radix_bits: u32,
  pub knots: Vec<Knot>,
  pub radix_table: Vec<RadixEntry>,
}

impl RadixSpline {
  /// Build from sorted keys; positions are the array indices
  /// 从已排序键构建；位置即数组下标
  ///
  /// # Errors
  /// `SplineError::InvalidRadixBits` unless `1 <= radix_bits <= 64`.
  /// `SplineError::NotSorted` if `check_sorted` is true and keys are unsorted.
  pub fn new(data: &[u64], error_bound: u64, radix_bits: u32, check_sorted: bool) -> Result<Self> {
    if radix_bits == 0 || radix_bits > 64 {
      return Err(SplineError::InvalidRadixBits(radix_bits));
    }
    if check_sorted && !data.windows(2).all(|w| w[0] <= w[1]) {
      return Err(SplineError::NotSorted);
    }

    let knots = build_knots(data, error_bound);
    let radix_table = build_radix_table(&knots, radix_bits);

    Ok(Self {
      error_bound,
      radix_bits,
      knots,
      radix_table,
    })
  }

  /// Number of positions covered
  /// 覆盖的位置数
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.knots.last().map_or(0, |k| k.position + 1)
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.knots.is_empty()
  }

  #[inline]
  #[must_use]
  pub fn knot_count(&self) -> usize {
    self.knots.len()
  }

  /// Memory usage of the model (excluding any data array)
  /// 模型内存占用（不含数据数组）
  #[inline]
  #[must_use]
  pub fn mem_usage(&self) -> usize {
    self.knots.len() * size_of::<Knot>() + self.radix_table.len() * size_of::<RadixEntry>()
  }

  /// Predict the inclusive position range for a key
  /// 预测键的闭区间位置范围
  ///
  /// `(0, 0)` when the model is empty or the key precedes every trained
  /// key; keys above the trained range collapse to the upper boundary.
  /// 模型为空或键小于所有训练键时返回 `(0, 0)`；超出上界的键收敛到末端。
  #[must_use]
  pub fn search_range(&self, key: u64) -> (usize, usize) {
    let Some(first) = self.knots.first() else {
      return (0, 0);
    };
    if key < first.key {
      return (0, 0);
    }
    let n = self.len();
    if self.knots.len() < 2 {
      return (0, n - 1);
    }

    let (k1, k2) = self.knot_pair(key);
    let predicted = if k2.key == k1.key {
      // Duplicate-key knots: all intermediate positions inherit the left end
      // 重复键结点：中间位置一律继承左端
      k1.position as f64
    } else {
      let slope = (k2.position - k1.position) as f64 / (k2.key - k1.key) as f64;
      slope.mul_add((key - k1.key) as f64, k1.position as f64)
    };

    let p = predicted.round() as i64;
    let e = self.error_bound as i64;
    let hi = (n - 1) as i64;
    let lo = (p - e).clamp(0, hi) as usize;
    let hi = (p + e).clamp(0, hi) as usize;
    (lo, hi)
  }

  /// Enclosing knot pair for a key, located via the radix table
  /// 通过基数表定位键的包围结点对
  ///
  /// The table records only observed prefixes, so the probe takes the
  /// nearest lower recorded prefix, then searches knots inside the window
  /// bounded by the next recorded prefix.
  /// 基数表仅记录出现过的前缀，因此探测取最近的不大于该前缀的条目，
  /// 再在下一条目限定的窗口内搜索结点。
  fn knot_pair(&self, key: u64) -> (Knot, Knot) {
    let r = key >> (64 - self.radix_bits);
    let t = self.radix_table.partition_point(|e| e.radix_key <= r);
    let start = if t == 0 {
      0
    } else {
      self.radix_table[t - 1].knot_idx
    };
    let end = self
      .radix_table
      .get(t)
      .map_or(self.knots.len(), |e| (e.knot_idx + 1).min(self.knots.len()));

    // Last knot with key <= query; key >= knots[0].key makes this >= 1
    // when the window starts at 0
    // key <= 查询键的最后一个结点；key >= knots[0].key 保证窗口从 0 开始时
    // 结果 >= 1
    let upper = start + self.knots[start..end].partition_point(|k| k.key <= key);
    let i = upper.saturating_sub(1).min(self.knots.len() - 2);
    (self.knots[i], self.knots[i + 1])
  }
}
