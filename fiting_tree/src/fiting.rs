//! FITing-Tree model (no data ownership)
//! FITing-Tree 模型（不持有数据）

use std::{
  fs::File,
  io::{BufReader, BufWriter},
  mem::size_of,
  path::Path,
};

use linear_fit::Key;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{FitingError, Result, Segment, build::build_segments};

/// FITing-Tree model: epsilon plus the ordered segment list
/// FITing-Tree 模型：epsilon 与有序段列表
///
/// Immutable after construction; concurrent readers need no synchronization.
/// 构建后不可变；并发读取无需同步。
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FitingTree<K: Key> {
  pub epsilon: u64,
  pub segments: Vec<Segment<K>>,
}

impl<K: Key> FitingTree<K> {
  /// Build from sorted keys and their positions
  /// 从已排序键及其位置构建
  ///
  /// Positions are taken as-is; they are usually `0..n` but need not be.
  /// 位置按原样使用；通常为 `0..n` 但不强制。
  ///
  /// # Errors
  /// `FitingError::LenMismatch` if the slices differ in length.
  /// `FitingError::NotSorted` if `check_sorted` is true and keys are unsorted.
  pub fn new(keys: &[K], positions: &[usize], epsilon: u64, check_sorted: bool) -> Result<Self> {
    if keys.len() != positions.len() {
      return Err(FitingError::LenMismatch {
        keys: keys.len(),
        positions: positions.len(),
      });
    }
    if check_sorted && !is_sorted(keys) {
      return Err(FitingError::NotSorted);
    }

    Ok(Self {
      epsilon,
      segments: build_segments(keys, positions, epsilon),
    })
  }

  /// Predict the inclusive position range for a key
  /// 预测键的闭区间位置范围
  ///
  /// Returns `(0, 0)` when the model is empty or the key precedes every
  /// trained key. For keys in the training set the true position is always
  /// inside the range; for other keys the range is a hint only.
  /// 模型为空或键小于所有训练键时返回 `(0, 0)`。训练集中的键其真实位置
  /// 必在范围内；其它键的范围仅为提示。
  #[must_use]
  pub fn search_range(&self, key: K) -> (usize, usize) {
    // Last segment whose start_key <= key, O(log S)
    // start_key <= key 的最后一个段，O(log S)
    let idx = self.segments.partition_point(|s| s.start_key <= key);
    if idx == 0 {
      return (0, 0);
    }
    let seg = &self.segments[idx - 1];

    let lo_pos = seg.start_position as i64;
    let hi_pos = seg.end_position as i64;
    let pred = seg
      .slope
      .mul_add(key.as_f64(), seg.intercept)
      .round() as i64;
    // Clamping the prediction into the segment keeps lower <= upper even
    // for keys far outside the trained range
    // 将预测值收缩到段内，保证即使键远超训练范围也有 lower <= upper
    let pred = pred.clamp(lo_pos, hi_pos);
    let e = seg.max_error as i64;
    let lo = (pred - e).max(lo_pos) as usize;
    let hi = (pred + e).min(hi_pos) as usize;
    (lo, hi)
  }

  /// Number of positions covered
  /// 覆盖的位置数
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.segments.last().map_or(0, |s| s.end_position + 1)
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.segments.is_empty()
  }

  #[inline]
  #[must_use]
  pub fn segment_count(&self) -> usize {
    self.segments.len()
  }

  #[inline]
  #[must_use]
  pub fn avg_segment_size(&self) -> f64 {
    self.len() as f64 / self.segments.len().max(1) as f64
  }

  /// Memory usage of the model (excluding any data array)
  /// 模型内存占用（不含数据数组）
  #[inline]
  #[must_use]
  pub fn mem_usage(&self) -> usize {
    self.segments.len() * size_of::<Segment<K>>() + size_of::<u64>()
  }

  /// Save as JSON
  /// 保存为 JSON
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()>
  where
    K: Serialize,
  {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), self)?;
    Ok(())
  }

  /// Load from JSON
  /// 从 JSON 加载
  pub fn load(path: impl AsRef<Path>) -> Result<Self>
  where
    K: DeserializeOwned,
  {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
  }
}

#[inline]
fn is_sorted<K: Ord>(keys: &[K]) -> bool {
  keys.windows(2).all(|w| w[0] <= w[1])
}
