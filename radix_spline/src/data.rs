//! RadixSpline with data ownership and binary persistence
//! 持有数据的 RadixSpline 及二进制持久化

use std::{fs, mem::size_of, ops::Deref, path::Path};

use crate::{RadixSpline, Result};

/// RadixSpline plus the sorted key array, self-contained when serialized
/// RadixSpline 模型加已排序键数组，序列化后自包含
#[derive(bitcode::Encode, bitcode::Decode, Clone, Debug)]
pub struct RadixSplineData {
  pub spline: RadixSpline,
  pub data: Vec<u64>,
}

impl Deref for RadixSplineData {
  type Target = RadixSpline;

  #[inline]
  fn deref(&self) -> &Self::Target {
    &self.spline
  }
}

impl RadixSplineData {
  /// Build over owned sorted data
  /// 基于持有的已排序数据构建
  pub fn load(data: Vec<u64>, error_bound: u64, radix_bits: u32, check_sorted: bool) -> Result<Self> {
    let spline = RadixSpline::new(&data, error_bound, radix_bits, check_sorted)?;
    Ok(Self { spline, data })
  }

  #[inline]
  #[must_use]
  pub fn data(&self) -> &[u64] {
    &self.data
  }

  /// Exact position of a key (None if absent)
  /// 键的精确位置（不存在则返回 None）
  #[must_use]
  pub fn get(&self, key: u64) -> Option<usize> {
    if self.data.is_empty() {
      return None;
    }
    let (lo, hi) = self.spline.search_range(key);
    let hi = hi.min(self.data.len() - 1);
    let lo = lo.min(hi);
    self.data[lo..=hi].binary_search(&key).ok().map(|p| lo + p)
  }

  /// All keys in `[lo_key, hi_key]`, located via the model
  /// 借助模型定位的 `[lo_key, hi_key]` 范围内的所有键
  #[must_use]
  pub fn range_query(&self, lo_key: u64, hi_key: u64) -> Vec<u64> {
    if self.data.is_empty() || lo_key > hi_key {
      return Vec::new();
    }
    let (lo, hi) = self.spline.search_range(lo_key);
    let hi = hi.min(self.data.len() - 1);
    let lo = lo.min(hi);

    let hint = lo + self.data[lo..=hi].partition_point(|k| *k < lo_key);
    let begin = if hint < self.data.len()
      && self.data[hint] >= lo_key
      && (hint == 0 || self.data[hint - 1] < lo_key)
    {
      hint
    } else {
      self.data.partition_point(|k| *k < lo_key)
    };

    let mut out = Vec::new();
    for &k in &self.data[begin..] {
      if k > hi_key {
        break;
      }
      out.push(k);
    }
    out
  }

  /// Memory usage including the data array
  /// 含数据数组的内存占用
  #[inline]
  #[must_use]
  pub fn memory_usage(&self) -> usize {
    self.data.len() * size_of::<u64>() + self.spline.mem_usage()
  }

  /// Save the model plus keys as bitcode
  /// 以 bitcode 保存模型与键
  pub fn save_bin(&self, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, bitcode::encode(self))?;
    Ok(())
  }

  /// Load a self-contained model from bitcode
  /// 从 bitcode 加载自包含模型
  pub fn load_bin(path: impl AsRef<Path>) -> Result<Self> {
    Ok(bitcode::decode(&fs::read(path)?)?)
  }
}
