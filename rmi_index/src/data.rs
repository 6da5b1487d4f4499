//! RMI with data ownership
//! 持有数据的 RMI

use std::ops::Deref;

use linear_fit::Key;

use crate::{Result, Rmi};

/// RMI plus the sorted key array it indexes
/// RMI 模型及其索引的已排序键数组
#[derive(Clone, Debug)]
pub struct RmiData<K: Key> {
  pub rmi: Rmi,
  pub data: Vec<K>,
}

impl<K: Key> Deref for RmiData<K> {
  type Target = Rmi;

  #[inline]
  fn deref(&self) -> &Self::Target {
    &self.rmi
  }
}

impl<K: Key> RmiData<K> {
  /// Train over owned sorted data; positions are the array indices
  /// 基于持有的已排序数据训练；位置即数组下标
  pub fn load(data: Vec<K>, branch_factor: usize, check_sorted: bool) -> Result<Self> {
    let positions: Vec<usize> = (0..data.len()).collect();
    let rmi = Rmi::train(&data, &positions, branch_factor, check_sorted)?;
    Ok(Self { rmi, data })
  }

  #[inline]
  #[must_use]
  pub fn data(&self) -> &[K] {
    &self.data
  }

  /// Exact position of a key (None if absent)
  /// 键的精确位置（不存在则返回 None）
  #[must_use]
  pub fn get(&self, key: K) -> Option<usize> {
    if self.data.is_empty() {
      return None;
    }
    let (lo, hi) = self.rmi.search_range(key);
    let hi = hi.min(self.data.len() - 1);
    let lo = lo.min(hi);
    self.data[lo..=hi].binary_search(&key).ok().map(|p| lo + p)
  }

  /// All keys in `[lo_key, hi_key]`, located via the model
  /// 借助模型定位的 `[lo_key, hi_key]` 范围内的所有键
  #[must_use]
  pub fn range_query(&self, lo_key: K, hi_key: K) -> Vec<K> {
    if self.data.is_empty() || lo_key > hi_key {
      return Vec::new();
    }
    let (lo, hi) = self.rmi.search_range(lo_key);
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
}
