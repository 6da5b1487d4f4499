//! FITing-Tree with data ownership
//! 持有数据的 FITing-Tree

use std::ops::Deref;

use linear_fit::Key;

use crate::{FitingTree, Result};

/// FITing-Tree plus the sorted key array it indexes
/// FITing-Tree 模型及其索引的已排序键数组
#[derive(Clone, Debug)]
pub struct FitingTreeData<K: Key> {
  pub tree: FitingTree<K>,
  pub data: Vec<K>,
}

impl<K: Key> Deref for FitingTreeData<K> {
  type Target = FitingTree<K>;

  #[inline]
  fn deref(&self) -> &Self::Target {
    &self.tree
  }
}

impl<K: Key> FitingTreeData<K> {
  /// Build over owned sorted data; positions are the array indices
  /// 基于持有的已排序数据构建；位置即数组下标
  pub fn load(data: Vec<K>, epsilon: u64, check_sorted: bool) -> Result<Self> {
    let positions: Vec<usize> = (0..data.len()).collect();
    let tree = FitingTree::new(&data, &positions, epsilon, check_sorted)?;
    Ok(Self { tree, data })
  }

  #[inline]
  #[must_use]
  pub fn data(&self) -> &[K] {
    &self.data
  }

  /// Exact position of a key (None if absent)
  /// 键的精确位置（不存在则返回 None）
  ///
  /// Bounded binary search over the predicted range.
  /// 在预测范围内做有界二分查找。
  #[must_use]
  pub fn get(&self, key: K) -> Option<usize> {
    if self.data.is_empty() {
      return None;
    }
    let (lo, hi) = self.tree.search_range(key);
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
    let (lo, hi) = self.tree.search_range(lo_key);
    let hi = hi.min(self.data.len() - 1);
    let lo = lo.min(hi);

    // First index with key >= lo_key; fall back to a full binary search
    // when the model range was only a hint
    // 第一个 key >= lo_key 的下标；模型范围仅为提示时回退到全量二分
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
