//! RMI model (no data ownership)
//! RMI 模型（不持有数据）

use std::{
  fs::File,
  io::{BufReader, BufWriter},
  mem::size_of,
  path::Path,
};

use linear_fit::{Key, LinearFit};
use serde::{Deserialize, Serialize};

use crate::{Leaf, Result, RmiError, Stage1};

/// Two-stage recursive model index
/// 两级递归模型索引
///
/// Immutable after training; concurrent readers need no synchronization.
/// 训练后不可变；并发读取无需同步。
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Rmi {
  pub branch_factor: usize,
  pub stage1: Stage1,
  pub stage2: Vec<Leaf>,
}

impl Rmi {
  /// Train on sorted keys and their positions
  /// 在已排序键及其位置上训练
  ///
  /// The root is fit toward `position / n * branch_factor`, then each key is
  /// routed once and its leaf fit over just the routed subset. Leaves with
  /// zero or one routed key degenerate to constants with zero error bounds.
  /// 根模型朝 `position / n * branch_factor` 拟合，随后每个键路由一次，
  /// 叶模型只在路由到的子集上拟合。路由到零或一个键的叶退化为零误差常量。
  ///
  /// # Errors
  /// `RmiError::InvalidBranchFactor` if `branch_factor` is zero.
  /// `RmiError::LenMismatch` if the slices differ in length.
  /// `RmiError::NotSorted` if `check_sorted` is true and keys are unsorted.
  pub fn train<K: Key>(
    keys: &[K],
    positions: &[usize],
    branch_factor: usize,
    check_sorted: bool,
  ) -> Result<Self> {
    if branch_factor == 0 {
      return Err(RmiError::InvalidBranchFactor);
    }
    if keys.len() != positions.len() {
      return Err(RmiError::LenMismatch {
        keys: keys.len(),
        positions: positions.len(),
      });
    }
    if check_sorted && !keys.is_sorted() {
      return Err(RmiError::NotSorted);
    }

    let n = keys.len();
    if n == 0 {
      return Ok(Self {
        branch_factor,
        stage1: Stage1::default(),
        stage2: vec![Leaf::default(); branch_factor],
      });
    }

    // Root targets the leaf index implied by the CDF: position / n * B
    // 根模型的目标是 CDF 蕴含的叶下标：position / n * B
    let mut root = LinearFit::default();
    let scale = branch_factor as f64 / n as f64;
    for (key, &pos) in keys.iter().zip(positions) {
      root.add(key.as_f64(), pos as f64 * scale);
    }
    let root_line = root.line();
    let stage1 = Stage1 {
      slope: root_line.slope,
      intercept: root_line.intercept,
    };

    // Pass 1: fit each leaf over its routed subset
    // 第一遍：每条叶在路由到的子集上拟合
    let mut fits = vec![LinearFit::default(); branch_factor];
    for (key, &pos) in keys.iter().zip(positions) {
      let x = key.as_f64();
      fits[route(stage1, branch_factor, x)].add(x, pos as f64);
    }

    let mut stage2: Vec<Leaf> = fits
      .iter()
      .map(|fit| {
        let line = fit.line();
        Leaf {
          slope: line.slope,
          intercept: line.intercept,
          min_error: 0,
          max_error: 0,
        }
      })
      .collect();

    // Pass 2: signed residual extremes per leaf
    // 第二遍：每条叶的带符号残差极值
    let mut min_res = vec![f64::INFINITY; branch_factor];
    let mut max_res = vec![f64::NEG_INFINITY; branch_factor];
    for (key, &pos) in keys.iter().zip(positions) {
      let x = key.as_f64();
      let leaf_idx = route(stage1, branch_factor, x);
      let r = pos as f64 - stage2[leaf_idx].predict(x);
      min_res[leaf_idx] = min_res[leaf_idx].min(r);
      max_res[leaf_idx] = max_res[leaf_idx].max(r);
    }
    for (leaf_idx, leaf) in stage2.iter_mut().enumerate() {
      if min_res[leaf_idx].is_finite() {
        leaf.min_error = min_res[leaf_idx].floor() as i64;
        leaf.max_error = max_res[leaf_idx].ceil() as i64;
      }
    }

    Ok(Self {
      branch_factor,
      stage1,
      stage2,
    })
  }

  /// Leaf index a key routes to
  /// 键路由到的叶下标
  #[inline]
  #[must_use]
  pub fn leaf_of<K: Key>(&self, key: K) -> usize {
    route(self.stage1, self.branch_factor, key.as_f64())
  }

  /// Predict the inclusive position range for a key
  /// 预测键的闭区间位置范围
  ///
  /// `[predicted + min_error, predicted + max_error]`, never below zero.
  /// The model stores no data length, so the caller clamps the upper bound
  /// to its array when it owns one (see `RmiData`).
  /// 返回 `[predicted + min_error, predicted + max_error]`，不低于零。
  /// 模型不存数据长度，持有数组的调用方自行收缩上界（见 `RmiData`）。
  #[must_use]
  pub fn search_range<K: Key>(&self, key: K) -> (usize, usize) {
    let x = key.as_f64();
    let leaf = &self.stage2[route(self.stage1, self.branch_factor, x)];
    let pred = leaf.predict(x).round() as i64;
    let lo = (pred + leaf.min_error).max(0) as usize;
    let hi = (pred + leaf.max_error).max(0) as usize;
    (lo, hi.max(lo))
  }

  /// Memory usage of the model
  /// 模型内存占用
  #[inline]
  #[must_use]
  pub fn mem_usage(&self) -> usize {
    self.stage2.len() * size_of::<Leaf>() + size_of::<Stage1>() + size_of::<usize>()
  }

  /// Save as JSON
  /// 保存为 JSON
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), self)?;
    Ok(())
  }

  /// Load from JSON
  /// 从 JSON 加载
  ///
  /// # Errors
  /// `RmiError::LeafCountMismatch` if `stage2` does not have exactly
  /// `branch_factor` leaves.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let file = File::open(path)?;
    let rmi: Self = serde_json::from_reader(BufReader::new(file))?;
    if rmi.branch_factor == 0 {
      return Err(RmiError::InvalidBranchFactor);
    }
    if rmi.stage2.len() != rmi.branch_factor {
      return Err(RmiError::LeafCountMismatch {
        got: rmi.stage2.len(),
        expect: rmi.branch_factor,
      });
    }
    Ok(rmi)
  }
}

/// Clamp to `[0, B - 1]` then truncate
/// 收缩到 `[0, B - 1]` 后截断
#[inline]
fn route(stage1: Stage1, branch_factor: usize, x: f64) -> usize {
  stage1.predict(x).clamp(0.0, (branch_factor - 1) as f64) as usize
}
