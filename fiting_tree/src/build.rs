//! Greedy piecewise-linear segmentation
//! 贪心分段线性构建
//!
//! Extend the current segment one point at a time; after each extension
//! refit via running-sum least squares and recheck the max residual over
//! the whole window. The full-window recheck is O(window²) per segment but
//! keeps the exact least-squares error semantics; the committed segment
//! always uses the last fit that satisfied the bound.
//! 每次向当前段扩展一个点；扩展后用滚动累加和重新拟合，并对整个窗口复查
//! 最大残差。全窗口复查每段为 O(window²)，但保留精确的最小二乘误差语义；
//! 提交的段始终使用最后一个满足误差界的拟合。

use linear_fit::{Key, LinearFit};

use crate::Segment;

/// Build the ordered segment list covering every input point
/// 构建覆盖所有输入点的有序段列表
pub fn build_segments<K: Key>(keys: &[K], positions: &[usize], epsilon: u64) -> Vec<Segment<K>> {
  let n = keys.len();
  let mut segments = Vec::new();
  if n == 0 {
    return segments;
  }

  let eps = epsilon as f64;
  let mut start = 0usize;

  while start < n {
    let mut fit = LinearFit::new();
    fit.add(keys[start].as_f64(), positions[start] as f64);

    // Last accepted state: a one-point fit has zero residual by construction
    // 最后接受的状态：单点拟合的残差恒为零
    let mut line = fit.line();
    let mut max_resid = 0.0f64;
    let mut end = start;

    while end + 1 < n {
      let cand = end + 1;
      let mut trial = fit;
      trial.add(keys[cand].as_f64(), positions[cand] as f64);
      let trial_line = trial.line();

      let mut m = 0.0f64;
      for i in start..=cand {
        let r = (trial_line.predict(keys[i].as_f64()) - positions[i] as f64).abs();
        if r > m {
          m = r;
        }
      }
      if m > eps {
        break;
      }

      fit = trial;
      line = trial_line;
      max_resid = m;
      end = cand;
    }

    segments.push(Segment {
      start_key: keys[start],
      slope: line.slope,
      intercept: line.intercept,
      max_error: max_resid.ceil() as u64,
      start_position: positions[start],
      end_position: positions[end],
    });

    start = end + 1;
  }

  segments
}
