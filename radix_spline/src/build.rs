//! Spline knot and radix table construction
//! 样条结点与基数表构建

use crate::{Knot, RadixEntry};

/// Build spline knots so interpolation error never exceeds `error_bound`
/// 构建样条结点，保证插值误差不超过 `error_bound`
///
/// Greedy: from the current knot, test successively farther candidate
/// successors and commit the farthest one whose straight line keeps every
/// intermediate point within the bound. The recheck walks the whole window,
/// O(window²) per knot, same semantics as the segment builder. A run of
/// duplicate keys never breaks a window: with `x2 == x1` the interpolation
/// inherits the left position and the scan continues to the next distinct
/// key.
/// 贪心：从当前结点出发逐个试探更远的候选后继，提交直线仍使所有中间点
/// 满足误差界的最远者。复查遍历整个窗口，每个结点 O(window²)，与段构建器
/// 语义一致。重复键区间不会打断窗口：`x2 == x1` 时插值继承左端位置，
/// 扫描继续推进到下一个不同的键。
pub fn build_knots(data: &[u64], error_bound: u64) -> Vec<Knot> {
  let n = data.len();
  let mut knots = Vec::new();
  if n == 0 {
    return knots;
  }

  let eb = error_bound as f64;
  let mut cur = 0usize;

  while cur < n {
    knots.push(Knot {
      key: data[cur],
      position: cur,
    });

    let mut next = cur + 1;
    while next < n {
      if window_error(data, cur, next) > eb {
        next -= 1;
        break;
      }
      next += 1;
    }
    cur = next;
  }

  // The greedy walk can run off the end without committing the last point
  // 贪心推进可能越过末尾而未提交最后一个点
  if let Some(last) = knots.last()
    && last.position != n - 1
  {
    knots.push(Knot {
      key: data[n - 1],
      position: n - 1,
    });
  }

  knots
}

/// Max interpolation error over points strictly between `cur` and `next`
/// `cur` 与 `next` 之间（不含端点）各点的最大插值误差
fn window_error(data: &[u64], cur: usize, next: usize) -> f64 {
  let x1 = data[cur];
  let x2 = data[next];
  if x2 == x1 {
    return 0.0;
  }
  let slope = (next - cur) as f64 / (x2 - x1) as f64;
  let mut max_err = 0.0f64;
  for (i, &x) in data.iter().enumerate().take(next).skip(cur + 1) {
    let interp = slope.mul_add((x - x1) as f64, cur as f64);
    let e = (interp - i as f64).abs();
    if e > max_err {
      max_err = e;
    }
  }
  max_err
}

/// Record the first knot index for each distinct radix prefix
/// 为每个出现过的基数前缀记录第一个结点下标
///
/// Walks consecutive knot pairs in key order; prefixes therefore arrive
/// non-decreasing and dedup against the last entry suffices.
/// 按键序遍历相邻结点对；前缀单调不减，与末尾条目去重即可。
pub fn build_radix_table(knots: &[Knot], radix_bits: u32) -> Vec<RadixEntry> {
  let shift = 64 - radix_bits;
  let mut table: Vec<RadixEntry> = Vec::new();
  for (i, knot) in knots.iter().enumerate().take(knots.len().saturating_sub(1)) {
    let radix_key = knot.key >> shift;
    match table.last() {
      Some(last) if last.radix_key == radix_key => {}
      _ => table.push(RadixEntry { radix_key, knot_idx: i }),
    }
  }
  table
}
