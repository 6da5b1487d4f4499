//! Running-sum least squares
//! 滚动累加和最小二乘

/// Denominator below this is treated as zero variance in x
/// 分母小于该值视为 x 方差为零
pub const DENOM_EPS: f64 = 1e-10;

/// Fitted line: y = slope * x + intercept
/// 拟合直线：y = slope * x + intercept
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Line {
  pub slope: f64,
  pub intercept: f64,
}

impl Line {
  #[inline]
  #[must_use]
  pub fn predict(&self, x: f64) -> f64 {
    self.slope.mul_add(x, self.intercept)
  }
}

/// Incremental least-squares fit
/// 增量最小二乘拟合
///
/// `Copy` so callers can snapshot the accepted state before testing a
/// candidate extension and roll back by dropping the trial.
/// 实现 `Copy`，调用方可在试探扩展前快照已接受的状态，丢弃试探即回滚。
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearFit {
  sum_x: f64,
  sum_y: f64,
  sum_xx: f64,
  sum_xy: f64,
  count: usize,
  first_y: f64,
}

impl LinearFit {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Add one (x, y) point in O(1)
  /// O(1) 添加一个 (x, y) 点
  #[inline]
  pub fn add(&mut self, x: f64, y: f64) {
    if self.count == 0 {
      self.first_y = y;
    }
    self.sum_x += x;
    self.sum_y += y;
    self.sum_xx += x * x;
    self.sum_xy += x * y;
    self.count += 1;
  }

  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.count
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.count == 0
  }

  /// Solve slope and intercept from running sums in O(1)
  /// O(1) 从滚动累加和求解斜率和截距
  ///
  /// Zero variance in x (all x identical, or fewer than two points)
  /// degenerates to a constant model: slope 0, intercept = first y.
  /// x 方差为零（所有 x 相同或少于两个点）退化为常量模型：
  /// 斜率 0，截距为首个 y。
  #[must_use]
  pub fn line(&self) -> Line {
    if self.count == 0 {
      return Line::default();
    }
    let n = self.count as f64;
    let denom = n.mul_add(self.sum_xx, -(self.sum_x * self.sum_x));
    if denom.abs() < DENOM_EPS {
      return Line {
        slope: 0.0,
        intercept: self.first_y,
      };
    }
    let slope = n.mul_add(self.sum_xy, -(self.sum_x * self.sum_y)) / denom;
    let intercept = slope.mul_add(-self.sum_x, self.sum_y) / n;
    Line { slope, intercept }
  }
}
