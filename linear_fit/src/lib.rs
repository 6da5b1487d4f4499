//! # linear_fit: Incremental Least-Squares Line Fitting
//! 增量最小二乘直线拟合
//!
//! Closed-form least-squares over running sums (`Σx, Σy, Σx², Σxy, count`),
//! so a point can be added and the line re-solved in O(1). This is the leaf
//! utility of the learned-index builders: segment-growing algorithms test
//! many candidate extensions and need cheap refits.
//! 基于滚动累加和的闭式最小二乘解，添加一个点后可在 O(1) 内重新求解直线。
//! 这是学习型索引构建器的叶子工具：段扩展算法需要廉价的重复拟合。
//!
//! ## Usage / 使用方法
//!
//! ```rust
//! use linear_fit::LinearFit;
//!
//! let mut fit = LinearFit::new();
//! fit.add(1.0, 3.0);
//! fit.add(2.0, 5.0);
//! fit.add(3.0, 7.0);
//! let line = fit.line();
//! assert!((line.slope - 2.0).abs() < 1e-9);
//! assert!((line.intercept - 1.0).abs() < 1e-9);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod fit;
mod key;

pub use fit::{DENOM_EPS, Line, LinearFit};
pub use key::Key;
