//! # FITing-Tree Learned Index
//! FITing-Tree 学习型索引
//!
//! Greedy piecewise-linear approximation over a sorted key array: each
//! segment covers a maximal run of keys whose least-squares line stays
//! within `epsilon` of every true position. A query evaluates one line and
//! returns a position range of width at most `2 * max_error`.
//! 对已排序键数组做贪心分段线性逼近：每个段覆盖一段极大的键区间，
//! 其最小二乘直线对每个真实位置的偏差不超过 `epsilon`。
//! 查询只需计算一条直线，返回宽度不超过 `2 * max_error` 的位置区间。
//!
//! ## Usage / 使用方法
//!
//! ```rust
//! use fiting_tree::FitingTree;
//!
//! let keys: Vec<u64> = (0..1000).map(|i| i * 3).collect();
//! let positions: Vec<usize> = (0..1000).collect();
//! let tree = FitingTree::new(&keys, &positions, 8, true).unwrap();
//! let (lo, hi) = tree.search_range(300);
//! assert!(lo <= 100 && 100 <= hi);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod build;
mod data;
pub mod error;
mod fiting;
mod load;
mod types;

pub use build::build_segments;
pub use data::FitingTreeData;
pub use error::{FitingError, Result};
pub use fiting::FitingTree;
pub use load::load_keys;
pub use types::Segment;
