//! # RadixSpline Learned Index
//! RadixSpline 学习型索引
//!
//! A piecewise-linear spline over the key→position CDF, built so every
//! interpolated position stays within `error_bound` of the true index, plus
//! a radix table mapping the top `radix_bits` of a key to the first spline
//! knot for that prefix. A query is one table probe, one short knot search,
//! one interpolation.
//! 在键到位置的 CDF 上构建分段线性样条，保证每个插值位置与真实下标的偏差
//! 不超过 `error_bound`；再以键的高 `radix_bits` 位为索引建立基数表，映射到
//! 该前缀的第一个样条结点。查询只需一次表探测、一次短结点搜索、一次插值。
//!
//! ## Usage / 使用方法
//!
//! ```rust
//! use radix_spline::RadixSpline;
//!
//! let data: Vec<u64> = (0..10_000).map(|i| i << 40).collect();
//! let rs = RadixSpline::new(&data, 32, 18, true).unwrap();
//! let (lo, hi) = rs.search_range(500 << 40);
//! assert!(lo <= 500 && 500 <= hi);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod build;
mod data;
pub mod error;
mod spline;
mod text;
mod types;

pub use build::{build_knots, build_radix_table};
pub use data::RadixSplineData;
pub use error::{Result, SplineError};
pub use spline::RadixSpline;
pub use types::{Knot, RadixEntry};
