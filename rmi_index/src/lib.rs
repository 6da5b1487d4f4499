//! # Two-Stage Recursive Model Index (RMI)
//! 两级递归模型索引（RMI）
//!
//! A root line maps a key to one of `branch_factor` leaf lines; each leaf
//! is fit over just the keys routed to it and carries the signed residual
//! extremes observed at training time. The root absorbs gross
//! distributional skew cheaply; leaves only need a local linear
//! correction, so leaf error stays far below what one global line could
//! achieve at the same model size.
//! 根直线将键映射到 `branch_factor` 条叶直线之一；每条叶直线只在路由到它的
//! 键上拟合，并记录训练时观测到的带符号残差极值。根模型廉价地吸收整体
//! 分布偏斜；叶模型只做局部线性修正，误差远小于同等规模的单条全局直线。
//!
//! ## Usage / 使用方法
//!
//! ```rust
//! use rmi_index::Rmi;
//!
//! let keys: Vec<u64> = (0..10_000).map(|i| i * i).collect();
//! let positions: Vec<usize> = (0..10_000).collect();
//! let rmi = Rmi::train(&keys, &positions, 100, true).unwrap();
//! let (lo, hi) = rmi.search_range(2500u64);
//! assert!(lo <= 50 && 50 <= hi);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod data;
pub mod error;
mod rmi;
mod types;

pub use data::RmiData;
pub use error::{Result, RmiError};
pub use rmi::Rmi;
pub use types::{Leaf, Stage1};
