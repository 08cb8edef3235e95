//! # BB Units
//!
//! 量纲单位代数（无硬件依赖、无 I/O）
//!
//! ## 模块
//!
//! - `dimension`: 量纲与净指数
//! - `base`: 基本单位
//! - `composite`: 复合单位（构造时约分）
//! - `builder`: 复合单位构建器
//! - `unit`: 基本/复合单位的统一类型
//! - `quantity`: 带单位的数值
//! - `catalog`: 进程级单位目录
//! - `memo`: 换算结果缓存
//!
//! ## 换算方向
//!
//! `a.per(&b)` 是"一个 `b` 等于多少个 `a`"，`a.to(&b, x)` 把 `x` 个 `a` 换算为 `b`：
//!
//! ```rust
//! use bb_units::catalog::{FT, IN, RAD_PER_S, RPM};
//!
//! assert!((IN.per(&FT).unwrap() - 12.0).abs() < 1e-12);
//! assert!((IN.to(&FT, 24.0).unwrap() - 2.0).abs() < 1e-12);
//! assert!((RPM.to(&RAD_PER_S, 1.0).unwrap() - 0.10472).abs() < 1e-5);
//! ```
//!
//! 量纲不兼容的换算返回 [`UnitError::DimensionMismatch`]，不会返回 0。

pub mod base;
pub mod builder;
pub mod catalog;
pub mod composite;
pub mod dimension;
pub mod error;
pub mod memo;
pub mod quantity;
pub mod unit;

// 重新导出常用类型
pub use base::BaseUnit;
pub use builder::UnitBuilder;
pub use composite::{CompositeUnit, MAX_POWER};
pub use dimension::{Dimension, Exponents, NDIMS};
pub use error::UnitError;
pub use memo::{ConversionKey, Convertible, Memoized};
pub use quantity::Quantity;
pub use unit::Unit;
