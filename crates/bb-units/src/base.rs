//! 基本单位
//!
//! 单位之间不直接换算：每个单位记录"一个标准单位中有多少个本单位"，
//! 换算时先经过该量纲的隐式标准。标准本身可以任意选择，只要同一量纲内一致。
//!
//! `per_standard` 在构造时固定，之后不可变，因此任意两个同量纲单位之间的换算
//! 都是一致且可传递的。

use crate::dimension::{Dimension, Exponents};
use crate::error::UnitError;
use std::fmt;

/// 基本单位
///
/// 只度量一个 [`Dimension`]。`Copy`，可以作为进程级常量共享。
///
/// # 示例
///
/// ```rust
/// use bb_units::{BaseUnit, Dimension};
///
/// const INCH: BaseUnit = BaseUnit::standard("in", Dimension::Length);
/// const FOOT: BaseUnit = BaseUnit::relative_to("ft", INCH, 1.0 / 12.0);
///
/// assert!((INCH.to(&FOOT, 24.0).unwrap() - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseUnit {
    dimension: Dimension,
    /// 一个标准单位中本单位的个数
    per_standard: f64,
    name: Option<&'static str>,
}

impl BaseUnit {
    /// 某量纲的标准单位（`per_standard = 1`）
    pub const fn standard(name: &'static str, dimension: Dimension) -> Self {
        Self {
            dimension,
            per_standard: 1.0,
            name: Some(name),
        }
    }

    /// 直接给出 `per_standard` 的匿名单位
    ///
    /// # Panics
    ///
    /// `per_standard` 不是正的有限值时 panic；在常量上下文中即编译错误。
    /// 运行时输入请使用 [`BaseUnit::try_new`]。
    pub const fn new(dimension: Dimension, per_standard: f64) -> Self {
        assert!(
            per_standard > 0.0 && per_standard.is_finite(),
            "per_standard must be positive and finite"
        );
        Self {
            dimension,
            per_standard,
            name: None,
        }
    }

    /// 以另一个单位为参照定义：一个 `base` 中有 `per` 个本单位
    ///
    /// 结果的 `per_standard = per × base.per_standard`，在此刻固定。
    ///
    /// # Panics
    ///
    /// 同 [`BaseUnit::new`]。
    pub const fn relative_to(name: &'static str, base: BaseUnit, per: f64) -> Self {
        let per_standard = per * base.per_standard;
        assert!(
            per_standard > 0.0 && per_standard.is_finite(),
            "per_standard must be positive and finite"
        );
        Self {
            dimension: base.dimension,
            per_standard,
            name: Some(name),
        }
    }

    /// 运行时构造，校验比例
    pub fn try_new(dimension: Dimension, per_standard: f64) -> Result<Self, UnitError> {
        let per_standard = UnitError::check_scale(per_standard)?;
        Ok(Self {
            dimension,
            per_standard,
            name: None,
        })
    }

    /// 运行时的 [`BaseUnit::relative_to`]
    pub fn try_relative_to(
        name: &'static str,
        base: BaseUnit,
        per: f64,
    ) -> Result<Self, UnitError> {
        let per_standard = UnitError::check_scale(per * base.per_standard)?;
        Ok(Self {
            dimension: base.dimension,
            per_standard,
            name: Some(name),
        })
    }

    /// 更换名称，比例不变
    pub const fn named(self, name: &'static str) -> Self {
        Self {
            name: Some(name),
            ..self
        }
    }

    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// 一个标准单位中本单位的个数
    #[inline]
    pub fn per_standard(&self) -> f64 {
        self.per_standard
    }

    #[inline]
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    pub fn exponents(&self) -> Exponents {
        Exponents::of(self.dimension)
    }

    /// 一个 `other` 等于多少个本单位
    ///
    /// 例如 `IN.per(&FT) == 12.0`。量纲不同返回 [`UnitError::DimensionMismatch`]。
    pub fn per(&self, other: &BaseUnit) -> Result<f64, UnitError> {
        if self.dimension != other.dimension {
            return Err(UnitError::DimensionMismatch {
                from: self.exponents(),
                to: other.exponents(),
            });
        }
        Ok(self.ratio(other))
    }

    /// 把 `amount` 个本单位换算为 `other`
    pub fn to(&self, other: &BaseUnit, amount: f64) -> Result<f64, UnitError> {
        Ok(amount / self.per(other)?)
    }

    /// 不检查量纲的 `per`，调用方保证同量纲
    #[inline]
    pub(crate) fn ratio(&self, other: &BaseUnit) -> f64 {
        self.per_standard / other.per_standard
    }
}

impl fmt::Display for BaseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "[{} x{}]", self.dimension, self.per_standard),
        }
    }
}
