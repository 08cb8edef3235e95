//! 复合单位构建器
//!
//! ```rust
//! use bb_units::catalog::{M, S};
//! use bb_units::UnitBuilder;
//!
//! let accel = UnitBuilder::new().num(M).denom(S).denom(S).build().unwrap();
//! assert_eq!(accel.to_string(), "m / s^2");
//! ```

use crate::base::BaseUnit;
use crate::composite::{CompositeUnit, Terms};
use crate::error::UnitError;

/// 逐项累积分子、分母，`build` 时一次性约分
#[derive(Debug, Clone, Default)]
pub struct UnitBuilder {
    coefficient: Option<f64>,
    numerator: Terms,
    denominator: Terms,
}

impl UnitBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个分子项
    pub fn num(mut self, unit: BaseUnit) -> Self {
        self.numerator.push(unit);
        self
    }

    /// 追加一个分母项
    pub fn denom(mut self, unit: BaseUnit) -> Self {
        self.denominator.push(unit);
        self
    }

    /// 追加 `power` 个相同的分子项
    pub fn num_pow(mut self, unit: BaseUnit, power: u32) -> Self {
        self.numerator.extend(std::iter::repeat_n(unit, power as usize));
        self
    }

    /// 追加 `power` 个相同的分母项
    pub fn denom_pow(mut self, unit: BaseUnit, power: u32) -> Self {
        self.denominator
            .extend(std::iter::repeat_n(unit, power as usize));
        self
    }

    /// 额外系数（默认 1），多次调用相乘
    pub fn coefficient(mut self, coefficient: f64) -> Self {
        self.coefficient = Some(self.coefficient.unwrap_or(1.0) * coefficient);
        self
    }

    /// 约分并构造
    ///
    /// 系数不是正的有限值时返回 [`UnitError::InvalidScale`]。
    pub fn build(self) -> Result<CompositeUnit, UnitError> {
        CompositeUnit::with_coefficient(
            self.coefficient.unwrap_or(1.0),
            self.numerator,
            self.denominator,
        )
    }
}
