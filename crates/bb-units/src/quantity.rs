//! 带单位的数值
//!
//! [`Quantity`] 不可变：每个运算都返回新值。乘除直接组合单位；加减要求两侧兼容，
//! 右侧先换算到左侧的单位。

use crate::dimension::Exponents;
use crate::error::UnitError;
use crate::unit::Unit;
use std::fmt;
use std::ops::{Div, Mul, Neg};

/// 数值与单位
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: impl Into<Unit>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn exponents(&self) -> Exponents {
        self.unit.exponents()
    }

    /// 换算到 `target`
    ///
    /// 量纲不同时返回 [`UnitError::DimensionMismatch`]。
    pub fn convert(&self, target: impl Into<Unit>) -> Result<Quantity, UnitError> {
        let target = target.into();
        let value = self.unit.to(&target, self.value)?;
        Ok(Quantity {
            value,
            unit: target,
        })
    }

    /// 换算到 `target` 后的数值
    pub fn value_in(&self, target: impl Into<Unit>) -> Result<f64, UnitError> {
        self.unit.to(&target.into(), self.value)
    }

    /// 数值相乘，单位组合为 `unit₁ × unit₂`
    pub fn multiply(&self, other: &Quantity) -> Quantity {
        Quantity {
            value: self.value * other.value,
            unit: &self.unit * &other.unit,
        }
    }

    /// 数值相除，单位组合为 `unit₁ / unit₂`
    pub fn divide(&self, other: &Quantity) -> Quantity {
        Quantity {
            value: self.value / other.value,
            unit: &self.unit / &other.unit,
        }
    }

    /// 相加，结果使用左侧单位
    pub fn add(&self, other: &Quantity) -> Result<Quantity, UnitError> {
        let rhs = other.unit.to(&self.unit, other.value)?;
        Ok(Quantity {
            value: self.value + rhs,
            unit: self.unit.clone(),
        })
    }

    /// 相减，结果使用左侧单位
    pub fn sub(&self, other: &Quantity) -> Result<Quantity, UnitError> {
        let rhs = other.unit.to(&self.unit, other.value)?;
        Ok(Quantity {
            value: self.value - rhs,
            unit: self.unit.clone(),
        })
    }

    /// 乘以无量纲标量
    pub fn scale(&self, factor: f64) -> Quantity {
        Quantity {
            value: self.value * factor,
            unit: self.unit.clone(),
        }
    }
}

impl Mul for &Quantity {
    type Output = Quantity;

    fn mul(self, rhs: &Quantity) -> Quantity {
        self.multiply(rhs)
    }
}

impl Div for &Quantity {
    type Output = Quantity;

    fn div(self, rhs: &Quantity) -> Quantity {
        self.divide(rhs)
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        self.scale(rhs)
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        Quantity {
            value: -self.value,
            unit: self.unit,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} {}", p, self.value, self.unit),
            None => write!(f, "{} {}", self.value, self.unit),
        }
    }
}
