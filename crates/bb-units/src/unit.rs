//! 统一单位类型
//!
//! 控制器与 [`Quantity`](crate::Quantity) 接受 [`Unit`]，因此基本单位与复合单位
//! 都可以直接传入；两者之间的换算在这里统一处理。

use crate::base::BaseUnit;
use crate::composite::CompositeUnit;
use crate::dimension::Exponents;
use crate::error::UnitError;
use std::fmt;
use std::ops::{Div, Mul};

/// 基本单位或复合单位
#[derive(Debug, Clone, PartialEq)]
pub enum Unit {
    Base(BaseUnit),
    Composite(CompositeUnit),
}

impl Unit {
    /// 各量纲净指数
    pub fn exponents(&self) -> Exponents {
        match self {
            Unit::Base(unit) => unit.exponents(),
            Unit::Composite(unit) => unit.exponents(),
        }
    }

    pub fn is_compatible_with(&self, other: &Unit) -> bool {
        self.exponents() == other.exponents()
    }

    /// 一个 `other` 等于多少个本单位
    pub fn per(&self, other: &Unit) -> Result<f64, UnitError> {
        match (self, other) {
            (Unit::Base(a), Unit::Base(b)) => a.per(b),
            _ => self.to_composite().per(&other.to_composite()),
        }
    }

    /// 把 `amount` 个本单位换算为 `other`
    pub fn to(&self, other: &Unit, amount: f64) -> Result<f64, UnitError> {
        Ok(amount / self.per(other)?)
    }

    /// 作为复合单位（基本单位视为单项分子）
    pub fn to_composite(&self) -> CompositeUnit {
        match self {
            Unit::Base(unit) => CompositeUnit::from(*unit),
            Unit::Composite(unit) => unit.clone(),
        }
    }

    pub fn recip(&self) -> Unit {
        Unit::Composite(self.to_composite().recip())
    }

    pub fn pow(&self, power: i32) -> Result<Unit, UnitError> {
        match (self, power) {
            (Unit::Base(_), 1) => Ok(self.clone()),
            _ => Ok(Unit::Composite(self.to_composite().pow(power)?)),
        }
    }
}

impl From<BaseUnit> for Unit {
    fn from(unit: BaseUnit) -> Self {
        Unit::Base(unit)
    }
}

impl From<&BaseUnit> for Unit {
    fn from(unit: &BaseUnit) -> Self {
        Unit::Base(*unit)
    }
}

impl From<CompositeUnit> for Unit {
    fn from(unit: CompositeUnit) -> Self {
        Unit::Composite(unit)
    }
}

impl From<&CompositeUnit> for Unit {
    fn from(unit: &CompositeUnit) -> Self {
        Unit::Composite(unit.clone())
    }
}

impl From<&Unit> for Unit {
    fn from(unit: &Unit) -> Self {
        unit.clone()
    }
}

impl Mul for Unit {
    type Output = Unit;

    fn mul(self, rhs: Unit) -> Unit {
        Unit::Composite(self.to_composite() * rhs.to_composite())
    }
}

impl Div for Unit {
    type Output = Unit;

    fn div(self, rhs: Unit) -> Unit {
        Unit::Composite(self.to_composite() / rhs.to_composite())
    }
}

impl Mul for &Unit {
    type Output = Unit;

    fn mul(self, rhs: &Unit) -> Unit {
        Unit::Composite(self.to_composite() * rhs.to_composite())
    }
}

impl Div for &Unit {
    type Output = Unit;

    fn div(self, rhs: &Unit) -> Unit {
        Unit::Composite(self.to_composite() / rhs.to_composite())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Base(unit) => fmt::Display::fmt(unit, f),
            Unit::Composite(unit) => fmt::Display::fmt(unit, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::*;

    #[test]
    fn test_base_and_composite_interconvert() {
        // ft 与 ft/1 互相兼容
        let ft = Unit::from(FT);
        let ft_composite = Unit::from(CompositeUnit::from(FT));
        assert!(ft.is_compatible_with(&ft_composite));
        assert!((ft.to(&Unit::from(IN), 2.0).unwrap() - 24.0).abs() < 1e-12);
        assert!((ft_composite.to(&Unit::from(IN), 2.0).unwrap() - 24.0).abs() < 1e-12);
    }

    #[test]
    fn test_catalog_composites_through_unit() {
        let rpm = Unit::from(&*RPM);
        let rad_s = Unit::from(&*RAD_PER_S);
        assert!((rpm.to(&rad_s, 60.0).unwrap() - 2.0 * std::f64::consts::PI).abs() < 1e-9);
    }

    #[test]
    fn test_unit_algebra() {
        let m = Unit::from(M);
        let s = Unit::from(S);
        let v = &m / &s;
        assert_eq!(v.to_string(), "m / s");
        let a = v.clone() / s.clone();
        assert!(a.is_compatible_with(&Unit::from(&*M_PER_S2)));
        assert!((&a * &s).is_compatible_with(&v));
        assert_eq!(s.recip().exponents(), (&v / &m).exponents());

        assert_eq!(m.pow(1).unwrap(), m);
        assert_eq!(s.pow(-2).unwrap().exponents(), (&a / &m).exponents());
        assert!(matches!(
            s.pow(i32::MIN),
            Err(UnitError::PowerOutOfRange { .. })
        ));
    }

    #[test]
    fn test_mismatch_is_error() {
        let err = Unit::from(M).per(&Unit::from(S)).unwrap_err();
        assert!(matches!(err, UnitError::DimensionMismatch { .. }));
    }
}
