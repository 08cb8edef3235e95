//! 换算结果缓存
//!
//! 缓存在构造时选择：`Memoized::new(unit)` 或 `unit.memoized()`。包装后的单位不可变，
//! 只有缓存本身会增长。内部使用 `RefCell`，因此 `Memoized` 不是 `Sync`，跨线程共享
//! 会在编译期被拒绝；每个实例各自持有一份缓存。
//!
//! 失败的换算（量纲不兼容）不缓存。

use crate::base::BaseUnit;
use crate::composite::CompositeUnit;
use crate::error::UnitError;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::collections::HashMap;

/// 单位的精确标识：量纲与比例的位模式
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConversionKey(SmallVec<[u64; 8]>);

/// 可以被缓存换算的单位
pub trait Convertible {
    /// 一个 `other` 等于多少个本单位
    fn per_unit(&self, other: &Self) -> Result<f64, UnitError>;

    /// 缓存键，相同的单位必须给出相同的键
    fn conversion_key(&self) -> ConversionKey;
}

impl Convertible for BaseUnit {
    fn per_unit(&self, other: &Self) -> Result<f64, UnitError> {
        self.per(other)
    }

    fn conversion_key(&self) -> ConversionKey {
        let mut key = SmallVec::new();
        push_term(&mut key, self);
        ConversionKey(key)
    }
}

impl Convertible for CompositeUnit {
    fn per_unit(&self, other: &Self) -> Result<f64, UnitError> {
        self.per(other)
    }

    fn conversion_key(&self) -> ConversionKey {
        let mut key = SmallVec::new();
        key.push(self.coefficient().to_bits());
        key.push(self.numerator().len() as u64);
        for term in self.numerator() {
            push_term(&mut key, term);
        }
        for term in self.denominator() {
            push_term(&mut key, term);
        }
        ConversionKey(key)
    }
}

fn push_term(key: &mut SmallVec<[u64; 8]>, term: &BaseUnit) {
    key.push(term.dimension() as u64);
    key.push(term.per_standard().to_bits());
}

/// 带换算缓存的单位
#[derive(Debug)]
pub struct Memoized<U: Convertible> {
    unit: U,
    cache: RefCell<HashMap<ConversionKey, f64>>,
}

impl<U: Convertible> Memoized<U> {
    pub fn new(unit: U) -> Self {
        Self {
            unit,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// 被包装的单位
    pub fn unit(&self) -> &U {
        &self.unit
    }

    /// 一个 `other` 等于多少个本单位，命中缓存时不重新计算
    pub fn per(&self, other: &U) -> Result<f64, UnitError> {
        let key = other.conversion_key();
        if let Some(per) = self.cache.borrow().get(&key) {
            return Ok(*per);
        }
        let per = self.unit.per_unit(other)?;
        self.cache.borrow_mut().insert(key, per);
        Ok(per)
    }

    /// 把 `amount` 个本单位换算为 `other`
    pub fn to(&self, other: &U, amount: f64) -> Result<f64, UnitError> {
        Ok(amount / self.per(other)?)
    }

    /// 已缓存的换算数
    pub fn cached(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl BaseUnit {
    /// 带缓存的包装
    pub fn memoized(self) -> Memoized<BaseUnit> {
        Memoized::new(self)
    }
}

impl CompositeUnit {
    /// 带缓存的包装
    pub fn memoized(self) -> Memoized<CompositeUnit> {
        Memoized::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::*;

    #[test]
    fn test_memoized_matches_plain() {
        let inch = IN.memoized();
        assert_eq!(inch.per(&FT).unwrap(), IN.per(&FT).unwrap());
        assert_eq!(inch.to(&FT, 24.0).unwrap(), IN.to(&FT, 24.0).unwrap());
        assert_eq!(inch.cached(), 1);

        inch.per(&CM).unwrap();
        assert_eq!(inch.cached(), 2);
    }

    #[test]
    fn test_errors_not_cached() {
        let inch = IN.memoized();
        assert!(inch.per(&S).is_err());
        assert!(inch.per(&S).is_err());
        assert_eq!(inch.cached(), 0);
    }

    #[test]
    fn test_composite_memo() {
        let rpm = RPM.clone().memoized();
        let a = rpm.to(&RAD_PER_S, 1.0).unwrap();
        let b = rpm.to(&RAD_PER_S, 1.0).unwrap();
        assert_eq!(a, b);
        assert_eq!(rpm.cached(), 1);
        assert!((a - RPM.to(&RAD_PER_S, 1.0).unwrap()).abs() < 1e-15);
    }

    #[test]
    fn test_key_distinguishes_units() {
        assert_ne!(IN.conversion_key(), FT.conversion_key());
        assert_ne!(RPM.conversion_key(), REV_PER_S.conversion_key());
        assert_eq!(RPM.conversion_key(), (REV / MIN).conversion_key());
        // 名称不参与键
        assert_eq!(FT.conversion_key(), FT.named("foot").conversion_key());
    }
}
