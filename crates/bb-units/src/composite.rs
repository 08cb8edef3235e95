//! 复合单位
//!
//! 由基本单位相乘、相除得到。构造时约分：分子、分母中同量纲（不要求同单位）的项
//! 成对消去，比例并入系数。例如 `in / cm` 约分后没有剩余项，系数为 2.54。
//!
//! 剩余项按量纲分组存储，组内保持声明顺序。按量纲分组的原因：
//!
//! ```text
//! kg·m/s  = KG * M  / S
//! lb·ft/s = FT * LB / S
//! ```
//!
//! 直接按位置配对会拿千克去比英尺；按量纲分组后，配对只发生在同量纲项之间，
//! 与输入顺序无关。
//!
//! 约分保证同一量纲的项只会出现在分子或分母的一侧，因此两个兼容单位在每个量纲上
//! 的项数相同，可以按位置配对换算。

use crate::base::BaseUnit;
use crate::dimension::{Dimension, Exponents};
use crate::error::UnitError;
use smallvec::SmallVec;
use std::fmt;
use std::ops::{Div, Mul};

pub(crate) type Terms = SmallVec<[BaseUnit; 4]>;

/// [`CompositeUnit::pow`] 允许的最大幂次绝对值
pub const MAX_POWER: i32 = 64;

/// 复合单位
///
/// 大小 = `coefficient × Π(分子项) / Π(分母项)`。
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeUnit {
    coefficient: f64,
    /// 按量纲排序（稳定），同量纲内为声明顺序
    numerator: Terms,
    denominator: Terms,
    exponents: Exponents,
}

impl CompositeUnit {
    /// 由分子、分母项构造，系数为 1
    pub fn new(
        numerator: impl IntoIterator<Item = BaseUnit>,
        denominator: impl IntoIterator<Item = BaseUnit>,
    ) -> Self {
        Self::reduce(1.0, numerator, denominator)
    }

    /// 带额外系数构造（用于 `g` 这类具名常量）
    pub fn with_coefficient(
        coefficient: f64,
        numerator: impl IntoIterator<Item = BaseUnit>,
        denominator: impl IntoIterator<Item = BaseUnit>,
    ) -> Result<Self, UnitError> {
        let coefficient = UnitError::check_scale(coefficient)?;
        Ok(Self::reduce(coefficient, numerator, denominator))
    }

    /// 无量纲单位 `1`
    pub fn unitless() -> Self {
        Self::reduce(1.0, [], [])
    }

    /// 约分并分组
    ///
    /// 对每个分子项，找到第一个同量纲的分母项，二者消去，系数乘以 `分子/分母` 的大小；
    /// 直到两侧不再有同量纲的项。
    pub(crate) fn reduce(
        coefficient: f64,
        numerator: impl IntoIterator<Item = BaseUnit>,
        denominator: impl IntoIterator<Item = BaseUnit>,
    ) -> Self {
        let mut coefficient = coefficient;
        let mut remaining: Terms = denominator.into_iter().collect();
        let mut kept: Terms = SmallVec::new();

        for num in numerator {
            match remaining
                .iter()
                .position(|den| den.dimension() == num.dimension())
            {
                Some(j) => {
                    let den = remaining.remove(j);
                    // 1 num / 1 den = den.per(num)
                    coefficient *= den.ratio(&num);
                },
                None => kept.push(num),
            }
        }

        kept.sort_by_key(BaseUnit::dimension);
        remaining.sort_by_key(BaseUnit::dimension);

        let mut exponents = Exponents::DIMENSIONLESS;
        for term in &kept {
            exponents.bump(term.dimension(), 1);
        }
        for term in &remaining {
            exponents.bump(term.dimension(), -1);
        }

        Self {
            coefficient,
            numerator: kept,
            denominator: remaining,
            exponents,
        }
    }

    /// 约分产生的系数
    #[inline]
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// 某量纲的分子项（声明顺序）
    pub fn numerator_terms(&self, dimension: Dimension) -> &[BaseUnit] {
        group(&self.numerator, dimension)
    }

    /// 某量纲的分母项（声明顺序）
    pub fn denominator_terms(&self, dimension: Dimension) -> &[BaseUnit] {
        group(&self.denominator, dimension)
    }

    /// 某量纲的净指数
    #[inline]
    pub fn dimension_exponent(&self, dimension: Dimension) -> i32 {
        self.exponents.get(dimension)
    }

    #[inline]
    pub fn exponents(&self) -> Exponents {
        self.exponents
    }

    /// 全部分子项，按量纲分组
    pub fn numerator(&self) -> &[BaseUnit] {
        &self.numerator
    }

    /// 全部分母项，按量纲分组
    pub fn denominator(&self) -> &[BaseUnit] {
        &self.denominator
    }

    /// 每个量纲的净指数都相同
    pub fn is_compatible_with(&self, other: &CompositeUnit) -> bool {
        self.exponents == other.exponents
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.is_dimensionless()
    }

    /// 一个 `other` 等于多少个本单位
    ///
    /// 系数比乘以各量纲上的逐项换算：分子项与分子项配对，分母项与分母项配对，
    /// 分母方向取倒数。
    pub fn per(&self, other: &CompositeUnit) -> Result<f64, UnitError> {
        if !self.is_compatible_with(other) {
            return Err(UnitError::DimensionMismatch {
                from: self.exponents,
                to: other.exponents,
            });
        }

        let mut per = other.coefficient / self.coefficient;
        for dim in Dimension::ALL {
            let mine = self.numerator_terms(dim);
            let theirs = other.numerator_terms(dim);
            for (a, b) in mine.iter().zip(theirs) {
                per *= a.ratio(b);
            }

            let mine = self.denominator_terms(dim);
            let theirs = other.denominator_terms(dim);
            for (a, b) in mine.iter().zip(theirs) {
                per *= b.ratio(a);
            }
        }
        Ok(per)
    }

    /// 把 `amount` 个本单位换算为 `other`
    pub fn to(&self, other: &CompositeUnit, amount: f64) -> Result<f64, UnitError> {
        Ok(amount / self.per(other)?)
    }

    /// 倒数单位
    pub fn recip(&self) -> CompositeUnit {
        Self::reduce(
            1.0 / self.coefficient,
            self.denominator.iter().copied(),
            self.numerator.iter().copied(),
        )
    }

    /// 整数次幂；`pow(0)` 为无量纲 `1`
    ///
    /// `|power|` 超过 [`MAX_POWER`] 时返回 [`UnitError::PowerOutOfRange`]。
    pub fn pow(&self, power: i32) -> Result<CompositeUnit, UnitError> {
        if !(-MAX_POWER..=MAX_POWER).contains(&power) {
            return Err(UnitError::PowerOutOfRange {
                power,
                max: MAX_POWER,
            });
        }
        let base = if power < 0 { self.recip() } else { self.clone() };
        let n = power.unsigned_abs() as usize;
        let numerator = base.numerator.iter().copied().cycle().take(base.numerator.len() * n);
        let denominator = base
            .denominator
            .iter()
            .copied()
            .cycle()
            .take(base.denominator.len() * n);
        Ok(Self::reduce(
            base.coefficient.powi(power.abs()),
            numerator,
            denominator,
        ))
    }

    fn product(&self, rhs: &CompositeUnit) -> CompositeUnit {
        Self::reduce(
            self.coefficient * rhs.coefficient,
            self.numerator.iter().chain(rhs.numerator.iter()).copied(),
            self.denominator.iter().chain(rhs.denominator.iter()).copied(),
        )
    }

    fn quotient(&self, rhs: &CompositeUnit) -> CompositeUnit {
        Self::reduce(
            self.coefficient / rhs.coefficient,
            self.numerator.iter().chain(rhs.denominator.iter()).copied(),
            self.denominator.iter().chain(rhs.numerator.iter()).copied(),
        )
    }
}

fn group(terms: &[BaseUnit], dimension: Dimension) -> &[BaseUnit] {
    let start = terms.partition_point(|u| u.dimension() < dimension);
    let end = terms.partition_point(|u| u.dimension() <= dimension);
    &terms[start..end]
}

impl From<BaseUnit> for CompositeUnit {
    fn from(unit: BaseUnit) -> Self {
        CompositeUnit::new([unit], [])
    }
}

impl Mul for &CompositeUnit {
    type Output = CompositeUnit;

    fn mul(self, rhs: &CompositeUnit) -> CompositeUnit {
        self.product(rhs)
    }
}

impl Mul for CompositeUnit {
    type Output = CompositeUnit;

    fn mul(self, rhs: CompositeUnit) -> CompositeUnit {
        self.product(&rhs)
    }
}

impl Div for &CompositeUnit {
    type Output = CompositeUnit;

    fn div(self, rhs: &CompositeUnit) -> CompositeUnit {
        self.quotient(rhs)
    }
}

impl Div for CompositeUnit {
    type Output = CompositeUnit;

    fn div(self, rhs: CompositeUnit) -> CompositeUnit {
        self.quotient(&rhs)
    }
}

impl Mul<BaseUnit> for CompositeUnit {
    type Output = CompositeUnit;

    fn mul(self, rhs: BaseUnit) -> CompositeUnit {
        self.product(&CompositeUnit::from(rhs))
    }
}

impl Div<BaseUnit> for CompositeUnit {
    type Output = CompositeUnit;

    fn div(self, rhs: BaseUnit) -> CompositeUnit {
        self.quotient(&CompositeUnit::from(rhs))
    }
}

impl Mul for BaseUnit {
    type Output = CompositeUnit;

    fn mul(self, rhs: BaseUnit) -> CompositeUnit {
        CompositeUnit::new([self, rhs], [])
    }
}

impl Div for BaseUnit {
    type Output = CompositeUnit;

    fn div(self, rhs: BaseUnit) -> CompositeUnit {
        CompositeUnit::new([self], [rhs])
    }
}

impl fmt::Display for CompositeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numerator = render_terms(&self.numerator);
        let denominator = render_terms(&self.denominator);

        let mut parts = Vec::new();
        if self.coefficient != 1.0 {
            parts.push(format!("{}", self.coefficient));
        }
        if !numerator.is_empty() {
            parts.push(numerator);
        }
        if parts.is_empty() {
            parts.push("1".to_string());
        }
        write!(f, "{}", parts.join(" "))?;
        if !denominator.is_empty() {
            write!(f, " / {}", denominator)?;
        }
        Ok(())
    }
}

/// 相邻的相同项折叠为幂：`s s` -> `s^2`
fn render_terms(terms: &[BaseUnit]) -> String {
    let mut rendered: Vec<(String, u32)> = Vec::new();
    for term in terms {
        let name = term.to_string();
        match rendered.last_mut() {
            Some((last, count)) if *last == name => *count += 1,
            _ => rendered.push((name, 1)),
        }
    }
    rendered
        .into_iter()
        .map(|(name, count)| {
            if count == 1 {
                name
            } else {
                format!("{}^{}", name, count)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
