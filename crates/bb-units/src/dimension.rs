//! 物理量纲
//!
//! 每个 [`BaseUnit`](crate::BaseUnit) 只属于一个量纲；复合单位按量纲记录净指数。

use std::fmt;

/// 量纲个数
pub const NDIMS: usize = 4;

/// 基本量纲（封闭集合）
///
/// 声明顺序即排序顺序，复合单位内部按此顺序对项分组。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Dimension {
    Length,
    Angle,
    Mass,
    Time,
}

impl Dimension {
    /// 全部量纲，按排序顺序
    pub const ALL: [Dimension; NDIMS] = [
        Dimension::Length,
        Dimension::Angle,
        Dimension::Mass,
        Dimension::Time,
    ];

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Length => "length",
            Dimension::Angle => "angle",
            Dimension::Mass => "mass",
            Dimension::Time => "time",
        };
        f.write_str(name)
    }
}

/// 各量纲的净指数
///
/// 例如 `kg·m²/s` 为 `Length: 2, Mass: 1, Time: -1`。
/// 两个单位兼容当且仅当它们的 `Exponents` 相等。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exponents([i32; NDIMS]);

impl Exponents {
    /// 无量纲
    pub const DIMENSIONLESS: Self = Exponents([0; NDIMS]);

    /// 单一量纲、指数为 1
    pub const fn of(dimension: Dimension) -> Self {
        let mut dims = [0; NDIMS];
        dims[dimension.index()] = 1;
        Exponents(dims)
    }

    #[inline]
    pub fn get(&self, dimension: Dimension) -> i32 {
        self.0[dimension.index()]
    }

    #[inline]
    pub(crate) fn bump(&mut self, dimension: Dimension, delta: i32) {
        self.0[dimension.index()] += delta;
    }

    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(|x| *x == 0)
    }

    /// 非零分量
    pub fn components(&self) -> impl Iterator<Item = (Dimension, i32)> + '_ {
        Dimension::ALL
            .iter()
            .copied()
            .zip(self.0.iter().copied())
            .filter(|(_, x)| *x != 0)
    }
}

impl fmt::Display for Exponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut numerator = Vec::new();
        let mut denominator = Vec::new();
        for (dim, power) in self.components() {
            let side = if power > 0 {
                &mut numerator
            } else {
                &mut denominator
            };
            match power.abs() {
                1 => side.push(dim.to_string()),
                n => side.push(format!("{}^{}", dim, n)),
            }
        }
        if numerator.is_empty() {
            write!(f, "1")?;
        } else {
            write!(f, "{}", numerator.join(" "))?;
        }
        if !denominator.is_empty() {
            write!(f, " / {}", denominator.join(" "))?;
        }
        Ok(())
    }
}
