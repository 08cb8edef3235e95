//! 单位代数错误类型

use crate::dimension::Exponents;
use thiserror::Error;

/// 单位代数错误
///
/// 全部为确定性的本地计算错误：同步返回给调用者，不重试，不回退为 0。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// 量纲不兼容（换算或加减的两侧净指数不同）
    #[error("Dimension mismatch: cannot convert {from} to {to}")]
    DimensionMismatch {
        /// 源单位的量纲
        from: Exponents,
        /// 目标单位的量纲
        to: Exponents,
    },

    /// 幂次超出 [`MAX_POWER`](crate::composite::MAX_POWER)
    #[error("Unit power {power} out of range (|power| <= {max})")]
    PowerOutOfRange {
        /// 请求的幂次
        power: i32,
        /// 允许的最大绝对值
        max: i32,
    },

    /// 比例或系数不是正的有限值
    #[error("Invalid unit scale: {value} (must be positive and finite)")]
    InvalidScale {
        /// 非法值
        value: f64,
    },
}

impl UnitError {
    pub(crate) fn check_scale(value: f64) -> Result<f64, UnitError> {
        if value > 0.0 && value.is_finite() {
            Ok(value)
        } else {
            Err(UnitError::InvalidScale { value })
        }
    }
}
