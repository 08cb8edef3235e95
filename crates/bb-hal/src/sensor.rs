//! 位置传感器定义

/// 正交编码器型号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EncoderType {
    /// CUI AMT201
    Amt201,
}

impl EncoderType {
    /// 每转计数（CPR）
    pub const fn cpr(self) -> u32 {
        match self {
            EncoderType::Amt201 => 2048,
        }
    }
}

/// 位置传感器
///
/// 正交编码器每转 tick 数为 `4 × CPR`（A/B 两路的上升沿和下降沿都计数）。
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Sensor {
    /// 外接正交编码器
    Quadrature {
        /// 编码器型号
        encoder: EncoderType,
    },
    /// 电机内置传感器，直接给出每转 tick 数
    Integrated {
        /// 每转 tick 数
        ticks_per_revolution: f64,
    },
}

impl Sensor {
    pub const fn quadrature(encoder: EncoderType) -> Self {
        Sensor::Quadrature { encoder }
    }

    /// 每转 tick 数
    pub fn ticks_per_revolution(&self) -> f64 {
        match self {
            Sensor::Quadrature { encoder } => 4.0 * encoder.cpr() as f64,
            Sensor::Integrated {
                ticks_per_revolution,
            } => *ticks_per_revolution,
        }
    }

    /// 每转计数，只有正交编码器有
    pub fn cpr(&self) -> Option<u32> {
        match self {
            Sensor::Quadrature { encoder } => Some(encoder.cpr()),
            Sensor::Integrated { .. } => None,
        }
    }
}
