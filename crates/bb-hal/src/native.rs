//! 原生单位定义
//!
//! 不同厂商的控制器以不同的单位报告位置与速度：
//!
//! | 厂商        | 位置          | 速度              | 加速度                 | PID 槽位 |
//! |-------------|---------------|-------------------|------------------------|----------|
//! | Talon SRX   | 传感器 tick   | tick / 100ms      | tick / 100ms / s       | 2        |
//! | Spark MAX   | 转            | 转 / min          | 转 / min / s           | 4        |

use crate::error::AdapterError;
use crate::sensor::Sensor;
use bb_units::BaseUnit;
use bb_units::catalog::{MIN, MS100, S};

/// 设备原生单位
///
/// 位置单位由"每转 tick 数"给出（以编码器转为参照）；速度的时间单位为 `time`，
/// 加速度的第二个时间单位为 `second_time`。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NativeUnits {
    /// 每编码器转的原生位置单位数
    pub ticks_per_revolution: f64,
    /// 速度时基
    pub time: BaseUnit,
    /// 加速度的第二个时基
    pub second_time: BaseUnit,
}

/// 厂商约定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VendorProfile {
    /// CTRE Talon SRX
    TalonSrx,
    /// REV Spark MAX
    SparkMax,
}

impl VendorProfile {
    /// 在给定传感器下的原生单位
    ///
    /// Talon SRX 以传感器 tick 计位置，没有传感器时返回 [`AdapterError::NoSensor`]；
    /// Spark MAX 始终以转计位置。
    pub fn native_units(&self, sensor: Option<&Sensor>) -> Result<NativeUnits, AdapterError> {
        match self {
            VendorProfile::TalonSrx => {
                let sensor = sensor.ok_or(AdapterError::NoSensor)?;
                Ok(NativeUnits {
                    ticks_per_revolution: sensor.ticks_per_revolution(),
                    time: MS100,
                    second_time: S,
                })
            },
            VendorProfile::SparkMax => Ok(NativeUnits {
                ticks_per_revolution: 1.0,
                time: MIN,
                second_time: S,
            }),
        }
    }

    /// 硬件 PID 槽位数
    pub const fn pid_slots(&self) -> u8 {
        match self {
            VendorProfile::TalonSrx => 2,
            VendorProfile::SparkMax => 4,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            VendorProfile::TalonSrx => "Talon SRX",
            VendorProfile::SparkMax => "Spark MAX",
        }
    }
}
