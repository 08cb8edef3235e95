//! 常见 FRC 电机的电气常数（仅查表）

use serde::{Deserialize, Serialize};

/// 电机型号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotorModel {
    Falcon500,
    Neo,
    Cim,
    MiniCim,
    Bag,
    Pro775,
}

/// 电机常数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorConstants {
    /// 粘滞摩擦系数（N·m·s/rad）
    pub b: f64,
    /// 绕组电阻（Ω）
    pub r: f64,
    /// 转矩常数（N·m/A）
    pub kt: f64,
    /// 反电动势常数（V·s/rad）
    pub kw: f64,
}

impl MotorConstants {
    /// 稳态速度前馈 `b·R/Kt + Kw`（V·s/rad）
    pub fn velocity_feed_forward(&self) -> f64 {
        self.b * self.r / self.kt + self.kw
    }
}

impl MotorModel {
    pub const ALL: [MotorModel; 6] = [
        MotorModel::Falcon500,
        MotorModel::Neo,
        MotorModel::Cim,
        MotorModel::MiniCim,
        MotorModel::Bag,
        MotorModel::Pro775,
    ];

    pub const fn constants(self) -> MotorConstants {
        match self {
            MotorModel::Falcon500 => MotorConstants {
                b: 4.093_255_526_065_25e-5,
                r: 0.046_664_646_880_658_73,
                kt: 0.018_230_322_080_476_5,
                kw: 0.017_857_232_042_234_553,
            },
            MotorModel::Neo => MotorConstants {
                b: 4.355_028_176_268_708e-5,
                r: 0.072_251_283_268_771_66,
                kt: 0.020_206_275_661_529_688,
                kw: 0.019_349_187_629_032_31,
            },
            MotorModel::Cim => MotorConstants {
                b: 8.906_757_474_046_33e-5,
                r: 0.091_564_610_276_332_64,
                kt: 0.018_412_117_049_746_636,
                kw: 0.021_056_415_791_094_345,
            },
            MotorModel::MiniCim => MotorConstants {
                b: 7.696_547_029_161_162e-5,
                r: 0.134_241_588_519_113_6,
                kt: 0.015_762_200_360_164_96,
                kw: 0.018_967_894_742_216_666,
            },
            MotorModel::Bag => MotorConstants {
                b: 1.068_422_102_269_995_7e-5,
                r: 0.228_054_526_012_522_57,
                kt: 0.008_190_958_363_204_482,
                kw: 0.008_398_404_188_045_239,
            },
            MotorModel::Pro775 => MotorConstants {
                b: 1.888_024_232_109_301_8e-6,
                r: 0.089_811_613_777_675,
                kt: 0.005_298_885_194_553_443,
                kw: 0.006_084_753_015_453_335,
            },
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            MotorModel::Falcon500 => "Falcon 500",
            MotorModel::Neo => "NEO",
            MotorModel::Cim => "CIM",
            MotorModel::MiniCim => "MiniCIM",
            MotorModel::Bag => "BAG",
            MotorModel::Pro775 => "775pro",
        }
    }
}
