//! 集成测试辅助函数

#![allow(dead_code)]

use bb_sdk::hal::MockAdapter;
use bb_sdk::prelude::*;
use bb_sdk::units::catalog;

/// 2048 tick/转的集成编码器
pub const TICKS_PER_REV: f64 = 2048.0;

/// 相对误差比较
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= tolerance * scale
}

/// 断言两个浮点数在给定精度内相等
#[track_caller]
pub fn assert_float_eq(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        approx_eq(actual, expected, tolerance),
        "expected {} but got {} (tolerance {})",
        expected,
        actual,
        tolerance
    );
}

/// 装有 2048 tick/转集成编码器的 Talon SRX
pub fn talon_with_encoder() -> MotorController<MockAdapter> {
    let adapter = MockAdapter::new(VendorProfile::TalonSrx).with_sensor(Sensor::Integrated {
        ticks_per_revolution: TICKS_PER_REV,
    });
    MotorController::new(adapter)
}

/// 未安装传感器的 Talon SRX
pub fn bare_talon() -> MotorController<MockAdapter> {
    MotorController::new(MockAdapter::new(VendorProfile::TalonSrx))
}

pub fn spark_max() -> MotorController<MockAdapter> {
    MotorController::new(MockAdapter::new(VendorProfile::SparkMax))
}

/// 半径以英寸给出的轮子
pub fn wheel(radius_in: f64) -> Quantity {
    Quantity::new(radius_in, catalog::IN)
}

/// 最近一次下发的命令值
pub fn last_value(motor: &MotorController<MockAdapter>) -> f64 {
    match motor.adapter().last_command() {
        Some(NativeCommand::Position { value, .. }) => *value,
        Some(NativeCommand::Velocity { value }) => *value,
        Some(NativeCommand::MotionProfile {
            cruise_velocity, ..
        }) => *cruise_velocity,
        None => panic!("no command dispatched"),
    }
}
