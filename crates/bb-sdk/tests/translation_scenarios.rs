//! 端到端换算场景
//!
//! 通过 MockAdapter 驱动完整的 SDK：单位目录、换算上下文、控制器与命令下发。

mod common;

use std::f64::consts::PI;

use bb_sdk::prelude::*;
use bb_sdk::units::{catalog, Exponents};
use common::{
    assert_float_eq, bare_talon, last_value, spark_max, talon_with_encoder, wheel, TICKS_PER_REV,
};

#[test]
fn test_catalog_conversions() {
    assert_float_eq(catalog::IN.to(&catalog::FT, 24.0).unwrap(), 2.0, 1e-12);
    assert_float_eq(catalog::REV.to(&catalog::RAD, 1.0).unwrap(), 2.0 * PI, 1e-12);
    assert!((catalog::REV.to(&catalog::RAD, 1.0).unwrap() - 6.28318).abs() < 1e-5);

    let rad_per_s = catalog::RPM.to(&catalog::RAD_PER_S, 1.0).unwrap();
    assert!((rad_per_s - 0.10472).abs() < 1e-5);
}

#[test]
fn test_inch_per_centimeter_cancels() {
    let ratio = CompositeUnit::new([catalog::IN], [catalog::CM]);
    assert!(ratio.is_dimensionless());
    assert!(ratio.numerator().is_empty());
    assert!(ratio.denominator().is_empty());
    assert_float_eq(ratio.coefficient(), 2.54, 1e-12);
}

#[test]
fn test_length_to_time_is_rejected() {
    let err = Quantity::new(1.0, catalog::IN)
        .convert(catalog::S)
        .unwrap_err();
    assert_eq!(
        err,
        UnitError::DimensionMismatch {
            from: Exponents::of(Dimension::Length),
            to: Exponents::of(Dimension::Time),
        }
    );
}

#[test]
fn test_velocity_command_in_ticks_per_100ms() {
    let mut motor = talon_with_encoder();
    motor
        .command_velocity(
            &Quantity::new(1.0, &*catalog::RAD_PER_S),
            ControlVariable::Velocity,
        )
        .unwrap();

    let expected = TICKS_PER_REV / (2.0 * PI) * 0.1;
    assert_float_eq(last_value(&motor), expected, 1e-12);
    assert!((last_value(&motor) - 32.6).abs() < 0.01);
}

#[test]
fn test_rpm_command_on_spark_max_passes_through() {
    let mut motor = spark_max();
    motor
        .command_velocity(
            &Quantity::new(120.0, &*catalog::RPM),
            ControlVariable::Velocity,
        )
        .unwrap();
    assert_float_eq(last_value(&motor), 120.0, 1e-12);
}

#[test]
fn test_distance_mode_reads() {
    let mut motor = talon_with_encoder();
    motor.set_preferred_length_unit(catalog::IN).unwrap();
    motor.enter_distance_mode(wheel(2.0)).unwrap();

    // π/2 rad = 1/4 转
    motor.adapter_mut().set_position(TICKS_PER_REV / 4.0);
    let position = motor.read_position().unwrap();
    assert_float_eq(position.value(), PI, 1e-12);
    assert_eq!(position.unit().to_string(), "in");

    // 1 rad/s
    motor.adapter_mut().set_velocity(TICKS_PER_REV / (2.0 * PI) * 0.1);
    let velocity = motor.read_velocity().unwrap();
    assert_float_eq(velocity.value(), 2.0, 1e-12);
    assert_eq!(velocity.unit().to_string(), "in / s");
}

#[test]
fn test_distance_mode_commands() {
    let mut motor = talon_with_encoder();
    motor.enter_distance_mode(wheel(2.0)).unwrap();

    // 弧长 π in 对应 π/2 rad
    motor
        .command_position(&Quantity::new(PI, catalog::IN), ControlVariable::Position)
        .unwrap();
    assert_float_eq(last_value(&motor), TICKS_PER_REV / 4.0, 1e-9);

    // 以英尺给出的线速度也被接受
    motor
        .command_velocity(
            &Quantity::new(2.0 / 12.0, &*catalog::FT_PER_S),
            ControlVariable::Velocity,
        )
        .unwrap();
    assert_float_eq(last_value(&motor), TICKS_PER_REV / (2.0 * PI) * 0.1, 1e-9);

    // 角量在距离模式下照常换算
    motor
        .command_position(&Quantity::new(1.0, catalog::REV), ControlVariable::Position)
        .unwrap();
    assert_float_eq(last_value(&motor), TICKS_PER_REV, 1e-9);
}

#[test]
fn test_mode_transition() {
    let mut motor = talon_with_encoder();
    assert_eq!(motor.measurement_mode(), MeasurementMode::Angle);

    let err = motor
        .set_measurement_mode(MeasurementMode::Distance)
        .unwrap_err();
    assert!(matches!(err, MotorError::UnconfiguredRadius));
    assert_eq!(motor.measurement_mode(), MeasurementMode::Angle);

    // 角度模式拒绝长度量
    let err = motor
        .command_position(&Quantity::new(1.0, catalog::IN), ControlVariable::Position)
        .unwrap_err();
    assert!(matches!(err, MotorError::Units(UnitError::DimensionMismatch { .. })));

    motor.set_radius(wheel(2.0)).unwrap();
    motor.set_measurement_mode(MeasurementMode::Distance).unwrap();
    motor.adapter_mut().set_position(TICKS_PER_REV / 4.0);
    assert_eq!(motor.read_position().unwrap().unit().to_string(), "in");

    motor.set_measurement_mode(MeasurementMode::Angle).unwrap();
    let position = motor.read_position().unwrap();
    assert_float_eq(position.value(), PI / 2.0, 1e-12);
    assert_eq!(position.unit().to_string(), "rad");
}

#[test]
fn test_no_sensor_until_attached() {
    let mut motor = bare_talon();
    let err = motor.read_position().unwrap_err();
    assert!(matches!(err, MotorError::StaleNativeUnit));
    assert!(motor.adapter().commands().is_empty());

    motor
        .attach_sensor(Sensor::quadrature(EncoderType::Amt201))
        .unwrap();
    motor
        .command_position(&Quantity::new(1.0, catalog::REV), ControlVariable::Position)
        .unwrap();
    assert_float_eq(last_value(&motor), 8192.0, 1e-9);
}

#[test]
fn test_time_base_change_is_picked_up() {
    let mut motor = talon_with_encoder();
    let one_rev_per_s = Quantity::new(1.0, &*catalog::REV_PER_S);

    motor
        .command_velocity(&one_rev_per_s, ControlVariable::Velocity)
        .unwrap();
    assert_float_eq(last_value(&motor), TICKS_PER_REV / 10.0, 1e-9);

    motor.adapter_mut().set_time_base(catalog::S);
    motor
        .command_velocity(&one_rev_per_s, ControlVariable::Velocity)
        .unwrap();
    assert_float_eq(last_value(&motor), TICKS_PER_REV, 1e-9);
}

#[test]
fn test_motion_profile_and_pid() {
    let mut motor = talon_with_encoder();
    motor
        .command_motion_profile(
            &Quantity::new(1.0, &*catalog::REV_PER_S),
            &Quantity::new(1.0, &*catalog::REV_PER_S2),
        )
        .unwrap();
    match motor.adapter().last_command() {
        Some(NativeCommand::MotionProfile {
            cruise_velocity,
            acceleration,
        }) => {
            assert_float_eq(*cruise_velocity, TICKS_PER_REV / 10.0, 1e-9);
            // tick / 100ms / s
            assert_float_eq(*acceleration, TICKS_PER_REV / 10.0, 1e-9);
        },
        other => panic!("unexpected command: {:?}", other),
    }

    let hold = PidGains::pid(ControlVariable::Position, 0.5, 0.0, 0.1);
    let cruise = PidGains::pidf(ControlVariable::Velocity, 1.0, 0.01, 0.0, 0.05);
    motor.add_pid_named(hold, "hold").unwrap();
    motor.add_pid(cruise).unwrap();
    assert_eq!(motor.use_pid("PID1").unwrap(), 1);
    assert_eq!(motor.active_pid(), Some(1));
    let (slot, gains) = motor.adapter().gains()[0];
    assert_eq!(slot, 0);
    assert_float_eq(gains.kf, 0.05, 1e-12);

    let err = motor.use_pid("missing").unwrap_err();
    assert!(matches!(err, MotorError::UnknownPidSlot(_)));
    assert_eq!(motor.active_pid(), Some(1));
}

#[test]
fn test_distance_mode_motion_profile() {
    let mut motor = talon_with_encoder();
    motor.enter_distance_mode(wheel(2.0)).unwrap();

    // 4 in/s 与 1 ft/s² 在 2 in 半径上为 2 rad/s 与 6 rad/s²
    motor
        .command_motion_profile(
            &Quantity::new(4.0, &*catalog::IN_PER_S),
            &Quantity::new(1.0, &*catalog::FT_PER_S2),
        )
        .unwrap();
    let per_rad = TICKS_PER_REV / (2.0 * PI) * 0.1;
    match motor.adapter().last_command() {
        Some(NativeCommand::MotionProfile {
            cruise_velocity,
            acceleration,
        }) => {
            assert_float_eq(*cruise_velocity, 2.0 * per_rad, 1e-9);
            assert_float_eq(*acceleration, 6.0 * per_rad, 1e-9);
        },
        other => panic!("unexpected command: {:?}", other),
    }

    // 没有时间量纲的长度量不是加速度
    let err = motor
        .command_motion_profile(
            &Quantity::new(4.0, &*catalog::IN_PER_S),
            &Quantity::new(1.0, catalog::FT),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        MotorError::Units(UnitError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_preferred_units_change_reads() {
    let mut motor = talon_with_encoder();
    motor.set_preferred_theta_unit(catalog::DEG).unwrap();
    motor.set_preferred_time_unit(catalog::MIN).unwrap();
    assert!(motor.set_preferred_time_unit(catalog::FT).is_err());

    motor.adapter_mut().set_position(TICKS_PER_REV / 2.0);
    assert_float_eq(motor.read_position().unwrap().value(), 180.0, 1e-9);

    // 1 转/秒 = 21600 deg/min
    motor.adapter_mut().set_velocity(TICKS_PER_REV / 10.0);
    let velocity = motor.read_velocity().unwrap();
    assert_float_eq(velocity.value(), 21600.0, 1e-9);
    assert_eq!(velocity.unit().to_string(), "deg / min");
}
