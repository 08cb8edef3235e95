//! 原生命令定义
//!
//! 所有数值都已经是设备原生单位；单位转换在上层完成。

use std::fmt;

/// 位置闭环方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PositionControl {
    /// 直接 PID 位置环（默认）
    #[default]
    Pid,
    /// 运动规划（Talon: MotionMagic，Spark MAX: SmartMotion）
    MotionProfile,
}

/// 发往设备的原生命令
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NativeCommand {
    /// 目标位置（原生 theta 单位）
    Position {
        value: f64,
        control: PositionControl,
    },
    /// 目标速度（原生 theta / 原生时间）
    Velocity { value: f64 },
    /// 运动规划参数：巡航速度与加速度
    MotionProfile {
        cruise_velocity: f64,
        acceleration: f64,
    },
}

impl NativeCommand {
    /// 命令类别名称（用于日志与错误信息）
    pub fn kind(&self) -> &'static str {
        match self {
            NativeCommand::Position {
                control: PositionControl::Pid,
                ..
            } => "position",
            NativeCommand::Position {
                control: PositionControl::MotionProfile,
                ..
            } => "motion_profile_position",
            NativeCommand::Velocity { .. } => "velocity",
            NativeCommand::MotionProfile { .. } => "motion_profile",
        }
    }
}

impl fmt::Display for NativeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeCommand::Position { value, control } => {
                write!(f, "Position({:.3}, {:?})", value, control)
            },
            NativeCommand::Velocity { value } => write!(f, "Velocity({:.3})", value),
            NativeCommand::MotionProfile {
                cruise_velocity,
                acceleration,
            } => write!(
                f,
                "MotionProfile(cruise={:.3}, acc={:.3})",
                cruise_velocity, acceleration
            ),
        }
    }
}

/// 写入硬件 PID 槽位的增益
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotGains {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
    pub kf: f64,
    pub i_zone: f64,
}
