//! 测量模式与控制变量

use serde::{Deserialize, Serialize};

/// 测量模式
///
/// # 模式说明
///
/// - **Angle**: 位置、速度、加速度直接以角度单位换算（默认）
/// - **Distance**: 角度乘以半径得到线性距离，`1 rev = 2πr`
///
/// # 状态转换
///
/// ```text
/// Angle ──(需要半径)──> Distance
/// Distance ──(无条件)──> Angle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementMode {
    /// 角度模式（默认）
    #[default]
    Angle,

    /// 距离模式（角度 × 半径）
    Distance,
}

impl MeasurementMode {
    /// 是否为角度模式
    pub fn is_angle(self) -> bool {
        self == Self::Angle
    }

    /// 是否为距离模式
    pub fn is_distance(self) -> bool {
        self == Self::Distance
    }
}

/// 命令的控制变量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlVariable {
    /// PID 位置环（默认）
    #[default]
    Position,

    /// 运动规划位置环
    MotionProfile,

    /// 速度环
    Velocity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(MeasurementMode::default(), MeasurementMode::Angle);
        assert!(MeasurementMode::default().is_angle());
        assert!(MeasurementMode::Distance.is_distance());
        assert_eq!(ControlVariable::default(), ControlVariable::Position);
    }
}
