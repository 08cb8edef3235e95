//! 电机控制层错误类型定义

use crate::mode::ControlVariable;
use bb_hal::AdapterError;
use bb_units::{Dimension, UnitError};
use thiserror::Error;

/// 电机控制层错误类型
///
/// 单位相关错误都是确定性的本地计算错误，同步返回，不重试，不回退为 0；
/// 硬件错误原样透传。
#[derive(Error, Debug)]
pub enum MotorError {
    /// 单位代数错误（包括量纲不兼容）
    #[error("Unit error: {0}")]
    Units(#[from] UnitError),

    /// 距离模式下未设置半径
    #[error("Distance mode requires a radius, but none is configured")]
    UnconfiguredRadius,

    /// 控制变量与操作不匹配
    #[error("Control variable {requested:?} is not supported by {operation}")]
    UnsupportedControlVariable {
        /// 请求的控制变量
        requested: ControlVariable,
        /// 执行的操作
        operation: &'static str,
    },

    /// 尚未安装传感器，原生单位未知
    #[error("Native units unavailable: no sensor has been attached")]
    StaleNativeUnit,

    /// 未注册的 PID 槽位名
    #[error("Unknown PID slot: {0}")]
    UnknownPidSlot(String),

    /// PID 槽位名重复
    #[error("Duplicate PID slot name: {0}")]
    DuplicatePidSlot(String),

    /// 硬件适配器错误（透传）
    #[error("Adapter error: {0}")]
    Adapter(#[from] AdapterError),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// 配置文件错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML 解析失败
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML 序列化失败
    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// 目录中没有该单位
    #[error("Unknown unit name: {name}")]
    UnknownUnit {
        /// 单位名
        name: String,
    },

    /// 单位量纲不符
    #[error("Unit {name} is not a {expected} unit")]
    WrongDimension {
        /// 单位名
        name: String,
        /// 期望的量纲
        expected: Dimension,
    },

    /// 其他非法取值
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, MotorError>;
