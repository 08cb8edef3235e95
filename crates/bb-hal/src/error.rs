//! 硬件适配层错误类型定义

use thiserror::Error;

/// 硬件适配层错误类型
///
/// 厂商设备的失败（总线超时、断开）以 [`AdapterError::Device`] 原样上抛，
/// 单位转换层不重试、不吞掉。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdapterError {
    /// 需要位置传感器但尚未安装
    #[error("No position sensor attached")]
    NoSensor,

    /// 设备不支持该原生命令
    #[error("Unsupported native command: {0}")]
    UnsupportedCommand(String),

    /// PID 槽位超出硬件范围
    #[error("Invalid PID slot {slot} (hardware has {available} slots)")]
    InvalidSlot {
        /// 请求的槽位
        slot: u8,
        /// 硬件槽位数
        available: u8,
    },

    /// 设备错误（透传）
    #[error("Device error: {0}")]
    Device(String),
}
