//! # BB Motor
//!
//! 电机控制器的单位转换层
//!
//! ## 模块
//!
//! - `context`: 单位转换上下文（首选单位 ↔ 原生单位）
//! - `controller`: 电机控制器（命令、读数、PID 槽位）
//! - `mode`: 测量模式与控制变量
//! - `pid`: PID 增益与命名槽位
//! - `motors`: 电机常数查表
//! - `config`: TOML 配置
//!
//! ## 测量模式
//!
//! - **Angle**：位置/速度/加速度直接以角度单位换算
//! - **Distance**：乘以半径得到线性量，`s = r·θ`，`v = r·ω`

pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod mode;
pub mod motors;
pub mod pid;

// 重新导出常用类型
pub use config::{ControllerConfig, MeasurementConfig, PidConfig, UnitsConfig};
pub use context::{PreferredUnits, UnitContext};
pub use controller::MotorController;
pub use error::{ConfigError, MotorError, Result};
pub use mode::{ControlVariable, MeasurementMode};
pub use motors::{MotorConstants, MotorModel};
pub use pid::{PidGains, PidSlots};
