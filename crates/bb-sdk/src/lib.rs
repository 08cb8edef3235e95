//! BB SDK - 电机控制单位代数 SDK
//!
//! 在用户选择的物理单位（弧度、英尺、秒）与电机控制器原生单位（编码器 tick、
//! tick/100ms、RPM）之间转换命令与读数。
//!
//! # 架构设计
//!
//! 从底层到高层：
//!
//! - **单位层** (`units`): 基本单位、复合单位、带单位数值、单位目录
//! - **硬件层** (`hal`): 适配器 trait、原生单位、传感器、厂商约定
//! - **电机层** (`motor`): 单位转换上下文、电机控制器、PID 槽位、配置
//!
//! # 快速开始
//!
//! ```rust
//! use bb_sdk::hal::MockAdapter;
//! use bb_sdk::prelude::*;
//!
//! # fn main() -> bb_sdk::motor::Result<()> {
//! let mut motor = MotorController::new(MockAdapter::new(VendorProfile::TalonSrx));
//! motor.attach_sensor(Sensor::Integrated { ticks_per_revolution: 2048.0 })?;
//! motor.command_velocity(&Quantity::new(1.0, &*catalog::RAD_PER_S), ControlVariable::Velocity)?;
//! # Ok(())
//! # }
//! ```

pub mod logging;
pub mod prelude;

// 各层以模块路径访问
pub use bb_hal as hal;
pub use bb_motor as motor;
pub use bb_units as units;

// --- 常用类型 ---

// 单位层
pub use bb_units::{BaseUnit, CompositeUnit, Dimension, Quantity, Unit, UnitBuilder, UnitError};

// 硬件层
pub use bb_hal::{AdapterError, MotorAdapter, NativeUnits, Sensor, VendorProfile};

// 电机层
pub use bb_motor::{
    ControlVariable, ControllerConfig, MeasurementMode, MotorController, MotorError, PidGains,
};

// 日志
pub use logging::{init_logger, init_logger_with};
