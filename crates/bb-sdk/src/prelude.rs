//! Prelude - 常用类型的便捷导入
//!
//! ```rust
//! use bb_sdk::prelude::*;
//! ```

// 单位层
pub use bb_units::catalog;
pub use bb_units::{BaseUnit, CompositeUnit, Dimension, Quantity, Unit, UnitBuilder};

// 硬件层
pub use bb_hal::{EncoderType, MotorAdapter, NativeCommand, PositionControl, Sensor, VendorProfile};

#[cfg(feature = "mock")]
pub use bb_hal::MockAdapter;

// 电机层
pub use bb_motor::{
    ControlVariable, ControllerConfig, MeasurementMode, MotorController, MotorModel, PidGains,
};

// 错误类型
pub use bb_hal::AdapterError;
pub use bb_motor::{ConfigError, MotorError};
pub use bb_units::UnitError;
