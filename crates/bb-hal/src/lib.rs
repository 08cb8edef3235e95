//! # BB HAL
//!
//! 电机控制器硬件抽象层：单位转换层只通过 [`MotorAdapter`] 与设备交互。
//!
//! ## 模块
//!
//! - `native`: 原生单位与厂商约定
//! - `sensor`: 位置传感器
//! - `command`: 原生命令与 PID 槽位增益
//! - `mock`: 内存模拟适配器（需要 `mock` feature）
//!
//! 所有读数与命令都是设备原生单位的标量。

pub mod command;
pub mod error;
pub mod native;
pub mod sensor;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// 重新导出常用类型
pub use command::{NativeCommand, PositionControl, SlotGains};
pub use error::AdapterError;
pub use native::{NativeUnits, VendorProfile};
pub use sensor::{EncoderType, Sensor};

#[cfg(any(test, feature = "mock"))]
pub use mock::MockAdapter;

/// 电机控制器适配器
///
/// 每个厂商一个独立实现，在构造控制器时注入。
///
/// # 示例
///
/// ```rust
/// use bb_hal::{AdapterError, MotorAdapter, NativeCommand, NativeUnits, Sensor, SlotGains};
/// use bb_hal::VendorProfile;
///
/// struct Passive {
///     sensor: Option<Sensor>,
/// }
///
/// impl MotorAdapter for Passive {
///     fn profile(&self) -> VendorProfile {
///         VendorProfile::TalonSrx
///     }
///     fn sensor(&self) -> Option<&Sensor> {
///         self.sensor.as_ref()
///     }
///     fn attach_sensor(&mut self, sensor: Sensor) -> Result<(), AdapterError> {
///         self.sensor = Some(sensor);
///         Ok(())
///     }
///     fn position(&mut self) -> Result<f64, AdapterError> {
///         Ok(0.0)
///     }
///     fn velocity(&mut self) -> Result<f64, AdapterError> {
///         Ok(0.0)
///     }
///     fn voltage(&mut self) -> Result<f64, AdapterError> {
///         Ok(12.0)
///     }
///     fn percent_voltage(&mut self) -> Result<f64, AdapterError> {
///         Ok(0.0)
///     }
///     fn dispatch(&mut self, _command: NativeCommand) -> Result<(), AdapterError> {
///         Ok(())
///     }
///     fn set_pid_gains(&mut self, _slot: u8, _gains: SlotGains) -> Result<(), AdapterError> {
///         Ok(())
///     }
/// }
///
/// let adapter = Passive { sensor: None };
/// assert_eq!(adapter.native_units(), Err(AdapterError::NoSensor));
/// ```
pub trait MotorAdapter {
    /// 厂商约定
    fn profile(&self) -> VendorProfile;

    /// 当前安装的位置传感器
    fn sensor(&self) -> Option<&Sensor>;

    /// 安装或更换位置传感器（位置清零）
    fn attach_sensor(&mut self, sensor: Sensor) -> Result<(), AdapterError>;

    /// 当前原生单位
    ///
    /// 默认由厂商约定与当前传感器推导；时基可变的设备可以覆盖。
    fn native_units(&self) -> Result<NativeUnits, AdapterError> {
        self.profile().native_units(self.sensor())
    }

    /// 原生位置
    fn position(&mut self) -> Result<f64, AdapterError>;

    /// 原生速度
    fn velocity(&mut self) -> Result<f64, AdapterError>;

    /// 母线电压（V）
    fn voltage(&mut self) -> Result<f64, AdapterError>;

    /// 输出占空比（-1.0 ~ 1.0）
    fn percent_voltage(&mut self) -> Result<f64, AdapterError>;

    /// 下发原生命令
    fn dispatch(&mut self, command: NativeCommand) -> Result<(), AdapterError>;

    /// 写入硬件 PID 槽位
    fn set_pid_gains(&mut self, slot: u8, gains: SlotGains) -> Result<(), AdapterError>;

    /// 硬件 PID 槽位数
    fn pid_slot_count(&self) -> u8 {
        self.profile().pid_slots()
    }
}

impl<A: MotorAdapter + ?Sized> MotorAdapter for Box<A> {
    fn profile(&self) -> VendorProfile {
        (**self).profile()
    }

    fn sensor(&self) -> Option<&Sensor> {
        (**self).sensor()
    }

    fn attach_sensor(&mut self, sensor: Sensor) -> Result<(), AdapterError> {
        (**self).attach_sensor(sensor)
    }

    fn native_units(&self) -> Result<NativeUnits, AdapterError> {
        (**self).native_units()
    }

    fn position(&mut self) -> Result<f64, AdapterError> {
        (**self).position()
    }

    fn velocity(&mut self) -> Result<f64, AdapterError> {
        (**self).velocity()
    }

    fn voltage(&mut self) -> Result<f64, AdapterError> {
        (**self).voltage()
    }

    fn percent_voltage(&mut self) -> Result<f64, AdapterError> {
        (**self).percent_voltage()
    }

    fn dispatch(&mut self, command: NativeCommand) -> Result<(), AdapterError> {
        (**self).dispatch(command)
    }

    fn set_pid_gains(&mut self, slot: u8, gains: SlotGains) -> Result<(), AdapterError> {
        (**self).set_pid_gains(slot, gains)
    }

    fn pid_slot_count(&self) -> u8 {
        (**self).pid_slot_count()
    }
}
