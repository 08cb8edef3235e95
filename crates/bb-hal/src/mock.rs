//! Mock 适配器
//!
//! 纯内存实现，无硬件依赖：测试可以设置原始读数、更换传感器、修改时基、注入设备错误，
//! 并检查下发的命令与增益。

use crate::command::{NativeCommand, SlotGains};
use crate::error::AdapterError;
use crate::native::{NativeUnits, VendorProfile};
use crate::sensor::Sensor;
use crate::MotorAdapter;
use bb_units::BaseUnit;
use tracing::trace;

/// 内存模拟适配器
#[derive(Debug, Clone)]
pub struct MockAdapter {
    profile: VendorProfile,
    sensor: Option<Sensor>,
    time_override: Option<BaseUnit>,
    position: f64,
    velocity: f64,
    bus_voltage: f64,
    percent_output: f64,
    motion_profile_supported: bool,
    pending_failure: Option<String>,
    commands: Vec<NativeCommand>,
    gains: Vec<(u8, SlotGains)>,
}

impl MockAdapter {
    pub fn new(profile: VendorProfile) -> Self {
        Self {
            profile,
            sensor: None,
            time_override: None,
            position: 0.0,
            velocity: 0.0,
            bus_voltage: 12.0,
            percent_output: 0.0,
            motion_profile_supported: true,
            pending_failure: None,
            commands: Vec::new(),
            gains: Vec::new(),
        }
    }

    /// 预先安装传感器
    pub fn with_sensor(mut self, sensor: Sensor) -> Self {
        self.sensor = Some(sensor);
        self
    }

    /// 拒绝运动规划类命令
    pub fn without_motion_profile(mut self) -> Self {
        self.motion_profile_supported = false;
        self
    }

    /// 设置原生位置读数
    pub fn set_position(&mut self, value: f64) {
        self.position = value;
    }

    /// 设置原生速度读数
    pub fn set_velocity(&mut self, value: f64) {
        self.velocity = value;
    }

    /// 设置电压读数
    pub fn set_voltage(&mut self, bus_voltage: f64, percent_output: f64) {
        self.bus_voltage = bus_voltage;
        self.percent_output = percent_output;
    }

    /// 修改速度时基（模拟设备重新配置）
    pub fn set_time_base(&mut self, time: BaseUnit) {
        self.time_override = Some(time);
    }

    /// 下一次设备调用失败
    pub fn fail_next(&mut self, message: impl Into<String>) {
        self.pending_failure = Some(message.into());
    }

    /// 已下发的命令
    pub fn commands(&self) -> &[NativeCommand] {
        &self.commands
    }

    pub fn last_command(&self) -> Option<&NativeCommand> {
        self.commands.last()
    }

    /// 已写入的 `(槽位, 增益)`
    pub fn gains(&self) -> &[(u8, SlotGains)] {
        &self.gains
    }

    fn check_failure(&mut self) -> Result<(), AdapterError> {
        match self.pending_failure.take() {
            Some(message) => Err(AdapterError::Device(message)),
            None => Ok(()),
        }
    }
}

impl MotorAdapter for MockAdapter {
    fn profile(&self) -> VendorProfile {
        self.profile
    }

    fn sensor(&self) -> Option<&Sensor> {
        self.sensor.as_ref()
    }

    fn attach_sensor(&mut self, sensor: Sensor) -> Result<(), AdapterError> {
        self.check_failure()?;
        self.sensor = Some(sensor);
        self.position = 0.0;
        Ok(())
    }

    fn native_units(&self) -> Result<NativeUnits, AdapterError> {
        let mut units = self.profile.native_units(self.sensor.as_ref())?;
        if let Some(time) = self.time_override {
            units.time = time;
        }
        Ok(units)
    }

    fn position(&mut self) -> Result<f64, AdapterError> {
        self.check_failure()?;
        Ok(self.position)
    }

    fn velocity(&mut self) -> Result<f64, AdapterError> {
        self.check_failure()?;
        Ok(self.velocity)
    }

    fn voltage(&mut self) -> Result<f64, AdapterError> {
        self.check_failure()?;
        Ok(self.bus_voltage)
    }

    fn percent_voltage(&mut self) -> Result<f64, AdapterError> {
        self.check_failure()?;
        Ok(self.percent_output)
    }

    fn dispatch(&mut self, command: NativeCommand) -> Result<(), AdapterError> {
        self.check_failure()?;
        let is_motion_profile = matches!(
            command,
            NativeCommand::MotionProfile { .. }
                | NativeCommand::Position {
                    control: crate::PositionControl::MotionProfile,
                    ..
                }
        );
        if is_motion_profile && !self.motion_profile_supported {
            return Err(AdapterError::UnsupportedCommand(command.kind().to_string()));
        }
        trace!("Mock {} dispatch: {}", self.profile.name(), command);
        self.commands.push(command);
        Ok(())
    }

    fn set_pid_gains(&mut self, slot: u8, gains: SlotGains) -> Result<(), AdapterError> {
        self.check_failure()?;
        let available = self.pid_slot_count();
        if slot >= available {
            return Err(AdapterError::InvalidSlot { slot, available });
        }
        self.gains.push((slot, gains));
        Ok(())
    }
}
