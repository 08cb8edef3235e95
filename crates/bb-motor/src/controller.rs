//! 电机控制器
//!
//! [`MotorController`] 把首选单位的命令与读数经 [`UnitContext`] 转换后交给
//! [`MotorAdapter`]。每次读写前先与适配器同步原生单位，传感器更换或时基变化后的
//! 第一次换算就使用新的单位。
//!
//! # 使用示例
//!
//! ```rust
//! use bb_hal::{EncoderType, MockAdapter, Sensor, VendorProfile};
//! use bb_motor::{ControlVariable, MotorController};
//! use bb_units::Quantity;
//! use bb_units::catalog::{RAD_PER_S, REV};
//!
//! # fn main() -> bb_motor::Result<()> {
//! let mut motor = MotorController::new(MockAdapter::new(VendorProfile::TalonSrx));
//! motor.attach_sensor(Sensor::quadrature(EncoderType::Amt201))?;
//!
//! motor.command_position(&Quantity::new(0.25, REV), ControlVariable::Position)?;
//! motor.command_velocity(&Quantity::new(1.0, &*RAD_PER_S), ControlVariable::Velocity)?;
//!
//! let position = motor.read_position()?;
//! println!("position: {:.3}", position);
//! # Ok(())
//! # }
//! ```

use crate::context::{PreferredUnits, UnitContext};
use crate::error::{MotorError, Result};
use crate::mode::{ControlVariable, MeasurementMode};
use crate::motors::MotorModel;
use crate::pid::{PidGains, PidSlots};
use bb_hal::{AdapterError, MotorAdapter, NativeCommand, PositionControl, Sensor};
use bb_units::{BaseUnit, Quantity};
use tracing::{debug, info, warn};

/// 使用中的 PID 增益写入的硬件槽位
const ACTIVE_HARDWARE_SLOT: u8 = 0;

/// 电机控制器
///
/// 独占一个适配器与一个单位转换上下文；单线程使用。
#[derive(Debug)]
pub struct MotorController<A: MotorAdapter> {
    adapter: A,
    context: UnitContext,
    pids: PidSlots,
    model: Option<MotorModel>,
}

impl<A: MotorAdapter> MotorController<A> {
    /// 以默认首选单位构造
    pub fn new(adapter: A) -> Self {
        Self::with_context(adapter, UnitContext::new())
    }

    /// 以给定首选单位构造；单位量纲不对时返回错误
    pub fn with_preferred(adapter: A, preferred: PreferredUnits) -> Result<Self> {
        Ok(Self::with_context(
            adapter,
            UnitContext::with_preferred(preferred)?,
        ))
    }

    fn with_context(adapter: A, context: UnitContext) -> Self {
        Self {
            adapter,
            context,
            pids: PidSlots::new(),
            model: None,
        }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    pub fn into_adapter(self) -> A {
        self.adapter
    }

    /// 单位转换上下文（只读）
    pub fn context(&self) -> &UnitContext {
        &self.context
    }

    pub fn motor_model(&self) -> Option<MotorModel> {
        self.model
    }

    pub fn set_motor_model(&mut self, model: MotorModel) {
        self.model = Some(model);
    }

    // ==================== 原生单位 ====================

    /// 与适配器同步原生单位
    ///
    /// 没有传感器时丢弃缓存，后续换算返回 [`MotorError::StaleNativeUnit`]；
    /// 其他适配器错误原样返回。
    pub fn sync_native(&mut self) -> Result<()> {
        match self.adapter.native_units() {
            Ok(units) => {
                self.context.update_native(units)?;
                Ok(())
            },
            Err(AdapterError::NoSensor) => {
                self.context.clear_native();
                Ok(())
            },
            Err(e) => Err(e.into()),
        }
    }

    /// 安装或更换位置传感器
    pub fn attach_sensor(&mut self, sensor: Sensor) -> Result<()> {
        self.adapter.attach_sensor(sensor)?;
        info!(
            "{}: sensor attached ({} ticks/rev)",
            self.adapter.profile().name(),
            sensor.ticks_per_revolution()
        );
        self.sync_native()
    }

    /// 齿轮比：`ratio × 编码器转 = 物体转`
    pub fn set_gear_ratio(&mut self, ratio: f64) -> Result<()> {
        self.context.set_gear_ratio(ratio)
    }

    // ==================== 首选单位 / 测量模式 ====================

    pub fn set_preferred_theta_unit(&mut self, unit: BaseUnit) -> Result<()> {
        self.context.set_preferred_theta(unit)
    }

    pub fn set_preferred_time_unit(&mut self, unit: BaseUnit) -> Result<()> {
        self.context.set_preferred_time(unit)
    }

    pub fn set_preferred_second_time_unit(&mut self, unit: BaseUnit) -> Result<()> {
        self.context.set_preferred_second_time(unit)
    }

    pub fn set_preferred_length_unit(&mut self, unit: BaseUnit) -> Result<()> {
        self.context.set_preferred_length(unit)
    }

    pub fn set_radius(&mut self, radius: Quantity) -> Result<()> {
        self.context.set_radius(radius)
    }

    /// 以每物体转对应的长度设置距离比例，见 [`UnitContext::set_length_per_revolution`]
    pub fn set_length_per_revolution(&mut self, length: Quantity) -> Result<()> {
        self.context.set_length_per_revolution(length)
    }

    pub fn set_measurement_mode(&mut self, mode: MeasurementMode) -> Result<()> {
        self.context
            .set_measurement_mode(mode)
            .inspect_err(|e| warn!("Measurement mode change to {:?} rejected: {}", mode, e))
    }

    /// 同时设置半径并进入距离模式
    pub fn enter_distance_mode(&mut self, radius: Quantity) -> Result<()> {
        self.context.enter_distance_mode(radius)
    }

    pub fn measurement_mode(&self) -> MeasurementMode {
        self.context.mode()
    }

    // ==================== 命令 ====================

    /// 位置命令
    ///
    /// `control` 只能是 `Position` 或 `MotionProfile`。
    pub fn command_position(&mut self, target: &Quantity, control: ControlVariable) -> Result<()> {
        let control = match control {
            ControlVariable::Position => PositionControl::Pid,
            ControlVariable::MotionProfile => PositionControl::MotionProfile,
            ControlVariable::Velocity => {
                return Err(reject(control, "command_position"));
            },
        };
        self.sync_native()?;
        let value = self
            .context
            .position_to_native(target)
            .inspect_err(|e| warn!("Position command {} rejected: {}", target, e))?;
        self.adapter
            .dispatch(NativeCommand::Position { value, control })?;
        Ok(())
    }

    /// 速度命令
    ///
    /// `control` 只能是 `Velocity`。
    pub fn command_velocity(&mut self, target: &Quantity, control: ControlVariable) -> Result<()> {
        if control != ControlVariable::Velocity {
            return Err(reject(control, "command_velocity"));
        }
        self.sync_native()?;
        let value = self
            .context
            .velocity_to_native(target)
            .inspect_err(|e| warn!("Velocity command {} rejected: {}", target, e))?;
        self.adapter.dispatch(NativeCommand::Velocity { value })?;
        Ok(())
    }

    /// 运动规划参数：巡航速度与加速度
    pub fn command_motion_profile(
        &mut self,
        cruise_velocity: &Quantity,
        acceleration: &Quantity,
    ) -> Result<()> {
        self.sync_native()?;
        let cruise_velocity = self
            .context
            .velocity_to_native(cruise_velocity)
            .inspect_err(|e| warn!("Motion profile cruise velocity rejected: {}", e))?;
        let acceleration = self
            .context
            .acceleration_to_native(acceleration)
            .inspect_err(|e| warn!("Motion profile acceleration rejected: {}", e))?;
        self.adapter.dispatch(NativeCommand::MotionProfile {
            cruise_velocity,
            acceleration,
        })?;
        Ok(())
    }

    // ==================== 读数 ====================

    /// 位置（角度模式为首选 theta，距离模式为首选 length）
    pub fn read_position(&mut self) -> Result<Quantity> {
        self.sync_native()?;
        // 先确认原生单位，未安装传感器时不触碰设备
        self.context.theta_nu()?;
        let raw = self.adapter.position()?;
        self.context.position_from_native(raw)
    }

    /// 速度（角度模式为 omega，距离模式为 vel）
    pub fn read_velocity(&mut self) -> Result<Quantity> {
        self.sync_native()?;
        self.context.omega_nu()?;
        let raw = self.adapter.velocity()?;
        self.context.velocity_from_native(raw)
    }

    /// 母线电压（V）
    pub fn voltage(&mut self) -> Result<f64> {
        Ok(self.adapter.voltage()?)
    }

    /// 输出占空比
    pub fn percent_voltage(&mut self) -> Result<f64> {
        Ok(self.adapter.percent_voltage()?)
    }

    // ==================== PID ====================

    /// 追加一组增益，名称为 `PID<编号>`
    pub fn add_pid(&mut self, gains: PidGains) -> Result<usize> {
        self.pids.add(gains)
    }

    /// 追加一组具名增益
    pub fn add_pid_named(&mut self, gains: PidGains, name: impl Into<String>) -> Result<usize> {
        self.pids.add_named(gains, name)
    }

    /// 把具名增益写入硬件槽位 0 并设为当前使用
    pub fn use_pid(&mut self, name: &str) -> Result<usize> {
        let gains = *self
            .pids
            .get(name)
            .ok_or_else(|| MotorError::UnknownPidSlot(name.to_string()))?;
        self.adapter
            .set_pid_gains(ACTIVE_HARDWARE_SLOT, gains.slot_gains())?;
        let (index, _) = self.pids.activate(name)?;
        debug!("PID slot {} ({}) active", index, name);
        Ok(index)
    }

    pub fn pid_slots(&self) -> &PidSlots {
        &self.pids
    }

    /// 当前使用的 PID 编号
    pub fn active_pid(&self) -> Option<usize> {
        self.pids.active()
    }
}

fn reject(requested: ControlVariable, operation: &'static str) -> MotorError {
    warn!("{:?} is not supported by {}", requested, operation);
    MotorError::UnsupportedControlVariable {
        requested,
        operation,
    }
}
