//! 单位转换上下文
//!
//! 每个电机控制器独占一个 [`UnitContext`]，在首选单位（调用方使用）与原生单位
//! （设备使用）之间转换位置、速度和加速度。
//!
//! ```text
//! Quantity (首选单位) ──to_native──> f64 (原生单位) ──> MotorAdapter
//! MotorAdapter ──> f64 (原生单位) ──from_native──> Quantity (首选单位)
//! ```
//!
//! 派生的复合单位在首选单位、原生单位或齿轮比变化时立即重建，之后的换算不会
//! 用到过期的单位。

use crate::error::{MotorError, Result};
use crate::mode::MeasurementMode;
use bb_hal::NativeUnits;
use bb_units::catalog::{IN, RAD, REV, S};
use bb_units::{BaseUnit, CompositeUnit, Dimension, Exponents, Quantity, Unit, UnitError};
use std::f64::consts::TAU;
use tracing::{debug, info, trace};

/// 首选单位集
#[derive(Debug, Clone, PartialEq)]
pub struct PreferredUnits {
    pub theta: BaseUnit,
    pub time: BaseUnit,
    pub second_time: BaseUnit,
    pub length: BaseUnit,
}

impl Default for PreferredUnits {
    fn default() -> Self {
        Self {
            theta: RAD,
            time: S,
            second_time: S,
            length: IN,
        }
    }
}

/// 由原生单位派生的单位集
#[derive(Debug, Clone)]
struct NativeSet {
    units: NativeUnits,
    theta: BaseUnit,
    omega: CompositeUnit,
    alpha: CompositeUnit,
}

impl NativeSet {
    fn build(units: NativeUnits, gear_ratio: f64) -> Result<Self> {
        // 每物体转的原生位置单位数
        let per_rev = units.ticks_per_revolution / gear_ratio;
        let theta = BaseUnit::try_relative_to("tick", REV, per_rev)?;
        let omega = theta / units.time;
        let alpha = CompositeUnit::new([theta], [units.time, units.second_time]);
        Ok(Self {
            units,
            theta,
            omega,
            alpha,
        })
    }
}

/// 单位转换上下文
#[derive(Debug, Clone)]
pub struct UnitContext {
    preferred: PreferredUnits,
    omega_pu: CompositeUnit,
    alpha_pu: CompositeUnit,
    vel_pu: CompositeUnit,
    acc_pu: CompositeUnit,
    native: Option<NativeSet>,
    gear_ratio: f64,
    mode: MeasurementMode,
    radius: Option<Quantity>,
}

impl Default for UnitContext {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitContext {
    /// 默认首选单位：rad、s、s、in；角度模式；齿轮比 1
    pub fn new() -> Self {
        Self::from_preferred(PreferredUnits::default())
    }

    /// 以给定首选单位构造
    ///
    /// 与各个 `set_preferred_*` 相同的量纲校验：theta 为角度，两个时间单位为时间，
    /// length 为长度。
    pub fn with_preferred(preferred: PreferredUnits) -> Result<Self> {
        expect_dimension(&preferred.theta, Dimension::Angle)?;
        expect_dimension(&preferred.time, Dimension::Time)?;
        expect_dimension(&preferred.second_time, Dimension::Time)?;
        expect_dimension(&preferred.length, Dimension::Length)?;
        Ok(Self::from_preferred(preferred))
    }

    fn from_preferred(preferred: PreferredUnits) -> Self {
        let (omega_pu, alpha_pu, vel_pu, acc_pu) = derive_preferred(&preferred);
        Self {
            preferred,
            omega_pu,
            alpha_pu,
            vel_pu,
            acc_pu,
            native: None,
            gear_ratio: 1.0,
            mode: MeasurementMode::Angle,
            radius: None,
        }
    }

    // ==================== 首选单位 ====================

    pub fn preferred(&self) -> &PreferredUnits {
        &self.preferred
    }

    pub fn set_preferred_theta(&mut self, unit: BaseUnit) -> Result<()> {
        expect_dimension(&unit, Dimension::Angle)?;
        self.preferred.theta = unit;
        self.rebuild_preferred();
        Ok(())
    }

    pub fn set_preferred_time(&mut self, unit: BaseUnit) -> Result<()> {
        expect_dimension(&unit, Dimension::Time)?;
        self.preferred.time = unit;
        self.rebuild_preferred();
        Ok(())
    }

    pub fn set_preferred_second_time(&mut self, unit: BaseUnit) -> Result<()> {
        expect_dimension(&unit, Dimension::Time)?;
        self.preferred.second_time = unit;
        self.rebuild_preferred();
        Ok(())
    }

    pub fn set_preferred_length(&mut self, unit: BaseUnit) -> Result<()> {
        expect_dimension(&unit, Dimension::Length)?;
        self.preferred.length = unit;
        self.rebuild_preferred();
        Ok(())
    }

    fn rebuild_preferred(&mut self) {
        let (omega, alpha, vel, acc) = derive_preferred(&self.preferred);
        debug!(
            "Preferred units rebuilt: omega={}, alpha={}, vel={}, acc={}",
            omega, alpha, vel, acc
        );
        self.omega_pu = omega;
        self.alpha_pu = alpha;
        self.vel_pu = vel;
        self.acc_pu = acc;
    }

    /// 首选角速度单位 theta / time
    pub fn omega_pu(&self) -> &CompositeUnit {
        &self.omega_pu
    }

    /// 首选角加速度单位 theta / (time · second_time)
    pub fn alpha_pu(&self) -> &CompositeUnit {
        &self.alpha_pu
    }

    /// 首选线速度单位 length / time
    pub fn vel_pu(&self) -> &CompositeUnit {
        &self.vel_pu
    }

    /// 首选线加速度单位 length / (time · second_time)
    pub fn acc_pu(&self) -> &CompositeUnit {
        &self.acc_pu
    }

    // ==================== 原生单位 ====================

    /// 与设备报告的原生单位同步
    ///
    /// 与缓存不同时重建原生单位并返回 `true`。
    pub fn update_native(&mut self, units: NativeUnits) -> Result<bool> {
        if self.native.as_ref().is_some_and(|n| n.units == units) {
            return Ok(false);
        }
        let native = NativeSet::build(units, self.gear_ratio)?;
        debug!(
            "Native units rebuilt: theta={} ({} per rev), omega={}, alpha={}",
            native.theta,
            units.ticks_per_revolution / self.gear_ratio,
            native.omega,
            native.alpha
        );
        self.native = Some(native);
        Ok(true)
    }

    /// 丢弃原生单位（传感器被移除）
    pub fn clear_native(&mut self) {
        if self.native.take().is_some() {
            debug!("Native units cleared");
        }
    }

    /// 是否已有原生单位
    pub fn has_native(&self) -> bool {
        self.native.is_some()
    }

    fn native(&self) -> Result<&NativeSet> {
        self.native.as_ref().ok_or(MotorError::StaleNativeUnit)
    }

    /// 设备报告的原生单位定义
    pub fn native_units(&self) -> Result<&NativeUnits> {
        Ok(&self.native()?.units)
    }

    /// 原生位置单位（每物体转 `tpr / gear_ratio` 个）
    pub fn theta_nu(&self) -> Result<BaseUnit> {
        Ok(self.native()?.theta)
    }

    pub fn omega_nu(&self) -> Result<&CompositeUnit> {
        Ok(&self.native()?.omega)
    }

    pub fn alpha_nu(&self) -> Result<&CompositeUnit> {
        Ok(&self.native()?.alpha)
    }

    /// 齿轮比：`ratio × 编码器转 = 物体转`
    pub fn gear_ratio(&self) -> f64 {
        self.gear_ratio
    }

    /// 设置齿轮比，已有原生单位时立即重建
    pub fn set_gear_ratio(&mut self, ratio: f64) -> Result<()> {
        if !(ratio > 0.0 && ratio.is_finite()) {
            return Err(UnitError::InvalidScale { value: ratio }.into());
        }
        if let Some(units) = self.native.as_ref().map(|n| n.units) {
            self.native = Some(NativeSet::build(units, ratio)?);
        }
        self.gear_ratio = ratio;
        debug!("Gear ratio set to {}", ratio);
        Ok(())
    }

    // ==================== 测量模式 ====================

    pub fn mode(&self) -> MeasurementMode {
        self.mode
    }

    pub fn radius(&self) -> Option<&Quantity> {
        self.radius.as_ref()
    }

    /// 设置半径（正的长度量）
    pub fn set_radius(&mut self, radius: Quantity) -> Result<()> {
        let length = Exponents::of(Dimension::Length);
        if radius.exponents() != length {
            return Err(UnitError::DimensionMismatch {
                from: radius.exponents(),
                to: length,
            }
            .into());
        }
        if !(radius.value() > 0.0 && radius.value().is_finite()) {
            return Err(UnitError::InvalidScale {
                value: radius.value(),
            }
            .into());
        }
        debug!("Radius set to {}", radius);
        self.radius = Some(radius);
        Ok(())
    }

    /// 切换测量模式
    ///
    /// 进入距离模式需要已设置半径，否则返回 [`MotorError::UnconfiguredRadius`]，
    /// 模式不变。回到角度模式无条件成功。
    pub fn set_measurement_mode(&mut self, mode: MeasurementMode) -> Result<()> {
        if mode.is_distance() && self.radius.is_none() {
            return Err(MotorError::UnconfiguredRadius);
        }
        if self.mode != mode {
            info!("Measurement mode: {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
        Ok(())
    }

    /// 以每物体转对应的长度设置距离比例（丝杠导程、皮带轮周长等）
    ///
    /// 等价于半径 `length / 2π`；之后的半径读数以同一长度单位表示。
    pub fn set_length_per_revolution(&mut self, length: Quantity) -> Result<()> {
        let radius = Quantity::new(length.value() / TAU, length.unit().clone());
        self.set_radius(radius)
    }

    /// 同时设置半径并进入距离模式；半径非法时什么都不改变
    pub fn enter_distance_mode(&mut self, radius: Quantity) -> Result<()> {
        self.set_radius(radius)?;
        self.set_measurement_mode(MeasurementMode::Distance)
    }

    /// 距离模式下的半径，缺失时报错
    fn require_radius(&self) -> Result<&Quantity> {
        self.radius.as_ref().ok_or(MotorError::UnconfiguredRadius)
    }

    // ==================== 换算 ====================

    /// 位置 -> 原生位置
    ///
    /// 角度量直接换算。距离模式下也接受长度量：`θ(rad) = s / r`。
    pub fn position_to_native(&self, position: &Quantity) -> Result<f64> {
        let theta_nu = Unit::from(self.theta_nu()?);
        let native = match self.linear_input(position, 0)? {
            Some(radians) => RAD.to(&self.theta_nu()?, radians)?,
            None => position.value_in(theta_nu)?,
        };
        trace!("position {} -> {} native", position, native);
        Ok(native)
    }

    /// 原生位置 -> 首选单位（角度模式为 theta，距离模式为 length）
    pub fn position_from_native(&self, raw: f64) -> Result<Quantity> {
        let theta_nu = self.theta_nu()?;
        let quantity = match self.mode {
            MeasurementMode::Angle => {
                Quantity::new(theta_nu.to(&self.preferred.theta, raw)?, self.preferred.theta)
            },
            MeasurementMode::Distance => {
                let radians = theta_nu.to(&RAD, raw)?;
                self.arc_length(radians, 0, Unit::from(self.preferred.length))?
            },
        };
        trace!("position {} native -> {}", raw, quantity);
        Ok(quantity)
    }

    /// 速度 -> 原生速度
    pub fn velocity_to_native(&self, velocity: &Quantity) -> Result<f64> {
        let omega_nu = self.omega_nu()?;
        let native = match self.linear_input(velocity, 1)? {
            Some(rad_per_s) => rad_per_s_unit().to(omega_nu, rad_per_s)?,
            None => velocity.value_in(omega_nu)?,
        };
        trace!("velocity {} -> {} native", velocity, native);
        Ok(native)
    }

    /// 原生速度 -> 首选单位（omega 或 vel）
    pub fn velocity_from_native(&self, raw: f64) -> Result<Quantity> {
        let omega_nu = self.omega_nu()?;
        let quantity = match self.mode {
            MeasurementMode::Angle => {
                Quantity::new(omega_nu.to(&self.omega_pu, raw)?, &self.omega_pu)
            },
            MeasurementMode::Distance => {
                let rad_per_s = omega_nu.to(&rad_per_s_unit(), raw)?;
                self.arc_length(rad_per_s, 1, Unit::from(&self.vel_pu))?
            },
        };
        trace!("velocity {} native -> {}", raw, quantity);
        Ok(quantity)
    }

    /// 加速度 -> 原生加速度
    pub fn acceleration_to_native(&self, acceleration: &Quantity) -> Result<f64> {
        let alpha_nu = self.alpha_nu()?;
        let native = match self.linear_input(acceleration, 2)? {
            Some(rad_per_s2) => rad_per_s2_unit().to(alpha_nu, rad_per_s2)?,
            None => acceleration.value_in(alpha_nu)?,
        };
        trace!("acceleration {} -> {} native", acceleration, native);
        Ok(native)
    }

    /// 原生加速度 -> 首选单位（alpha 或 acc）
    pub fn acceleration_from_native(&self, raw: f64) -> Result<Quantity> {
        let alpha_nu = self.alpha_nu()?;
        match self.mode {
            MeasurementMode::Angle => Ok(Quantity::new(
                alpha_nu.to(&self.alpha_pu, raw)?,
                &self.alpha_pu,
            )),
            MeasurementMode::Distance => {
                let rad_per_s2 = alpha_nu.to(&rad_per_s2_unit(), raw)?;
                self.arc_length(rad_per_s2, 2, Unit::from(&self.acc_pu))
            },
        }
    }

    /// 距离模式下的线性输入 -> 以 rad（每秒 / 每秒²）计的角量
    ///
    /// `seconds` 为期望的时间量纲次数（位置 0、速度 1、加速度 2）。
    /// 角度模式或输入不含长度量纲时返回 `None`，由调用方直接换算。
    fn linear_input(&self, quantity: &Quantity, seconds: i32) -> Result<Option<f64>> {
        let exponents = quantity.exponents();
        if self.mode.is_angle() || exponents.get(Dimension::Length) == 0 {
            return Ok(None);
        }
        let radius = self.require_radius()?;
        let target = per_seconds(radius.unit(), seconds)?;
        Ok(Some(quantity.value_in(target)? / radius.value()))
    }

    /// `r × angle`，angle 以 rad（每秒 / 每秒²）计，结果换算到 `target`
    fn arc_length(&self, angle: f64, seconds: i32, target: Unit) -> Result<Quantity> {
        let radius = self.require_radius()?;
        let unit = per_seconds(radius.unit(), seconds)?;
        Ok(Quantity::new(radius.value() * angle, unit).convert(target)?)
    }
}

/// `unit / s^seconds`
fn per_seconds(unit: &Unit, seconds: i32) -> Result<Unit> {
    match seconds {
        0 => Ok(unit.clone()),
        n => Ok(unit / &Unit::from(S).pow(n)?),
    }
}

fn derive_preferred(
    preferred: &PreferredUnits,
) -> (CompositeUnit, CompositeUnit, CompositeUnit, CompositeUnit) {
    let omega = preferred.theta / preferred.time;
    let alpha = CompositeUnit::new([preferred.theta], [preferred.time, preferred.second_time]);
    let vel = preferred.length / preferred.time;
    let acc = CompositeUnit::new([preferred.length], [preferred.time, preferred.second_time]);
    (omega, alpha, vel, acc)
}

fn expect_dimension(unit: &BaseUnit, dimension: Dimension) -> Result<()> {
    if unit.dimension() != dimension {
        return Err(UnitError::DimensionMismatch {
            from: unit.exponents(),
            to: Exponents::of(dimension),
        }
        .into());
    }
    Ok(())
}

fn rad_per_s_unit() -> CompositeUnit {
    RAD / S
}

fn rad_per_s2_unit() -> CompositeUnit {
    CompositeUnit::new([RAD], [S, S])
}
