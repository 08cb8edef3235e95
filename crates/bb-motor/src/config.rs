//! # 控制器配置
//!
//! 以 TOML 描述一个电机控制器：厂商、传感器、齿轮比、首选单位、测量模式与 PID 槽位。
//!
//! ```toml
//! vendor = "talon_srx"
//! gear_ratio = 1.0
//!
//! [sensor]
//! kind = "quadrature"
//! encoder = "amt201"
//!
//! [units]
//! theta = "rad"
//! time = "s"
//! length = "ft"
//!
//! [measurement]
//! mode = "distance"
//! radius = 2.0
//!
//! [[pid]]
//! name = "hold"
//! kp = 0.4
//! ki = 0.0
//! kd = 0.02
//! ```
//!
//! 单位名经 [`bb_units::catalog::base_unit`] 解析；`radius` 以首选长度单位计。

use crate::context::PreferredUnits;
use crate::controller::MotorController;
use crate::error::{ConfigError, Result};
use crate::mode::MeasurementMode;
use crate::motors::MotorModel;
use crate::pid::PidGains;
use bb_hal::{MotorAdapter, Sensor, VendorProfile};
use bb_units::catalog::base_unit;
use bb_units::{BaseUnit, Dimension, Quantity};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// 控制器配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// 厂商
    pub vendor: VendorProfile,

    /// 电机型号（仅用于常数查表）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motor: Option<MotorModel>,

    /// 齿轮比：`ratio × 编码器转 = 物体转`
    #[serde(default = "default_gear_ratio")]
    pub gear_ratio: f64,

    /// 位置传感器
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensor: Option<Sensor>,

    /// 首选单位
    #[serde(default)]
    pub units: UnitsConfig,

    /// 测量模式
    #[serde(default)]
    pub measurement: MeasurementConfig,

    /// PID 槽位（按顺序注册）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pid: Vec<PidConfig>,
}

fn default_gear_ratio() -> f64 {
    1.0
}

/// 首选单位名
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitsConfig {
    pub theta: String,
    pub time: String,
    pub second_time: String,
    pub length: String,
}

impl Default for UnitsConfig {
    fn default() -> Self {
        Self {
            theta: "rad".to_string(),
            time: "s".to_string(),
            second_time: "s".to_string(),
            length: "in".to_string(),
        }
    }
}

impl UnitsConfig {
    /// 解析为首选单位集
    pub fn resolve(&self) -> std::result::Result<PreferredUnits, ConfigError> {
        Ok(PreferredUnits {
            theta: lookup(&self.theta, Dimension::Angle)?,
            time: lookup(&self.time, Dimension::Time)?,
            second_time: lookup(&self.second_time, Dimension::Time)?,
            length: lookup(&self.length, Dimension::Length)?,
        })
    }
}

/// 测量模式配置
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeasurementConfig {
    #[serde(default)]
    pub mode: MeasurementMode,

    /// 半径（首选长度单位）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,

    /// 每物体转的长度（首选长度单位），与 `radius` 二选一
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_per_revolution: Option<f64>,
}

/// 一个 PID 槽位
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PidConfig {
    /// 槽位名，缺省为 `PID<编号>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub gains: PidGains,
}

fn lookup(name: &str, expected: Dimension) -> std::result::Result<BaseUnit, ConfigError> {
    let unit = base_unit(name).ok_or_else(|| ConfigError::UnknownUnit {
        name: name.to_string(),
    })?;
    if unit.dimension() != expected {
        return Err(ConfigError::WrongDimension {
            name: name.to_string(),
            expected,
        });
    }
    Ok(unit)
}

impl ControllerConfig {
    /// 某厂商的默认配置
    pub fn new(vendor: VendorProfile) -> Self {
        Self {
            vendor,
            motor: None,
            gear_ratio: default_gear_ratio(),
            sensor: None,
            units: UnitsConfig::default(),
            measurement: MeasurementConfig::default(),
            pid: Vec::new(),
        }
    }

    /// 从 TOML 字符串解析并校验
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, ConfigError> {
        let config: ControllerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 从文件加载
    pub fn load<P: AsRef<Path>>(path: P) -> std::result::Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 序列化为 TOML
    pub fn to_toml_string(&self) -> std::result::Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// 保存到文件
    pub fn save<P: AsRef<Path>>(&self, path: P) -> std::result::Result<(), ConfigError> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// 校验取值（不接触硬件）
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !(self.gear_ratio > 0.0 && self.gear_ratio.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "gear_ratio must be positive, got {}",
                self.gear_ratio
            )));
        }
        self.units.resolve()?;
        if let Some(radius) = self.measurement.radius
            && !(radius > 0.0 && radius.is_finite())
        {
            return Err(ConfigError::Invalid(format!(
                "measurement.radius must be positive, got {}",
                radius
            )));
        }
        if let Some(length) = self.measurement.length_per_revolution
            && !(length > 0.0 && length.is_finite())
        {
            return Err(ConfigError::Invalid(format!(
                "measurement.length_per_revolution must be positive, got {}",
                length
            )));
        }
        match (
            self.measurement.radius,
            self.measurement.length_per_revolution,
        ) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::Invalid(
                    "measurement.radius and measurement.length_per_revolution are exclusive"
                        .to_string(),
                ));
            },
            (None, None) if self.measurement.mode.is_distance() => {
                return Err(ConfigError::Invalid(
                    "distance mode requires measurement.radius or measurement.length_per_revolution"
                        .to_string(),
                ));
            },
            _ => {},
        }
        if let Some(Sensor::Integrated {
            ticks_per_revolution,
        }) = self.sensor
            && !(ticks_per_revolution > 0.0 && ticks_per_revolution.is_finite())
        {
            return Err(ConfigError::Invalid(format!(
                "sensor.ticks_per_revolution must be positive, got {}",
                ticks_per_revolution
            )));
        }
        Ok(())
    }
}

impl<A: MotorAdapter> MotorController<A> {
    /// 按配置构造控制器
    ///
    /// 依次应用：传感器、齿轮比、首选单位、半径、测量模式、PID 槽位。
    pub fn from_config(adapter: A, config: &ControllerConfig) -> Result<Self> {
        config.validate()?;
        if adapter.profile() != config.vendor {
            return Err(ConfigError::Invalid(format!(
                "adapter is a {} but config names {}",
                adapter.profile().name(),
                config.vendor.name()
            ))
            .into());
        }

        let preferred = config.units.resolve()?;
        let length = preferred.length;
        let mut controller = MotorController::new(adapter);

        match config.sensor {
            Some(sensor) => controller.attach_sensor(sensor)?,
            None => controller.sync_native()?,
        }
        controller.set_gear_ratio(config.gear_ratio)?;

        controller.set_preferred_theta_unit(preferred.theta)?;
        controller.set_preferred_time_unit(preferred.time)?;
        controller.set_preferred_second_time_unit(preferred.second_time)?;
        controller.set_preferred_length_unit(preferred.length)?;

        if let Some(radius) = config.measurement.radius {
            controller.set_radius(Quantity::new(radius, length))?;
        }
        if let Some(per_rev) = config.measurement.length_per_revolution {
            controller.set_length_per_revolution(Quantity::new(per_rev, length))?;
        }
        controller.set_measurement_mode(config.measurement.mode)?;

        for pid in &config.pid {
            match &pid.name {
                Some(name) => controller.add_pid_named(pid.gains, name.clone())?,
                None => controller.add_pid(pid.gains)?,
            };
        }

        if let Some(model) = config.motor {
            controller.set_motor_model(model);
        }

        info!(
            "{} controller configured: {:?} mode, {} PID slots",
            config.vendor.name(),
            config.measurement.mode,
            config.pid.len()
        );
        Ok(controller)
    }
}
