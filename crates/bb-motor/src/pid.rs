//! PID 增益与命名槽位
//!
//! 控制器保存任意多组增益，按注册顺序编号；硬件只有少量槽位（Talon SRX 2 个），
//! 使用时把选中的一组写入硬件槽位 0。名称到编号的映射只追加、不删除。

use crate::error::{MotorError, Result};
use crate::mode::ControlVariable;
use bb_hal::SlotGains;
use serde::{Deserialize, Serialize};

/// 一组 PID(F) 增益
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PidGains {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
    /// 前馈
    #[serde(default)]
    pub kf: f64,
    /// 积分区间
    #[serde(default)]
    pub i_zone: f64,
    /// 用途
    #[serde(default)]
    pub control: ControlVariable,
}

impl PidGains {
    /// PID 增益，无前馈
    pub fn pid(control: ControlVariable, kp: f64, ki: f64, kd: f64) -> Self {
        Self {
            kp,
            ki,
            kd,
            control,
            ..Default::default()
        }
    }

    /// PIDF 增益
    pub fn pidf(control: ControlVariable, kp: f64, ki: f64, kd: f64, kf: f64) -> Self {
        Self {
            kf,
            ..Self::pid(control, kp, ki, kd)
        }
    }

    pub fn with_i_zone(mut self, i_zone: f64) -> Self {
        self.i_zone = i_zone;
        self
    }

    /// 硬件槽位格式
    pub fn slot_gains(&self) -> SlotGains {
        SlotGains {
            kp: self.kp,
            ki: self.ki,
            kd: self.kd,
            kf: self.kf,
            i_zone: self.i_zone,
        }
    }
}

#[derive(Debug, Clone)]
struct PidSlot {
    name: String,
    gains: PidGains,
    uses: u32,
}

/// 有序、只追加的命名槽位表
#[derive(Debug, Clone, Default)]
pub struct PidSlots {
    slots: Vec<PidSlot>,
    active: Option<usize>,
}

impl PidSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一组增益，名称为 `PID<编号>`
    pub fn add(&mut self, gains: PidGains) -> Result<usize> {
        let name = format!("PID{}", self.slots.len());
        self.add_named(gains, name)
    }

    /// 追加一组具名增益；名称重复返回 [`MotorError::DuplicatePidSlot`]
    pub fn add_named(&mut self, gains: PidGains, name: impl Into<String>) -> Result<usize> {
        let name = name.into();
        if self.index_of(&name).is_some() {
            return Err(MotorError::DuplicatePidSlot(name));
        }
        let index = self.slots.len();
        self.slots.push(PidSlot {
            name,
            gains,
            uses: 0,
        });
        Ok(index)
    }

    /// 名称对应的编号
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&PidGains> {
        self.slots
            .iter()
            .find(|slot| slot.name == name)
            .map(|slot| &slot.gains)
    }

    /// 标记为当前使用，返回编号与增益
    pub(crate) fn activate(&mut self, name: &str) -> Result<(usize, PidGains)> {
        let index = self
            .index_of(name)
            .ok_or_else(|| MotorError::UnknownPidSlot(name.to_string()))?;
        let slot = &mut self.slots[index];
        slot.uses += 1;
        self.active = Some(index);
        Ok((index, slot.gains))
    }

    /// 当前使用的编号
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// 使用次数
    pub fn uses(&self, name: &str) -> Option<u32> {
        self.slots
            .iter()
            .find(|slot| slot.name == name)
            .map(|slot| slot.uses)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// 按注册顺序遍历 `(名称, 增益)`
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PidGains)> {
        self.slots
            .iter()
            .map(|slot| (slot.name.as_str(), &slot.gains))
    }
}
