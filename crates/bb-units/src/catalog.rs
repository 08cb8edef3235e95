//! 进程级单位目录
//!
//! 基本单位是编译期常量；复合单位在首次访问时构造一次，之后只读共享。
//! 每个量纲的标准：英寸、弧度、磅、秒。
//!
//! 所有换算比例都是精确定义值（1 in = 2.54 cm，1 lb = 0.45359237 kg，
//! 1 day = 24 h）。

use crate::base::BaseUnit;
use crate::composite::CompositeUnit;
use crate::dimension::Dimension;
use once_cell::sync::Lazy;
use std::f64::consts::PI;

// ==================== 长度 ====================

pub const IN: BaseUnit = BaseUnit::standard("in", Dimension::Length);
pub const FT: BaseUnit = BaseUnit::relative_to("ft", IN, 1.0 / 12.0);
pub const CM: BaseUnit = BaseUnit::relative_to("cm", IN, 2.54);
pub const M: BaseUnit = BaseUnit::relative_to("m", CM, 0.01);
pub const YARD: BaseUnit = BaseUnit::relative_to("yd", FT, 1.0 / 3.0);
pub const FURLONG: BaseUnit = BaseUnit::relative_to("furlong", YARD, 1.0 / 220.0);
/// 5 ft 7 in
pub const SMOOT: BaseUnit = BaseUnit::relative_to("smoot", FT, 1.0 / (5.0 + 7.0 / 12.0));

// ==================== 角度 ====================

pub const RAD: BaseUnit = BaseUnit::standard("rad", Dimension::Angle);
pub const REV: BaseUnit = BaseUnit::relative_to("rev", RAD, 1.0 / (2.0 * PI));
pub const DEG: BaseUnit = BaseUnit::relative_to("deg", REV, 360.0);

// ==================== 质量 ====================

pub const LB: BaseUnit = BaseUnit::standard("lb", Dimension::Mass);
pub const KG: BaseUnit = BaseUnit::relative_to("kg", LB, 0.453_592_37);

// ==================== 时间 ====================

pub const S: BaseUnit = BaseUnit::standard("s", Dimension::Time);
pub const MIN: BaseUnit = BaseUnit::relative_to("min", S, 1.0 / 60.0);
pub const MS: BaseUnit = BaseUnit::relative_to("ms", S, 1000.0);
/// 100 毫秒（Talon SRX 速度时基）
pub const MS100: BaseUnit = BaseUnit::relative_to("100ms", MS, 1.0 / 100.0);
pub const HR: BaseUnit = BaseUnit::relative_to("hr", MIN, 1.0 / 60.0);
pub const DAY: BaseUnit = BaseUnit::relative_to("day", HR, 1.0 / 24.0);
pub const WEEK: BaseUnit = BaseUnit::relative_to("week", DAY, 1.0 / 7.0);
pub const FORTNIGHT: BaseUnit = BaseUnit::relative_to("fortnight", DAY, 1.0 / 14.0);

// ==================== 复合单位 ====================

pub static IN_PER_S: Lazy<CompositeUnit> = Lazy::new(|| IN / S);
pub static FT_PER_S: Lazy<CompositeUnit> = Lazy::new(|| FT / S);
pub static M_PER_S: Lazy<CompositeUnit> = Lazy::new(|| M / S);
pub static FURLONGS_PER_FORTNIGHT: Lazy<CompositeUnit> = Lazy::new(|| FURLONG / FORTNIGHT);

pub static IN_PER_S2: Lazy<CompositeUnit> = Lazy::new(|| CompositeUnit::new([IN], [S, S]));
pub static FT_PER_S2: Lazy<CompositeUnit> = Lazy::new(|| CompositeUnit::new([FT], [S, S]));
pub static M_PER_S2: Lazy<CompositeUnit> = Lazy::new(|| CompositeUnit::new([M], [S, S]));
/// 标准重力加速度
pub static G: Lazy<CompositeUnit> = Lazy::new(|| CompositeUnit::reduce(9.806_65, [M], [S, S]));

pub static RAD_PER_S: Lazy<CompositeUnit> = Lazy::new(|| RAD / S);
pub static DEG_PER_S: Lazy<CompositeUnit> = Lazy::new(|| DEG / S);
pub static REV_PER_S: Lazy<CompositeUnit> = Lazy::new(|| REV / S);
pub static RPM: Lazy<CompositeUnit> = Lazy::new(|| REV / MIN);

pub static RAD_PER_S2: Lazy<CompositeUnit> = Lazy::new(|| CompositeUnit::new([RAD], [S, S]));
pub static DEG_PER_S2: Lazy<CompositeUnit> = Lazy::new(|| CompositeUnit::new([DEG], [S, S]));
pub static REV_PER_S2: Lazy<CompositeUnit> = Lazy::new(|| CompositeUnit::new([REV], [S, S]));
pub static REV_PER_MIN_S: Lazy<CompositeUnit> = Lazy::new(|| CompositeUnit::new([REV], [MIN, S]));
pub static REV_PER_MIN2: Lazy<CompositeUnit> =
    Lazy::new(|| CompositeUnit::new([REV], [MIN, MIN]));

/// 动量 kg·m/s
pub static GREENBERG: Lazy<CompositeUnit> = Lazy::new(|| CompositeUnit::new([KG, M], [S]));

/// 按名称查找基本单位（含常用别名，不区分大小写）
///
/// 配置文件中的单位名称经由此处解析。
pub fn base_unit(name: &str) -> Option<BaseUnit> {
    let unit = match name.trim().to_ascii_lowercase().as_str() {
        "in" | "inch" | "inches" => IN,
        "ft" | "foot" | "feet" => FT,
        "cm" | "centimeter" | "centimeters" => CM,
        "m" | "meter" | "meters" => M,
        "yd" | "yard" | "yards" => YARD,
        "furlong" | "furlongs" => FURLONG,
        "smoot" | "smoots" => SMOOT,
        "rad" | "radian" | "radians" => RAD,
        "rev" | "revolution" | "revolutions" | "rot" => REV,
        "deg" | "degree" | "degrees" => DEG,
        "lb" | "lbs" | "pound" | "pounds" => LB,
        "kg" | "kilogram" | "kilograms" => KG,
        "s" | "sec" | "second" | "seconds" => S,
        "min" | "minute" | "minutes" => MIN,
        "ms" | "millisecond" | "milliseconds" => MS,
        "100ms" | "ms100" => MS100,
        "hr" | "h" | "hour" | "hours" => HR,
        "day" | "days" => DAY,
        "week" | "weeks" => WEEK,
        "fortnight" | "fortnights" => FORTNIGHT,
        _ => return None,
    };
    Some(unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_exact_reference_ratios() {
        assert!((IN.to(&CM, 1.0).unwrap() - 2.54).abs() < EPS);
        assert!((FT.to(&M, 1.0).unwrap() - 0.3048).abs() < EPS);
        assert!((LB.to(&KG, 1.0).unwrap() - 0.453_592_37).abs() < EPS);
        assert!((YARD.to(&FT, 1.0).unwrap() - 3.0).abs() < EPS);
        assert!((FURLONG.to(&YARD, 1.0).unwrap() - 220.0).abs() < 1e-7);
        assert!((SMOOT.to(&IN, 1.0).unwrap() - 67.0).abs() < EPS);
    }

    #[test]
    fn test_calendar_units() {
        assert!((DAY.to(&HR, 1.0).unwrap() - 24.0).abs() < EPS);
        assert!((WEEK.to(&DAY, 1.0).unwrap() - 7.0).abs() < EPS);
        assert!((FORTNIGHT.to(&DAY, 1.0).unwrap() - 14.0).abs() < EPS);
        assert!((MS100.to(&MS, 1.0).unwrap() - 100.0).abs() < EPS);
        assert!((HR.to(&S, 1.0).unwrap() - 3600.0).abs() < 1e-6);
    }

    #[test]
    fn test_angles() {
        assert!((REV.to(&RAD, 1.0).unwrap() - 2.0 * PI).abs() < EPS);
        assert!((REV.to(&DEG, 1.0).unwrap() - 360.0).abs() < EPS);
        assert!((DEG.to(&RAD, 180.0).unwrap() - PI).abs() < EPS);
    }

    #[test]
    fn test_composites() {
        assert!((G.to(&M_PER_S2, 1.0).unwrap() - 9.806_65).abs() < EPS);
        assert!((RPM.to(&REV_PER_S, 60.0).unwrap() - 1.0).abs() < EPS);
        assert!((FT_PER_S2.to(&IN_PER_S2, 1.0).unwrap() - 12.0).abs() < EPS);
        assert!((REV_PER_MIN2.to(&REV_PER_MIN_S, 60.0).unwrap() - 1.0).abs() < EPS);
        assert!(GREENBERG.is_compatible_with(&CompositeUnit::new([LB, FT], [MIN])));
        // 1 furlong/fortnight ≈ 1.663e-4 m/s
        let v = FURLONGS_PER_FORTNIGHT.to(&M_PER_S, 1.0).unwrap();
        assert!((v - 1.663_095e-4).abs() < 1e-9);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(base_unit("feet"), Some(FT));
        assert_eq!(base_unit("RAD"), Some(RAD));
        assert_eq!(base_unit(" 100ms "), Some(MS100));
        assert_eq!(base_unit("parsec"), None);
    }
}
