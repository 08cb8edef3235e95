//! 单位代数的属性测试
//!
//! 使用 proptest 验证换算的往返、传递与线性。

mod common;

use bb_sdk::hal::{NativeUnits, Sensor, VendorProfile};
use bb_sdk::motor::UnitContext;
use bb_sdk::units::catalog::*;
use bb_sdk::units::{BaseUnit, CompositeUnit, Quantity};
use common::approx_eq;
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-9;

const LENGTHS: [BaseUnit; 7] = [IN, FT, CM, M, YARD, FURLONG, SMOOT];
const ANGLES: [BaseUnit; 3] = [RAD, REV, DEG];
const TIMES: [BaseUnit; 8] = [S, MIN, MS, MS100, HR, DAY, WEEK, FORTNIGHT];

fn velocities() -> Vec<CompositeUnit> {
    vec![
        IN_PER_S.clone(),
        FT_PER_S.clone(),
        M_PER_S.clone(),
        FURLONGS_PER_FORTNIGHT.clone(),
    ]
}

fn talon_units() -> NativeUnits {
    let sensor = Sensor::Integrated {
        ticks_per_revolution: 2048.0,
    };
    VendorProfile::TalonSrx
        .native_units(Some(&sensor))
        .unwrap()
}

proptest! {
    /// A -> B -> A 回到原值
    #[test]
    fn base_roundtrip(a in 0..LENGTHS.len(), b in 0..LENGTHS.len(), x in -1e6..1e6f64) {
        let (a, b) = (LENGTHS[a], LENGTHS[b]);
        let there = a.to(&b, x).unwrap();
        let back = b.to(&a, there).unwrap();
        prop_assert!(approx_eq(back, x, TOLERANCE));
    }

    /// A.per(C) = A.per(B) * B.per(C)
    #[test]
    fn per_is_transitive(a in 0..TIMES.len(), b in 0..TIMES.len(), c in 0..TIMES.len()) {
        let (a, b, c) = (TIMES[a], TIMES[b], TIMES[c]);
        let direct = a.per(&c).unwrap();
        let chained = a.per(&b).unwrap() * b.per(&c).unwrap();
        prop_assert!(approx_eq(direct, chained, TOLERANCE));
    }

    /// A.per(B) * B.per(A) = 1
    #[test]
    fn per_is_reciprocal(a in 0..ANGLES.len(), b in 0..ANGLES.len()) {
        let (a, b) = (ANGLES[a], ANGLES[b]);
        let product = a.per(&b).unwrap() * b.per(&a).unwrap();
        prop_assert!(approx_eq(product, 1.0, TOLERANCE));
    }

    /// 不同量纲之间的换算总是失败
    #[test]
    fn mismatched_dimensions_fail(l in 0..LENGTHS.len(), t in 0..TIMES.len()) {
        prop_assert!(LENGTHS[l].per(&TIMES[t]).is_err());
        prop_assert!(TIMES[t].to(&LENGTHS[l], 1.0).is_err());
    }

    /// 复合单位换算可逆
    #[test]
    fn composite_roundtrip(a in 0..4usize, b in 0..4usize, x in -1e4..1e4f64) {
        let units = velocities();
        let (a, b) = (&units[a], &units[b]);
        let there = a.to(b, x).unwrap();
        let back = b.to(a, there).unwrap();
        prop_assert!(approx_eq(back, x, TOLERANCE));
        prop_assert!(approx_eq(a.per(b).unwrap() * b.per(a).unwrap(), 1.0, TOLERANCE));
    }

    /// 乘除构造与显式构造的复合单位换算一致
    #[test]
    fn composite_construction_is_order_invariant(x in -1e4..1e4f64) {
        let built = (KG * M) / S;
        let reordered = CompositeUnit::new([M, KG], [S]);
        prop_assert!(approx_eq(built.to(&reordered, x).unwrap(), x, TOLERANCE));
        prop_assert!(approx_eq(GREENBERG.to(&built, x).unwrap(), x, TOLERANCE));
    }

    /// 距离模式下位置换算对输入线性
    #[test]
    fn distance_mode_is_linear(radius in 0.5..20.0f64, s in -100.0..100.0f64, k in -10.0..10.0f64) {
        let mut context = UnitContext::new();
        context.update_native(talon_units()).unwrap();
        context.enter_distance_mode(Quantity::new(radius, IN)).unwrap();

        let single = context.position_to_native(&Quantity::new(s, IN)).unwrap();
        let scaled = context.position_to_native(&Quantity::new(k * s, IN)).unwrap();
        prop_assert!(approx_eq(scaled, k * single, 1e-8));
    }

    /// 角度模式下速度写入再读出回到首选单位下的原值
    #[test]
    fn velocity_translation_roundtrip(x in -1e3..1e3f64, gear in 0.1..100.0f64) {
        let mut context = UnitContext::new();
        context.update_native(talon_units()).unwrap();
        context.set_gear_ratio(gear).unwrap();

        let native = context.velocity_to_native(&Quantity::new(x, &*RAD_PER_S)).unwrap();
        let read = context.velocity_from_native(native).unwrap();
        prop_assert!(approx_eq(read.value(), x, TOLERANCE));
    }

    /// 距离模式下位置写入再读出回到首选长度
    #[test]
    fn distance_translation_roundtrip(radius in 0.5..20.0f64, s in -500.0..500.0f64) {
        let mut context = UnitContext::new();
        context.update_native(talon_units()).unwrap();
        context.enter_distance_mode(Quantity::new(radius, IN)).unwrap();

        let native = context.position_to_native(&Quantity::new(s, IN)).unwrap();
        let read = context.position_from_native(native).unwrap();
        prop_assert!(approx_eq(read.value(), s, 1e-8));
    }
}
