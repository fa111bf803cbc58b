//! Shared pool fixtures for the pricing tests.

#![allow(clippy::panic)]

use crate::config::PoolConfig;
use crate::domain::{
    Amount, BasisPoints, CurveKind, Decimals, FeeSchedule, FeeSide, PoolId, PoolSnapshot,
    StableParams, TokenAddress, TokenPair,
};
use crate::traits::FromConfig;

pub(crate) const LP_SUPPLY: u128 = 1_000_000;

pub(crate) fn addr(b: u8) -> TokenAddress {
    TokenAddress::from_bytes([b; 32])
}

pub(crate) fn dec(v: u8) -> Decimals {
    let Ok(d) = Decimals::new(v) else {
        panic!("invalid decimals in test: {v}");
    };
    d
}

pub(crate) fn pair() -> TokenPair {
    let Ok(p) = TokenPair::new(addr(1), addr(2)) else {
        panic!("expected valid pair");
    };
    p
}

fn config(curve: CurveKind, x: u128, y: u128) -> PoolConfig {
    let Ok(cfg) = PoolConfig::new(
        PoolId::from_bytes([42u8; 32]),
        pair(),
        curve,
        Amount::new(x),
        Amount::new(y),
        Amount::new(LP_SUPPLY),
    ) else {
        panic!("expected valid pool config");
    };
    cfg
}

pub(crate) fn cp_config(x: u128, y: u128) -> PoolConfig {
    config(CurveKind::ConstantProduct, x, y)
}

pub(crate) fn stable_config(x: u128, y: u128, amp: u64) -> PoolConfig {
    let Ok(params) = StableParams::new(amp, 1, 1) else {
        panic!("expected valid stable params");
    };
    config(CurveKind::Stable(params), x, y)
}

pub(crate) fn build(cfg: &PoolConfig) -> PoolSnapshot {
    let Ok(pool) = PoolSnapshot::from_config(cfg) else {
        panic!("expected valid pool");
    };
    pool
}

pub(crate) fn constant_product_pool(x: u128, y: u128) -> PoolSnapshot {
    build(&cp_config(x, y))
}

pub(crate) fn stable_pool(x: u128, y: u128, amp: u64) -> PoolSnapshot {
    build(&stable_config(x, y, amp))
}

pub(crate) fn fees(admin: u32, lp: u32, holder: u32, withdraw: u32, side: FeeSide) -> FeeSchedule {
    let Ok(f) = FeeSchedule::new(
        BasisPoints::new(admin),
        BasisPoints::new(lp),
        BasisPoints::new(holder),
        BasisPoints::new(withdraw),
        side,
    ) else {
        panic!("expected valid fees");
    };
    f
}
