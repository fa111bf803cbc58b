//! Fiat valuation of reserves and traded volume.
//!
//! Display only: every result is a lossy `f64`. A side is anchored at the
//! caller-supplied primary price when it is the configured primary token,
//! or at `1.0` when it is a stable coin. One anchor is enough; the other
//! side is derived through the pool's spot price.

use super::PricingEngine;
use crate::domain::{Amount, PoolSnapshot, TokenAddress, TokenInfo};

impl PricingEngine {
    /// Values `tx` of X plus `ty` of Y, or `None` when the pool has no
    /// price or neither side can be anchored.
    #[must_use]
    pub fn valuation(
        &self,
        pool: &PoolSnapshot,
        primary_price: f64,
        tx: Amount,
        ty: Amount,
        x_info: &TokenInfo,
        y_info: &TokenInfo,
    ) -> Option<f64> {
        let price = self.spot_price(pool, x_info.decimals(), y_info.decimals());
        if price == 0.0 {
            return None;
        }

        let tx = tx.to_f64_lossy() / x_info.decimals().factor_f64();
        let ty = ty.to_f64_lossy() / y_info.decimals().factor_f64();

        let px = self.anchor(pool.pair().x(), x_info, primary_price);
        let py = self.anchor(pool.pair().y(), y_info, primary_price);
        let (px, py) = match (px, py) {
            (Some(px), Some(py)) => (px, py),
            (Some(px), None) => (px, px / price),
            (None, Some(py)) => (py * price, py),
            (None, None) => return None,
        };
        Some(px * tx + py * ty)
    }

    /// Value of the pool reserves.
    #[must_use]
    pub fn tvl(
        &self,
        pool: &PoolSnapshot,
        primary_price: f64,
        x_info: &TokenInfo,
        y_info: &TokenInfo,
    ) -> Option<f64> {
        self.valuation(pool, primary_price, pool.x(), pool.y(), x_info, y_info)
    }

    /// Value of the lifetime traded volume.
    #[must_use]
    pub fn trade_volume(
        &self,
        pool: &PoolSnapshot,
        primary_price: f64,
        x_info: &TokenInfo,
        y_info: &TokenInfo,
    ) -> Option<f64> {
        let (tx, ty) = pool.volume().lifetime();
        self.valuation(pool, primary_price, tx, ty, x_info, y_info)
    }

    /// Value of the trailing-day volume, taken per side as the larger of
    /// the current and the last epoch.
    #[must_use]
    pub fn trade_volume_24h(
        &self,
        pool: &PoolSnapshot,
        primary_price: f64,
        x_info: &TokenInfo,
        y_info: &TokenInfo,
    ) -> Option<f64> {
        let (tx, ty) = pool.volume().recent();
        self.valuation(pool, primary_price, tx, ty, x_info, y_info)
    }

    fn anchor(&self, token: TokenAddress, info: &TokenInfo, primary_price: f64) -> Option<f64> {
        if self.config().primary_token() == Some(token) {
            Some(primary_price)
        } else if info.is_stable_coin() {
            Some(1.0)
        } else {
            None
        }
    }
}
