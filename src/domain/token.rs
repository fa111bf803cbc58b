//! Token display metadata.

use core::fmt;

use super::{Amount, Decimals, ScaledDecimal, TokenAddress};

/// Well-known stable coins that anchor a valuation at `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StableCoin {
    /// USD Coin.
    Usdc,
    /// Tether.
    Usdt,
    /// Dai.
    Dai,
    /// Binance USD.
    Busd,
    /// Any other coin pegged to one US dollar.
    Other,
}

/// Decimal-precision metadata for a token, supplied by the data layer.
///
/// # Examples
///
/// ```
/// use hydra_pricing::domain::{Amount, Decimals, StableCoin, TokenAddress, TokenInfo};
///
/// let usdc = TokenInfo::new(
///     TokenAddress::from_bytes([1u8; 32]),
///     "USDC",
///     Decimals::new(6).expect("valid"),
/// )
/// .with_stable_coin(StableCoin::Usdc);
///
/// assert!(usdc.is_stable_coin());
/// assert_eq!(usdc.format_amount(Amount::new(2_500_000)), "2.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenInfo {
    address: TokenAddress,
    symbol: String,
    decimals: Decimals,
    stable_coin: Option<StableCoin>,
}

impl TokenInfo {
    /// Creates metadata for a non-stable token.
    #[must_use]
    pub fn new(address: TokenAddress, symbol: impl Into<String>, decimals: Decimals) -> Self {
        Self {
            address,
            symbol: symbol.into(),
            decimals,
            stable_coin: None,
        }
    }

    /// Marks the token as a stable coin.
    #[must_use]
    pub fn with_stable_coin(mut self, kind: StableCoin) -> Self {
        self.stable_coin = Some(kind);
        self
    }

    /// Returns the token identity.
    #[must_use]
    pub const fn address(&self) -> TokenAddress {
        self.address
    }

    /// Returns the ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the decimal precision.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Returns the stable-coin kind, if any.
    #[must_use]
    pub const fn stable_coin(&self) -> Option<StableCoin> {
        self.stable_coin
    }

    /// Returns `true` if the token is pegged to one US dollar.
    #[must_use]
    pub const fn is_stable_coin(&self) -> bool {
        self.stable_coin.is_some()
    }

    /// Formats a raw amount in display units, without padding.
    #[must_use]
    pub fn format_amount(&self, amount: Amount) -> String {
        ScaledDecimal::from_amount(amount, self.decimals).to_decimal_string(false)
    }
}

impl fmt::Display for TokenInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.symbol, self.address)
    }
}
