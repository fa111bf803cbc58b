//! The ordered (X, Y) token pair of a pool.

use super::TokenAddress;
use crate::error::AmmError;

/// Which way a trade runs through a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// X in, Y out.
    Forward,
    /// Y in, X out.
    Reverse,
}

/// The two tokens of a pool in pool order.
///
/// Unlike a canonical pair, X and Y keep the order the pool was created
/// with: reserves, fee side and price orientation all refer to it.
///
/// # Examples
///
/// ```
/// use hydra_pricing::domain::{SwapDirection, TokenAddress, TokenPair};
///
/// let sui = TokenAddress::from_bytes([2u8; 32]);
/// let usdc = TokenAddress::from_bytes([1u8; 32]);
/// let pair = TokenPair::new(sui, usdc).expect("distinct tokens");
///
/// assert_eq!(pair.x(), sui);
/// assert_eq!(pair.direction(usdc, sui), Some(SwapDirection::Reverse));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenPair {
    x: TokenAddress,
    y: TokenAddress,
}

impl TokenPair {
    /// Creates a pair in pool order.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if both tokens are the same.
    pub fn new(x: TokenAddress, y: TokenAddress) -> Result<Self, AmmError> {
        if x == y {
            return Err(AmmError::InvalidToken(
                "token pair requires two distinct addresses",
            ));
        }
        Ok(Self { x, y })
    }

    /// Returns the X token.
    #[must_use]
    pub const fn x(&self) -> TokenAddress {
        self.x
    }

    /// Returns the Y token.
    #[must_use]
    pub const fn y(&self) -> TokenAddress {
        self.y
    }

    /// Returns `true` if the token is X or Y.
    #[must_use]
    pub fn contains(&self, token: &TokenAddress) -> bool {
        self.x == *token || self.y == *token
    }

    /// Returns the counterpart of `token` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token` is not in the pair.
    pub fn other(&self, token: &TokenAddress) -> Result<TokenAddress, AmmError> {
        if *token == self.x {
            Ok(self.y)
        } else if *token == self.y {
            Ok(self.x)
        } else {
            Err(AmmError::InvalidToken("token is not part of this pair"))
        }
    }

    /// Resolves a `from → to` trade into a pool direction, or `None` if the
    /// pool does not trade that pair.
    #[must_use]
    pub fn direction(&self, from: TokenAddress, to: TokenAddress) -> Option<SwapDirection> {
        if from == self.x && to == self.y {
            Some(SwapDirection::Forward)
        } else if from == self.y && to == self.x {
            Some(SwapDirection::Reverse)
        } else {
            None
        }
    }
}
