//! Chain-agnostic 32-byte identifiers.
//!
//! The data layer decodes whatever on-chain address or type representation
//! it deals with into these opaque identifiers; the pricing core only ever
//! compares them for equality.

use core::fmt;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name([u8; 32]);

        impl $name {
            /// Creates the identifier from raw bytes.
            #[must_use]
            pub const fn from_bytes(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }

            /// Returns the underlying 32-byte representation.
            #[must_use]
            pub const fn as_bytes(&self) -> [u8; 32] {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("0x")?;
                for b in &self.0 {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
        }
    };
}

define_id!(
    /// Identity of a token (coin type) as decoded by the data layer.
    ///
    /// ```
    /// use hydra_pricing::domain::TokenAddress;
    ///
    /// let addr = TokenAddress::from_bytes([1u8; 32]);
    /// assert_eq!(addr.as_bytes(), [1u8; 32]);
    /// ```
    TokenAddress
);

define_id!(
    /// Identity of a pool object.
    PoolId
);

define_id!(
    /// Address of an account owning positions.
    AccountAddress
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_follows_bytes() {
        assert_eq!(TokenAddress::from_bytes([1u8; 32]), TokenAddress::from_bytes([1u8; 32]));
        assert_ne!(PoolId::from_bytes([1u8; 32]), PoolId::from_bytes([2u8; 32]));
    }

    #[test]
    fn default_is_all_zero() {
        assert_eq!(AccountAddress::default().as_bytes(), [0u8; 32]);
    }

    #[test]
    fn display_is_lower_hex() {
        let mut bytes = [0u8; 32];
        bytes[31] = 0xab;
        let shown = PoolId::from_bytes(bytes).to_string();
        assert!(shown.starts_with("0x00"));
        assert!(shown.ends_with("ab"));
        assert_eq!(shown.len(), 66);
    }
}
