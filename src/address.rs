//! 32-byte on-chain identifiers.
//!
//! Sui renders both account addresses and object ids as `0x` followed by 64 hex chars, but
//! accepts the short form (`0x2`) everywhere. Both types here parse either form and always
//! display the long one.

use std::{fmt, str::FromStr};
use thiserror::Error;

/// Byte length of addresses and object ids
pub const ID_LENGTH: usize = 32;

/// Why a string is not a valid address or object id
#[derive(Debug, Error, PartialEq)]
pub enum AddressError {
    /// No digits after the optional `0x`
    #[error("Empty hex identifier")]
    Empty,
    /// More than 64 hex digits
    #[error("Hex identifier has {0} digits, at most 64 allowed")]
    TooLong(usize),
    /// Non-hex characters
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

fn parse_hex_id(s: &str) -> Result<[u8; ID_LENGTH], AddressError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.is_empty() {
        return Err(AddressError::Empty);
    }
    if digits.len() > ID_LENGTH * 2 {
        return Err(AddressError::TooLong(digits.len()));
    }
    let padded = format!("{:0>width$}", digits, width = ID_LENGTH * 2);
    let mut bytes = [0u8; ID_LENGTH];
    hex::decode_to_slice(padded, &mut bytes)?;
    Ok(bytes)
}

macro_rules! hex_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name([u8; ID_LENGTH]);

        impl $name {
            /// Wrap raw bytes
            pub const fn new(bytes: [u8; ID_LENGTH]) -> Self {
                $name(bytes)
            }

            /// Raw bytes
            pub fn as_bytes(&self) -> &[u8; ID_LENGTH] {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = AddressError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_hex_id(s.trim()).map($name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self)
            }
        }
    };
}

hex_id!(
    /// Account address, derived from a public key
    SuiAddress
);

hex_id!(
    /// Identifier of an on-chain object. Packages are objects too.
    ObjectId
);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn short_form_is_left_padded() {
        let id: ObjectId = "0x2".parse().unwrap();
        let mut expected = [0u8; ID_LENGTH];
        expected[31] = 2;
        assert_eq!(id.as_bytes(), &expected);
        assert_eq!(
            id.to_string(),
            "0x0000000000000000000000000000000000000000000000000000000000000002"
        );
    }

    #[test]
    fn prefix_is_optional() {
        let with: SuiAddress = "0xabc".parse().unwrap();
        let without: SuiAddress = "abc".parse().unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!("0x".parse::<ObjectId>(), Err(AddressError::Empty));
        assert_eq!(
            "1".repeat(65).parse::<ObjectId>(),
            Err(AddressError::TooLong(65))
        );
        assert!(matches!(
            "0xnothex".parse::<ObjectId>(),
            Err(AddressError::InvalidHex(_))
        ));
    }

    proptest! {
        #[test]
        fn short_and_long_forms_agree(digits in "[0-9a-f]{1,64}") {
            let short: ObjectId = format!("0x{}", digits).parse().unwrap();
            let long: ObjectId = short.to_string().parse().unwrap();
            prop_assert_eq!(short, long);
            prop_assert_eq!(short.to_string().len(), 2 + ID_LENGTH * 2);
        }
    }
}
