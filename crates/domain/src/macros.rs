//! Macro for implementing Display and `FromStr` for catalog enums
//!
//! The commerce API is picky about spelling: entity names are used verbatim
//! in URL paths (`/api/SalesOrder/PullData`) and scheduler tags are echoed in
//! request bodies. This macro keeps the canonical spelling in one place and
//! gives every catalog enum the same case-insensitive parser.
//!
//! # Example
//!
//! ```rust
//! use i95connect_domain::impl_catalog_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Direction {
//!     Inbound,
//!     Outbound,
//! }
//!
//! impl_catalog_conversions!(Direction {
//!     Inbound => "Inbound",
//!     Outbound => "Outbound",
//! });
//!
//! assert_eq!(Direction::Inbound.to_string(), "Inbound");
//! assert_eq!("outbound".parse::<Direction>().unwrap(), Direction::Outbound);
//! ```

/// Implements `as_str`, `Display` and `FromStr` for catalog enums
///
/// - `as_str` / `Display` return the canonical spelling given in the mapping
/// - `FromStr` accepts any ASCII casing of that spelling
/// - Parse errors name the enum and the rejected input
#[macro_export]
macro_rules! impl_catalog_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical wire spelling of this value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}
