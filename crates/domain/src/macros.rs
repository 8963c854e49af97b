//! Macro for implementing Display and FromStr for wire-level enums
//!
//! Status-like enums travel as lowercase snake_case strings on the wire and
//! are typed by users on the command line. This macro provides both
//! conversions from a single mapping.
//!
//! # Example
//!
//! ```rust
//! use jobmatch_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum ReviewState {
//!     Open,
//!     UnderReview,
//!     Closed,
//! }
//!
//! impl_domain_status_conversions!(ReviewState {
//!     Open => "open",
//!     UnderReview => "under_review",
//!     Closed => "closed",
//! });
//!
//! assert_eq!("Under-Review".parse::<ReviewState>(), Ok(ReviewState::UnderReview));
//! ```

/// Implements Display and FromStr traits for wire-level enums
///
/// - Display writes the mapped string unchanged
/// - FromStr trims, lowercases and treats `-` as `_` before matching, so
///   `"Under-Review"` parses as `"under_review"`
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().replace('-', "_").as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
