//! Built-in pattern groups

mod basic;
mod postal;
mod phone;
mod named;

pub use basic::{EmailPatterns, UrlPatterns, UuidPatterns};
pub use postal::{PostalCodePatterns, DEFAULT_POSTAL_PATTERNS};
pub use phone::{PhonePatterns, DEFAULT_PHONE_PATTERNS};
pub use named::NamedPatterns;
