//! Domain types shared across all Staffdesk crates.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers as well as the front-end tools.

pub mod department;
pub mod role;

/// Returned when a wire literal does not name a member of an enumeration.
///
/// The display text lists every accepted literal so it can be shown next to
/// the offending form field as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid enum value. Expected {}, received '{received}'", expected_list(.expected))]
pub struct UnknownVariant {
    pub expected: &'static [&'static str],
    pub received: String,
}

fn expected_list(expected: &[&str]) -> String {
    expected
        .iter()
        .map(|literal| format!("'{literal}'"))
        .collect::<Vec<_>>()
        .join(" | ")
}
