//! Department enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::UnknownVariant;

/// Organisational unit an employee belongs to.
///
/// Wire format: the literal stored in the `profiles.department` column.
/// Several literals are Greek and must round-trip byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "HR")]
    Hr,
    #[serde(rename = "Λογιστήριο")]
    Accounting,
    #[serde(rename = "Πωλήσεις")]
    Sales,
    #[serde(rename = "Διοίκηση")]
    Administration,
    #[serde(rename = "Γραμματεία")]
    Secretariat,
    #[serde(rename = "Marketing")]
    Marketing,
    #[serde(rename = "Μεταφορείς")]
    Transport,
    #[serde(rename = "Εξυπηρέτηση_Πελατών")]
    CustomerService,
    #[serde(rename = "Νομικά")]
    Legal,
}

impl Department {
    /// Every department, in form display order.
    pub const ALL: [Department; 10] = [
        Self::It,
        Self::Hr,
        Self::Accounting,
        Self::Sales,
        Self::Administration,
        Self::Secretariat,
        Self::Marketing,
        Self::Transport,
        Self::CustomerService,
        Self::Legal,
    ];

    const LITERALS: [&'static str; 10] = [
        "IT",
        "HR",
        "Λογιστήριο",
        "Πωλήσεις",
        "Διοίκηση",
        "Γραμματεία",
        "Marketing",
        "Μεταφορείς",
        "Εξυπηρέτηση_Πελατών",
        "Νομικά",
    ];

    /// Wire literal.
    pub fn as_str(self) -> &'static str {
        Self::LITERALS[self as usize]
    }

    /// Human-readable label for select inputs.
    pub fn label(self) -> &'static str {
        match self {
            Self::CustomerService => "Εξυπηρέτηση Πελατών",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                expected: &Self::LITERALS,
                received: s.to_owned(),
            })
    }
}
