//! Role enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::UnknownVariant;

/// Employee role.
///
/// Plain classification only; no permission checks are derived from it.
/// Defaults to [`Role::Employee`], the lowest non-readonly level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    Admin,
    Manager,
    Supervisor,
    #[default]
    Employee,
    Readonly,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Self::SuperAdmin,
        Self::Admin,
        Self::Manager,
        Self::Supervisor,
        Self::Employee,
        Self::Readonly,
    ];

    /// Order used by the role select input.
    pub const DISPLAY_ORDER: [Role; 6] = [
        Self::Employee,
        Self::Supervisor,
        Self::Manager,
        Self::Admin,
        Self::SuperAdmin,
        Self::Readonly,
    ];

    const LITERALS: [&'static str; 6] = [
        "SUPER_ADMIN",
        "ADMIN",
        "MANAGER",
        "SUPERVISOR",
        "EMPLOYEE",
        "READONLY",
    ];

    /// Wire literal.
    pub fn as_str(self) -> &'static str {
        Self::LITERALS[self as usize]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super Admin",
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::Supervisor => "Supervisor",
            Self::Employee => "Employee",
            Self::Readonly => "Read Only",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                expected: &Self::LITERALS,
                received: s.to_owned(),
            })
    }
}
