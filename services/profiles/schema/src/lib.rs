//! sea-orm entities for the profiles service.

pub mod profiles;
