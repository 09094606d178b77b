//! Ambient plumbing shared by Staffdesk binaries: configuration loading,
//! tracing setup, health handlers and request ids.

pub mod config;
pub mod health;
pub mod middleware;
pub mod tracing;
