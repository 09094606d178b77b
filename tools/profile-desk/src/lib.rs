//! Terminal front end for the profiles service: submit the employee form and
//! print the profile table.

pub mod client;
pub mod form;
pub mod reporter;
