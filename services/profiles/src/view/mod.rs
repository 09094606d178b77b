//! Presentation state handed to whatever renders the form and the table.

pub mod listing;
pub mod notification;
