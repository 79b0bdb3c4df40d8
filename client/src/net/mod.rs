//! Outbound network calls made by the page.

pub mod contact;
