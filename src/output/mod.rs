//! Terminal output formatting
//!
//! Banners, menus and result lines for both programs.

pub mod display;
pub mod formatters;

pub use formatters::{format_equation, format_number};
