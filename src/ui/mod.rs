//! Shared component builders and styling.
pub mod buttons;
pub mod style;
