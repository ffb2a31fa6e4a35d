//! Food lottery: pick today's meal from a group's food preferences.
//!
//! - **[`document`]** and **[`select`]**: the preference document and the
//!   uniform random draw over it. Pure, no I/O.
//! - **[`store`]**: loads the JSON preferences file and owns the session's
//!   document, with wholesale refresh.
//! - **[`prompt`]**, **[`launcher`]**, **[`render`]**: the text front end.
//!   The graphical front end lives in the `lottery-ui` crate.

pub mod config;
pub mod document;
pub mod error;
pub mod exit_codes;
pub mod launcher;
pub mod logging;
pub mod prompt;
pub mod render;
pub mod select;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
