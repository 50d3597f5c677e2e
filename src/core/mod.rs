//! Core module - configuration and shared infrastructure
//!
//! # Contents
//!
//! - [`GameSettings`] and its nested [`BoardSettings`], [`JumpSettings`] and
//!   [`RulesSettings`]
//! - Settings persistence: [`settings_path`], [`load_settings`],
//!   [`load_or_default`], [`save_settings`]
//! - [`CoreError`] and the [`CoreResult`] alias
//!
//! # Usage Example
//!
//! ```rust,ignore
//! use tilechess::core::{load_or_default, settings_path};
//!
//! let settings = load_or_default(&settings_path());
//! let layout = tilechess::rendering::BoardLayout::new(&settings.board);
//! ```

pub mod error;
pub mod resources;
pub mod settings_persistence;

#[cfg(test)]
mod tests;

pub use error::{CoreError, CoreResult};
pub use resources::{BoardSettings, GameSettings, JumpSettings, RulesSettings};
pub use settings_persistence::{load_or_default, load_settings, save_settings, settings_path};
