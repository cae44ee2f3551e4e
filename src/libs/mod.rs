//! Core library modules for clockfill.
//!
//! - **Setup**: [`config`], [`error`], [`http`], [`messages`]
//! - **Domain**: [`lookup`], [`range`], [`holidays`], [`plan`], [`filler`]
//! - **Console**: [`prompt`], [`view`], [`formatter`]

pub mod config;
pub mod error;
pub mod filler;
pub mod formatter;
pub mod holidays;
pub mod http;
pub mod lookup;
pub mod messages;
pub mod plan;
pub mod prompt;
pub mod range;
pub mod view;
