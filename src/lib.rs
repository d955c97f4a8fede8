#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod autoplay;
mod bitboard;
#[cfg(feature = "std")]
mod cli;
mod common;
mod config;
mod coord;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placement;
pub mod prelude;
mod startup;

pub use autoplay::*;
pub use bitboard::{BitBoard, BitBoardError, SetBits};
#[cfg(feature = "std")]
pub use cli::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, resolve_level, LOG_ENV};
pub use placement::*;
pub use startup::*;
