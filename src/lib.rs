//! # Connect-X 3D
//!
//! Rules engine for Connect-Four played in an N×N×N grid: stones fall to the
//! bottom of a column and the first player to align K of them along any of
//! the 13 directions of 3D space wins.
//!
//! ## Modules
//!
//! - [`game`] — Grid, placement, win scanning, outcome and reward resolution
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
