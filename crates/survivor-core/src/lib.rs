//! Core types and definitions for the survivor simulation.
//!
//! This crate defines the vocabulary shared across the engine and its
//! embedders: entity structs, commands, snapshot views, events, stat
//! tables, and constants. It has no dependency on any runtime framework,
//! renderer, or input device.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod submit;
pub mod types;
