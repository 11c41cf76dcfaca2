//! Tabletop - board-game family catalog tooling.
//!
//! This crate provides both a CLI application and a library for checking
//! board-game families: which games of a family cannot be reached from its
//! base game by following relations such as "expansion of" or "sequel to".
//!
//! The analysis itself lives in [`family`] and is pure and synchronous.
//! [`catalog`] loads families, games and relations from JSONL files.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod catalog;
pub mod domain;
pub mod error;
pub mod family;

// Public CLI module (needed by binary)
pub mod app;
pub mod cli;
pub mod output;

// Command implementations
pub mod commands;
