//! Core library for the `cacheprobe` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, configuration parsing, the request timing harness and the terminal
//! view model. The primary user-facing interface is the `cacheprobe`
//! command-line application; library APIs may evolve as the CLI grows.
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod ui;
