// phishcheck/src/lib.rs
//! # phishcheck CLI Application
//!
//! This crate provides the terminal front end for the phishcheck engine: it
//! obtains a URL, hands it to `phishcheck-core` and renders the verdict.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
