//! lexicat: organize words into named categories with flat-file persistence
//!
//! The core is a small data model (words, word lists, named categories, a
//! catalog of categories) plus a line-oriented block format: `#name` starts
//! a category block, the following lines are its words, one per line.
//! Saves append, loads accumulate — both by contract.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
