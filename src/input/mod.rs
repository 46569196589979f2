//! Input adapters for the fractal explorer.
//!
//! This module contains adapters that receive input from the command line and standard
//! input and translate them into domain settings and command batches.

pub mod cli;
pub mod stdin;
