//! Streamer Sizer
//!
//! Computes the required drag area and suggested width/length dimensions
//! for a model rocket recovery streamer, collecting parameters through an
//! interactive session and echoing a formatted report to both the terminal
//! and a text file.

pub mod cli;
pub mod core;
pub mod error;
