//! Process exit codes returned by [`crate::run`].
//!
//! Every command failure, including clap usage errors and replay mismatches
//! found by `verify`, collapses to [`ERROR`].

pub const SUCCESS: i32 = 0;

pub const ERROR: i32 = 2;
