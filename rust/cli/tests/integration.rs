#![deny(missing_debug_implementations, unused_must_use)]
#![warn(clippy::all)]
mod helpers;
mod integration {
    // groups files under tests/integration/
    mod cli_basic;
    mod config_precedence;
    mod game_rounds;
    mod math_roundtrip;
    mod sim_pipeline;
}
