// crates/scholar-cli/src/commands/mod.rs
//
// Command module declarations for the scholar CLI.

pub mod score;
pub mod tiers;
