//! CLI command implementations for spirv-embed.
//!
//! Each module corresponds to a subcommand (`spirv-embed <command>`).

pub mod header;
pub mod source;
