//! CLI subcommand implementations.

pub mod info;
pub mod normalize;
pub mod prepare;
pub mod punct;
