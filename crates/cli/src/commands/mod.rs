//! Subcommand implementations.

mod compare;
mod profiles;
mod sample;

pub use compare::Compare;
pub use profiles::Profiles;
pub use sample::Sample;
