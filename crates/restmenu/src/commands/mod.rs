//! CLI command implementations.

pub(crate) mod serve;
pub(crate) mod show;

pub(crate) use serve::ServeArgs;
pub(crate) use show::ShowArgs;
