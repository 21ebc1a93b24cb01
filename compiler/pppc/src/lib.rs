//! PPP driver library.
//!
//! The `ppp` binary is a thin argument dispatcher over this crate:
//! - [`config`] parses the command line into an [`Invocation`](config::Invocation)
//! - [`pipeline`] chains the phases, turning every failure into diagnostics
//! - [`commands`] implements each subcommand on top of the pipeline

pub mod commands;
pub mod config;
pub mod pipeline;
mod tracing_setup;

pub use tracing_setup::init_tracing;
