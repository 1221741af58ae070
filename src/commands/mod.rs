//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `run` - Sanitize the distribution tree (default)
//! - `preflight` - Check the tree and tools without changing anything
//! - `show` - Display configuration or the planned actions

mod preflight;
mod run;
pub mod show;

pub use preflight::cmd_preflight;
pub use run::cmd_run;
pub use show::cmd_show;
