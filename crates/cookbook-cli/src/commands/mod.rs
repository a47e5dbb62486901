//! Command dispatch and handler modules.

mod build;
mod merge_envs;
mod toc;

use miette::Result;

use cookbook_core::config::ProjectConfig;
use cookbook_util::errors::CookbookError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(CookbookError::Io)?;
    let config = ProjectConfig::load(&cwd)?;
    tracing::debug!("Running {:?} in {}", cli.command, cwd.display());

    match cli.command {
        Command::Toc { out, config: source } => toc::exec(&config, &out, source),
        Command::MergeEnvs { out, name, root } => {
            merge_envs::exec(&config, out, name, root, cli.verbose)
        }
        Command::Build { out, name, root } => build::exec(&config, &out, name, root, cli.verbose),
    }
}
