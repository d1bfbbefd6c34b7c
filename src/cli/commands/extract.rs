use std::path::Path;

use anyhow::{Context, Result};

use super::super::args::ExtractCommand;
use super::{CommandResult, CommandSummary, ExtractSummary, helper::finish};
use crate::{analysis::extract_files, config::load_config};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let config = load_config(&cwd)?.config;
    let unique = cmd.output.unique || config.unique;

    // Paths are taken as given: relative to the working directory or absolute.
    let files = extract_files(Path::new(""), &cmd.files, unique);

    Ok(finish(
        CommandSummary::Extract(ExtractSummary {
            format: cmd.output.format,
            context: cmd.context,
        }),
        files,
    ))
}
