use anyhow::Result;

use super::super::args::ScanCommand;
use super::{CommandResult, CommandSummary, ScanSummary, helper::finish};
use crate::{
    analysis::{ScanResult, extract_files, scan_files},
    config::{CONFIG_FILE_NAME, load_config, resolve_source_root},
};

pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let verbose = cmd.output.verbose;
    let config_result = load_config(&cmd.path)?;

    if verbose && !config_result.from_file {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }

    let config = config_result.config;
    let root = resolve_source_root(&cmd.path, &config.source_root);

    let ScanResult {
        files,
        skipped_count,
    } = scan_files(&root, &config.includes, &config.ignores, verbose);

    let results = extract_files(&root, &files, cmd.output.unique || config.unique);

    Ok(finish(
        CommandSummary::Scan(ScanSummary {
            format: cmd.output.format,
            skipped_count,
        }),
        results,
    ))
}
