use super::{CommandResult, CommandSummary};
use crate::extraction::FileExtraction;

pub fn finish(summary: CommandSummary, files: Vec<FileExtraction>) -> CommandResult {
    let mut error_count = files.iter().filter(|f| f.error.is_some()).count();

    if let CommandSummary::Init(ref summary) = summary
        && !summary.created
    {
        error_count += 1;
    }

    CommandResult {
        summary,
        files,
        error_count,
    }
}
