// Primitives for reading the plain text inputs.

use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::election::io_common::{non_blank_lines, Source};
use crate::election::*;
use snafu::ResultExt;

/// Fails if any of the four input files is missing.
///
/// All the files are checked before anything is read, so that nothing gets
/// written when the data folder is incomplete.
pub fn check_sources(data_dir: &str) -> BElectionResult<()> {
    for source in Source::ALL {
        let path = source.text_path(data_dir);
        if !Path::new(&path).exists() {
            return Err(Box::new(ElectionError::MissingDataFile { path }));
        }
    }
    Ok(())
}

pub fn read_lines(path: &str) -> BElectionResult<Vec<String>> {
    let contents = fs::read_to_string(path).context(ReadingTextSnafu { path })?;
    let lines = non_blank_lines(&contents);
    debug!("read_lines: {}: {} lines", path, lines.len());
    Ok(lines)
}

/// Reads and parses the four input files of the data folder.
pub fn read_world(data_dir: &str) -> BElectionResult<World> {
    check_sources(data_dir)?;
    let names = read_lines(&Source::Names.text_path(data_dir))?;
    let issue_lines = read_lines(&Source::Issues.text_path(data_dir))?;
    let reasons = read_lines(&Source::Reasons.text_path(data_dir))?;
    let quotes = read_lines(&Source::Quotes.text_path(data_dir))?;
    let world = World {
        names,
        issues: parse_issue_lines(&issue_lines),
        reasons,
        quotes,
    };
    info!(
        "read_world: {} names, {} issues, {} reasons, {} quotes",
        world.names.len(),
        world.issues.len(),
        world.reasons.len(),
        world.quotes.len()
    );
    Ok(world)
}
