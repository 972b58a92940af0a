// JSON copies of the inputs, written to the build folder.
//
// The session reads its world back from these files. They are regenerated at every run.

use log::{debug, info};
use std::fs;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::election::io_common::Source;
use crate::election::*;
use snafu::ResultExt;

pub fn write_json<T: Serialize + ?Sized>(path: &str, value: &T) -> BElectionResult<()> {
    let js = serde_json::to_string_pretty(value).context(EncodingJsonSnafu { path })?;
    fs::write(path, js).context(WritingJsonSnafu { path })?;
    debug!("write_json: wrote {}", path);
    Ok(())
}

pub fn read_json<T: DeserializeOwned>(path: &str) -> BElectionResult<T> {
    let contents = fs::read_to_string(path).context(ReadingTextSnafu { path })?;
    let value: T = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    Ok(value)
}

pub fn write_world(build_dir: &str, world: &World) -> BElectionResult<()> {
    fs::create_dir_all(build_dir).context(CreatingBuildDirSnafu { path: build_dir })?;
    write_json(&Source::Issues.json_path(build_dir), &world.issues)?;
    write_json(&Source::Reasons.json_path(build_dir), &world.reasons)?;
    write_json(&Source::Quotes.json_path(build_dir), &world.quotes)?;
    write_json(&Source::Names.json_path(build_dir), &world.names)?;
    info!("write_world: JSON copies written to {}", build_dir);
    Ok(())
}

pub fn read_world(build_dir: &str) -> BElectionResult<World> {
    Ok(World {
        names: read_json(&Source::Names.json_path(build_dir))?,
        issues: read_json(&Source::Issues.json_path(build_dir))?,
        reasons: read_json(&Source::Reasons.json_path(build_dir))?,
        quotes: read_json(&Source::Quotes.json_path(build_dir))?,
    })
}
