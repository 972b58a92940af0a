use log::{debug, info, warn};

use election_sim::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use snafu::{prelude::*, Snafu};

use std::io::{BufRead, Write};

use crate::args::Args;
use crate::art::*;

pub mod io_common;
pub mod io_csv;
pub mod io_json;
pub mod io_text;

#[derive(Debug, Snafu)]
pub enum ElectionError {
    #[snafu(display("Missing required data file: {path}"))]
    MissingDataFile { path: String },
    #[snafu(display("Error reading file {path}"))]
    ReadingText {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error creating the build folder {path}"))]
    CreatingBuildDir {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error encoding {path}"))]
    EncodingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error writing {path}"))]
    WritingJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error writing the vote log {path}"))]
    WritingCsv { source: csv::Error, path: String },
    #[snafu(display("Error reading the reference vote log {path}"))]
    ReadingReference {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Difference detected between the vote log and the reference {path}"))]
    ReferenceMismatch { path: String },
    #[snafu(display("Simulation error"))]
    Simulation { source: SimErrors },
    #[snafu(display("Error talking to the terminal"))]
    Terminal { source: std::io::Error },
}

pub type BElectionResult<T> = Result<T, Box<ElectionError>>;

/// Everything the session draws from, as read from the data folder.
#[derive(PartialEq, Debug, Clone)]
pub struct World {
    pub names: Vec<String>,
    pub issues: Vec<Issue>,
    pub reasons: Vec<String>,
    pub quotes: Vec<String>,
}

/// Reads the text inputs, mirrors them to JSON in the build folder and reads the world
/// back from the JSON copies.
pub fn load_world(data_dir: &str, build_dir: &str) -> BElectionResult<World> {
    let world = io_text::read_world(data_dir)?;
    io_json::write_world(build_dir, &world)?;
    io_json::read_world(build_dir)
}

pub fn render_round(style: &Style, outcome: &RoundOutcome) -> String {
    let mut lines: Vec<String> = vec![
        banner(
            style,
            &format!("Round {}: {}", outcome.round, outcome.issue.text),
        ),
        issue_line(style, outcome.issue.kind.label(), outcome.effective_weight),
        tally_line(style, outcome.count_for, outcome.count_against),
    ];
    for s in outcome.spokespeople.iter() {
        lines.push(format!(
            "{} {}",
            face(style, s.vote),
            speech_bubble(style, &format!("{}: {}", s.candidate, s.reason))
        ));
    }
    lines.join("\n")
}

fn say<W: Write>(out: &mut W, text: &str) -> BElectionResult<()> {
    writeln!(out, "{}", text).context(TerminalSnafu {})?;
    Ok(())
}

/// Blocks until a line (or the end of the input) is read.
fn pause<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> BElectionResult<()> {
    write!(out, "{}", prompt).context(TerminalSnafu {})?;
    out.flush().context(TerminalSnafu {})?;
    let mut line = String::new();
    if input.read_line(&mut line).context(TerminalSnafu {})? == 0 {
        // End of input: nothing echoed the newline.
        writeln!(out).context(TerminalSnafu {})?;
    }
    Ok(())
}

/// Runs a whole session: load, candidates, rounds, scoreboard, export.
///
/// Returns the path of the vote log.
pub fn run_election<R: BufRead, W: Write>(
    args: &Args,
    input: &mut R,
    out: &mut W,
) -> BElectionResult<String> {
    let rules = args.rules();
    let style = Style::new(!args.no_colour);
    debug!("run_election: rules: {:?}", rules);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let world = load_world(&args.data, &args.build)?;
    if world.issues.is_empty() {
        warn!("No issue found in {}: nothing to debate", args.data);
    }

    let mut candidates = make_candidates(
        &world.names,
        &world.quotes,
        rules.candidate_limit,
        &mut rng,
    )
    .context(SimulationSnafu {})?;
    let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
    info!("Candidates: {:?}", names);

    say(out, &banner(&style, "Welcome to TERMINAL ELECTION"))?;
    say(out, &candidate_list(&style, &names))?;
    pause(input, out, "Press Enter to begin...")?;

    let issues = select_issues(&world.issues, rules.rounds, &mut rng);
    let mut all_votes: Vec<VoteRecord> = Vec::new();
    for (idx, issue) in issues.iter().enumerate() {
        let outcome = run_round(
            idx,
            issue,
            &mut candidates,
            &world.reasons,
            &rules,
            &mut rng,
        )
        .context(SimulationSnafu {})?;
        say(out, &render_round(&style, &outcome))?;
        all_votes.extend(outcome.votes);
        pause(input, out, "Press Enter for next round...")?;
    }

    let ranked = rank_candidates(&candidates);
    say(out, &scoreboard(&style, &ranked))?;
    if let Some(winner) = ranked.first() {
        info!("Winner: {} ({:.2})", winner.name, winner.score);
        say(out, "")?;
        say(out, &trophy_panel(&style, &winner.name, &winner.quote))?;
    }

    let csv_path = io_csv::export_votes_csv(&all_votes, &args.build)?;
    say(out, &format!("\nVotes exported to: {}", csv_path))?;

    if let Some(reference) = &args.reference {
        io_csv::check_reference(&csv_path, reference, out)?;
    }
    Ok(csv_path)
}
