// The vote log: one CSV row per candidate and per round.

use log::{info, warn};
use std::fs;
use std::io::Write;

use election_sim::VoteRecord;
use text_diff::{diff, Difference};

use crate::election::io_common::join_path;
use crate::election::*;
use snafu::ResultExt;

pub const VOTES_FILE: &str = "votes.csv";

pub const HEADER: [&str; 6] = ["round", "issue", "candidate", "vote", "aligned", "round_score"];

pub fn vote_row(record: &VoteRecord) -> [String; 6] {
    [
        record.round.to_string(),
        record.issue.clone(),
        record.candidate.clone(),
        record.vote.to_string(),
        if record.aligned { "True" } else { "False" }.to_string(),
        format!("{:.2}", record.score_delta),
    ]
}

/// Writes the vote log into the build folder and returns its path.
pub fn export_votes_csv(records: &[VoteRecord], build_dir: &str) -> BElectionResult<String> {
    let path = join_path(build_dir, VOTES_FILE);
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(&path)
        .context(WritingCsvSnafu { path: &path })?;
    wtr.write_record(HEADER)
        .context(WritingCsvSnafu { path: &path })?;
    for record in records.iter() {
        wtr.write_record(vote_row(record))
            .context(WritingCsvSnafu { path: &path })?;
    }
    wtr.flush()
        .map_err(csv::Error::from)
        .context(WritingCsvSnafu { path: &path })?;
    info!("export_votes_csv: {} rows written to {}", records.len(), path);
    Ok(path)
}

/// Writes a line diff of `orig` against `edit`: `-` for removed lines, `+` for added ones.
fn write_diff<W: Write>(out: &mut W, orig: &str, edit: &str) -> BElectionResult<()> {
    let (_, changeset) = diff(orig, edit, "\n");
    for change in changeset.iter() {
        let (mark, chunk) = match change {
            Difference::Same(x) => (' ', x),
            Difference::Rem(x) => ('-', x),
            Difference::Add(x) => ('+', x),
        };
        if chunk.is_empty() {
            continue;
        }
        for line in chunk.split('\n') {
            writeln!(out, "{} {}", mark, line).context(TerminalSnafu {})?;
        }
    }
    Ok(())
}

/// Compares a vote log with a reference one. Writes the differences to `out` if any.
pub fn check_reference<W: Write>(
    votes_path: &str,
    reference_path: &str,
    out: &mut W,
) -> BElectionResult<()> {
    let produced = fs::read_to_string(votes_path).context(ReadingTextSnafu { path: votes_path })?;
    let reference = fs::read_to_string(reference_path).context(ReadingReferenceSnafu {
        path: reference_path,
    })?;
    if reference != produced {
        warn!(
            "Found differences between {} and the reference {}",
            votes_path, reference_path
        );
        write_diff(out, reference.as_str(), produced.as_str())?;
        return Err(Box::new(ElectionError::ReferenceMismatch {
            path: reference_path.to_string(),
        }));
    }
    info!("check_reference: {} matches {}", votes_path, reference_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use election_sim::VoteDirection;

    fn records() -> Vec<VoteRecord> {
        vec![
            VoteRecord {
                round: 1,
                issue: "Declare cereal a soup".to_string(),
                candidate: "Ada".to_string(),
                vote: VoteDirection::For,
                aligned: true,
                score_delta: 2.0,
            },
            VoteRecord {
                round: 1,
                issue: "Declare cereal a soup".to_string(),
                candidate: "Bob, Jr.".to_string(),
                vote: VoteDirection::Against,
                aligned: false,
                score_delta: -2.0 / 3.0,
            },
        ]
    }

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let build = dir.path().display().to_string();
        let path = export_votes_csv(&records(), &build).unwrap();
        assert!(path.ends_with(VOTES_FILE));

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let header: Vec<String> = rdr.headers().unwrap().iter().map(|s| s.to_string()).collect();
        assert_eq!(header, HEADER.to_vec());
        let rows: Vec<Vec<String>> = rdr
            .records()
            .map(|r| r.unwrap().iter().map(|s| s.to_string()).collect())
            .collect();
        assert_eq!(
            rows,
            vec![
                vec!["1", "Declare cereal a soup", "Ada", "For", "True", "2.00"],
                vec!["1", "Declare cereal a soup", "Bob, Jr.", "Against", "False", "-0.67"],
            ]
        );
    }

    #[test]
    fn reference_comparison() {
        let dir = tempfile::tempdir().unwrap();
        let build = dir.path().display().to_string();
        let path = export_votes_csv(&records(), &build).unwrap();

        let same = join_path(&build, "same.csv");
        fs::copy(&path, &same).unwrap();
        let mut out: Vec<u8> = Vec::new();
        assert!(check_reference(&path, &same, &mut out).is_ok());
        assert!(out.is_empty());

        let other = join_path(&build, "other.csv");
        fs::write(&other, "round,issue,candidate,vote,aligned,round_score\n").unwrap();
        let err = check_reference(&path, &other, &mut out).unwrap_err();
        assert!(matches!(*err, ElectionError::ReferenceMismatch { .. }));
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("+ 1,Declare cereal a soup,Ada,For,True,2.00\n"));
        assert!(!shown.contains('\x1b'));

        let missing = join_path(&build, "missing.csv");
        let err = check_reference(&path, &missing, &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(*err, ElectionError::ReadingReference { .. }));
    }
}
