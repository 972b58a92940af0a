/*!
The round engine of a satirical terminal election.

A session debates a number of issues. For each issue, every candidate leans
for or against it based on its traits, casts a vote that may be skewed by a global
bias or flipped by chaos, and gains or loses points depending on whether the vote
follows its natural lean.

All the randomness goes through a generator passed as an argument, so that a
seeded generator replays a session exactly.

See the [manual] for the data formats.
*/
mod config;
mod generate;
mod issues;
pub mod manual;

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

pub use crate::config::*;
pub use crate::generate::make_candidates;
pub use crate::issues::{parse_issue_line, parse_issue_lines, DEFAULT_WEIGHT};

/// A candidate picked to justify its vote at the end of a round.
#[derive(PartialEq, Debug, Clone)]
pub struct Spokesperson {
    pub candidate: String,
    pub vote: VoteDirection,
    pub reason: String,
}

/// Everything that happened during one round.
#[derive(PartialEq, Debug, Clone)]
pub struct RoundOutcome {
    /// Round number, starting at 1.
    pub round: u32,
    pub issue: Issue,
    pub effective_weight: f64,
    pub count_for: usize,
    pub count_against: usize,
    /// One record per candidate, in the order the spokespeople were drawn from.
    pub votes: Vec<VoteRecord>,
    pub spokespeople: Vec<Spokesperson>,
}

/// The signed alignment of a candidate towards an issue.
///
/// Sum of the traits over the tags of the issue, scaled by `pref`. Tags that are
/// not a trait category count as zero.
pub fn issue_effect(issue: &Issue, candidate: &Candidate, pref: f64) -> f64 {
    if issue.tags.is_empty() {
        return 0.0;
    }
    let s: i32 = issue
        .tags
        .iter()
        .map(|tag| candidate.trait_value(tag))
        .sum();
    s as f64 * pref
}

/// Decides the vote of a candidate from its alignment.
///
/// The alignment plus the bias gives the tilt: `For` when non-negative. The vote is
/// then flipped with probability `chaos`.
///
/// Returns the vote and whether it matches the sign of the alignment before bias and chaos.
pub fn decide_vote(
    alignment: f64,
    bias: f64,
    chaos: f64,
    rng: &mut impl Rng,
) -> (VoteDirection, bool) {
    let tilt = alignment + bias;
    let mut vote_for = tilt >= 0.0;
    if rng.gen::<f64>() < chaos {
        vote_for = !vote_for;
    }
    let aligned = vote_for == (alignment >= 0.0);
    (VoteDirection::from_bool(vote_for), aligned)
}

pub fn type_multiplier(kind: IssueKind, rules: &SimRules) -> f64 {
    match kind {
        IssueKind::Serious => rules.serious_mult,
        IssueKind::Funny => rules.funny_mult,
        IssueKind::Mixed => rules.mixed_mult,
    }
}

/// Shuffles the issues and keeps the first `rounds` of them.
pub fn select_issues(issues: &[Issue], rounds: usize, rng: &mut impl Rng) -> Vec<Issue> {
    let mut res = issues.to_vec();
    res.shuffle(rng);
    res.truncate(rounds);
    res
}

/// Picks the positions of the votes whose candidates justify themselves.
///
/// At most `justify` votes are picked, and never the same one twice. When both sides
/// are represented and there is room for two, one `For` and one `Against` are
/// always included. The remaining slots are filled at random.
pub fn pick_justifiers(votes: &[VoteRecord], justify: usize, rng: &mut impl Rng) -> Vec<usize> {
    let cap = justify.min(votes.len());
    let mut chosen: Vec<usize> = Vec::with_capacity(cap);
    if cap == 0 {
        return chosen;
    }

    let side_for: Vec<usize> = (0..votes.len()).filter(|&i| votes[i].vote.is_for()).collect();
    let side_against: Vec<usize> = (0..votes.len())
        .filter(|&i| !votes[i].vote.is_for())
        .collect();

    if let Some(&idx) = side_for.choose(rng) {
        chosen.push(idx);
    }
    if chosen.len() < cap {
        if let Some(&idx) = side_against.choose(rng) {
            chosen.push(idx);
        }
    }

    let mut rest: Vec<usize> = (0..votes.len()).filter(|i| !chosen.contains(i)).collect();
    while chosen.len() < cap {
        let pos = rng.gen_range(0..rest.len());
        chosen.push(rest.swap_remove(pos));
    }
    debug!("pick_justifiers: chosen {:?}", chosen);
    chosen
}

/// Runs one round of the session and updates the scores of the candidates.
///
/// Arguments:
/// * `round_idx` the index of the round, starting at 0
/// * `issue` the issue being debated
/// * `candidates` the candidates, whose scores get updated
/// * `reasons` the pool of justification lines
/// * `rules` the rules of the session
pub fn run_round(
    round_idx: usize,
    issue: &Issue,
    candidates: &mut [Candidate],
    reasons: &[String],
    rules: &SimRules,
    rng: &mut impl Rng,
) -> Result<RoundOutcome, SimErrors> {
    let round = (round_idx + 1) as u32;
    let effective_weight = issue.weight * type_multiplier(issue.kind, rules);
    debug!(
        "run_round: round {} issue {:?} effective weight {}",
        round, issue.text, effective_weight
    );

    let mut votes: Vec<VoteRecord> = Vec::with_capacity(candidates.len());
    for c in candidates.iter_mut() {
        let alignment = issue_effect(issue, c, rules.pref);
        let (vote, aligned) = decide_vote(alignment, rules.bias, rules.chaos, rng);
        let score_delta = if aligned {
            effective_weight
        } else {
            -effective_weight
        };
        c.score += score_delta;
        debug!(
            "run_round: {} alignment {} vote {} aligned {} delta {}",
            c.name, alignment, vote, aligned, score_delta
        );
        votes.push(VoteRecord {
            round,
            issue: issue.text.clone(),
            candidate: c.name.clone(),
            vote,
            aligned,
            score_delta,
        });
    }

    let count_for = votes.iter().filter(|v| v.vote.is_for()).count();
    let count_against = votes.len() - count_for;
    info!(
        "Round {}: {} -> For: {} Against: {}",
        round, issue.text, count_for, count_against
    );

    votes.shuffle(rng);
    let mut spokespeople: Vec<Spokesperson> = Vec::new();
    for idx in pick_justifiers(&votes, rules.justify, rng) {
        let reason = reasons.choose(rng).ok_or(SimErrors::EmptyPool("reasons"))?;
        spokespeople.push(Spokesperson {
            candidate: votes[idx].candidate.clone(),
            vote: votes[idx].vote,
            reason: reason.clone(),
        });
    }

    Ok(RoundOutcome {
        round,
        issue: issue.clone(),
        effective_weight,
        count_for,
        count_against,
        votes,
        spokespeople,
    })
}

/// Sorts the candidates by decreasing score.
///
/// The sort is stable: candidates with the same score keep their original order.
pub fn rank_candidates(candidates: &[Candidate]) -> Vec<Candidate> {
    let mut ranked = candidates.to_vec();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{BTreeMap, HashSet};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn candidate(name: &str, traits: &[(&str, i32)]) -> Candidate {
        let mut m: BTreeMap<String, i32> = TRAIT_CATEGORIES
            .iter()
            .map(|c| (c.to_string(), 0))
            .collect();
        for (k, v) in traits {
            m.insert(k.to_string(), *v);
        }
        Candidate {
            name: name.to_string(),
            traits: m,
            quote: format!("{} for president", name),
            score: 0.0,
        }
    }

    fn issue(tags: &[&str], kind: IssueKind, weight: f64) -> Issue {
        Issue {
            text: "Replace the anthem with a kazoo solo".to_string(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            kind,
            weight,
        }
    }

    fn record(name: &str, vote: VoteDirection) -> VoteRecord {
        VoteRecord {
            round: 1,
            issue: "x".to_string(),
            candidate: name.to_string(),
            vote,
            aligned: true,
            score_delta: 1.0,
        }
    }

    fn rules() -> SimRules {
        SimRules {
            chaos: 0.0,
            ..SimRules::DEFAULT_RULES
        }
    }

    #[test]
    fn empty_tags_no_alignment() {
        let mut rng = StdRng::seed_from_u64(5);
        let i = issue(&[], IssueKind::Mixed, 1.0);
        for n in 0..50 {
            let c = Candidate::random(&format!("c{}", n), "q", &mut rng);
            assert_eq!(issue_effect(&i, &c, 3.0), 0.0);
        }
    }

    #[test]
    fn alignment_sums_tags() {
        let c = candidate("Ada", &[("food", 2), ("gaming", -1)]);
        let i = issue(&["food", "gaming", "astrology"], IssueKind::Funny, 1.0);
        assert_eq!(issue_effect(&i, &c, 1.0), 1.0);
        assert_eq!(issue_effect(&i, &c, 2.5), 2.5);
    }

    #[test]
    fn no_chaos_follows_tilt() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(decide_vote(1.0, 0.0, 0.0, &mut rng), (VoteDirection::For, true));
        assert_eq!(decide_vote(0.0, 0.0, 0.0, &mut rng), (VoteDirection::For, true));
        assert_eq!(
            decide_vote(-2.0, 0.0, 0.0, &mut rng),
            (VoteDirection::Against, true)
        );
    }

    #[test]
    fn bias_changes_vote_not_lean() {
        let mut rng = StdRng::seed_from_u64(0);
        // The bias pushes the vote to For, but the candidate naturally leans Against.
        assert_eq!(
            decide_vote(-1.0, 5.0, 0.0, &mut rng),
            (VoteDirection::For, false)
        );
        assert_eq!(
            decide_vote(1.0, -5.0, 0.0, &mut rng),
            (VoteDirection::Against, false)
        );
    }

    #[test]
    fn full_chaos_always_flips() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            assert_eq!(
                decide_vote(2.0, 0.0, 1.0, &mut rng),
                (VoteDirection::Against, false)
            );
            // The tilt is positive, the flip makes it Against, which matches the lean.
            assert_eq!(
                decide_vote(-1.0, 3.0, 1.0, &mut rng),
                (VoteDirection::Against, true)
            );
        }
    }

    #[test]
    fn multipliers_by_type() {
        let r = SimRules {
            serious_mult: 2.0,
            funny_mult: 0.5,
            mixed_mult: 3.0,
            ..SimRules::DEFAULT_RULES
        };
        assert_eq!(type_multiplier(IssueKind::Serious, &r), 2.0);
        assert_eq!(type_multiplier(IssueKind::Funny, &r), 0.5);
        assert_eq!(type_multiplier(IssueKind::Mixed, &r), 3.0);
    }

    #[test]
    fn justifiers_cover_both_sides() {
        init();
        let votes = vec![
            record("a", VoteDirection::For),
            record("b", VoteDirection::For),
            record("c", VoteDirection::For),
            record("d", VoteDirection::Against),
            record("e", VoteDirection::For),
        ];
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = pick_justifiers(&votes, 2, &mut rng);
            assert_eq!(picked.len(), 2);
            assert!(picked.iter().any(|&i| votes[i].vote == VoteDirection::For));
            assert!(picked.iter().any(|&i| votes[i].vote == VoteDirection::Against));
        }
    }

    #[test]
    fn justifiers_are_capped_and_unique() {
        let votes = vec![
            record("a", VoteDirection::Against),
            record("b", VoteDirection::Against),
            record("c", VoteDirection::For),
        ];
        let mut rng = StdRng::seed_from_u64(9);
        assert!(pick_justifiers(&votes, 0, &mut rng).is_empty());
        assert_eq!(pick_justifiers(&votes, 1, &mut rng).len(), 1);
        let all = pick_justifiers(&votes, 10, &mut rng);
        let unique: HashSet<usize> = all.iter().cloned().collect();
        assert_eq!(all.len(), 3);
        assert_eq!(unique.len(), 3);
        assert!(pick_justifiers(&[], 2, &mut rng).is_empty());
    }

    #[test]
    fn justifiers_single_side() {
        let votes = vec![
            record("a", VoteDirection::Against),
            record("b", VoteDirection::Against),
            record("c", VoteDirection::Against),
        ];
        let mut rng = StdRng::seed_from_u64(2);
        let picked = pick_justifiers(&votes, 2, &mut rng);
        assert_eq!(picked.len(), 2);
        assert_ne!(picked[0], picked[1]);
    }

    #[test]
    fn round_scores_and_records() {
        init();
        let mut cands = vec![
            candidate("Ada", &[("food", 2)]),
            candidate("Bob", &[("food", -2)]),
            candidate("Cy", &[]),
        ];
        let i = issue(&["food"], IssueKind::Serious, 2.0);
        let r = SimRules {
            serious_mult: 1.5,
            bias: 0.0,
            ..rules()
        };
        let reasons = vec!["Because soup.".to_string()];
        let mut rng = StdRng::seed_from_u64(4);
        let out = run_round(2, &i, &mut cands, &reasons, &r, &mut rng).unwrap();

        assert_eq!(out.round, 3);
        assert_eq!(out.effective_weight, 3.0);
        assert_eq!(out.votes.len(), 3);
        assert_eq!(out.count_for, 2);
        assert_eq!(out.count_against, 1);
        // Without chaos or bias, every vote follows its lean.
        assert!(out.votes.iter().all(|v| v.aligned && v.score_delta == 3.0));
        assert!(out.votes.iter().all(|v| v.round == 3));
        assert!(cands.iter().all(|c| c.score == 3.0));

        let names: HashSet<&str> = out.votes.iter().map(|v| v.candidate.as_str()).collect();
        assert_eq!(names.len(), 3);

        assert_eq!(out.spokespeople.len(), 2);
        assert!(out.spokespeople.iter().all(|s| s.reason == "Because soup."));
        assert!(out.spokespeople.iter().any(|s| s.vote == VoteDirection::Against));
    }

    #[test]
    fn misaligned_votes_lose_points() {
        let mut cands = vec![candidate("Ada", &[("health", 1)])];
        let i = issue(&["health"], IssueKind::Funny, 1.0);
        let r = SimRules {
            chaos: 1.0,
            funny_mult: 2.0,
            ..SimRules::DEFAULT_RULES
        };
        let reasons = vec!["r".to_string()];
        let mut rng = StdRng::seed_from_u64(4);
        let out = run_round(0, &i, &mut cands, &reasons, &r, &mut rng).unwrap();
        assert_eq!(out.votes[0].vote, VoteDirection::Against);
        assert!(!out.votes[0].aligned);
        assert_eq!(out.votes[0].score_delta, -2.0);
        let out = run_round(1, &i, &mut cands, &reasons, &r, &mut rng).unwrap();
        assert_eq!(out.votes[0].score_delta, -2.0);
        assert_eq!(cands[0].score, -4.0);
    }

    #[test]
    fn empty_reasons() {
        let mut cands = vec![candidate("Ada", &[])];
        let i = issue(&[], IssueKind::Mixed, 1.0);
        let mut rng = StdRng::seed_from_u64(4);
        let res = run_round(0, &i, &mut cands, &[], &rules(), &mut rng);
        assert_eq!(res, Err(SimErrors::EmptyPool("reasons")));

        // Nobody justifies, no reason needed.
        let r = SimRules {
            justify: 0,
            ..rules()
        };
        assert!(run_round(0, &i, &mut cands, &[], &r, &mut rng).is_ok());
    }

    #[test]
    fn select_truncates() {
        let issues: Vec<Issue> = (0..10)
            .map(|n| parse_issue_line(&format!("Issue {}|food|funny|{}", n, n)))
            .collect();
        let mut rng = StdRng::seed_from_u64(8);
        let picked = select_issues(&issues, 4, &mut rng);
        assert_eq!(picked.len(), 4);
        assert!(picked.iter().all(|i| issues.contains(i)));
        assert_eq!(select_issues(&issues, 50, &mut rng).len(), 10);
    }

    #[test]
    fn ranking_is_stable() {
        let mut a = candidate("A", &[]);
        let mut b = candidate("B", &[]);
        let mut c = candidate("C", &[]);
        let mut d = candidate("D", &[]);
        a.score = 1.0;
        b.score = 3.0;
        c.score = 1.0;
        d.score = -2.0;
        let ranked = rank_candidates(&[a, b, c, d]);
        let names: Vec<&str> = ranked.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C", "D"]);
    }

    fn run_session(seed: u64) -> (Vec<Candidate>, Vec<VoteRecord>) {
        let names: Vec<String> = (0..8).map(|i| format!("Name {}", i)).collect();
        let quotes: Vec<String> = (0..3).map(|i| format!("Quote {}", i)).collect();
        let reasons: Vec<String> = (0..4).map(|i| format!("Reason {}", i)).collect();
        let issues: Vec<Issue> = TRAIT_CATEGORIES
            .iter()
            .enumerate()
            .map(|(n, t)| parse_issue_line(&format!("Issue {}|{};food|serious|{}", n, t, n)))
            .collect();
        let r = SimRules {
            chaos: 0.3,
            bias: 0.5,
            ..SimRules::DEFAULT_RULES
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let mut cands = make_candidates(&names, &quotes, r.candidate_limit, &mut rng).unwrap();
        let mut rows: Vec<VoteRecord> = Vec::new();
        for (idx, i) in select_issues(&issues, r.rounds, &mut rng).iter().enumerate() {
            let out = run_round(idx, i, &mut cands, &reasons, &r, &mut rng).unwrap();
            rows.extend(out.votes);
        }
        (rank_candidates(&cands), rows)
    }

    #[test]
    fn seeded_session_is_reproducible() {
        let (ranked1, rows1) = run_session(1234);
        let (ranked2, rows2) = run_session(1234);
        assert_eq!(ranked1, ranked2);
        assert_eq!(rows1, rows2);
        // One record per candidate and per round.
        assert_eq!(rows1.len(), 5 * 6);
        let pairs: HashSet<(u32, String)> =
            rows1.iter().map(|r| (r.round, r.candidate.clone())).collect();
        assert_eq!(pairs.len(), rows1.len());
    }

    #[test]
    fn scores_are_sum_of_deltas() {
        let (ranked, rows) = run_session(99);
        for c in ranked.iter() {
            let total: f64 = rows
                .iter()
                .filter(|r| r.candidate == c.name)
                .map(|r| r.score_delta)
                .sum();
            assert!((total - c.score).abs() < 1e-9);
        }
    }
}
