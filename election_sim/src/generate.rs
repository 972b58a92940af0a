//! Random generation of the candidates.

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::*;

impl Candidate {
    /// Creates a candidate with uniformly random traits in [TRAIT_MIN, TRAIT_MAX].
    pub fn random(name: &str, quote: &str, rng: &mut impl Rng) -> Candidate {
        let traits = TRAIT_CATEGORIES
            .iter()
            .map(|cat| (cat.to_string(), rng.gen_range(TRAIT_MIN..=TRAIT_MAX)))
            .collect();
        Candidate {
            name: name.to_string(),
            traits,
            quote: quote.to_string(),
            score: 0.0,
        }
    }

    pub fn trait_value(&self, category: &str) -> i32 {
        self.traits.get(category).cloned().unwrap_or(0)
    }
}

/// Picks the candidates of a session.
///
/// Arguments:
/// * `names` the pool of names. It is shuffled once and the first `limit` names are taken.
/// * `quotes` the pool of quotes, drawn with replacement.
/// * `limit` the maximum number of candidates. 0 takes all the names.
pub fn make_candidates(
    names: &[String],
    quotes: &[String],
    limit: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Candidate>, SimErrors> {
    let mut pool: Vec<String> = names.to_vec();
    pool.shuffle(rng);
    if limit > 0 {
        pool.truncate(limit);
    }

    let mut res: Vec<Candidate> = Vec::with_capacity(pool.len());
    for name in pool.iter() {
        let quote = quotes.choose(rng).ok_or(SimErrors::EmptyPool("quotes"))?;
        let c = Candidate::random(name, quote, rng);
        debug!("make_candidates: {} traits: {:?}", c.name, c.traits);
        res.push(c);
    }
    info!(
        "make_candidates: {} candidates out of {} names",
        res.len(),
        names.len()
    );
    Ok(res)
}
