use clap::Parser;

use election_sim::SimRules;

/// Chaotic satirical election simulator.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (directory) The folder containing names.txt, issues.txt, reasons.txt and quotes.txt.
    #[clap(long, value_parser, default_value = "data")]
    pub data: String,

    /// (directory) The folder receiving the JSON copies of the inputs and the votes.csv log.
    /// It is created if needed.
    #[clap(long, value_parser, default_value = "build")]
    pub build: String,

    /// (integer, optional) Random seed. Two runs with the same seed and the same inputs are
    /// identical.
    #[clap(long, value_parser)]
    pub seed: Option<u64>,

    /// How many issues are debated.
    #[clap(long, value_parser, default_value_t = SimRules::DEFAULT_RULES.rounds)]
    pub rounds: usize,

    /// Preference strength multiplier.
    #[clap(long, value_parser, default_value_t = SimRules::DEFAULT_RULES.pref)]
    pub pref: f64,

    /// Probability of flipping a vote at random, between 0 and 1.
    #[clap(long, value_parser, default_value_t = SimRules::DEFAULT_RULES.chaos)]
    pub chaos: f64,

    /// Baseline skew. Positive values favour For, negative values favour Against.
    #[clap(
        long,
        value_parser,
        default_value_t = SimRules::DEFAULT_RULES.bias,
        allow_hyphen_values = true
    )]
    pub bias: f64,

    /// Weight multiplier for serious issues.
    #[clap(long, value_parser, default_value_t = SimRules::DEFAULT_RULES.serious_mult)]
    pub serious_mult: f64,

    /// Weight multiplier for funny issues.
    #[clap(long, value_parser, default_value_t = SimRules::DEFAULT_RULES.funny_mult)]
    pub funny_mult: f64,

    /// Weight multiplier for mixed issues.
    #[clap(long, value_parser, default_value_t = SimRules::DEFAULT_RULES.mixed_mult)]
    pub mixed_mult: f64,

    /// How many candidates justify themselves after each round.
    #[clap(long, value_parser, default_value_t = SimRules::DEFAULT_RULES.justify)]
    pub justify: usize,

    /// Maximum number of candidates (0 means all the names).
    #[clap(long, value_parser, default_value_t = SimRules::DEFAULT_RULES.candidate_limit)]
    pub cands: usize,

    /// Disables the coloured output.
    #[clap(long = "no-colour", takes_value = false)]
    pub no_colour: bool,

    /// (file path, optional) A vote log from a previous run. If provided, the new votes.csv
    /// must match it exactly.
    #[clap(long, value_parser)]
    pub reference: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard error.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}

impl Args {
    pub fn rules(&self) -> SimRules {
        SimRules {
            pref: self.pref,
            chaos: self.chaos,
            bias: self.bias,
            serious_mult: self.serious_mult,
            funny_mult: self.funny_mult,
            mixed_mult: self.mixed_mult,
            justify: self.justify,
            rounds: self.rounds,
            candidate_limit: self.cands,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["terminal-election"]);
        assert_eq!(args.data, "data");
        assert_eq!(args.build, "build");
        assert_eq!(args.seed, None);
        assert!(!args.no_colour);
        assert_eq!(args.rules(), SimRules::DEFAULT_RULES);
    }

    #[test]
    fn overrides() {
        let args = Args::parse_from([
            "terminal-election",
            "--seed",
            "7",
            "--rounds",
            "3",
            "--chaos",
            "1",
            "--bias",
            "-0.5",
            "--funny-mult",
            "2",
            "--cands",
            "0",
            "--no-colour",
        ]);
        assert_eq!(args.seed, Some(7));
        assert!(args.no_colour);
        let rules = args.rules();
        assert_eq!(rules.rounds, 3);
        assert_eq!(rules.chaos, 1.0);
        assert_eq!(rules.bias, -0.5);
        assert_eq!(rules.funny_mult, 2.0);
        assert_eq!(rules.candidate_limit, 0);
    }
}
