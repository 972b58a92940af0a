/*!

This is the long-form manual for `election_sim` and the `terminal-election` program.

## Data files

The program reads four text files from the data directory (`--data`, `data` by default).
Every line is one record. Lines are trimmed and blank lines are ignored.

* `names.txt` the names of the candidates
* `quotes.txt` campaign quotes, assigned at random to the candidates
* `reasons.txt` justification lines, said by the candidates after a vote
* `issues.txt` the issues, one per line, in the format described below

All four files are required. If one of them is missing, the program stops before
running anything.

### `issues.txt`

```text
text | tags | type | weight
```

* `text` the issue, as displayed
* `tags` trait categories, separated with `;` or `,`. The known categories are
  `good_morals`, `bad_morals`, `left_politics`, `right_politics`, `gaming`,
  `activities`, `health`, `other` and `food`. Other tags are accepted and are ignored
  when computing the alignment.
* `type` one of `serious`, `funny` or `mixed`. Anything else (or nothing) means `mixed`.
* `weight` a number. Anything that is not a number (or nothing) means `1.0`.

Only the text is mandatory:

```text
Declare cereal a soup|food|funny|2
Four-day school week|activities;health|serious
Mandatory pineapple pizza
```

## How a round works

For each candidate:

1. the alignment is the sum of its traits over the tags of the issue, times `--pref`
2. the tilt is the alignment plus `--bias`. The candidate votes `For` if the tilt is
   positive or zero, `Against` otherwise
3. with probability `--chaos`, the vote is flipped
4. the vote is *aligned* if it has the same sign as the alignment (before the bias and the
   chaos). Aligned candidates gain the effective weight of the issue, the others lose it.
   The effective weight is the weight of the issue times `--serious-mult`, `--funny-mult`
   or `--mixed-mult` depending on its type.

Then `--justify` candidates explain themselves, with at least one from each side when
possible.

## Outputs

The build directory (`--build`, `build` by default) receives:

* `names.json`, `issues.json`, `reasons.json`, `quotes.json`: JSON copies of the input files.
  They are rewritten at every run.
* `votes.csv`: one row per candidate and per round, with the columns
  `round,issue,candidate,vote,aligned,round_score`.

Passing `--seed` makes a run reproducible. `--reference` compares the vote log with a
previous one and fails if they differ.

*/
