// ASCII helpers for the transcript.
//
// Every escape sequence comes from a Style. Turning the colours off is done by
// rendering with Style::PLAIN.

use election_sim::{Candidate, VoteDirection};

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Style {
    pub reset: &'static str,
    pub bold: &'static str,
    pub dim: &'static str,
    pub under: &'static str,
    pub green: &'static str,
    pub red: &'static str,
    pub yellow: &'static str,
    pub cyan: &'static str,
    pub magenta: &'static str,
}

impl Style {
    pub const ANSI: Style = Style {
        reset: "\x1b[0m",
        bold: "\x1b[1m",
        dim: "\x1b[2m",
        under: "\x1b[4m",
        green: "\x1b[32m",
        red: "\x1b[31m",
        yellow: "\x1b[33m",
        cyan: "\x1b[36m",
        magenta: "\x1b[35m",
    };

    pub const PLAIN: Style = Style {
        reset: "",
        bold: "",
        dim: "",
        under: "",
        green: "",
        red: "",
        yellow: "",
        cyan: "",
        magenta: "",
    };

    pub fn new(colour: bool) -> Style {
        if colour {
            Style::ANSI
        } else {
            Style::PLAIN
        }
    }
}

const PANEL_WIDTH: usize = 38;

pub fn banner(style: &Style, text: &str) -> String {
    let line = "=".repeat(text.chars().count() + 4);
    format!(
        "{}{}\n| {} |\n{}{}",
        style.cyan, line, text, line, style.reset
    )
}

pub fn speech_bubble(style: &Style, text: &str) -> String {
    let mut lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() {
        lines.push("...");
    }
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let top = format!("  {}", "_".repeat(width + 2));
    let body: Vec<String> = lines
        .iter()
        .map(|l| format!("< {:<width$} >", l, width = width))
        .collect();
    let bottom = format!("  {}", "-".repeat(width + 2));
    let tail = "    \\\n     \\";
    format!(
        "{}{}\n{}\n{}\n{}{}",
        style.yellow,
        top,
        body.join("\n"),
        bottom,
        tail,
        style.reset
    )
}

pub fn face(style: &Style, vote: VoteDirection) -> String {
    match vote {
        VoteDirection::For => format!("{}( ＾▽＾){}", style.green, style.reset),
        VoteDirection::Against => format!("{}( ಠ_ಠ ){}", style.red, style.reset),
    }
}

/// The kind of the issue and its effective weight, under the round banner.
pub fn issue_line(style: &Style, kind: &str, effective_weight: f64) -> String {
    format!("{}[{} | weight {:.2}]{}", style.dim, kind, effective_weight, style.reset)
}

pub fn candidate_list(style: &Style, names: &[&str]) -> String {
    format!("Candidates: {}{}{}", style.magenta, names.join(", "), style.reset)
}

pub fn tally_line(style: &Style, count_for: usize, count_against: usize) -> String {
    format!(
        "{}For: {}{} | {}Against: {}{}",
        style.green, count_for, style.reset, style.red, count_against, style.reset
    )
}

pub fn trophy_panel(style: &Style, winner: &str, quote: &str) -> String {
    let star = format!("{}★{}", style.yellow, style.reset);
    let box_top = format!("╔{}╗", "═".repeat(PANEL_WIDTH));
    let box_mid = format!(
        "{:<width$}║",
        format!("║ President: {}", winner),
        width = PANEL_WIDTH + 1
    );
    let box_quote = format!(
        "{:<width$}║",
        format!("║ \"{}\"", quote),
        width = PANEL_WIDTH + 1
    );
    let box_bottom = format!("╚{}╝", "═".repeat(PANEL_WIDTH));
    format!(
        "{} {}RESULTS{}\n{}\n{}\n{}\n{}",
        star, style.bold, style.reset, box_top, box_mid, box_quote, box_bottom
    )
}

/// The final table, candidates already ranked.
pub fn scoreboard(style: &Style, ranked: &[Candidate]) -> String {
    let mut lines: Vec<String> = vec![
        banner(style, "Final Scoreboard"),
        format!("{}{:<6}{:<16}{:>8}{}", style.under, "Rank", "Name", "Score", style.reset),
    ];
    for (idx, c) in ranked.iter().enumerate() {
        lines.push(format!("{:<6}{:<16}{:>8.2}", idx + 1, c.name, c.score));
    }
    lines.join("\n")
}
