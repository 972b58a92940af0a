use std::path::PathBuf;

/// The four input collections. Each one is read from `<stem>.txt` in the data folder
/// and mirrored to `<stem>.json` in the build folder.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Source {
    Names,
    Issues,
    Reasons,
    Quotes,
}

impl Source {
    pub const ALL: [Source; 4] = [Source::Names, Source::Issues, Source::Reasons, Source::Quotes];

    pub fn stem(&self) -> &'static str {
        match self {
            Source::Names => "names",
            Source::Issues => "issues",
            Source::Reasons => "reasons",
            Source::Quotes => "quotes",
        }
    }

    pub fn text_path(&self, data_dir: &str) -> String {
        join_path(data_dir, &format!("{}.txt", self.stem()))
    }

    pub fn json_path(&self, build_dir: &str) -> String {
        join_path(build_dir, &format!("{}.json", self.stem()))
    }
}

pub fn join_path(dir: &str, file_name: &str) -> String {
    let p: PathBuf = [dir, file_name].iter().collect();
    p.as_path().display().to_string()
}

/// Trimmed lines of a text, without the blank ones.
pub fn non_blank_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect()
}
