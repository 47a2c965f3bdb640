use clap::Parser;
use std::path::{Path, PathBuf};

pub const USAGE: &str = "Usage:\n    group-stats-grapher <input_json_dir>";

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "group-stats-grapher")]
#[command(about = "Chart message, reply and emoji reaction stats per chat group", long_about = None)]
pub struct Cli {
    /// Directory holding one `<group name>.json` export per group
    #[arg(value_name = "INPUT_JSON_DIR")]
    pub input_dirs: Vec<PathBuf>,
}

impl Cli {
    /// The input directory, when exactly one was given.
    pub fn input_dir(&self) -> Option<&Path> {
        match self.input_dirs.as_slice() {
            [dir] => Some(dir.as_path()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_directory() {
        let cli = Cli::try_parse_from(["group-stats-grapher", "exports"]).unwrap();
        assert_eq!(cli.input_dir(), Some(Path::new("exports")));
    }

    #[test]
    fn test_missing_directory_has_no_input() {
        let cli = Cli::try_parse_from(["group-stats-grapher"]).unwrap();
        assert_eq!(cli.input_dir(), None);
    }

    #[test]
    fn test_extra_arguments_have_no_input() {
        let cli = Cli::try_parse_from(["group-stats-grapher", "a", "b"]).unwrap();
        assert_eq!(cli.input_dir(), None);
    }
}
