//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Find what percentage of the kanji in a text file you can read at each WaniKani level.
#[derive(Debug, Parser)]
#[command(name = "kanji-coverage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a UTF-8 text file
    #[arg(value_name = "TEXT_FILE")]
    pub path: PathBuf,

    /// WaniKani API v2 token
    #[arg(value_name = "API_KEY")]
    pub api_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_positionals() {
        let cli = Cli::try_parse_from(["kanji-coverage", "book.txt", "abc-123"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("book.txt"));
        assert_eq!(cli.api_key, "abc-123");
    }

    #[test]
    fn missing_key_is_rejected() {
        assert!(Cli::try_parse_from(["kanji-coverage", "book.txt"]).is_err());
    }

    #[test]
    fn extra_argument_is_rejected() {
        assert!(Cli::try_parse_from(["kanji-coverage", "a.txt", "key", "extra"]).is_err());
    }

    #[test]
    fn flags_are_rejected() {
        assert!(Cli::try_parse_from(["kanji-coverage", "--level", "3", "a.txt", "key"]).is_err());
    }

    #[test]
    fn about_comes_from_package_description() {
        use clap::CommandFactory;
        let about = Cli::command().get_about().map(|a| a.to_string());
        assert_eq!(about.as_deref(), Some(env!("CARGO_PKG_DESCRIPTION")));
        assert!(env!("CARGO_PKG_DESCRIPTION").contains("WaniKani learner"));
    }

    #[test]
    fn definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
