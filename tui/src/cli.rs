//! Command-line arguments.

use clap::Parser;
use flashdeck_core::{ExportFormat, Mode};
use flashdeck_loader::{DEFAULT_DATASET_NAME, DatasetSource};
use std::path::PathBuf;

use crate::preferences::Preferences;

#[derive(Parser, Debug)]
#[command(name = "flashdeck")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Dataset file (JSON array of question records) to open.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
    /// Fetch the dataset from this URL instead of a file.
    #[arg(short, long, conflicts_with = "file")]
    pub url: Option<String>,
    /// Mode to start in once the dataset is loaded.
    #[arg(short, long, default_value = "basic")]
    pub mode: Mode,
    /// Log filter, overridden by `RUST_LOG`.
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,
    /// Log file (default: `~/.flashdeck/flashdeck.log`).
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
    /// Print dataset statistics and exit.
    #[arg(long, conflicts_with = "export")]
    pub stats: bool,
    /// Export the dataset (questions, answers, combined or csv) and exit.
    #[arg(long, value_name = "FORMAT")]
    pub export: Option<ExportFormat>,
    /// Export destination; `-` writes to stdout.
    #[arg(short, long, value_name = "PATH", requires = "export")]
    pub output: Option<PathBuf>,
}

/// Where an export is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    Stdout,
    File(PathBuf),
}

/// How the application obtains its first dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Startup {
    /// Load from a known source right away.
    Load(DatasetSource),
    /// Ask the user for a file, prefilled with the given path.
    Prompt(PathBuf),
}

impl Args {
    /// Resolve the startup source: explicit file, explicit URL, the
    /// preferred URL, then the open-file prompt.
    pub fn startup(&self, prefs: &Preferences) -> Startup {
        if let Some(file) = &self.file {
            return Startup::Load(DatasetSource::File(file.clone()));
        }
        if let Some(url) = self.url.as_ref().or(prefs.dataset_url.as_ref()) {
            return Startup::Load(DatasetSource::Remote(url.clone()));
        }
        let suggestion = prefs
            .last_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_NAME));
        Startup::Prompt(suggestion)
    }

    /// Export destination, defaulting to the format's usual file name.
    pub fn export_target(&self) -> Option<(ExportFormat, ExportTarget)> {
        let format = self.export?;
        let target = match &self.output {
            Some(path) if path.as_os_str() == "-" => ExportTarget::Stdout,
            Some(path) => ExportTarget::File(path.clone()),
            None => ExportTarget::File(PathBuf::from(format.default_file_name())),
        };
        Some((format, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("flashdeck").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_file_wins() {
        let prefs = Preferences {
            dataset_url: Some("http://example.com/d.json".to_string()),
            ..Default::default()
        };
        let args = parse(&["deck.json"]);
        assert_eq!(
            args.startup(&prefs),
            Startup::Load(DatasetSource::File(PathBuf::from("deck.json")))
        );
    }

    #[test]
    fn test_url_then_preference_then_prompt() {
        let mut prefs = Preferences::default();
        let args = parse(&["--url", "http://a/b.json"]);
        assert_eq!(
            args.startup(&prefs),
            Startup::Load(DatasetSource::Remote("http://a/b.json".to_string()))
        );

        let args = parse(&[]);
        assert_eq!(
            args.startup(&prefs),
            Startup::Prompt(PathBuf::from(DEFAULT_DATASET_NAME))
        );

        prefs.dataset_url = Some("http://c/d.json".to_string());
        assert_eq!(
            args.startup(&prefs),
            Startup::Load(DatasetSource::Remote("http://c/d.json".to_string()))
        );
    }

    #[test]
    fn test_mode_is_validated() {
        assert_eq!(parse(&["--mode", "exam"]).mode, Mode::Exam);
        assert_eq!(parse(&[]).mode, Mode::Basic);
        assert!(Args::try_parse_from(["flashdeck", "--mode", "shuffle"]).is_err());
    }

    #[test]
    fn test_export_target() {
        assert_eq!(parse(&["deck.json"]).export_target(), None);
        assert_eq!(
            parse(&["deck.json", "--export", "csv"]).export_target(),
            Some((
                ExportFormat::Csv,
                ExportTarget::File(PathBuf::from("cka_qa_data.csv"))
            ))
        );
        assert_eq!(
            parse(&["--export", "answers", "-o", "-"]).export_target(),
            Some((ExportFormat::Answers, ExportTarget::Stdout))
        );
        assert_eq!(
            parse(&["--export", "combined", "--output", "out.txt"]).export_target(),
            Some((
                ExportFormat::Combined,
                ExportTarget::File(PathBuf::from("out.txt"))
            ))
        );
    }

    #[test]
    fn test_export_flags_are_validated() {
        assert!(Args::try_parse_from(["flashdeck", "--export", "pdf"]).is_err());
        assert!(Args::try_parse_from(["flashdeck", "--output", "x.txt"]).is_err());
        assert!(Args::try_parse_from(["flashdeck", "--stats", "--export", "csv"]).is_err());
    }

    #[test]
    fn test_file_and_url_conflict() {
        assert!(Args::try_parse_from(["flashdeck", "a.json", "--url", "http://x"]).is_err());
    }
}
