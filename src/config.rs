//! Startup configuration.
//!
//! Command line and environment are parsed by clap into [`Cli`], then
//! resolved into a [`Config`].

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::data::filter::{DEFAULT_TOP_K, TOP_K_MAX, TOP_K_MIN};

/// Catalog file name looked up next to the executable by default.
pub const DEFAULT_DATA_FILE: &str = "merged_products_with_series.json";

#[derive(Parser, Debug)]
#[command(
    name = "lumen-finder",
    version,
    about = "Filter a lighting catalog by series keyword and attribute ranges"
)]
pub struct Cli {
    /// Product catalog (JSON, or CSV by extension). Defaults to
    /// merged_products_with_series.json next to the executable.
    #[arg(env = "LUMEN_FINDER_DATA")]
    pub data: Option<PathBuf>,

    /// Initial number of rows shown in a report.
    #[arg(
        long,
        env = "LUMEN_FINDER_TOP_K",
        default_value_t = DEFAULT_TOP_K as u64,
        value_parser = clap::value_parser!(u64).range((TOP_K_MIN as u64)..=(TOP_K_MAX as u64))
    )]
    pub top_k: u64,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Product catalog (JSON or CSV).
    pub data_file: PathBuf,

    /// Initial display cap of the form.
    pub top_k: usize,
}

impl Config {
    /// Parse the process arguments. Prints usage and exits on `--help` or bad input.
    pub fn parse() -> Self {
        Self::resolve(Cli::parse(), default_data_dir().as_deref())
    }

    fn resolve(cli: Cli, exe_dir: Option<&Path>) -> Self {
        let data_file = cli
            .data
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| match exe_dir {
                Some(dir) => dir.join(DEFAULT_DATA_FILE),
                None => PathBuf::from(DEFAULT_DATA_FILE),
            });

        // value_parser already limits the range; clamp keeps `usize` conversion total.
        let top_k = usize::try_from(cli.top_k)
            .unwrap_or(DEFAULT_TOP_K)
            .clamp(TOP_K_MIN, TOP_K_MAX);

        Self { data_file, top_k }
    }

    /// Build a summary string for the startup log
    pub fn summary(&self) -> String {
        format!("DATA={}  TOP_K={}", self.data_file.display(), self.top_k)
    }
}

fn default_data_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["lumen-finder"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_to_file_next_to_executable() {
        let bare = || Cli {
            data: None,
            top_k: DEFAULT_TOP_K as u64,
        };
        let cfg = Config::resolve(bare(), Some(Path::new("/opt/lumen")));
        assert_eq!(cfg.data_file, Path::new("/opt/lumen").join(DEFAULT_DATA_FILE));
        assert_eq!(cfg.top_k, DEFAULT_TOP_K);

        let cfg = Config::resolve(bare(), None);
        assert_eq!(cfg.data_file, PathBuf::from(DEFAULT_DATA_FILE));
    }

    #[test]
    fn positional_path_and_top_k_flag() {
        let cfg = Config::resolve(cli(&["cli.json", "--top-k", "7"]), None);
        assert_eq!(cfg.data_file, PathBuf::from("cli.json"));
        assert_eq!(cfg.top_k, 7);
    }

    #[test]
    fn help_prints_usage_instead_of_loading() {
        let err = Cli::try_parse_from(["lumen-finder", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn top_k_outside_range_is_rejected() {
        for bad in ["0", "51", "many"] {
            let err = Cli::try_parse_from(["lumen-finder", "--top-k", bad]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation, "--top-k {bad}");
        }
        let edge = Cli::try_parse_from(["lumen-finder", "--top-k", "50"]).unwrap();
        assert_eq!(edge.top_k, 50);
    }

    #[test]
    fn unknown_flag_is_an_error() {
        let err = Cli::try_parse_from(["lumen-finder", "--verbose"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn summary_mentions_path() {
        let cfg = Config::resolve(cli(&["cat.json"]), None);
        assert!(cfg.summary().contains("cat.json"));
    }
}
