use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use import_core::Stack;
use import_engine::{ScrapeSettings, DEFAULT_BACKEND_URL};

use crate::logging::LogDestination;

/// Import markup from a file, a URL or stdin and hand it to the code importer.
#[derive(Parser, Debug, Clone)]
#[command(name = "import-panel", version)]
pub(crate) struct Args {
    /// Target stack id (html_css, html_tailwind, react_tailwind, bootstrap,
    /// ionic_tailwind, vue_tailwind, svg)
    #[arg(long, short)]
    pub(crate) stack: Option<Stack>,

    /// File to drop into the panel; only the first .html/.htm file is read
    #[arg(long = "file", short = 'f', conflicts_with = "url")]
    pub(crate) files: Vec<PathBuf>,

    /// Page to scrape through the backend
    #[arg(long, short)]
    pub(crate) url: Option<String>,

    /// Base URL of the scrape backend
    #[arg(long, env = "IMPORT_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    pub(crate) backend: String,

    /// Give up on the scrape request after this many seconds
    #[arg(long)]
    pub(crate) timeout_secs: Option<u64>,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogDestination::Terminal)]
    pub(crate) log: LogDestination,
}

impl Args {
    pub(crate) fn scrape_settings(&self) -> ScrapeSettings {
        ScrapeSettings {
            request_timeout: self.timeout_secs.map(Duration::from_secs),
            ..ScrapeSettings::with_backend(self.backend.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stack_and_files() {
        let args = Args::try_parse_from([
            "import-panel",
            "--stack",
            "vue_tailwind",
            "-f",
            "a.png",
            "-f",
            "b.html",
        ])
        .unwrap();
        assert_eq!(args.stack, Some(Stack::VueTailwind));
        assert_eq!(args.files, vec![PathBuf::from("a.png"), PathBuf::from("b.html")]);
        assert_eq!(args.log, LogDestination::Terminal);
    }

    #[test]
    fn rejects_unknown_stack() {
        assert!(Args::try_parse_from(["import-panel", "--stack", "flutter"]).is_err());
    }

    #[test]
    fn file_and_url_are_exclusive() {
        assert!(
            Args::try_parse_from(["import-panel", "-f", "a.html", "--url", "example.com"]).is_err()
        );
    }

    #[test]
    fn timeout_flows_into_settings() {
        let args = Args::try_parse_from([
            "import-panel",
            "--backend",
            "http://backend:9000/",
            "--timeout-secs",
            "3",
        ])
        .unwrap();
        let settings = args.scrape_settings();
        assert_eq!(settings.endpoint(), "http://backend:9000/api/scrape-url");
        assert_eq!(settings.request_timeout, Some(Duration::from_secs(3)));
    }
}
