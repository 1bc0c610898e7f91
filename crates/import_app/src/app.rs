use std::io::{Read, Write};
use std::sync::{Arc, Mutex};

use anyhow::Context;
use import_core::{DroppedFile, NotifyKind, Stack};
use import_engine::{ImportPanel, LogNotifier, Notifier, ReqwestScrapeClient};

use crate::options::Args;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Imported,
    Rejected,
}

/// Mirrors every notification on stderr so it is visible without logging.
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, kind: NotifyKind, message: &str) {
        LogNotifier.notify(kind, message);
        match kind {
            NotifyKind::Success => eprintln!("ok: {message}"),
            NotifyKind::Error => eprintln!("error: {message}"),
        }
    }
}

/// Feeds one ingestion path into a fresh panel, then submits.
pub(crate) async fn run(
    args: &Args,
    stdin: impl Read,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    let client = ReqwestScrapeClient::new(args.scrape_settings())
        .context("building scrape client")?;

    let imported: Arc<Mutex<Option<(String, Stack)>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&imported);
    let mut panel = ImportPanel::new(Arc::new(client), Arc::new(StderrNotifier), move |code, stack| {
        if let Ok(mut slot) = sink.lock() {
            *slot = Some((code.to_string(), stack));
        }
    });

    if let Some(stack) = args.stack {
        panel.set_stack(stack);
    }

    if let Some(url) = &args.url {
        panel.set_url(url.as_str());
        panel.do_scrape().await;
    } else if !args.files.is_empty() {
        let files = args.files.iter().map(DroppedFile::from_path).collect();
        panel.on_drop(files).await;
    } else {
        let text = std::io::read_to_string(stdin).context("reading stdin")?;
        panel.set_text(text);
    }

    panel.submit();

    let taken = imported
        .lock()
        .map_err(|_| anyhow::anyhow!("import callback poisoned"))?
        .take();
    match taken {
        Some((code, stack)) => {
            writeln!(out, "stack: {stack}")?;
            out.write_all(code.as_bytes())?;
            out.flush()?;
            Ok(Outcome::Imported)
        }
        None => Ok(Outcome::Rejected),
    }
}
