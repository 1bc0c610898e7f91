use std::any::Any;
use std::collections::VecDeque;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use import_core::{
    update, DroppedFile, Effect, Focus, ImportSession, ImportViewModel, KeyChord, Msg, NotifyKind,
    ScrapeRequest, ScrapeResult, Stack,
};
use panel_logging::{panel_debug, panel_info, panel_warn};

use crate::{read_dropped_file, ScrapeClient};

pub const SCRAPE_FALLBACK_MESSAGE: &str = "Failed to scrape URL";

/// Receives every user-visible validation and outcome message.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NotifyKind, message: &str);
}

/// Notifier that only writes to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, kind: NotifyKind, message: &str) {
        match kind {
            NotifyKind::Success => panel_info!("{}", message),
            NotifyKind::Error => panel_warn!("{}", message),
        }
    }
}

type ImportCallback = Box<dyn FnMut(&str, Stack) + Send>;

/// Owns one import session and runs the effects produced by `update`.
pub struct ImportPanel {
    session: ImportSession,
    client: Arc<dyn ScrapeClient>,
    notifier: Arc<dyn Notifier>,
    on_import: ImportCallback,
}

impl ImportPanel {
    pub fn new(
        client: Arc<dyn ScrapeClient>,
        notifier: Arc<dyn Notifier>,
        on_import: impl FnMut(&str, Stack) + Send + 'static,
    ) -> Self {
        Self {
            session: ImportSession::new(),
            client,
            notifier,
            on_import: Box::new(on_import),
        }
    }

    pub fn with_session(mut self, session: ImportSession) -> Self {
        self.session = session;
        self
    }

    pub fn session(&self) -> &ImportSession {
        &self.session
    }

    pub fn view(&self) -> ImportViewModel {
        self.session.view()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.dispatch(Msg::TextChanged(text.into()));
    }

    pub fn set_stack(&mut self, stack: Stack) {
        self.dispatch(Msg::StackSelected(stack));
    }

    pub fn clear_stack(&mut self) {
        self.dispatch(Msg::StackCleared);
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.dispatch(Msg::UrlChanged(url.into()));
    }

    pub fn drag_entered(&mut self) {
        self.dispatch(Msg::DragEntered);
    }

    pub fn drag_left(&mut self) {
        self.dispatch(Msg::DragLeft);
    }

    pub fn submit(&mut self) {
        self.dispatch(Msg::SubmitClicked);
    }

    pub fn key_pressed(&mut self, chord: KeyChord, focus: Focus) {
        self.dispatch(Msg::KeyPressed { chord, focus });
    }

    pub async fn on_drop(&mut self, files: Vec<DroppedFile>) {
        let pending = self.dispatch(Msg::FilesDropped(files));
        self.run_pending(pending).await;
    }

    pub async fn do_scrape(&mut self) {
        let pending = self.dispatch(Msg::ScrapeClicked);
        self.run_pending(pending).await;
    }

    /// Applies `msg`, runs synchronous effects, returns the async ones.
    fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.session);
        let (state, effects) = update(state, msg);
        self.session = state;

        let mut pending = Vec::new();
        for effect in effects {
            match effect {
                Effect::Notify { kind, message } => self.notifier.notify(kind, &message),
                Effect::ImportCode { code, stack } => {
                    panel_info!("importing {} bytes as {}", code.len(), stack);
                    (self.on_import)(&code, stack);
                }
                other => pending.push(other),
            }
        }
        pending
    }

    async fn run_pending(&mut self, pending: Vec<Effect>) {
        let mut queue = VecDeque::from(pending);
        while let Some(effect) = queue.pop_front() {
            let follow_up = match effect {
                Effect::ReadFile(file) => self.read_file(file).await,
                Effect::Scrape(request) => self.run_scrape(request).await,
                Effect::Notify { .. } | Effect::ImportCode { .. } => Vec::new(),
            };
            queue.extend(follow_up);
        }
    }

    async fn read_file(&mut self, file: DroppedFile) -> Vec<Effect> {
        let result = read_dropped_file(&file.path)
            .await
            .map_err(|err| err.to_string());
        self.dispatch(Msg::FileRead {
            name: file.name,
            result,
        })
    }

    async fn run_scrape(&mut self, request: ScrapeRequest) -> Vec<Effect> {
        let client = Arc::clone(&self.client);
        let in_flight = InFlightScrape::new(self);

        let outcome = AssertUnwindSafe(client.scrape(&request))
            .catch_unwind()
            .await;
        let result = match outcome {
            Ok(Ok(content)) => ScrapeResult::success(content),
            Ok(Err(err)) => ScrapeResult::from(err),
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                panel_warn!("scrape of {} panicked: {}", request.url(), message);
                ScrapeResult::failure(message)
            }
        };
        panel_debug!("scrape of {} settled success={}", request.url(), result.is_success());
        in_flight.settle(result)
    }
}

/// Clears busy if the scrape future is dropped before it settles.
struct InFlightScrape<'a> {
    panel: &'a mut ImportPanel,
    settled: bool,
}

impl<'a> InFlightScrape<'a> {
    fn new(panel: &'a mut ImportPanel) -> Self {
        Self {
            panel,
            settled: false,
        }
    }

    fn settle(mut self, result: ScrapeResult) -> Vec<Effect> {
        self.settled = true;
        self.panel.dispatch(Msg::ScrapeSettled(result))
    }
}

impl Drop for InFlightScrape<'_> {
    fn drop(&mut self) {
        if !self.settled {
            panel_warn!("scrape dropped before settling");
            self.panel.dispatch(Msg::ScrapeAbandoned);
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        SCRAPE_FALLBACK_MESSAGE.to_string()
    }
}
