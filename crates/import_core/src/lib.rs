//! Import panel core: pure session state machine and view-model helpers.
mod dropped;
mod effect;
mod msg;
mod scrape;
mod shortcut;
mod stack;
mod state;
mod update;
mod view_model;

pub use dropped::{select_dropped_file, DroppedFile, ACCEPTED_EXTENSIONS, ACCEPTED_MIME};
pub use effect::{Effect, NotifyKind};
pub use msg::Msg;
pub use scrape::{ScrapeRequest, ScrapeResult, INVALID_RESPONSE_MESSAGE};
pub use shortcut::{Focus, Key, KeyChord, Modifiers, ShortcutPlatform};
pub use stack::{Stack, UnknownStack};
pub use state::ImportSession;
pub use update::{
    update, EMPTY_CODE_MESSAGE, EMPTY_URL_MESSAGE, MISSING_STACK_MESSAGE, SCRAPE_SUCCESS_MESSAGE,
};
pub use view_model::ImportViewModel;
