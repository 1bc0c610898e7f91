use crate::{select_dropped_file, Effect, Focus, ImportSession, Msg, ScrapeRequest, ScrapeResult};

pub const EMPTY_CODE_MESSAGE: &str = "Please paste in some code";
pub const MISSING_STACK_MESSAGE: &str = "Please select your stack";
pub const EMPTY_URL_MESSAGE: &str = "Please enter a URL to scrape";
pub const SCRAPE_SUCCESS_MESSAGE: &str = "Page content imported";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ImportSession, msg: Msg) -> (ImportSession, Vec<Effect>) {
    let effects = match msg {
        Msg::TextChanged(text) => {
            state.set_text(text);
            Vec::new()
        }
        Msg::StackSelected(stack) => {
            state.set_stack(Some(stack));
            Vec::new()
        }
        Msg::StackCleared => {
            state.set_stack(None);
            Vec::new()
        }
        Msg::UrlChanged(url) => {
            state.set_url_input(url);
            Vec::new()
        }
        Msg::DragEntered => {
            state.set_dragging(true);
            Vec::new()
        }
        Msg::DragLeft => {
            state.set_dragging(false);
            Vec::new()
        }
        Msg::FilesDropped(files) => {
            state.set_dragging(false);
            match select_dropped_file(&files) {
                Some(file) => vec![Effect::ReadFile(file.clone())],
                None => Vec::new(),
            }
        }
        Msg::FileRead { name, result } => match result {
            Ok(text) => {
                state.set_text(text);
                Vec::new()
            }
            Err(message) => vec![Effect::error(format!("Could not read {name}: {message}"))],
        },
        Msg::ScrapeClicked => {
            // Busy is advisory: a second click while in flight still dispatches.
            match ScrapeRequest::from_input(state.url_input()) {
                Some(request) => {
                    state.set_busy(true);
                    vec![Effect::Scrape(request)]
                }
                None => vec![Effect::error(EMPTY_URL_MESSAGE)],
            }
        }
        Msg::ScrapeSettled(result) => {
            state.set_busy(false);
            let result = match result {
                ScrapeResult::Success { content } => ScrapeResult::success(content),
                failure => failure,
            };
            match result {
                ScrapeResult::Success { content } => {
                    state.set_text(content);
                    vec![Effect::success(SCRAPE_SUCCESS_MESSAGE)]
                }
                ScrapeResult::Failure { message } => vec![Effect::error(message)],
            }
        }
        Msg::ScrapeAbandoned => {
            state.set_busy(false);
            Vec::new()
        }
        Msg::SubmitClicked => submit(&state),
        Msg::KeyPressed { chord, focus } => {
            if focus == Focus::TextInput && chord.is_submit(state.platform()) {
                submit(&state)
            } else {
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit(state: &ImportSession) -> Vec<Effect> {
    if state.text().is_empty() {
        return vec![Effect::error(EMPTY_CODE_MESSAGE)];
    }
    let Some(stack) = state.selected_stack() else {
        return vec![Effect::error(MISSING_STACK_MESSAGE)];
    };
    vec![Effect::ImportCode {
        code: state.text().to_string(),
        stack,
    }]
}
