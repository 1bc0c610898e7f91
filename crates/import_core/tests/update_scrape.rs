use std::sync::Once;

use import_core::{
    update, Effect, ImportSession, Msg, NotifyKind, ScrapeRequest, ScrapeResult,
    EMPTY_URL_MESSAGE, INVALID_RESPONSE_MESSAGE, SCRAPE_SUCCESS_MESSAGE,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(panel_logging::initialize_for_tests);
}

fn with_text_and_url(text: &str, url: &str) -> ImportSession {
    let (state, _) = update(ImportSession::new(), Msg::TextChanged(text.to_string()));
    update(state, Msg::UrlChanged(url.to_string())).0
}

#[test]
fn blank_url_is_rejected_without_going_busy() {
    init_logging();
    let (state, effects) = update(with_text_and_url("", "   \t"), Msg::ScrapeClicked);

    assert!(!state.is_busy());
    assert_eq!(
        effects,
        vec![Effect::Notify {
            kind: NotifyKind::Error,
            message: EMPTY_URL_MESSAGE.to_string(),
        }]
    );
}

#[test]
fn scrape_click_trims_url_and_goes_busy() {
    init_logging();
    let (state, effects) = update(
        with_text_and_url("", "  https://example.com/page \n"),
        Msg::ScrapeClicked,
    );

    assert!(state.is_busy());
    assert!(!state.view().scrape_enabled);
    let request = ScrapeRequest::from_input("https://example.com/page").unwrap();
    assert_eq!(request.url(), "https://example.com/page");
    assert_eq!(effects, vec![Effect::Scrape(request)]);
}

#[test]
fn successful_scrape_replaces_buffer_and_notifies() {
    init_logging();
    let (state, _) = update(with_text_and_url("old", "example.com"), Msg::ScrapeClicked);
    let (state, effects) = update(
        state,
        Msg::ScrapeSettled(ScrapeResult::success("<html><body>new</body></html>")),
    );

    assert!(!state.is_busy());
    assert_eq!(state.text(), "<html><body>new</body></html>");
    assert_eq!(
        effects,
        vec![Effect::Notify {
            kind: NotifyKind::Success,
            message: SCRAPE_SUCCESS_MESSAGE.to_string(),
        }]
    );
}

#[test]
fn failed_scrape_keeps_buffer_and_reports_message() {
    init_logging();
    let (state, _) = update(with_text_and_url("old", "example.com"), Msg::ScrapeClicked);
    let (state, effects) = update(
        state,
        Msg::ScrapeSettled(ScrapeResult::failure("bad url")),
    );

    assert!(!state.is_busy());
    assert_eq!(state.text(), "old");
    assert_eq!(
        effects,
        vec![Effect::Notify {
            kind: NotifyKind::Error,
            message: "bad url".to_string(),
        }]
    );
}

#[test]
fn empty_success_content_is_an_invalid_response() {
    assert_eq!(
        ScrapeResult::success(""),
        ScrapeResult::failure(INVALID_RESPONSE_MESSAGE)
    );
}

#[test]
fn settled_success_with_empty_content_keeps_buffer() {
    init_logging();
    let (state, _) = update(with_text_and_url("old", "example.com"), Msg::ScrapeClicked);
    let (state, effects) = update(
        state,
        Msg::ScrapeSettled(ScrapeResult::Success {
            content: String::new(),
        }),
    );

    assert!(!state.is_busy());
    assert_eq!(state.text(), "old");
    assert_eq!(
        effects,
        vec![Effect::Notify {
            kind: NotifyKind::Error,
            message: INVALID_RESPONSE_MESSAGE.to_string(),
        }]
    );
}

#[test]
fn abandoned_scrape_clears_busy_silently() {
    init_logging();
    let (state, _) = update(with_text_and_url("old", "example.com"), Msg::ScrapeClicked);
    let (state, effects) = update(state, Msg::ScrapeAbandoned);

    assert!(!state.is_busy());
    assert_eq!(state.text(), "old");
    assert!(effects.is_empty());
}

// Busy does not block a second dispatch at the state layer; the later
// settlement wins the buffer and the first settlement already clears busy.
#[test]
fn overlapping_scrapes_are_last_writer_wins() {
    init_logging();
    let (state, first) = update(with_text_and_url("", "a.example"), Msg::ScrapeClicked);
    let (state, second) = update(state, Msg::ScrapeClicked);
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert!(state.is_busy());

    let (state, _) = update(state, Msg::ScrapeSettled(ScrapeResult::success("second")));
    assert!(!state.is_busy());

    let (state, _) = update(state, Msg::ScrapeSettled(ScrapeResult::success("first")));
    assert_eq!(state.text(), "first");
    assert!(!state.is_busy());
}
