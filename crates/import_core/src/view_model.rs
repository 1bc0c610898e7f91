use crate::Stack;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportViewModel {
    pub text: String,
    pub selected_stack: Option<Stack>,
    pub url_input: String,
    pub busy: bool,
    /// The scrape control is disabled while a scrape is in flight.
    pub scrape_enabled: bool,
    pub dragging: bool,
}
