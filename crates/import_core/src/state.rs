use crate::{ImportViewModel, ShortcutPlatform, Stack};

/// In-memory state of one import interaction. Dropped with the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSession {
    text: String,
    selected_stack: Option<Stack>,
    url_input: String,
    busy: bool,
    dragging: bool,
    platform: ShortcutPlatform,
}

impl Default for ImportSession {
    fn default() -> Self {
        Self::for_platform(ShortcutPlatform::current())
    }
}

impl ImportSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_platform(platform: ShortcutPlatform) -> Self {
        Self {
            text: String::new(),
            selected_stack: Some(Stack::default()),
            url_input: String::new(),
            busy: false,
            dragging: false,
            platform,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selected_stack(&self) -> Option<Stack> {
        self.selected_stack
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn platform(&self) -> ShortcutPlatform {
        self.platform
    }

    pub fn view(&self) -> ImportViewModel {
        ImportViewModel {
            text: self.text.clone(),
            selected_stack: self.selected_stack,
            url_input: self.url_input.clone(),
            busy: self.busy,
            scrape_enabled: !self.busy,
            dragging: self.dragging,
        }
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub(crate) fn set_stack(&mut self, stack: Option<Stack>) {
        self.selected_stack = stack;
    }

    pub(crate) fn set_url_input(&mut self, url: String) {
        self.url_input = url;
    }

    pub(crate) fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    pub(crate) fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }
}
