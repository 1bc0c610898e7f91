#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited or pasted into the code text area.
    TextChanged(String),
    /// User picked a target stack.
    StackSelected(crate::Stack),
    /// Stack selection was reset and no default applied yet.
    StackCleared,
    /// User edited the URL input box.
    UrlChanged(String),
    /// A drag entered the drop zone.
    DragEntered,
    /// A drag left the drop zone without dropping.
    DragLeft,
    /// Files were dropped or chosen from the file picker.
    FilesDropped(Vec<crate::DroppedFile>),
    /// Result of reading a dropped file.
    FileRead {
        name: String,
        result: Result<String, String>,
    },
    /// User clicked the scrape button.
    ScrapeClicked,
    /// The scrape round-trip finished, successfully or not.
    ScrapeSettled(crate::ScrapeResult),
    /// The scrape future was dropped before it settled.
    ScrapeAbandoned,
    /// User clicked the import button.
    SubmitClicked,
    /// Key pressed while the panel is open.
    KeyPressed {
        chord: crate::KeyChord,
        focus: crate::Focus,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
