use std::path::{Path, PathBuf};

pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["html", "htm"];
pub const ACCEPTED_MIME: &str = "text/html";

/// A file handed over by a drop or the file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedFile {
    pub name: String,
    pub path: PathBuf,
    pub mime: Option<String>,
}

impl DroppedFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            path,
            mime: None,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    pub fn is_accepted(&self) -> bool {
        has_accepted_extension(Path::new(&self.name))
            || has_accepted_extension(&self.path)
            || self.mime.as_deref().is_some_and(is_html_mime)
    }
}

/// First accepted file of a drop; everything after it is ignored.
pub fn select_dropped_file(files: &[DroppedFile]) -> Option<&DroppedFile> {
    files.iter().find(|file| file.is_accepted())
}

fn has_accepted_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(ext))
        })
}

fn is_html_mime(mime: &str) -> bool {
    let essence = mime.split(';').next().unwrap_or(mime).trim();
    essence.eq_ignore_ascii_case(ACCEPTED_MIME)
}
