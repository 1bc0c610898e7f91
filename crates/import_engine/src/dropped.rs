use std::path::Path;

use panel_logging::panel_debug;

use crate::{decode_html, DecodeError};

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Read the whole dropped file as text. Nothing is returned on partial reads.
pub async fn read_dropped_file(path: &Path) -> Result<String, ReadError> {
    let bytes = tokio::fs::read(path).await?;
    let decoded = decode_html(&bytes, None)?;
    panel_debug!(
        "read dropped file {:?} bytes={} encoding={}",
        path,
        bytes.len(),
        decoded.encoding_label
    );
    Ok(decoded.html)
}
