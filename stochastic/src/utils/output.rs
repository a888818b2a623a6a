use std::{fs, io::Write, path::Path};

use tempfile::NamedTempFile;

use crate::prelude::*;

/// Writes `document` as JSON to `location`.
///
/// The document is validated and serialized before anything touches the
/// filesystem, then written to a temporary file next to `location` and
/// renamed over it. On error no new file is created at `location` and an
/// existing file there is left untouched.
///
/// A replaced file keeps its permissions; new files are created `0o644` on
/// Unix.
pub fn write_event(document: &EventDocument, location: &Path) -> Result<()> {
    if location.as_os_str().is_empty() {
        return Err(StochasticError::InvalidInput(
            "output location is empty".to_string(),
        ));
    }
    document.validate()?;
    let text = document.to_json_string()?;

    let parent = match location.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(text.as_bytes())?;
    let permissions = match fs::metadata(location) {
        Ok(meta) if meta.is_file() => Some(meta.permissions()),
        _ => new_file_permissions(),
    };
    if let Some(permissions) = permissions {
        file.as_file().set_permissions(permissions)?;
    }
    file.as_file().sync_all()?;
    file.persist(location).map_err(|e| e.error)?;

    tracing::info!(
        "Wrote event {} ({} time histories) to {}",
        document.event(),
        document.time_histories().len(),
        location.display()
    );
    Ok(())
}

// tempfile creates files as 0o600
#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}

pub fn read_event(location: &Path) -> Result<EventDocument> {
    let text = fs::read_to_string(location)?;
    EventDocument::from_json_str(&text)
}
