use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;

use crate::error::{MeetError, MeetResult};
use crate::model::Meeting;

/// Make sure the data file exists, creating it empty if it doesn't.
pub fn initialize(path: &Path) -> MeetResult<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::File::create(path)?;
    debug!("created empty data file {}", path.display());
    Ok(())
}

/// Read every meeting from the file. An absent or blank file is an empty list.
pub fn read_meetings(path: &Path) -> MeetResult<Vec<Meeting>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    if data.trim().is_empty() {
        return Ok(Vec::new());
    }

    let meetings: Vec<Meeting> =
        serde_json::from_str(&data).map_err(|source| MeetError::CorruptData {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("read {} meetings from {}", meetings.len(), path.display());
    Ok(meetings)
}

/// Overwrite the file with the given meetings, in order.
pub fn write_meetings(path: &Path, meetings: &[Meeting]) -> MeetResult<()> {
    let json = serde_json::to_string_pretty(meetings)?;
    fs::write(path, json)?;
    debug!("wrote {} meetings to {}", meetings.len(), path.display());
    Ok(())
}
