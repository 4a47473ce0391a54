//! Staging store: the mapping and frequency tables cached between runs.
//!
//! The source tables stay authoritative; the store only lets repeated runs
//! accumulate into the same tables the way an on-disk scratch database would.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tempfile::{Builder, NamedTempFile};

use crate::error::DayiError;
use crate::freq::FrequencyTable;
use crate::mapping::MappingTable;

/// Everything persisted in the staging store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Staging {
    pub mapping: MappingTable,
    pub freq: FrequencyTable,
}

impl Staging {
    /// Load the store at `path`, or start empty if it does not exist.
    pub fn open(path: &Path) -> Result<Self, DayiError> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(DayiError::file("opening staging store", path, e)),
        };
        let staging = bincode::deserialize_from(BufReader::new(file))?;
        Ok(staging)
    }

    /// Serialize to `path`, replacing it only once the write has succeeded.
    pub fn save(&self, path: &Path) -> Result<(), DayiError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| DayiError::file("creating directory", parent, e))?;
        }
        let data = bincode::serialize(self)?;
        write_atomic(path, &data)
    }
}

/// Temporary file in `dir` created with the mode a plain `File::create` would get.
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // 0o666 before the process umask
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

/// Write `data` to a temporary file next to `path` and rename it into place.
///
/// A replaced file keeps its permissions.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<(), DayiError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let temp = temp_file_in(parent)
        .map_err(|e| DayiError::file("creating temporary file in", parent, e))?;
    if let Ok(existing) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| DayiError::file("copying permissions of", path, e))?;
    }
    {
        let mut writer = BufWriter::new(temp.as_file());
        writer
            .write_all(data)
            .and_then(|_| writer.flush())
            .map_err(|e| DayiError::file("writing", path, e))?;
    }
    temp.persist(path).map_err(|e| DayiError::file("replacing", path, e.error))?;
    Ok(())
}
