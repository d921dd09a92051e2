// 💾 Flat-file export - one serialized line per record
//
// The target is created or truncated on every save (no append mode).
// Best effort: a write failure mid-way leaves the lines already written
// and reports how many there are.

use crate::entities::Record;
use crate::error::ExportError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// What a successful save wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub records: usize,
}

/// Serialize `records` to `path`, in order, one line each.
///
/// If the file cannot be opened nothing is written and `ExportError::Open`
/// is returned. The file handle is closed before this returns on every path.
pub fn save<T: Record>(path: &Path, records: &[T]) -> Result<ExportSummary, ExportError> {
    let file = File::create(path).map_err(|source| {
        warn!(path = %path.display(), error = %source, "export target could not be opened");
        ExportError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let mut out = BufWriter::new(file);
    let mut written = 0;

    // Flushed per record so `written` counts lines that reached the file
    for record in records {
        record
            .serialize(&mut out)
            .and_then(|()| out.flush())
            .map_err(|source| write_failed(path, written, source))?;
        written += 1;
    }

    info!(path = %path.display(), kind = T::KIND, records = written, "export written");

    Ok(ExportSummary {
        path: path.to_path_buf(),
        records: written,
    })
}

fn write_failed(path: &Path, written: usize, source: std::io::Error) -> ExportError {
    warn!(path = %path.display(), written, error = %source, "export interrupted");
    ExportError::Write {
        path: path.to_path_buf(),
        written,
        source,
    }
}

// ============================================================================
// TESTS
// ============================================================================
