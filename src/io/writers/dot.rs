use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Error, Result};

/// Where a kept DOT file lands for a rendered output: same directory and stem.
pub fn dot_sidecar_path(output: &Path) -> PathBuf {
    output.with_extension("dot")
}

pub fn write_dot_file(path: &Path, dot: &str) -> Result<()> {
    fs::write(path, dot).map_err(|e| Error::output_write(path, e))?;
    debug!("Wrote DOT file {:?} ({} bytes)", path, dot.len());
    Ok(())
}

/// Write DOT text to a temporary file next to `output`; the file is removed
/// when the handle drops.
pub fn write_dot_temp(output: &Path, dot: &str) -> Result<NamedTempFile> {
    let dir = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("orgchart");

    let mut tmp = tempfile::Builder::new()
        .prefix(&format!("{}_", stem))
        .suffix(".dot")
        .tempfile_in(&dir)
        .map_err(|e| Error::output_write(&dir, e))?;
    let path = tmp.path().to_path_buf();
    tmp.write_all(dot.as_bytes())
        .map_err(|e| Error::output_write(&path, e))?;
    tmp.flush().map_err(|e| Error::output_write(&path, e))?;
    debug!("Wrote intermediate DOT file {:?}", path);
    Ok(tmp)
}

pub fn write_dot_stdout(dot: &str) -> Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    writeln!(lock, "{}", dot).map_err(|e| Error::output_write("<stdout>", e))?;
    Ok(())
}
