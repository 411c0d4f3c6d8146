//! Graphviz invocation. A single synchronous call; failures are reported,
//! never retried.
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::RenderFormat;

/// Run `<command> -T<format> <dot_file> -o <output>`.
pub fn render_dot_file(
    command: &str,
    dot_file: &Path,
    output: &Path,
    format: RenderFormat,
) -> Result<()> {
    info!("Rendering {:?} -> {:?} with {}", dot_file, output, command);
    let result = Command::new(command)
        .arg(format!("-T{}", format))
        .arg(dot_file)
        .arg("-o")
        .arg(output)
        .output();

    let out = match result {
        Ok(out) => out,
        Err(e) => {
            let reason = if e.kind() == ErrorKind::NotFound {
                "executable not found; install Graphviz (https://graphviz.org/download/)"
                    .to_string()
            } else {
                format!("exec error: {}", e)
            };
            return Err(Error::RenderToolUnavailable {
                tool: command.to_string(),
                reason,
                kept_dot: None,
            });
        }
    };

    if !out.status.success() {
        let stderr = String::from_utf8_lossy(&out.stderr);
        debug!("{} stderr: {}", command, stderr);
        return Err(Error::RenderToolUnavailable {
            tool: command.to_string(),
            reason: format!("exited with {}: {}", out.status, stderr.trim()),
            kept_dot: None,
        });
    }
    Ok(())
}
