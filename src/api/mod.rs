//! High-level, ergonomic library API: build DOT text from rows or roster files,
//! write it to disk, or render it through Graphviz. Prefer these entrypoints
//! over the low-level `core` modules when integrating orgdot.
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::core::dot::render_dot;
use crate::core::hierarchy::Hierarchy;
use crate::core::params::ChartParams;
use crate::error::{Error, Result};
use crate::io::render::render_dot_file;
use crate::io::roster::read_roster;
use crate::io::writers::{dot_sidecar_path, write_dot_file, write_dot_temp};
use crate::types::Row;

/// Summary of one chart written to disk
#[derive(Debug, Clone, PartialEq)]
pub struct ChartReport {
    pub people: usize,
    pub supervisors: usize,
    pub distinct_titles: usize,
    pub output: PathBuf,
    /// DOT file left on disk, if any
    pub dot_file: Option<PathBuf>,
}

impl ChartReport {
    fn new(hierarchy: &Hierarchy, output: &Path, dot_file: Option<PathBuf>) -> Self {
        Self {
            people: hierarchy.people(),
            supervisors: hierarchy.supervisor_count(),
            distinct_titles: hierarchy.distinct_titles(),
            output: output.to_path_buf(),
            dot_file,
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Build DOT text from rows, stamped with today's date.
pub fn build_chart(rows: &[Row], params: &ChartParams) -> Result<String> {
    build_chart_at(rows, params, today())
}

/// Build DOT text from rows with an explicit generation date.
pub fn build_chart_at(rows: &[Row], params: &ChartParams, generated: NaiveDate) -> Result<String> {
    params.validate()?;
    let hierarchy = Hierarchy::from_rows(rows, params)?;
    Ok(render_dot(&hierarchy, params, generated))
}

fn chart_from_csv(input: &Path, params: &ChartParams) -> Result<(Hierarchy, String)> {
    params.validate()?;
    let rows = read_roster(input)?;
    let hierarchy = Hierarchy::from_rows(&rows, params)?;
    let dot = render_dot(&hierarchy, params, today());
    Ok((hierarchy, dot))
}

/// Read a roster file and return the DOT text.
pub fn csv_to_dot(input: &Path, params: &ChartParams) -> Result<String> {
    chart_from_csv(input, params).map(|(_, dot)| dot)
}

/// Read a roster file and write DOT text to `output`. Nothing is written if
/// the roster fails to parse.
pub fn write_dot_to_path(input: &Path, output: &Path, params: &ChartParams) -> Result<ChartReport> {
    let (hierarchy, dot) = chart_from_csv(input, params)?;
    write_dot_file(output, &dot)?;
    info!("Wrote {:?}", output);
    Ok(ChartReport::new(&hierarchy, output, Some(output.to_path_buf())))
}

/// Attach the path of a DOT file left on disk to a renderer failure.
fn with_kept_dot(err: Error, dot: Option<PathBuf>) -> Error {
    match err {
        Error::RenderToolUnavailable { tool, reason, .. } => Error::RenderToolUnavailable {
            tool,
            reason,
            kept_dot: dot,
        },
        other => other,
    }
}

/// Read a roster file and render it to `output` with `params.dot_command`.
///
/// The intermediate DOT file is a temporary next to `output`, removed after a
/// successful render, unless `keep_dot` is set, in which case it is written
/// as `<output stem>.dot` and left in place. If the renderer fails, the DOT
/// text is always kept as `<output stem>.dot` and its path is carried in
/// `Error::RenderToolUnavailable::kept_dot`.
pub fn render_csv_to_path(
    input: &Path,
    output: &Path,
    params: &ChartParams,
    keep_dot: bool,
) -> Result<ChartReport> {
    if dot_sidecar_path(output) == output {
        return Err(Error::InvalidArgument {
            arg: "output",
            value: output.display().to_string(),
        });
    }

    let (hierarchy, dot) = chart_from_csv(input, params)?;

    let dot_file = if keep_dot {
        let path = dot_sidecar_path(output);
        write_dot_file(&path, &dot)?;
        render_dot_file(&params.dot_command, &path, output, params.format)
            .map_err(|e| with_kept_dot(e, Some(path.clone())))?;
        Some(path)
    } else {
        let tmp = write_dot_temp(output, &dot)?;
        let rendered = render_dot_file(&params.dot_command, tmp.path(), output, params.format);
        if let Err(e) = rendered {
            let sidecar = dot_sidecar_path(output);
            let kept = match tmp.persist(&sidecar) {
                Ok(_) => {
                    warn!("Rendering failed; DOT file kept at {:?}", sidecar);
                    Some(sidecar)
                }
                Err(persist) => {
                    warn!("Could not keep DOT file {:?}: {}", sidecar, persist.error);
                    None
                }
            };
            return Err(with_kept_dot(e, kept));
        }
        tmp.close()?;
        None
    };

    info!("Rendered {:?} -> {:?}", input, output);
    Ok(ChartReport::new(&hierarchy, output, dot_file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_chart_at_is_stamped() {
        let rows = vec![
            Row::new("2010", "Clerk", "JaneDoe", "JohnSmith"),
            Row::new("2015", "Manager", "JohnSmith", "JohnSmith"),
        ];
        let date = NaiveDate::from_ymd_opt(2023, 1, 9).unwrap();
        let dot = build_chart_at(&rows, &ChartParams::default(), date).unwrap();
        assert!(dot.contains("Chart generated 2023-01-09"));
    }

    #[test]
    fn test_invalid_params_are_rejected_before_building() {
        let params = ChartParams {
            root_key: "not valid".to_string(),
            ..ChartParams::default()
        };
        assert!(matches!(
            build_chart(&[], &params),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_render_refuses_dot_output() {
        let err = render_csv_to_path(
            Path::new("staff.csv"),
            Path::new("staff.dot"),
            &ChartParams::default(),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { arg: "output", .. }));
    }
}
