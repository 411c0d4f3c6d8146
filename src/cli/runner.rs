use std::path::{Path, PathBuf};

use tracing::info;
use tracing_subscriber::EnvFilter;

use orgdot::io::writers::write_dot_stdout;
use orgdot::{ChartParams, Error, RenderFormat, csv_to_dot, render_csv_to_path, write_dot_to_path};

use super::args::CliArgs;
use super::errors::AppError;

/// Where the chart goes for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    Dot(PathBuf),
    Rendered(PathBuf),
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

fn check_input(input: &Path) -> Result<(), AppError> {
    if !input.exists() {
        return Err(Error::InputNotFound {
            path: input.to_path_buf(),
        }
        .into());
    }
    if !has_extension(input, "csv") {
        return Err(AppError::NotCsv {
            path: input.to_path_buf(),
        });
    }
    Ok(())
}

/// Config file first, then CLI flags on top; list flags extend the config lists.
pub fn merge_params(args: &CliArgs) -> Result<ChartParams, AppError> {
    let mut params = match &args.config {
        Some(path) => ChartParams::from_json_file(path)?,
        None => ChartParams::default(),
    };
    params.exclude.extend(args.exclude.iter().cloned());
    params.highlight.extend(args.highlight.iter().cloned());
    if let Some(format) = args.format {
        params.format = format;
    }
    if let Some(title) = &args.title {
        params.legend_title = title.clone();
    }
    if let Some(cmd) = &args.dot_command {
        params.dot_command = cmd.clone();
    }
    params.validate()?;
    Ok(params)
}

pub fn resolve_output(args: &CliArgs, params: &ChartParams) -> OutputTarget {
    if args.stdout {
        return OutputTarget::Stdout;
    }
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension(params.format.extension()));
    if has_extension(&output, "dot") {
        OutputTarget::Dot(output)
    } else {
        OutputTarget::Rendered(output)
    }
}

/// Command a user can run by hand once Graphviz is installed.
pub fn manual_render_command(dot: &Path, output: &Path, format: RenderFormat) -> String {
    format!("dot -T{} {} -o {}", format, dot.display(), output.display())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        init_logging();
    }

    check_input(&args.input)?;
    let params = merge_params(&args)?;

    match resolve_output(&args, &params) {
        OutputTarget::Stdout => {
            let dot = csv_to_dot(&args.input, &params)?;
            write_dot_stdout(&dot)?;
        }
        OutputTarget::Dot(output) => {
            let report = write_dot_to_path(&args.input, &output, &params)?;
            info!(
                "{} people, {} supervisors",
                report.people, report.supervisors
            );
            println!("DOT file written: {}", output.display());
        }
        OutputTarget::Rendered(output) => {
            let report = match render_csv_to_path(&args.input, &output, &params, args.keep_dot) {
                Ok(report) => report,
                Err(e) => {
                    if let Error::RenderToolUnavailable {
                        kept_dot: Some(dot),
                        ..
                    } = &e
                    {
                        eprintln!("DOT file generated: {}", dot.display());
                        eprintln!(
                            "You can manually convert it with: {}",
                            manual_render_command(dot, &output, params.format)
                        );
                    }
                    return Err(e.into());
                }
            };
            info!(
                "{} people, {} supervisors",
                report.people, report.supervisors
            );
            println!("Org chart generated: {}", report.output.display());
            if let Some(dot) = report.dot_file {
                println!("DOT file saved: {}", dot.display());
            }
        }
    }
    Ok(())
}
