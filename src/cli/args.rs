use clap::Parser;
use std::path::PathBuf;

use orgdot::RenderFormat;

#[derive(Parser)]
#[command(name = "orgdot", version, about = "Render an org chart from a roster CSV")]
pub struct CliArgs {
    /// Roster CSV file
    pub input: PathBuf,

    /// Output file; defaults to the input name with the format's extension.
    /// A `.dot` output writes the graph description without rendering.
    pub output: Option<PathBuf>,

    /// Keep the intermediate DOT file next to the rendered output
    #[arg(short, long, default_value_t = false)]
    pub keep_dot: bool,

    /// Rendered output format
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<RenderFormat>,

    /// Print the DOT text to stdout instead of rendering
    #[arg(long, default_value_t = false)]
    pub stdout: bool,

    /// JSON file with chart parameters
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip rows for this person (repeatable)
    #[arg(long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Put this person on the top rank next to the legend (repeatable)
    #[arg(long = "highlight", value_name = "NAME")]
    pub highlight: Vec<String>,

    /// Legend heading
    #[arg(long)]
    pub title: Option<String>,

    /// Graphviz executable
    #[arg(long)]
    pub dot_command: Option<String>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
