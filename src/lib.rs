#![doc = r#"
orgdot — turn a CSV export of employee/supervisor relationships into a
Graphviz org chart.

Each supervisor becomes one node holding a small table of their direct reports
(name, title, hire year). Edges follow the reporting chain and are labeled with
the number of direct reports, or `direct/total` when the supervisor has
supervisors beneath them. A legend node carries headcount statistics.

Requirements
------------
- Graphviz (`dot`) on `PATH` if you want rendered output (PDF, SVG, PNG).
  Producing DOT text needs nothing external.

Roster format
-------------
Comma-separated, positional columns: `[0]` unused, `[1]` hire date (any text
containing a 4-digit year), `[2]` job title, `[3]` employee name, `[4]`
supervisor name. A person who supervises themselves, or has a blank
supervisor, is placed under a synthetic top node.

Quick start: rows to DOT
------------------------
```rust
use orgdot::{build_chart, ChartParams, Row};

fn main() -> orgdot::Result<()> {
    let rows = vec![
        Row::new("2010", "Clerk", "Jane Doe", "John Smith"),
        Row::new("2015", "Manager", "John Smith", "John Smith"),
    ];
    let dot = build_chart(&rows, &ChartParams::default())?;
    assert!(dot.contains("\"JohnSmith\":w [label=\"1\"]"));
    Ok(())
}
```

Render a roster file
--------------------
```rust,no_run
use std::path::Path;
use orgdot::{render_csv_to_path, ChartParams, RenderFormat};

fn main() -> orgdot::Result<()> {
    let params = ChartParams {
        exclude: vec!["Alan D Hooker".to_string()],
        highlight: vec!["Gerald A Jackson".to_string()],
        format: RenderFormat::Pdf,
        ..ChartParams::default()
    };
    let report = render_csv_to_path(
        Path::new("staff.csv"),
        Path::new("staff.pdf"),
        &params,
        false, // keep_dot
    )?;
    println!("{} people under {} supervisors", report.people, report.supervisors);
    Ok(())
}
```

Error handling
--------------
All public functions return `orgdot::Result<T>`; match on `orgdot::Error` to
handle specific cases.

```rust,no_run
use std::path::Path;
use orgdot::{csv_to_dot, ChartParams, Error};

fn main() {
    match csv_to_dot(Path::new("staff.csv"), &ChartParams::default()) {
        Ok(dot) => println!("{dot}"),
        Err(Error::MalformedRow { row, .. }) => eprintln!("bad record {row}"),
        Err(Error::ReportingCycle { key }) => eprintln!("{key} reports to themselves indirectly"),
        Err(other) => eprintln!("{other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — parameters, the hierarchy builder, and DOT emission.
- [`io`] — roster reader, DOT writers, and the Graphviz invocation.
- [`types`] — `Row`, `PersonKey`, `RenderFormat`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use core::hierarchy::{GroupId, Hierarchy, Member, StaffGroup};
pub use core::params::ChartParams;
pub use error::{Error, Result};
pub use types::{PersonKey, RenderFormat, Row};

pub use api::{
    ChartReport, build_chart, build_chart_at, csv_to_dot, render_csv_to_path, write_dot_to_path,
};
