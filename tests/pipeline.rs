use std::fs;
use std::path::Path;

use orgdot::{
    ChartParams, Error, Hierarchy, csv_to_dot, io::read_roster, render_csv_to_path,
    write_dot_to_path,
};

const ROSTER: &str = "\
Id,Hire Date,Job Title,Employee Name,Supervisor Name
1,03/01/2001,Executive Director,\"Jackson, Gerald A\",\"Jackson, Gerald A\"
2,2005-04-11,Operations Manager,Bob Middle,\"Jackson, Gerald A\"
3,2006-07-01,R&D Manager,Cat Middle,\"Jackson, Gerald A\"
4,2010,Clerk,Dan Low,Bob Middle
5,2011,Clerk,Eve Low,Bob Middle
6,2012,Team Lead,Fay Low,Cat Middle
7,2013,Technician,Gus Bottom,Fay Low
8,1999,Volunteer,Alan D Hooker,Nobody
";

fn write_roster(dir: &Path, text: &str) -> std::path::PathBuf {
    let path = dir.join("staff.csv");
    fs::write(&path, text).unwrap();
    path
}

fn params() -> ChartParams {
    ChartParams {
        exclude: vec!["Alan D. Hooker".to_string()],
        highlight: vec!["Jackson, Gerald A".to_string()],
        legend_title: "Test Org".to_string(),
        ..ChartParams::default()
    }
}

#[test]
fn test_roster_file_to_dot_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_roster(dir.path(), ROSTER);
    let output = dir.path().join("staff.dot");

    let report = write_dot_to_path(&input, &output, &params()).unwrap();
    assert_eq!(report.people, 7);
    assert_eq!(report.supervisors, 5);
    assert_eq!(report.distinct_titles, 6);
    assert_eq!(report.dot_file.as_deref(), Some(output.as_path()));

    let dot = fs::read_to_string(&output).unwrap();
    assert!(dot.contains("\"_top\":\"JacksonGeraldA\":e -> \"JacksonGeraldA\":w [label=\"2/6\"];"));
    assert!(dot.contains("\"JacksonGeraldA\":\"BobMiddle\":e -> \"BobMiddle\":w [label=\"2\"];"));
    assert!(dot.contains("\"JacksonGeraldA\":\"CatMiddle\":e -> \"CatMiddle\":w [label=\"1/2\"];"));
    assert!(dot.contains("\"CatMiddle\":\"FayLow\":e -> \"FayLow\":w [label=\"1\"];"));
    assert!(dot.contains("R&amp;D Manager"));
    assert!(dot.contains("7 people / 5 supervisors = 1.4 avg span"));
    assert!(dot.contains("{rank=same; \"_top\" \"_legend\" \"JacksonGeraldA\";}"));
    assert!(!dot.contains("Hooker"));
    assert!(!dot.contains("Nobody"));
    assert!(!dot.contains("EmployeeName"));
}

#[test]
fn test_repeat_runs_match() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_roster(dir.path(), ROSTER);
    let first = csv_to_dot(&input, &params()).unwrap();
    let second = csv_to_dot(&input, &params()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_roster_invariants() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_roster(dir.path(), ROSTER);
    let rows = read_roster(&input).unwrap();
    let h = Hierarchy::from_rows(&rows, &params()).unwrap();

    let direct: usize = h.groups().iter().map(|g| g.direct_count).sum();
    assert_eq!(direct, h.people());
    for (supervisor, group) in h.edges() {
        assert_ne!(supervisor.key, group.key);
        assert!(group.indirect_total >= group.direct_count);
    }
}

#[test]
fn test_malformed_row_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_roster(
        dir.path(),
        "1,2010,Clerk,Jane Doe,John Smith\n2,2011,Clerk\n3,2012,Clerk,Al Poe,John Smith\n",
    );
    let output = dir.path().join("staff.dot");

    let err = write_dot_to_path(&input, &output, &ChartParams::default()).unwrap_err();
    assert!(matches!(err, Error::MalformedRow { row: 2, found: 3, .. }));
    assert!(err.to_string().contains("row 2"));
    assert!(!output.exists());
}

#[test]
fn test_cycle_in_roster_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_roster(
        dir.path(),
        "1,2010,Clerk,Alice,Bob\n2,2011,Clerk,Bob,Carol\n3,2012,Clerk,Carol,Alice\n",
    );
    assert!(matches!(
        csv_to_dot(&input, &ChartParams::default()),
        Err(Error::ReportingCycle { .. })
    ));
}

#[test]
fn test_missing_renderer_keeps_generated_dot() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_roster(dir.path(), ROSTER);
    let output = dir.path().join("staff.pdf");
    let params = ChartParams {
        dot_command: "orgdot-no-such-renderer".to_string(),
        ..params()
    };

    let err = render_csv_to_path(&input, &output, &params, false).unwrap_err();
    let sidecar = dir.path().join("staff.dot");
    match err {
        Error::RenderToolUnavailable { kept_dot, .. } => {
            assert_eq!(kept_dot.as_deref(), Some(sidecar.as_path()));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(fs::read_to_string(&sidecar).unwrap().starts_with("digraph"));

    // only the sidecar remains; the temporary is gone
    let dot_files: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".dot"))
        .collect();
    assert_eq!(dot_files, vec!["staff.dot".to_string()]);
}

#[test]
fn test_missing_renderer_keeps_requested_dot() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_roster(dir.path(), ROSTER);
    let output = dir.path().join("staff.pdf");
    let params = ChartParams {
        dot_command: "orgdot-no-such-renderer".to_string(),
        ..params()
    };

    let err = render_csv_to_path(&input, &output, &params, true).unwrap_err();
    let kept = dir.path().join("staff.dot");
    assert!(matches!(
        err,
        Error::RenderToolUnavailable { kept_dot: Some(ref p), .. } if *p == kept
    ));
    assert!(fs::read_to_string(kept).unwrap().starts_with("digraph"));
}
