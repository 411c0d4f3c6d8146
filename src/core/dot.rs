//! DOT emission for a built [`Hierarchy`].
use std::fmt::Write;

use chrono::NaiveDate;
use tracing::warn;

use crate::core::hierarchy::{Hierarchy, Member, StaffGroup};
use crate::core::params::ChartParams;

/// Node id of the legend; the underscore keeps it out of the person-key space.
pub const LEGEND_NODE: &str = "_legend";

const GRAPH_HEADER: &str = "digraph \"orgchart\" {\n graph [ rankdir=\"LR\", splines=true]; overlap=false; node[shape=box color=none]; edge[color=grey];\n";

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Node ids are always quoted so a key like `Node` or `graph` stays an id.
fn quote_id(id: &str) -> String {
    format!("\"{}\"", id)
}

fn write_member(out: &mut String, member: &Member) {
    let _ = write!(
        out,
        "\n<tr><td align=\"left\">{}</td>\n <td align=\"left\">{}</td>\n <td align=\"left\" port=\"{}\">{}</td></tr>",
        escape_html(&member.name),
        escape_html(&member.title),
        member.key,
        member.year
    );
}

fn write_group(out: &mut String, group: &StaffGroup) {
    let _ = write!(out, "\"{}\" [label=<<table>", group.key);
    for member in &group.members {
        write_member(out, member);
    }
    out.push_str("</table>>];\n");
}

/// `direct` when the group has no sub-supervisors, `direct/total` otherwise.
pub fn edge_label(group: &StaffGroup) -> String {
    if group.is_leaf() {
        group.direct_count.to_string()
    } else {
        format!("{}/{}", group.direct_count, group.indirect_total)
    }
}

fn write_legend(out: &mut String, hierarchy: &Hierarchy, title: &str, generated: NaiveDate) {
    let _ = writeln!(
        out,
        "\"{}\" [label=<<table border=\"1\" cellborder=\"0\" color=\"#888888\"><tr><td><b>{}</b></td></tr>",
        LEGEND_NODE,
        escape_html(title)
    );
    out.push_str("<tr><td>rows show Name, Title, Hire Year</td></tr>\n");
    out.push_str("<tr><td>lines show who reports to whom</td></tr>\n");
    out.push_str("<tr><td>line labels show direct/total reports</td></tr>\n");
    let _ = writeln!(
        out,
        "<tr><td>{} people / {} supervisors = {:.1} avg span</td></tr>",
        hierarchy.people(),
        hierarchy.supervisor_count(),
        hierarchy.average_span()
    );
    let _ = writeln!(
        out,
        "<tr><td>{} distinct job titles</td></tr>",
        hierarchy.distinct_titles()
    );
    let _ = writeln!(
        out,
        "<tr><td>Chart generated {}</td></tr></table>>];",
        generated.format("%Y-%m-%d")
    );
}

fn write_rank(out: &mut String, hierarchy: &Hierarchy, params: &ChartParams) {
    let mut same_rank: Vec<String> = Vec::new();
    if hierarchy.group(hierarchy.root_key()).is_some() {
        same_rank.push(quote_id(hierarchy.root_key()));
    }
    same_rank.push(quote_id(LEGEND_NODE));
    for key in params.highlight_keys() {
        if hierarchy.group(key.as_str()).is_some() {
            same_rank.push(quote_id(key.as_str()));
        } else {
            warn!("Highlighted person {} supervises nobody; leaving off the top rank", key);
        }
    }
    let _ = writeln!(out, "{{rank=same; {};}}", same_rank.join(" "));
}

/// Render the whole chart: one node per supervisor, one edge per non-root
/// supervisor, the legend, and the top-rank constraint.
pub fn render_dot(hierarchy: &Hierarchy, params: &ChartParams, generated: NaiveDate) -> String {
    let mut out = String::from(GRAPH_HEADER);

    for group in hierarchy.groups() {
        write_group(&mut out, group);
    }
    for (supervisor, group) in hierarchy.edges() {
        let _ = writeln!(
            out,
            "\"{}\":\"{}\":e -> \"{}\":w [label=\"{}\"];",
            supervisor.key,
            group.key,
            group.key,
            edge_label(group)
        );
    }

    write_legend(&mut out, hierarchy, &params.legend_title, generated);
    write_rank(&mut out, hierarchy, params);
    out.push('}');
    out
}
