//! HTML rendering for the dashboard pages.

use std::fmt::Write;

use teambynumbers_core::StatRecord;

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn report_link(url: &str) -> String {
    // Only plain web links become anchors.
    if url.starts_with("http://") || url.starts_with("https://") {
        let url = escape_html(url);
        format!("<a href=\"{url}\">report</a>")
    } else {
        escape_html(url)
    }
}

/// Full index page: one table row per record, in the order given.
pub fn index_page(records: &[StatRecord]) -> String {
    let mut rows = String::new();
    for r in records {
        let _ = writeln!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.2}</td><td>{:.2}</td><td>{}</td></tr>",
            escape_html(&r.date),
            escape_html(&r.team),
            r.member_count,
            r.cycle_time,
            r.lead_time,
            r.bugs_reported,
            r.bugs_squashed,
            r.deploy_count,
            r.value_score,
            r.quality_score(),
            report_link(&r.report_url),
        );
    }
    if records.is_empty() {
        rows.push_str("<tr><td colspan=\"11\">No entries yet.</td></tr>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Team by numbers</title>
</head>
<body>
<h1>Team by numbers</h1>
<p><a href="/new">New entry</a> | <a href="/api/v1/export">Export JSON</a></p>
<table>
<thead>
<tr><th>Date</th><th>Team</th><th>Members</th><th>Cycle time</th><th>Lead time</th><th>Bugs reported</th><th>Bugs squashed</th><th>Deploys</th><th>Value</th><th>Quality</th><th>Report</th></tr>
</thead>
<tbody>
{rows}</tbody>
</table>
</body>
</html>
"#
    )
}
