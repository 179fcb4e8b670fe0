use crate::domain::model::{BadgeCell, BadgeTemplate, BranchRecord, TableRow};
use crate::utils::error::BadgeError;

const PLACEHOLDER: &str = "{branch}";

fn interpolate(template: &str, branch: &str) -> String {
    template.replace(PLACEHOLDER, branch)
}

pub fn build_row(branch: &BranchRecord, badges: &[BadgeTemplate]) -> TableRow {
    let name = branch.name();
    TableRow {
        name: name.to_string(),
        cells: badges
            .iter()
            .map(|badge| BadgeCell {
                link: interpolate(&badge.link, name),
                image: interpolate(&badge.image, name),
                alt: badge.alt.as_deref().map(|alt| interpolate(alt, name)),
            })
            .collect(),
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

pub fn row_to_html(row: &TableRow) -> String {
    let mut html = String::from("<tr>");
    html.push_str(&format!("<th>{}</th>", escape_html(&row.name)));

    for cell in &row.cells {
        html.push_str(&format!(
            "<th><a href=\"{}\" target=\"_blank\"><img src=\"{}\"",
            escape_html(&cell.link),
            escape_html(&cell.image)
        ));
        if let Some(alt) = &cell.alt {
            html.push_str(&format!(" alt=\"{}\"", escape_html(alt)));
        }
        html.push_str("></a></th>");
    }

    html.push_str("</tr>");
    html
}

pub fn render_rows(branches: &[BranchRecord], badges: &[BadgeTemplate]) -> String {
    branches
        .iter()
        .map(|branch| row_to_html(&build_row(branch, badges)))
        .collect()
}

/// Inline text appended to the sink in place of the table rows.
pub fn diagnostic(error: &BadgeError) -> String {
    match error {
        BadgeError::ApiError(e) => {
            format!("Failed to list branches: {}", escape_html(&e.to_string()))
        }
        other => escape_html(&other.to_string()),
    }
}
