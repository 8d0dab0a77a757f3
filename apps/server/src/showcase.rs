//! The showcase page: a tools table rendered on the server, refreshed in the
//! browser by `/static/app.js` from `/api/packages`.

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;
use slim::domain::config::ShowcaseConfig;
use slim::domain::showcase::{PACKAGE_COLUMNS, Package, SAMPLE_PACKAGES};
use std::fmt::Write;
use tracing::error;

const PAGE_STYLE: &str = r"
    body {
        font-family: system-ui, sans-serif;
        margin: 0 auto;
        max-width: 960px;
        padding: 2rem;
    }

    /* Table */
    .data-table {
        width: 100%;
        border-collapse: collapse;
        margin-top: 2rem;
    }
    .data-table th, .data-table td {
        padding: 0.75rem;
        text-align: left;
        border-bottom: 1px solid #dddddd;
    }
    .data-table th {
        background-color: #f2f2f2;
        font-weight: bold;
    }
    .data-table tr:hover {
        background-color: #f5f5f5;
    }
";

/// Formats an integer with `,` thousands separators: `12500` becomes `"12,500"`.
#[must_use]
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Renders the tools table: one header row and one body row per package.
#[must_use]
pub fn render_packages_table(packages: &[Package]) -> String {
    let mut html = String::from("<table class=\"data-table\">\n  <thead>\n    <tr>\n");
    for column in PACKAGE_COLUMNS {
        let _ = writeln!(html, "      <th>{}</th>", escape(column));
    }
    html.push_str("    </tr>\n  </thead>\n  <tbody>\n");

    for package in packages {
        let _ = writeln!(
            html,
            "    <tr>\n      <td>{}</td>\n      <td>{}</td>\n      <td>{}</td>\n      <td>{}</td>\n    </tr>",
            package.id,
            escape(package.name),
            escape(package.version),
            format_thousands(package.downloads),
        );
    }

    html.push_str("  </tbody>\n</table>");
    html
}

/// Renders the whole showcase page.
///
/// The client settings are embedded as a JSON data block that `app.js` reads.
#[must_use]
pub fn render_index(config: &ShowcaseConfig) -> String {
    let settings = serde_json::to_string(config)
        .unwrap_or_else(|err| {
            error!(error = %err, "Failed to serialize showcase settings");
            "{}".to_owned()
        })
        .replace("</", "<\\/");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Minification Test Project</title>
    <style>{PAGE_STYLE}</style>
  </head>
  <body>
    <!-- Page header -->
    <header>
      <h1>Minification Test Project</h1>
      <p>Every response on this page passes through the minify middleware.</p>
    </header>

    <main>
      <button id="ctaButton" type="button">Refresh Data</button>
      <div id="dataContainer">
{table}
      </div>
    </main>

    <script id="app-config" type="application/json">{settings}</script>
    <script src="/static/app.js" defer></script>
  </body>
</html>
"#,
        table = render_packages_table(&SAMPLE_PACKAGES),
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Serializes `value` as indented JSON. The minify layer compacts it again when
/// JSON minification is enabled.
fn pretty_json<T: Serialize>(value: &T) -> Response {
    match serde_json::to_string_pretty(value) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(err) => {
            error!(error = %err, "Failed to serialize response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        },
    }
}

pub(crate) async fn index(State(config): State<ShowcaseConfig>) -> Html<String> {
    Html(render_index(&config))
}

pub(crate) async fn packages() -> Response {
    pretty_json(&SAMPLE_PACKAGES)
}

pub(crate) async fn config(State(config): State<ShowcaseConfig>) -> Response {
    pretty_json(&config)
}
