//! What the view shows, derived from [`UiState`], plus HTML and plain-text output.

use std::fmt::Write as _;

use crate::config::ViewConfig;
use crate::model::format_percent;
use crate::state::UiState;

pub const SUBMIT_LABEL: &str = "Search";
pub const SUBMIT_LABEL_LOADING: &str = "Searching...";

#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub title: String,
    pub subtitle: String,
    pub placeholder: String,
    pub query: String,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    pub error: Option<String>,
    pub results: Option<ResultsPanel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsPanel {
    pub best_match: String,
    /// Already formatted, e.g. `"87.3%"`.
    pub score: String,
    pub others: Vec<MatchLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchLine {
    pub text: String,
    pub score: String,
}

impl Screen {
    /// The results panel is hidden while an error is shown, even if an older
    /// result is still held in state.
    pub fn build(state: &UiState, config: &ViewConfig) -> Self {
        let results = match (&state.error, &state.result) {
            (None, Some(result)) => Some(ResultsPanel {
                best_match: result.best_match.clone(),
                score: format_percent(result.score),
                others: result
                    .other_matches()
                    .iter()
                    .map(|m| MatchLine {
                        text: m.text.clone(),
                        score: format_percent(m.score),
                    })
                    .collect(),
            }),
            _ => None,
        };

        Self {
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
            placeholder: config.placeholder.clone(),
            query: state.query.clone(),
            submit_label: if state.loading() {
                SUBMIT_LABEL_LOADING
            } else {
                SUBMIT_LABEL
            },
            submit_disabled: !state.can_submit(),
            error: state.error.clone(),
            results,
        }
    }

    /// Terminal rendering: error line or result block. Empty when there is
    /// nothing to show.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        if let Some(error) = &self.error {
            let _ = writeln!(out, "error: {error}");
        }
        if let Some(results) = &self.results {
            let _ = writeln!(out, "BEST MATCH");
            let _ = writeln!(out, "  {}", results.best_match);
            let _ = writeln!(out, "  Score: {}", results.score);
            if !results.others.is_empty() {
                let _ = writeln!(out);
                let _ = writeln!(out, "OTHER MATCHES");
                for line in &results.others {
                    let _ = writeln!(out, "  {}", line.text);
                    let _ = writeln!(out, "    Score: {}", line.score);
                }
            }
        }
        out
    }

    /// Full HTML page. `action` is where the form posts back to.
    pub fn to_html(&self, action: &str) -> String {
        let mut html = String::with_capacity(2048);
        let _ = write!(
            html,
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>{STYLE}</style>
</head>
<body>
  <main>
    <header>
      <h1>{title}</h1>
      <p class="subtitle">{subtitle}</p>
    </header>
    <form id="search" method="post" action="{action}">
      <input type="text" name="query" id="query" value="{query}" placeholder="{placeholder}" autofocus>
      <button type="submit" id="submit"{disabled}>{label}</button>
    </form>
"#,
            title = escape(&self.title),
            subtitle = escape(&self.subtitle),
            action = escape(action),
            query = escape(&self.query),
            placeholder = escape(&self.placeholder),
            disabled = if self.submit_disabled { " disabled" } else { "" },
            label = self.submit_label,
        );

        if let Some(error) = &self.error {
            let _ = writeln!(
                html,
                r#"    <div class="error"><p>{}</p></div>"#,
                escape(error)
            );
        }

        if let Some(results) = &self.results {
            let _ = write!(
                html,
                r#"    <section class="results">
      <div class="best">
        <h2>BEST MATCH</h2>
        <p class="text">{}</p>
        <p class="score">Score: {}</p>
      </div>
"#,
                escape(&results.best_match),
                results.score
            );
            if !results.others.is_empty() {
                html.push_str("      <div class=\"others\">\n        <h3>OTHER MATCHES</h3>\n");
                for line in &results.others {
                    let _ = writeln!(
                        html,
                        r#"        <div class="match"><p class="text">{}</p><p class="score">Score: {}</p></div>"#,
                        escape(&line.text),
                        line.score
                    );
                }
                html.push_str("      </div>\n");
            }
            html.push_str("    </section>\n");
        }

        html.push_str("  </main>\n");
        html.push_str(SCRIPT);
        html.push_str("</body>\n</html>\n");
        html
    }
}

const STYLE: &str = "body { font-family: system-ui, sans-serif; background: #f9fafb; margin: 0; padding: 2rem; } \
main { max-width: 48rem; margin: 0 auto; } \
h1 { font-size: 1.75rem; margin-bottom: 0.25rem; } \
.subtitle { color: #4b5563; } \
form { background: #fff; border: 1px solid #d1d5db; border-radius: 4px; padding: 1rem; margin-bottom: 1.5rem; } \
input { width: 100%; padding: 0.75rem; box-sizing: border-box; margin-bottom: 0.75rem; } \
button { width: 100%; padding: 0.75rem; background: #2563eb; color: #fff; border: 0; border-radius: 4px; font-weight: 600; } \
button:disabled { background: #9ca3af; cursor: not-allowed; } \
.error { background: #fef2f2; border: 1px solid #fca5a5; border-radius: 4px; padding: 1rem; margin-bottom: 1.5rem; color: #991b1b; } \
.results { background: #fff; border: 1px solid #d1d5db; border-radius: 4px; padding: 1.5rem; } \
h2, h3 { font-size: 0.875rem; color: #6b7280; } \
.score { font-size: 0.875rem; color: #4b5563; } \
.others { border-top: 1px solid #e5e7eb; padding-top: 1rem; }";

// Keeps the button in sync with the field between page loads.
const SCRIPT: &str = r#"  <script>
    const query = document.getElementById('query');
    const submit = document.getElementById('submit');
    query.addEventListener('input', () => { submit.disabled = query.value.trim() === ''; });
    document.getElementById('search').addEventListener('submit', (e) => {
      if (query.value.trim() === '' || submit.disabled) { e.preventDefault(); return; }
      submit.disabled = true;
      submit.textContent = 'Searching...';
    });
  </script>
"#;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
