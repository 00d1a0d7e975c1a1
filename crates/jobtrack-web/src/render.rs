//! Server-side HTML for the board page.

use std::fmt::Write;

use axum::http::StatusCode;
use chrono::NaiveDate;
use jobtrack::application::DATE_FORMAT;
use jobtrack::storage::ACCEPTED_EXTENSIONS;
use jobtrack::{Board, Card, Stage};

const STYLE: &str = "
body { font-family: sans-serif; margin: 0; display: flex; }
aside { width: 18rem; padding: 1rem; background: #f3f4f6; min-height: 100vh; }
main { flex: 1; padding: 1rem 2rem; }
aside label { display: block; margin-top: .75rem; font-size: .9rem; }
aside input, aside select { width: 100%; box-sizing: border-box; }
aside button { margin-top: 1rem; width: 100%; }
.board { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; }
.card { border: 1px solid #d1d5db; border-radius: .5rem; padding: .5rem .75rem; margin-bottom: .75rem; }
.card h3 { margin: .25rem 0; }
.actions { display: flex; gap: .5rem; flex-wrap: wrap; }
.actions form { display: inline; }
.notice { background: #dcfce7; padding: .5rem; }
.error { background: #fee2e2; padding: .5rem; }
";

/// Current contents of the intake form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub company: String,
    pub position: String,
    pub stage: Stage,
    pub date: NaiveDate,
}

impl FormValues {
    /// An empty form: first stage, today's date.
    pub fn blank() -> Self {
        Self {
            company: String::new(),
            position: String::new(),
            stage: Stage::default(),
            date: jobtrack::intake::today(),
        }
    }
}

/// Escapes text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// The whole page: intake form on the side, board in the main area.
pub fn page(board: &Board, form: &FormValues, notice: Option<&str>, error: Option<&str>) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Career Organizer</title>\n<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str(&intake_form(form, notice, error));

    html.push_str("<main>\n<h1>JOB TRACKER</h1>\n<hr>\n<div class=\"board\">\n");
    for column in &board.columns {
        let _ = writeln!(
            html,
            "<section class=\"column\" data-stage=\"{}\">\n<h2>📍 {}</h2>",
            escape(column.stage.label()),
            escape(column.stage.label())
        );
        for card in &column.cards {
            html.push_str(&card_html(card));
        }
        html.push_str("</section>\n");
    }
    html.push_str("</div>\n</main>\n</body>\n</html>\n");
    html
}

fn intake_form(form: &FormValues, notice: Option<&str>, error: Option<&str>) -> String {
    let mut html = String::from("<aside>\n<h2>➕ Add New Job</h2>\n");

    if let Some(notice) = notice {
        let _ = writeln!(html, "<p class=\"notice\">{}</p>", escape(notice));
        // Drop `?added=` from the address bar so a reload shows the plain board.
        html.push_str("<script>history.replaceState(null, \"\", \"/\");</script>\n");
    }
    if let Some(error) = error {
        let _ = writeln!(html, "<p class=\"error\">{}</p>", escape(error));
    }

    html.push_str("<form method=\"post\" action=\"/jobs\" enctype=\"multipart/form-data\">\n");
    let _ = writeln!(
        html,
        "<label>Company Name<input type=\"text\" name=\"company\" placeholder=\"e.g. Google\" value=\"{}\"></label>",
        escape(&form.company)
    );
    let _ = writeln!(
        html,
        "<label>Job Title<input type=\"text\" name=\"position\" placeholder=\"e.g. Python Developer\" value=\"{}\"></label>",
        escape(&form.position)
    );

    html.push_str("<label>Current Stage<select name=\"stage\">\n");
    for stage in Stage::ALL {
        let selected = if stage == form.stage { " selected" } else { "" };
        let _ = writeln!(
            html,
            "<option value=\"{0}\"{1}>{0}</option>",
            escape(stage.label()),
            selected
        );
    }
    html.push_str("</select></label>\n");

    let accept: Vec<String> = ACCEPTED_EXTENSIONS.iter().map(|e| format!(".{e}")).collect();
    let _ = writeln!(
        html,
        "<label>Upload Tailored Resume<input type=\"file\" name=\"resume\" accept=\"{}\"></label>",
        accept.join(",")
    );
    let _ = writeln!(
        html,
        "<label>Date Discovered<input type=\"date\" name=\"date\" value=\"{}\"></label>",
        form.date.format(DATE_FORMAT)
    );

    html.push_str("<button type=\"submit\">Save to Pipeline</button>\n</form>\n</aside>\n");
    html
}

fn card_html(card: &Card) -> String {
    let app = &card.application;
    let mut html = String::new();
    let _ = writeln!(html, "<div class=\"card\" id=\"job-{}\">", app.id);
    let _ = writeln!(html, "<h3>{}</h3>", escape(&app.company));
    let _ = writeln!(html, "<p><strong>Role:</strong> {}</p>", escape(&app.position));
    let _ = writeln!(
        html,
        "<p><small>📅 {}</small></p>",
        escape(&app.date_added.to_string())
    );

    html.push_str("<div class=\"actions\">\n");
    if card.can_advance {
        let _ = writeln!(
            html,
            "<form method=\"post\" action=\"/jobs/{}/advance\"><button type=\"submit\">➡️ Next</button></form>",
            app.id
        );
    }
    let _ = writeln!(
        html,
        "<form method=\"post\" action=\"/jobs/{}/delete\"><button type=\"submit\" title=\"Delete\">🗑️</button></form>",
        app.id
    );
    if card.resume_available {
        let _ = writeln!(
            html,
            "<a href=\"/jobs/{}/resume\" download>📄 Resume</a>",
            app.id
        );
    }
    html.push_str("</div>\n</div>\n");
    html
}

/// Minimal page for responses that are not the board.
pub fn error_page(status: StatusCode, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{status}</title></head>\n\
         <body>\n<h1>{status}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to the board</a></p>\n</body>\n</html>\n",
        escape(message)
    )
}

#[cfg(test)]
mod tests {
    use jobtrack::JobApplication;

    use super::*;

    fn card(status: Stage, resume_available: bool) -> Card {
        Card {
            application: JobApplication {
                id: 5,
                company: "<Acme & Sons>".to_string(),
                position: "Dev".to_string(),
                status,
                date_added: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap().into(),
                resume_path: resume_available.then(|| "x.pdf".to_string()),
            },
            can_advance: !status.is_terminal(),
            resume_available,
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_card_escapes_user_text() {
        let html = card_html(&card(Stage::Applied, false));
        assert!(html.contains("&lt;Acme &amp; Sons&gt;"));
        assert!(!html.contains("<Acme"));
        assert!(html.contains("2026-10-01"));
    }

    #[test]
    fn test_terminal_card_has_no_next_button() {
        assert!(card_html(&card(Stage::Interviewing, false)).contains("/jobs/5/advance"));
        assert!(!card_html(&card(Stage::Offer, false)).contains("/jobs/5/advance"));
    }

    #[test]
    fn test_download_link_only_when_available() {
        assert!(card_html(&card(Stage::Offer, true)).contains("/jobs/5/resume"));
        assert!(!card_html(&card(Stage::Offer, false)).contains("/jobs/5/resume"));
    }

    #[test]
    fn test_form_preserves_values_and_selects_stage() {
        let form = FormValues {
            company: "Acme".to_string(),
            position: String::new(),
            stage: Stage::Interviewing,
            date: NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
        };
        let html = intake_form(&form, None, Some("Please provide a Position."));
        assert!(html.contains("value=\"Acme\""));
        assert!(html.contains("<option value=\"Interviewing\" selected>"));
        assert!(html.contains("value=\"2026-01-02\""));
        assert!(html.contains("accept=\".pdf,.docx\""));
        assert!(html.contains("class=\"error\""));
    }

    #[test]
    fn test_notice_clears_query_from_address() {
        let html = intake_form(&FormValues::blank(), Some("Added Dev at Acme!"), None);
        assert!(html.contains("Added Dev at Acme!"));
        assert!(html.contains("history.replaceState"));

        let html = intake_form(&FormValues::blank(), None, None);
        assert!(!html.contains("history.replaceState"));
    }

    #[test]
    fn test_page_has_four_columns_in_order() {
        let board = Board {
            columns: Stage::ALL
                .into_iter()
                .map(|stage| jobtrack::Column {
                    stage,
                    cards: Vec::new(),
                })
                .collect(),
        };
        let html = page(&board, &FormValues::blank(), None, None);
        let positions: Vec<usize> = Stage::ALL
            .iter()
            .map(|s| html.find(&format!("data-stage=\"{}\"", s.label())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("<title>Career Organizer</title>"));
        assert!(html.contains("JOB TRACKER"));
    }
}
