//! Pure HTML rendering of the dashboard state.
//!
//! [`render`] is a function of the state alone (no clock, no I/O), so the
//! same state always produces byte-identical markup. List items carry the
//! record id in a `data-id` attribute, in response order.

use crate::models::{Alert, TriageRule};
use crate::state::DashboardState;

/// Render the full page for the given display mode.
pub fn render(state: &DashboardState) -> String {
    match state {
        DashboardState::Loading => page(r#"<div class="loading">Loading...</div>"#.to_string()),
        DashboardState::Failed(message) => page(format!(
            r#"<div class="error">Error: {}</div>"#,
            escape(message)
        )),
        DashboardState::Loaded { alerts, rules } => {
            page(format!("{}{}", alerts_section(alerts), rules_section(rules)))
        }
    }
}

fn alerts_section(alerts: &[Alert]) -> String {
    let mut html = String::from(r#"<section class="panel"><h2>Alerts</h2><ul>"#);
    if alerts.is_empty() {
        html.push_str(r#"<li class="empty">No alerts</li>"#);
    }
    for alert in alerts {
        let source = match &alert.source {
            Some(s) => format!(r#" <span class="source">{}</span>"#, escape(s)),
            None => String::new(),
        };
        let triage = match &alert.triage_status {
            Some(t) => format!(r#" <span class="status">triage: {}</span>"#, escape(t)),
            None => String::new(),
        };
        html.push_str(&format!(
            r#"<li data-id="{id}"><strong>{title}</strong> <span class="sev sev-{sev}">{sev}</span> <span class="status">{status}</span>{source}{triage}<br/><small>{message}</small></li>"#,
            id = alert.id,
            title = escape(&alert.title),
            sev = escape(&alert.severity),
            status = escape(&alert.status),
            source = source,
            triage = triage,
            message = escape(&alert.message),
        ));
    }
    html.push_str("</ul></section>");
    html
}

fn rules_section(rules: &[TriageRule]) -> String {
    let mut html = String::from(r#"<section class="panel"><h2>Triage Rules</h2><ul>"#);
    if rules.is_empty() {
        html.push_str(r#"<li class="empty">No triage rules</li>"#);
    }
    for rule in rules {
        let inactive = match rule.is_active {
            Some(false) => r#" <span class="inactive">inactive</span>"#,
            _ => "",
        };
        html.push_str(&format!(
            r#"<li data-id="{id}"><strong>{name}</strong> (Priority: {priority}){inactive}<br/><small>{description}</small></li>"#,
            id = rule.id,
            name = escape(&rule.name),
            priority = rule.priority,
            inactive = inactive,
            description = escape(&rule.description),
        ));
    }
    html.push_str("</ul></section>");
    html
}

fn page(body: String) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Alert Triage Dashboard</title>
<style>{PAGE_STYLE}</style>
</head>
<body>
<header><h1>Alert Triage Dashboard</h1></header>
<main>{body}</main>
</body>
</html>"#
    )
}

/// Minimal HTML escaping for text and attribute positions.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

const PAGE_STYLE: &str = "\
*{margin:0;padding:0;box-sizing:border-box}\
:root{--bg:#0a0e17;--card:#111827;--border:#1e293b;--text:#e2e8f0;--dim:#64748b;--red:#ef4444;--cyan:#06b6d4;--purple:#8b5cf6}\
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,monospace;background:var(--bg);color:var(--text);min-height:100vh}\
header{border-bottom:1px solid var(--border);padding:16px 24px}\
header h1{font-size:20px;font-weight:700;background:linear-gradient(90deg,var(--cyan),var(--purple));-webkit-background-clip:text;-webkit-text-fill-color:transparent}\
main{display:grid;grid-template-columns:1fr 1fr;gap:16px;padding:16px 24px}\
@media(max-width:900px){main{grid-template-columns:1fr}}\
.panel{background:var(--card);border:1px solid var(--border);border-radius:8px;padding:12px 16px}\
.panel h2{font-size:13px;font-weight:600;text-transform:uppercase;letter-spacing:1px;color:var(--dim);margin-bottom:8px}\
.panel ul{list-style:none}\
.panel li{padding:8px 0;border-bottom:1px solid #1a1f2e;font-size:12px}\
.panel li:last-child{border-bottom:none}\
.sev{font-size:10px;font-weight:700;padding:2px 6px;border-radius:3px;background:rgba(239,68,68,0.2);color:var(--red)}\
.status,.source{color:var(--dim);font-size:11px;margin-left:6px}\
.inactive{font-size:10px;padding:1px 6px;border-radius:3px;background:rgba(100,116,139,0.2);color:var(--dim)}\
.empty{color:var(--dim);text-align:center}\
.loading{color:var(--dim);text-align:center;padding:40px;grid-column:1/-1}\
.error{color:var(--red);border:1px solid var(--red);border-radius:8px;padding:16px;grid-column:1/-1}\
small{color:var(--dim)}";

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(id: i64, title: &str, severity: &str) -> Alert {
        Alert {
            id,
            title: title.into(),
            message: "details".into(),
            status: "firing".into(),
            severity: severity.into(),
            source: None,
            triage_status: None,
        }
    }

    #[test]
    fn test_loading_page_has_indicator_and_no_lists() {
        let html = render(&DashboardState::Loading);
        assert!(html.contains("Loading..."));
        assert!(!html.contains("<li"));
        assert!(!html.contains("<h2>"));
    }

    #[test]
    fn test_error_page_replaces_all_content() {
        let html = render(&DashboardState::Failed("Failed to fetch alerts".into()));
        assert!(html.contains(r#"class="error""#));
        assert!(html.contains("Error: Failed to fetch alerts"));
        assert!(!html.contains("<li"));
        assert!(!html.contains("Loading..."));
    }

    #[test]
    fn test_empty_collections_render_placeholders() {
        let html = render(&DashboardState::Loaded {
            alerts: vec![],
            rules: vec![],
        });
        assert!(html.contains("No alerts"));
        assert!(html.contains("No triage rules"));
    }

    #[test]
    fn test_items_are_keyed_by_id_in_response_order() {
        let html = render(&DashboardState::Loaded {
            alerts: vec![alert(2, "Second", "low"), alert(1, "First", "high")],
            rules: vec![],
        });
        let second = html.find(r#"data-id="2""#).unwrap();
        let first = html.find(r#"data-id="1""#).unwrap();
        assert!(second < first, "response order is preserved");
    }

    #[test]
    fn test_text_fields_are_escaped() {
        let html = render(&DashboardState::Loaded {
            alerts: vec![alert(1, "<script>alert(1)</script>", "high")],
            rules: vec![],
        });
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_inactive_rule_gets_a_tag() {
        let html = render(&DashboardState::Loaded {
            alerts: vec![],
            rules: vec![TriageRule {
                id: 1,
                name: "Muted".into(),
                description: "d".into(),
                priority: 0,
                is_active: Some(false),
            }],
        });
        assert!(html.contains("inactive"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let state = DashboardState::Loaded {
            alerts: vec![alert(1, "A", "critical")],
            rules: vec![],
        };
        assert_eq!(render(&state), render(&state));
    }
}
