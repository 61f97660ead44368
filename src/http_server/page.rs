//! HTML form page.
//!
//! A single page carrying the input form, the submitted values, any
//! validation errors and the prediction result.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::model::PredictionResult;
use crate::schema::{FieldDef, FieldKind, FIELDS};

/// Everything the page needs to render
#[derive(Debug, Default)]
pub struct PageView {
    pub result: Option<PredictionResult>,
    pub errors: Vec<String>,
    /// Submitted raw values, echoed back into the inputs
    pub form_values: BTreeMap<&'static str, String>,
}

/// Escape a string for safe interpolation into HTML text and attributes.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn render_input(out: &mut String, def: &FieldDef, submitted: Option<&str>) {
    let name = html_escape(def.name);
    let _ = writeln!(out, "<label for=\"{name}\">{name}</label>");

    match def.kind {
        FieldKind::Categorical { options } => {
            let _ = writeln!(out, "<select id=\"{name}\" name=\"{name}\">");
            out.push_str("<option value=\"\">--</option>\n");
            for &(value, label) in options {
                let value = value.to_string();
                let selected = if submitted == Some(value.as_str()) {
                    " selected"
                } else {
                    ""
                };
                let _ = writeln!(
                    out,
                    "<option value=\"{value}\"{selected}>{}</option>",
                    html_escape(label)
                );
            }
            out.push_str("</select>\n");
        }
        FieldKind::Numeric { min, max } => {
            let value = html_escape(submitted.unwrap_or(""));
            let _ = writeln!(
                out,
                "<input type=\"number\" id=\"{name}\" name=\"{name}\" min=\"{min}\" max=\"{max}\" value=\"{value}\">"
            );
        }
        FieldKind::Integer => {
            let value = html_escape(submitted.unwrap_or(""));
            let _ = writeln!(
                out,
                "<input type=\"number\" id=\"{name}\" name=\"{name}\" value=\"{value}\">"
            );
        }
    }
}

/// Render the full page.
pub fn render(view: &PageView) -> String {
    let mut out = String::with_capacity(8 * 1024);

    out.push_str(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Survival Prediction</title>
</head>
<body>
<h1>Survival Prediction</h1>
"#,
    );

    if !view.errors.is_empty() {
        out.push_str("<ul class=\"errors\">\n");
        for e in &view.errors {
            let _ = writeln!(out, "<li>{}</li>", html_escape(e));
        }
        out.push_str("</ul>\n");
    }

    if let Some(result) = &view.result {
        let probability = result
            .probability
            .map(|p| format!("{:.3}", p))
            .unwrap_or_else(|| "n/a".to_string());
        let _ = writeln!(
            out,
            "<div class=\"result\"><p>Prediction: <strong>{}</strong></p><p>Probability: {}</p></div>",
            result.prediction.label(),
            probability
        );
    }

    out.push_str("<form method=\"post\" action=\"/\">\n");
    for def in FIELDS.iter() {
        let submitted = view.form_values.get(def.name).map(String::as_str);
        render_input(&mut out, def, submitted);
    }
    out.push_str("<button type=\"submit\">Predict</button>\n</form>\n</body>\n</html>\n");

    out
}
