//! HTML rendering for the form and batch pages.
//!
//! The pages are small enough that a templating crate would be more
//! ceremony than markup; both are built with plain formatting over the
//! shared stylesheet.

use churn_model::{FieldKind, RawCustomer, FIELDS};

/// Inline CSS shared by both pages.
const GLOBAL_CSS: &str = r#"<style>
  body { font-family: Arial, sans-serif; background-color: #f4f4f4; margin:0; padding:0; }
  .container { max-width: 600px; margin:50px auto; background:#fff; padding:20px; border-radius:8px; box-shadow:0 2px 5px rgba(0,0,0,0.1); }
  h1 { text-align:center; color:#333; }
  form { display:flex; flex-direction:column; }
  label { margin-top:10px; color:#555; }
  input, select { padding:8px; margin-top:5px; border:1px solid #ddd; border-radius:4px; }
  button { margin-top:20px; padding:10px; background-color:#28a745; color:#fff; border:none; border-radius:4px; cursor:pointer; }
  button:hover { background-color:#218838; }
  .result { margin-top:20px; padding:15px; background-color:#e9ecef; border-radius:4px; }
  .errors { color:#d9534f; list-style:none; padding:0; }
  a { color:#007bff; text-decoration:none; margin-top:10px; }
  a:hover { text-decoration:underline; }
</style>"#;

/// A rendered prediction for the result block.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    /// "Churn" or "No Churn".
    pub result: String,
    /// Positive-class probability, two decimals.
    pub probability: String,
}

/// Escape text for safe interpolation into HTML.
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

fn error_list(messages: &[String]) -> String {
    if messages.is_empty() {
        return String::new();
    }
    let items: String = messages
        .iter()
        .map(|msg| format!("<li>{}</li>", escape(msg)))
        .collect();
    format!("<ul class=\"errors\">{items}</ul>")
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  {GLOBAL_CSS}
</head>
<body>
  <div class="container">
{body}
  </div>
</body>
</html>
"#
    )
}

/// The single-record prediction form, prefilled with submitted values.
pub fn index_page(
    values: &RawCustomer,
    result: Option<&PredictionView>,
    errors: &[String],
) -> String {
    let mut fields = String::new();
    for (name, kind) in FIELDS {
        let value = escape(values.get(name).unwrap_or(""));
        let input = match kind {
            FieldKind::Categorical => format!(
                "<input type=\"text\" name=\"{name}\" value=\"{value}\" required>"
            ),
            FieldKind::Numeric => format!(
                "<input type=\"number\" step=\"any\" name=\"{name}\" value=\"{value}\" required>"
            ),
        };
        fields.push_str(&format!("      <label>{name}:</label>\n      {input}\n"));
    }

    let result_block = match result {
        Some(view) => format!(
            r#"    <div class="result">
      <p><strong>Prediction:</strong> {}</p>
      <p><strong>Probability:</strong> {}</p>
    </div>
"#,
            escape(&view.result),
            escape(&view.probability)
        ),
        None => String::new(),
    };

    let body = format!(
        r#"    <h1>Telecom Customer Churn Prediction</h1>
    <form method="post">
{fields}      <button type="submit">Predict</button>
    </form>
{result_block}{errors}    <a href="/batch">Batch Prediction (CSV)</a>"#,
        errors = error_list(errors),
    );

    page("Churn Prediction", &body)
}

/// The CSV upload form, with any flash or error messages.
pub fn batch_page(messages: &[String]) -> String {
    let body = format!(
        r#"    <h1>Batch Churn Prediction</h1>
    <form method="post" enctype="multipart/form-data">
      <input type="file" name="file" accept=".csv" required>
      <button type="submit">Upload &amp; Predict</button>
    </form>
{messages}    <a href="/">Single Prediction</a>"#,
        messages = error_list(messages),
    );

    page("Batch Churn Prediction", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_page_renders_all_fields() {
        let html = index_page(&RawCustomer::default(), None, &[]);
        for (name, _) in FIELDS {
            assert!(html.contains(&format!("name=\"{name}\"")), "missing {name}");
        }
        assert!(!html.contains("class=\"result\""));
    }

    #[test]
    fn test_index_page_prefills_submitted_values() {
        let values = RawCustomer {
            gender: "Female".into(),
            tenure: "12".into(),
            ..Default::default()
        };
        let html = index_page(&values, None, &[]);
        assert!(html.contains("value=\"Female\""));
        assert!(html.contains("value=\"12\""));
    }

    #[test]
    fn test_index_page_shows_result_block() {
        let view = PredictionView {
            result: "Churn".into(),
            probability: "0.88".into(),
        };
        let html = index_page(&RawCustomer::default(), Some(&view), &[]);
        assert!(html.contains("<strong>Prediction:</strong> Churn"));
        assert!(html.contains("<strong>Probability:</strong> 0.88"));
    }

    #[test]
    fn test_error_list_renders_each_message() {
        let html = index_page(
            &RawCustomer::default(),
            None,
            &["first".to_string(), "second".to_string()],
        );
        assert!(html.contains("<ul class=\"errors\"><li>first</li><li>second</li></ul>"));
    }

    #[test]
    fn test_values_are_escaped() {
        let values = RawCustomer {
            gender: "\"><script>".into(),
            ..Default::default()
        };
        let html = index_page(&values, None, &[]);
        assert!(!html.contains("\"><script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_batch_page_links_back_to_form() {
        let html = batch_page(&[]);
        assert!(html.contains("enctype=\"multipart/form-data\""));
        assert!(html.contains("<a href=\"/\">Single Prediction</a>"));
    }
}
