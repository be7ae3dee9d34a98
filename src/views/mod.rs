//! Inline HTML rendering for the public site and the admin panel.

pub mod admin;
pub mod login;
pub mod public;

use crate::flash::Flash;
use crate::utils::text::escape_html;

pub(crate) fn e(value: &str) -> String {
    escape_html(value)
}

pub(crate) fn page(title: &str, flashes: &[Flash], body: &str) -> String {
    let mut alerts = String::new();
    for flash in flashes {
        alerts.push_str(&format!(
            "<div class=\"alert alert-{}\">{}</div>",
            flash.kind.as_str(),
            e(&flash.message)
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 0; color: #333; }}
        main {{ max-width: 960px; margin: 0 auto; padding: 20px; }}
        .alert {{ padding: 10px; margin: 10px 0; border-radius: 5px; }}
        .alert-success {{ background: #d4edda; }}
        .alert-danger {{ background: #f8d7da; }}
        .alert-warning {{ background: #fff3cd; }}
        .alert-info {{ background: #d1ecf1; }}
        img.thumb {{ max-width: 240px; display: block; }}
        form.inline {{ display: inline; }}
        section {{ margin-bottom: 32px; }}
    </style>
</head>
<body>
<main>
{alerts}
{body}
</main>
</body>
</html>"#,
        title = e(title),
    )
}
