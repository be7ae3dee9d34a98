use crate::entities::lead;

pub const LEADS_HEADER: [&str; 6] = ["id", "nome", "email", "tipo", "mensagem", "data_envio"];

// RFC 4180: quote fields holding a delimiter, a quote or a line break.
fn field(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn row<S: AsRef<str>>(out: &mut String, values: &[S]) {
    let line: Vec<String> = values.iter().map(|v| field(v.as_ref())).collect();
    out.push_str(&line.join(","));
    out.push_str("\r\n");
}

/// Render leads as CSV in the order given, header first.
pub fn leads_csv(leads: &[lead::Model]) -> String {
    let mut out = String::new();
    row(&mut out, &LEADS_HEADER);
    for lead in leads {
        row(
            &mut out,
            &[
                lead.id.to_string(),
                lead.name.clone(),
                lead.email.clone(),
                lead.interest.clone(),
                lead.message.clone().unwrap_or_default(),
                lead.submitted_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            ],
        );
    }
    out
}
