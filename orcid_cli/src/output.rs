use orcid_api::HttpError;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

pub fn print_http_error(error: &HttpError, format: &OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", format_http_error(error)),
        OutputFormat::Json => print_json(error),
    }
}

fn format_http_error(error: &HttpError) -> String {
    let codes = error
        .api_codes()
        .iter()
        .map(|c| c.as_str().map(str::to_string).unwrap_or_else(|| c.to_string()))
        .collect::<Vec<_>>()
        .join(", ");
    let mut out = format!(
        "kind:     {}\nstatus:   {} {}\n",
        error.kind(),
        error.status(),
        error.reason()
    );
    if !codes.is_empty() {
        out.push_str(&format!("codes:    {}\n", codes));
    }
    for message in error.api_messages() {
        out.push_str(&format!("message:  {}\n", message));
    }
    out.push('\n');
    out.push_str(error.summary());
    out
}
