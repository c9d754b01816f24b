use std::panic;

const REDACTED: &str = "[REDACTED]";

/// Replaces e-mail-looking tokens so draft contents never reach stderr.
pub fn redact_text(input: &str) -> String {
    input
        .split_whitespace()
        .map(redact_chunk)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn install_panic_redaction_hook() {
    panic::set_hook(Box::new(|panic_info| {
        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(ToString::to_string)
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panic payload omitted".to_owned());

        let scrubbed = redact_text(&payload);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "folio-contact panic: {} at {}:{}:{}",
                scrubbed,
                location.file(),
                location.line(),
                location.column()
            );
        } else {
            eprintln!("folio-contact panic: {}", scrubbed);
        }
    }));
}

fn redact_chunk(chunk: &str) -> String {
    if looks_like_email(chunk) {
        REDACTED.to_owned()
    } else {
        chunk.to_owned()
    }
}

fn looks_like_email(value: &str) -> bool {
    let cleaned = value.trim_matches(|ch: char| !ch.is_alphanumeric());

    match cleaned.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}
