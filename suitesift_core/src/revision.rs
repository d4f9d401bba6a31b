use crate::error::SuitesiftError;

/// Environment variable (and config property) carrying an explicit revision.
pub const LAST_SUCCESSFUL_REVISION: &str = "LAST_SUCCESSFUL_REVISION";

const SHA_TAG: &str = "<SHA1>";
const SHA_END_TAG: &str = "</SHA1>";

/// Returns the explicit revision when one is set, otherwise fetches and
/// parses the reference endpoint.
///
/// `fetch` is only invoked when `explicit` is missing or blank.
pub fn resolve_revision<F>(
    explicit: Option<&str>,
    source_url: &str,
    fetch: F,
) -> Result<String, SuitesiftError>
where
    F: FnOnce() -> Result<String, SuitesiftError>,
{
    if let Some(sha) = explicit.map(str::trim).filter(|sha| !sha.is_empty()) {
        return Ok(sha.to_string());
    }
    let fetched = fetch()?;
    parse_fetched_revision(&fetched, source_url)
}

/// Extracts a revision from endpoint text, either bare
/// (`adbf23f4…`) or wrapped (`<SHA1>adbf23f4…</SHA1>`).
pub fn parse_fetched_revision(text: &str, source_url: &str) -> Result<String, SuitesiftError> {
    let not_found = || SuitesiftError::RevisionNotFound {
        source_url: source_url.to_string(),
    };
    if text.trim().is_empty() {
        return Err(not_found());
    }

    let text = strip_line_terminator(text);
    let sha = match text.strip_prefix(SHA_TAG) {
        Some(wrapped) => wrapped.strip_suffix(SHA_END_TAG).unwrap_or(wrapped),
        None => text,
    }
    .trim();

    if sha.is_empty() {
        return Err(not_found());
    }
    Ok(sha.to_string())
}

fn strip_line_terminator(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}
