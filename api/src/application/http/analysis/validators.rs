use nutriguard_core::domain::catalogue::entities::Language;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Parses the `language` form field. Defaults to Chinese, matching the
/// product default.
pub fn parse_language(raw: Option<&str>) -> Result<Language, ApiError> {
    match raw {
        None => Ok(Language::Zh),
        Some("en") => Ok(Language::En),
        Some("zh") => Ok(Language::Zh),
        Some(other) => Err(ApiError::BadRequest(format!(
            "Unsupported language '{other}', expected 'en' or 'zh'"
        ))),
    }
}

/// Splits a comma-separated condition list, dropping empty segments.
/// Unknown identifiers are kept verbatim — they are free-text conditions.
pub fn split_conditions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
