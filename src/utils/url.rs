// src/utils/url.rs

//! Endpoint URL construction.

use url::Url;

use crate::error::{AppError, Result};

/// Path prefix shared by every faculty endpoint.
const API_PREFIX: [&str; 2] = ["api", "faculty"];

/// Build `{base}/api/faculty/{segments...}`.
///
/// Each segment is percent-encoded on its own, so identifiers containing
/// `/` or `?` cannot escape their path position.
pub fn endpoint(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.path_segments_mut()
        .map_err(|_| AppError::config(format!("{base} cannot be used as a base URL")))?
        .pop_if_empty()
        .extend(API_PREFIX)
        .extend(segments);
    Ok(url)
}

/// Build an endpoint URL with query parameters appended.
pub fn endpoint_with_query(base: &Url, segments: &[&str], pairs: &[(&str, &str)]) -> Result<Url> {
    let mut url = endpoint(base, segments)?;
    url.query_pairs_mut().extend_pairs(pairs);
    Ok(url)
}
