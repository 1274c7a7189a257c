//! Job-listing URL validation. Only LinkedIn job views, collections and posts
//! are accepted as scrape targets.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::extraction::ExtractionError;

const LISTING_HOST: &str = "linkedin.com";
const LISTING_PATH_MARKERS: &[&str] = &["/jobs/view/", "/jobs/collections/", "/feed/update/", "/posts/"];
const JOB_ID_QUERY_PARAM: &str = "currentJobId";

static JOB_VIEW_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/jobs/view/(\d+)").unwrap());

#[derive(Debug, Clone, PartialEq)]
pub struct ListingUrl {
    pub url: Url,
    /// Numeric LinkedIn job id, when the URL carries one.
    pub job_id: Option<String>,
}

pub fn validate_listing_url(raw: &str) -> Result<ListingUrl, ExtractionError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ExtractionError::InvalidListingUrl("URL is empty".to_string()));
    }

    let url = Url::parse(raw)
        .map_err(|e| ExtractionError::InvalidListingUrl(format!("invalid URL format: {e}")))?;

    let on_listing_host = url
        .host_str()
        .is_some_and(|host| host == LISTING_HOST || host.ends_with(&format!(".{LISTING_HOST}")));
    if !on_listing_host {
        return Err(ExtractionError::InvalidListingUrl(
            "URL is not from LinkedIn".to_string(),
        ));
    }

    let path = url.path();
    if !LISTING_PATH_MARKERS.iter().any(|marker| path.contains(marker)) {
        return Err(ExtractionError::InvalidListingUrl(
            "URL doesn't appear to be a LinkedIn job posting or post".to_string(),
        ));
    }

    let job_id = extract_job_id(&url);
    Ok(ListingUrl { url, job_id })
}

fn extract_job_id(url: &Url) -> Option<String> {
    if let Some(caps) = JOB_VIEW_ID_RE.captures(url.path()) {
        return caps.get(1).map(|m| m.as_str().to_string());
    }
    url.query_pairs()
        .find(|(key, _)| key == JOB_ID_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}
