use url::Url;

/// Resolves a listing's image path to an absolute URL.
///
/// Paths starting with `http` are taken as-is; anything else is appended to
/// `base_url` verbatim, without slash normalization.
pub fn resolve_image_url(path: Option<&str>, base_url: &str) -> Option<Url> {
    let path = path?;
    let candidate = if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", base_url, path)
    };

    match Url::parse(&candidate) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::debug!("Unusable image path {:?}: {}", candidate, e);
            None
        }
    }
}

/// Detail page for a listing on the storefront website.
pub fn full_listing_url(site_base_url: &str, id: i64) -> Option<Url> {
    Url::parse(&format!("{}full-listing.php?id={}", site_base_url, id)).ok()
}
