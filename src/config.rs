pub const SITE_NAME: &str = "Mara Venn";
pub const SITE_TAGLINE: &str = "Cinematography & Editorial";
pub const CONTACT_EMAIL: &str = "studio@maravenn.com";

#[cfg(debug_assertions)]
pub fn media_base() -> &'static str {
    ""  // Trunk serves assets from the site root during development
}

#[cfg(not(debug_assertions))]
pub fn media_base() -> &'static str {
    "https://media.maravenn.com"
}

/// Absolute URL for a catalog-relative media path.
pub fn media_url(path: &str) -> String {
    format!("{}{}", media_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_media_url_prefixes_base() {
        assert_eq!(
            media_url("/assets/films/tideline.mp4"),
            format!("{}/assets/films/tideline.mp4", media_base())
        );
    }
}
