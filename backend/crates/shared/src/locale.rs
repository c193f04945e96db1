//! Response Locale
//!
//! User-facing messages are rendered in English or Simplified Chinese,
//! negotiated from the `Accept-Language` request header.

use serde::Serialize;

/// Supported message languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    /// BCP 47 primary tag
    pub const fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Pick a locale from an `Accept-Language` header value
    ///
    /// Tags are taken in order of their `q` weight (default 1.0); the first
    /// supported primary tag wins. Anything unrecognised falls back to English.
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::locale::Locale;
    ///
    /// assert_eq!(Locale::from_accept_language("zh-CN,zh;q=0.9,en;q=0.8"), Locale::Zh);
    /// assert_eq!(Locale::from_accept_language("fr-FR, en;q=0.5"), Locale::En);
    /// ```
    pub fn from_accept_language(header: &str) -> Self {
        let mut candidates: Vec<(f32, Locale)> = header
            .split(',')
            .filter_map(|part| {
                let mut pieces = part.trim().split(';');
                let tag = pieces.next()?.trim();
                let weight = pieces
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .and_then(|q| q.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);
                Self::from_tag(tag).map(|locale| (weight, locale))
            })
            .filter(|(weight, _)| *weight > 0.0)
            .collect();

        // Stable sort keeps header order among equal weights
        candidates.sort_by(|a, b| b.0.total_cmp(&a.0));
        candidates
            .first()
            .map(|(_, locale)| *locale)
            .unwrap_or_default()
    }

    fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::Zh),
            _ => None,
        }
    }
}

#[cfg(feature = "axum")]
impl<S> axum::extract::FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        Ok(parts
            .headers
            .get(axum::http::header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .map(Locale::from_accept_language)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_english() {
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::from_accept_language(""), Locale::En);
        assert_eq!(Locale::from_accept_language("de-DE"), Locale::En);
    }

    #[test]
    fn test_picks_highest_weight() {
        assert_eq!(Locale::from_accept_language("en;q=0.4, zh-CN;q=0.9"), Locale::Zh);
        assert_eq!(Locale::from_accept_language("zh;q=0.2, en-US"), Locale::En);
    }

    #[test]
    fn test_ignores_zero_weight() {
        assert_eq!(Locale::from_accept_language("zh;q=0, fr"), Locale::En);
    }

    #[test]
    fn test_underscore_region() {
        assert_eq!(Locale::from_accept_language("zh_TW"), Locale::Zh);
    }
}
