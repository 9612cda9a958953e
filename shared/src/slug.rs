//! Brand slug resolution
//!
//! Brand pages are addressed by URL-safe slugs ("mobile-legends"), but the
//! catalog only knows canonical names ("Mobile Legends"). The resolver is a
//! pure function over a caller-supplied candidate list — the brand universe
//! comes from two remote endpoints and is merged upstream (see the client's
//! `brand_names`), so the list is not guaranteed stable across fetches.

/// Turn a brand name into its URL slug.
///
/// Lowercases and trims, drops everything outside `[a-z0-9 -]`, then
/// collapses any run of spaces/hyphens into a single hyphen with no leading
/// or trailing hyphen. Idempotent: `to_slug(to_slug(x)) == to_slug(x)`.
pub fn to_slug(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;
    for c in lowered.chars() {
        match c {
            ' ' | '-' => pending_hyphen = !slug.is_empty(),
            'a'..='z' | '0'..='9' => {
                if pending_hyphen {
                    slug.push('-');
                    pending_hyphen = false;
                }
                slug.push(c);
            }
            // Other whitespace survived the trim (interior tabs etc.)
            c if c.is_whitespace() => pending_hyphen = !slug.is_empty(),
            _ => {}
        }
    }
    slug
}

/// Resolve a slug against a list of canonical brand names.
///
/// Pass 1: first candidate whose `to_slug` equals the input, in supplied
/// order (callers wanting determinism supply a stable, deduplicated list).
/// Pass 2: percent-decode the input and compare case-insensitively against
/// the raw names — legacy links encoded the brand name itself rather than a
/// dash-separated slug. `None` only when both passes fail; the page layer
/// must then surface "brand not found" and must not create an order.
pub fn find_brand_by_slug<'a>(slug: &str, brand_names: &'a [String]) -> Option<&'a str> {
    if let Some(name) = brand_names.iter().find(|name| to_slug(name) == slug) {
        return Some(name.as_str());
    }

    let decoded = match urlencoding::decode(slug) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => slug.to_string(),
    };
    let decoded = decoded.to_lowercase();
    brand_names
        .iter()
        .find(|name| name.to_lowercase() == decoded)
        .map(|name| name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn slug_basic() {
        assert_eq!(to_slug("Mobile Legends"), "mobile-legends");
        assert_eq!(to_slug("  Genshin   Impact  "), "genshin-impact");
        assert_eq!(to_slug("Mobile Legends: Bang Bang"), "mobile-legends-bang-bang");
        assert_eq!(to_slug("PUBG Mobile (Global)"), "pubg-mobile-global");
    }

    #[test]
    fn slug_collapses_hyphen_runs() {
        assert_eq!(to_slug("Free--Fire - MAX"), "free-fire-max");
        assert_eq!(to_slug("- Edge -"), "edge");
        assert_eq!(to_slug("!!!"), "");
    }

    #[test]
    fn slug_is_idempotent() {
        for name in [
            "Mobile Legends: Bang Bang",
            "Ragnarok M: Eternal Love",
            "  8 Ball Pool  ",
            "Honkai: Star Rail",
            "---",
            "",
        ] {
            let once = to_slug(name);
            assert_eq!(to_slug(&once), once, "not idempotent for {name:?}");
        }
    }

    #[test]
    fn find_roundtrips_through_slug() {
        let candidates = names(&["Free Fire", "Mobile Legends: Bang Bang", "Genshin Impact"]);
        for name in &candidates {
            assert_eq!(find_brand_by_slug(&to_slug(name), &candidates), Some(name.as_str()));
        }
    }

    #[test]
    fn find_prefers_first_occurrence() {
        // "Free Fire!" and "Free Fire" slugify identically
        let candidates = names(&["Free Fire!", "Free Fire"]);
        assert_eq!(find_brand_by_slug("free-fire", &candidates), Some("Free Fire!"));
    }

    #[test]
    fn find_falls_back_to_percent_decoded_name() {
        let candidates = names(&["Mobile Legends", "Free Fire"]);
        // Legacy link encoded the raw name, not a slug
        assert_eq!(
            find_brand_by_slug("mobile%20legends", &candidates),
            Some("Mobile Legends")
        );
        assert_eq!(find_brand_by_slug("FREE%20FIRE", &candidates), Some("Free Fire"));
    }

    #[test]
    fn find_not_found() {
        assert_eq!(find_brand_by_slug("nonexistent-brand", &[]), None);
        let candidates = names(&["Mobile Legends"]);
        assert_eq!(find_brand_by_slug("nonexistent-brand", &candidates), None);
    }
}
