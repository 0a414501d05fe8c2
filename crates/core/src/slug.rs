//! Title → slug normalization and uniqueness candidates.
//!
//! Slugs are the public identifier of a project (`/projects/{slug}`), so the
//! output alphabet is restricted to `[a-z0-9-]` with no leading, trailing, or
//! doubled hyphens.

use std::sync::LazyLock;

use regex::Regex;

/// Characters removed outright after lowercasing.
static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("valid regex"));

/// Runs of whitespace and hyphens collapse to a single hyphen.
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s-]+").expect("valid regex"));

/// Base used when a title normalizes to nothing (e.g. `"!!!"`).
pub const FALLBACK_SLUG: &str = "project";

/// Upper bound on suffixed candidates tried before giving up.
pub const MAX_SLUG_ATTEMPTS: usize = 1000;

/// Convert a title into a URL-safe slug.
///
/// ```
/// use folio_core::slug::generate_slug;
///
/// assert_eq!(generate_slug("My App"), "my-app");
/// assert_eq!(generate_slug("  Rust -- & WebAssembly! "), "rust-webassembly");
/// ```
pub fn generate_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = DISALLOWED_RE.replace_all(&lowered, "");
    let collapsed = SEPARATOR_RE.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}

/// Like [`generate_slug`], but never empty: falls back to [`FALLBACK_SLUG`].
pub fn slug_base(title: &str) -> String {
    let slug = generate_slug(title);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Append the numeric disambiguator `n` to `base`.
pub fn with_suffix(base: &str, n: usize) -> String {
    format!("{base}-{n}")
}

/// Candidate slugs in the order they should be probed:
/// `base`, `base-1`, `base-2`, ... up to [`MAX_SLUG_ATTEMPTS`] entries.
pub fn candidates(base: &str) -> impl Iterator<Item = String> + '_ {
    std::iter::once(base.to_string())
        .chain((1..MAX_SLUG_ATTEMPTS).map(move |n| with_suffix(base, n)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "My App",
        "  leading and trailing  ",
        "Rust + WebAssembly: a love story",
        "---dashes---everywhere---",
        "Café Déjà Vu",
        "tabs\tand\nnewlines",
        "UPPER_case_with_underscores",
        "2024 Year in Review",
        "!!!",
        "",
        "a",
        "emoji 🚀 launch",
    ];

    fn is_clean(slug: &str) -> bool {
        let re = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
        slug.is_empty() || re.is_match(slug)
    }

    #[test]
    fn basic_title() {
        assert_eq!(generate_slug("My App"), "my-app");
    }

    #[test]
    fn strips_punctuation_and_collapses_separators() {
        assert_eq!(
            generate_slug("Rust + WebAssembly: a love story"),
            "rust-webassembly-a-love-story"
        );
        assert_eq!(generate_slug("---dashes---everywhere---"), "dashes-everywhere");
        assert_eq!(generate_slug("tabs\tand\nnewlines"), "tabs-and-newlines");
    }

    #[test]
    fn non_ascii_letters_are_dropped() {
        assert_eq!(generate_slug("Café Déjà Vu"), "caf-dj-vu");
        assert_eq!(generate_slug("emoji 🚀 launch"), "emoji-launch");
    }

    #[test]
    fn underscores_are_not_separators() {
        assert_eq!(
            generate_slug("UPPER_case_with_underscores"),
            "uppercasewithunderscores"
        );
    }

    #[test]
    fn output_alphabet_is_restricted() {
        for title in SAMPLES {
            let slug = generate_slug(title);
            assert!(is_clean(&slug), "{title:?} produced unclean slug {slug:?}");
        }
    }

    #[test]
    fn generation_is_idempotent() {
        for title in SAMPLES {
            let once = generate_slug(title);
            assert_eq!(generate_slug(&once), once, "not idempotent for {title:?}");
        }
    }

    #[test]
    fn empty_slug_falls_back() {
        assert_eq!(generate_slug("!!!"), "");
        assert_eq!(slug_base("!!!"), FALLBACK_SLUG);
        assert_eq!(slug_base("My App"), "my-app");
    }

    #[test]
    fn candidates_start_with_base_then_count_up() {
        let first: Vec<String> = candidates("my-app").take(4).collect();
        assert_eq!(first, vec!["my-app", "my-app-1", "my-app-2", "my-app-3"]);
        assert_eq!(candidates("x").count(), MAX_SLUG_ATTEMPTS);
    }
}
