use std::collections::HashMap;
use std::sync::LazyLock;

use indexmap::IndexSet;
use log::trace;
use regex::Regex;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::config::AnchorConfig;

static DASH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*[–—]\s*").unwrap());
static NON_SLUG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9-]+").unwrap());
static TRIPLE_HYPHEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{3,}").unwrap());
// Needs lookaround, which the regex crate deliberately leaves out.
static WORD_INTERNAL_HYPHEN_RE: LazyLock<fancy_regex::Regex> =
    LazyLock::new(|| fancy_regex::Regex::new(r"(?<=\w)-(?=\w)").unwrap());

/// Converts heading text into a URL-safe slug, before any uniqueness
/// suffix is applied.
///
/// En/em dashes become a literal `--` and survive to the end: runs of
/// three or more hyphens collapse to two, never one. Hyphens inside
/// compound words are dropped instead (`Re-use` → `reuse`), so the two
/// rules don't fight each other.
///
/// Example: `Über uns – Kontakt` → `ueber-uns--kontakt`
pub fn slug_base(input: &str) -> String {
    let text = DASH_RE.replace_all(input, "--");
    let text = WORD_INTERNAL_HYPHEN_RE.replace_all(&text, "");
    let text = fold_german(&text);
    let text = text.replace('&', "-");

    let lowered = text.to_lowercase();
    let stripped = lowered
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>();

    let slug = NON_SLUG_RE.replace_all(&stripped, "-");
    let slug = slug.trim_matches('-');

    TRIPLE_HYPHEN_RE.replace_all(slug, "--").into_owned()
}

/// German umlauts and eszett expand to their digraphs before the generic
/// accent strip runs, so `Ü` keeps its `e` instead of degrading to `u`.
fn fold_german(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            'Ä' => out.push_str("Ae"),
            'ä' => out.push_str("ae"),
            'Ö' => out.push_str("Oe"),
            'ö' => out.push_str("oe"),
            'Ü' => out.push_str("Ue"),
            'ü' => out.push_str("ue"),
            'ß' => out.push_str("ss"),
            _ => out.push(c),
        }
    }

    out
}

/// Slugify `text` and claim a document-unique variant of it from the
/// registry. The registry must be the one used for every other heading
/// of the same document; uniqueness only holds within one registry.
pub fn slugify(text: &str, registry: &mut SlugRegistry, config: &AnchorConfig) -> String {
    let mut base = slug_base(text);

    if base.is_empty() {
        base = config.empty_slug_placeholder.clone();
    }

    let slug = registry.claim(base);
    trace!("assigned slug {slug:?} for heading text {text:?}");
    slug
}

/// Every slug handed out during one transformation, in assignment order.
///
/// `next_suffix` remembers where the last scan for a given base ended so
/// a document full of identically-titled headings doesn't rescan the
/// whole suffix range each time. Entries below the hint are known to be
/// taken, so starting there yields the same slug a plain scan from 2
/// would find.
#[derive(Debug, Default)]
pub struct SlugRegistry {
    assigned: IndexSet<String>,
    next_suffix: HashMap<String, u32>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `base` itself if it is still free, otherwise the first free
    /// `base-2`, `base-3`, … variant. The claimed slug is registered
    /// before returning, so no later claim can collide with it.
    pub fn claim(&mut self, base: String) -> String {
        if self.assigned.insert(base.clone()) {
            return base;
        }

        let mut i = self.next_suffix.get(&base).copied().unwrap_or(2);
        loop {
            let candidate = format!("{base}-{i}");
            if self.assigned.insert(candidate.clone()) {
                self.next_suffix.insert(base, i + 1);
                return candidate;
            }
            i += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// Slugs in the order they were assigned.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.assigned.iter().map(String::as_str)
    }
}
