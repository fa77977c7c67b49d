use log::debug;

use anchor::annotate_heading;
use document::Document;
use headings::Headings;
use slugify::{SlugRegistry, slugify};

/// Anchor is the library that turns flat HTML headings into linkable
/// ones: every `h1`–`h6` gets a stable, unique, human-readable id and a
/// trailing anchor element pointing back at it. Hosts call
/// [`HeadingAnchorer::transform`] explicitly with whatever content they
/// deem eligible; there is no global instance and no registration into
/// anyone's rendering pipeline.
pub mod anchor;
pub mod config;
pub mod document;
pub mod headings;
pub mod slugify;

pub use config::AnchorConfig;

pub struct HeadingAnchorer {
    config: AnchorConfig,
}

impl HeadingAnchorer {
    pub fn new() -> Self {
        Self::with_config(AnchorConfig::default())
    }

    pub fn with_config(config: AnchorConfig) -> Self {
        Self { config }
    }

    /// Annotate every heading of an HTML fragment.
    ///
    /// Empty input comes back untouched without ever reaching the
    /// parser. Each call owns a fresh document and slug registry, so
    /// concurrent calls on independent inputs never share state; slugs
    /// are unique within one call only.
    ///
    /// This never fails: malformed markup is repaired as well as the
    /// parser can manage, and if serialization somehow degrades the
    /// input is returned as-is.
    pub fn transform(&self, html: &str) -> String {
        if html.is_empty() {
            return String::new();
        }

        let document = Document::parse(html);
        let mut registry = SlugRegistry::new();

        for heading in Headings::new(&document) {
            let text = heading.as_node().text_contents();
            let slug = slugify(&text, &mut registry, &self.config);
            annotate_heading(&heading, &slug, &self.config.anchor_class);
        }

        debug!("anchored {} headings", registry.len());

        document.to_html().unwrap_or_else(|| html.to_string())
    }
}

impl Default for HeadingAnchorer {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot transform with the default configuration.
pub fn transform(html: &str) -> String {
    HeadingAnchorer::new().transform(html)
}
