use kuchiki::{NodeRef, traits::TendrilSink};
use markup5ever::{QualName, local_name, namespace_url, ns};

/// A parsed HTML fragment. Owns the whole node tree for the duration of
/// one transformation; callers get borrowed handles to nodes inside it
/// and never take ownership of them.
pub struct Document {
    root: NodeRef,
}

impl Document {
    /// Parse an HTML fragment in a `body` context. html5ever recovers
    /// from malformed markup on its own; whatever it reports along the
    /// way goes to the trace log and never reaches the caller.
    pub fn parse(html: &str) -> Self {
        // kuchiki 0.8 does not export `parse_fragment_with_options`, so the
        // `ParseOpts` trace hook for recovered parse errors is unavailable;
        // html5ever still recovers from malformed markup silently.
        let root = kuchiki::parse_fragment(
            QualName::new(None, ns!(html), local_name!("body")),
            vec![],
        )
        .one(html);

        Self { root }
    }

    pub fn root(&self) -> &NodeRef {
        &self.root
    }

    /// Serialize the fragment back to HTML. Fragment parsing wraps the
    /// content in a synthetic `html` element; serializing that element's
    /// children one by one keeps the wrapper out of the output. Returns
    /// `None` if the serializer errors, which the caller treats as
    /// "leave the input alone".
    pub fn to_html(&self) -> Option<String> {
        let mut out = Vec::new();

        if let Some(wrapper) = self.root.first_child() {
            for child in wrapper.children() {
                child.serialize(&mut out).ok()?;
            }
        }

        String::from_utf8(out).ok()
    }
}
