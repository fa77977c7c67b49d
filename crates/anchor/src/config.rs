use serde::{Deserialize, Serialize};

/// Knobs for the anchoring pass. Defaults match the classic rendering
/// hook this library grew out of, so a zero-config construction produces
/// the same markup that stylesheets in the wild already target.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AnchorConfig {
    /// Class attribute written onto every injected anchor link.
    pub anchor_class: String,
    /// Base slug used when a heading's text normalizes to nothing,
    /// e.g. a heading made entirely of punctuation.
    pub empty_slug_placeholder: String,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            anchor_class: "anchorlink dashicons-before".into(),
            empty_slug_placeholder: "section".into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaultyness() {
        let config = AnchorConfig::default();

        assert_eq!(config.anchor_class, "anchorlink dashicons-before");
        assert_eq!(config.empty_slug_placeholder, "section");
    }

    #[test]
    fn test_overrides_stick() {
        let config = AnchorConfig {
            anchor_class: "headerlink".into(),
            ..Default::default()
        };

        assert_eq!(config.anchor_class, "headerlink");
        assert_eq!(config.empty_slug_placeholder, "section");
    }
}
