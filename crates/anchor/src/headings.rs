use kuchiki::iter::{Descendants, Elements, Select};
use kuchiki::{ElementData, NodeDataRef, NodeRef};

use crate::document::Document;

/// Lazy walk over every heading element of a document: all `h1`s in
/// document order, then all `h2`s, and so on down to `h6`. Collision
/// suffixes depend on this ordering, which is why two same-titled
/// headings at different levels get numbered by level rather than by
/// position on the page.
///
/// The walk runs against the live tree, so headings yielded earlier may
/// already carry their anchor by the time later ones come up. Nothing is
/// ever detached, so the cursor stays valid.
pub struct Headings {
    root: NodeRef,
    level: u8,
    current: Option<Select<Elements<Descendants>>>,
}

impl Headings {
    pub fn new(document: &Document) -> Self {
        Self {
            root: document.root().clone(),
            level: 0,
            current: None,
        }
    }
}

impl Iterator for Headings {
    type Item = NodeDataRef<ElementData>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(headings) = self.current.as_mut() {
                if let Some(heading) = headings.next() {
                    return Some(heading);
                }
            }

            if self.level >= 6 {
                return None;
            }

            self.level += 1;
            self.current = self.root.select(&format!("h{}", self.level)).ok();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn heading_texts(html: &str) -> Vec<String> {
        let doc = Document::parse(html);
        Headings::new(&doc)
            .map(|h| h.as_node().text_contents())
            .collect()
    }

    #[test]
    fn test_yields_nothing_without_headings() {
        assert_eq!(heading_texts("<p>hello</p>"), Vec::<String>::new());
    }

    #[test]
    fn test_single_level_in_document_order() {
        assert_eq!(
            heading_texts("<h2>one</h2><p>x</p><h2>two</h2>"),
            vec!["one", "two"]
        );
    }

    #[test]
    fn test_levels_before_position() {
        // The h1 comes last on the page but first in the walk.
        assert_eq!(
            heading_texts("<h3>c</h3><h2>b</h2><h1>a</h1>"),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_all_six_levels() {
        let html = "<h6>6</h6><h5>5</h5><h4>4</h4><h3>3</h3><h2>2</h2><h1>1</h1>";
        assert_eq!(heading_texts(html), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_nested_headings_found() {
        assert_eq!(
            heading_texts("<div><section><h2>deep</h2></section></div>"),
            vec!["deep"]
        );
    }
}
