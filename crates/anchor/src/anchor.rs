use kuchiki::{Attribute, ElementData, ExpandedName, NodeDataRef, NodeRef};
use markup5ever::{QualName, local_name, namespace_url, ns};

/// Writes the slug onto a heading and appends its self-link.
///
/// The heading gets `id="{slug}"` and a new `<a class="{anchor_class}"
/// href="#{slug}"></a>` as its last child. No other attribute, sibling
/// or ancestor is touched.
pub fn annotate_heading(heading: &NodeDataRef<ElementData>, slug: &str, anchor_class: &str) {
    heading
        .attributes
        .borrow_mut()
        .insert(local_name!("id"), slug.to_string());

    let link = NodeRef::new_element(
        QualName::new(None, ns!(html), local_name!("a")),
        vec![
            (
                ExpandedName::new("", "class"),
                Attribute {
                    prefix: None,
                    value: anchor_class.to_string(),
                },
            ),
            (
                ExpandedName::new("", "href"),
                Attribute {
                    prefix: None,
                    value: format!("#{slug}"),
                },
            ),
        ],
    );

    heading.as_node().append(link);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::document::Document;
    use crate::headings::Headings;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sets_id_and_appends_link() {
        let doc = Document::parse("<h2>Title</h2>");
        let heading = Headings::new(&doc).next().unwrap();

        annotate_heading(&heading, "title", "anchorlink dashicons-before");

        assert_eq!(
            doc.to_html(),
            Some(
                "<h2 id=\"title\">Title\
                 <a class=\"anchorlink dashicons-before\" href=\"#title\"></a></h2>"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_existing_attributes_untouched() {
        let doc = Document::parse("<h3 class=\"fancy\">Keep</h3>");
        let heading = Headings::new(&doc).next().unwrap();

        annotate_heading(&heading, "keep", "selflink");

        let html = doc.to_html().unwrap();
        assert!(html.contains("class=\"fancy\""));
        assert!(html.contains("id=\"keep\""));
        assert!(html.contains("<a class=\"selflink\" href=\"#keep\"></a>"));
    }

    #[test]
    fn test_siblings_unaffected() {
        let doc = Document::parse("<h2>A</h2><p>between</p>");
        let heading = Headings::new(&doc).next().unwrap();

        annotate_heading(&heading, "a", "selflink");

        let html = doc.to_html().unwrap();
        assert!(html.contains("<p>between</p>"));
    }
}
