//! Allow-list HTML sanitization for rich-text post bodies.
//!
//! User-submitted editor content is the only untrusted-markup path in the
//! system. Everything not on the allow-list is removed before persistence,
//! so stored bodies can be rendered without further escaping.

use std::collections::{HashMap, HashSet};

use ammonia::Builder;

/// Elements that survive sanitization. Closed set; anything else is
/// unwrapped (tag removed, inner text kept).
const ALLOWED_TAGS: &[&str] = &[
    "a", "abbr", "acronym", "address", "b", "br", "div", "dl", "dt", "em", "h1", "h2", "h3", "h4",
    "h5", "h6", "hr", "i", "img", "li", "ol", "p", "pre", "q", "s", "small", "strike", "span",
    "sub", "sup", "table", "tbody", "td", "tfoot", "th", "thead", "tr", "tt", "u", "ul",
];

/// Clean rich-text editor output down to the allowed markup.
///
/// Pure transform: malformed or unbalanced input is parsed permissively and
/// normalized to valid HTML, never rejected. Only anchors and images keep
/// any attributes (`href`/`target`/`title` and `src`/`alt`/`width`/`height`
/// respectively); `script` and `style` are dropped together with their
/// contents.
pub fn sanitize(raw: &str) -> String {
    let mut tag_attributes = HashMap::new();
    tag_attributes.insert("a", HashSet::from(["href", "target", "title"]));
    tag_attributes.insert("img", HashSet::from(["src", "alt", "width", "height"]));

    Builder::default()
        .tags(ALLOWED_TAGS.iter().copied().collect())
        .generic_attributes(HashSet::new())
        .tag_attributes(tag_attributes)
        .link_rel(None)
        .clean(raw)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_script_but_keeps_surrounding_text() {
        let out = sanitize("<script>alert(1)</script>hello");
        assert_eq!(out, "hello");
    }

    #[test]
    fn script_content_is_not_persisted_alongside_allowed_markup() {
        let out = sanitize("<p>Hi</p><script>bad()</script>");
        assert_eq!(out, "<p>Hi</p>");
    }

    #[test]
    fn unwraps_unknown_elements_keeping_inner_text() {
        let out = sanitize("<article><p>kept</p></article>");
        assert_eq!(out, "<p>kept</p>");
    }

    #[test]
    fn drops_attributes_not_on_the_allow_list() {
        let out = sanitize(r#"<a href="https://example.com" onclick="steal()" title="t">link</a>"#);
        assert!(out.contains(r#"href="https://example.com""#));
        assert!(out.contains(r#"title="t""#));
        assert!(!out.contains("onclick"));
    }

    #[test]
    fn non_anchor_elements_carry_no_attributes() {
        let out = sanitize(r#"<p class="lead" id="x" style="color:red">text</p>"#);
        assert_eq!(out, "<p>text</p>");
    }

    #[test]
    fn image_keeps_only_src_alt_and_dimensions() {
        let out = sanitize(r#"<img src="https://x/y.png" alt="pic" width="10" height="5" onerror="x()">"#);
        assert!(out.contains(r#"src="https://x/y.png""#));
        assert!(out.contains(r#"alt="pic""#));
        assert!(out.contains(r#"width="10""#));
        assert!(out.contains(r#"height="5""#));
        assert!(!out.contains("onerror"));
    }

    #[test]
    fn javascript_urls_do_not_survive() {
        let out = sanitize(r#"<a href="javascript:alert(1)">x</a>"#);
        assert!(!out.contains("javascript:"));
    }

    #[test]
    fn normalizes_unbalanced_markup() {
        let out = sanitize("<p>unclosed <b>bold");
        assert_eq!(out, "<p>unclosed <b>bold</b></p>");
    }

    #[test]
    fn no_link_rel_is_injected() {
        let out = sanitize(r#"<a href="https://example.com" target="_blank">x</a>"#);
        assert!(!out.contains("rel="));
        assert!(out.contains(r#"target="_blank""#));
    }

    #[test]
    fn sanitization_is_idempotent() {
        let samples = [
            "<p>Hi</p><script>bad()</script>",
            r#"<a href="https://example.com" onclick="x">l</a><article>t</article>"#,
            "<p>unclosed <b>bold",
            r#"<table><tr><td>cell</td></tr></table><tt>mono</tt><strike>old</strike>"#,
        ];
        for raw in samples {
            let once = sanitize(raw);
            assert_eq!(sanitize(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn keeps_the_full_allowed_element_set() {
        let raw = "<h1>a</h1><h6>b</h6><ul><li>c</li></ul><ol><li>d</li></ol>\
                   <dl><dt>e</dt></dl><blockquote>f</blockquote><q>g</q><hr>";
        let out = sanitize(raw);
        for tag in ["<h1>", "<h6>", "<ul>", "<ol>", "<li>", "<dl>", "<dt>", "<q>", "<hr>"] {
            assert!(out.contains(tag), "missing {tag} in {out}");
        }
        // blockquote is not on the list and gets unwrapped
        assert!(!out.contains("blockquote"));
        assert!(out.contains('f'));
    }
}
