//! Static about and contact pages.

use maud::{Markup, html};

use super::components::page_shell;

/// GET /about content.
pub fn about() -> Markup {
    page_shell(
        "About Us",
        html! {
            section class="static-page" {
                h1 { "About Us" }
                p {
                    "Quill is a small writing space. Posts are composed in a \
                     rich-text editor and published as-is, with the markup \
                     trimmed down to a safe, readable subset."
                }
            }
        },
    )
}

/// GET /contact content.
pub fn contact() -> Markup {
    page_shell(
        "Contact Me",
        html! {
            section class="static-page" {
                h1 { "Contact Me" }
                p {
                    "Questions, corrections or ideas for a post? Write to "
                    a href="mailto:hello@quill.example" { "hello@quill.example" }
                    " and you will hear back within a few days."
                }
            }
        },
    )
}
