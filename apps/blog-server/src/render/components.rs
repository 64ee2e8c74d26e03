//! Shared HTML components used across all blog pages.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages.

use actix_web::http::StatusCode;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Inline CSS for all blog pages. Flat design, spacing over borders.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fdfdfb;--fg:#1a1a1a;--fg2:#555;--fg3:#999;--accent:#0a6e5c;--border:rgba(10,110,92,.18)}
body{font-family:Georgia,"Times New Roman",serif;line-height:1.7;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
main{max-width:720px;width:100%;flex:1}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
img{max-width:100%;height:auto}
nav{max-width:720px;width:100%;display:flex;justify-content:space-between;align-items:baseline;margin-bottom:2rem}
nav .brand{font-size:1.3rem;font-weight:700;letter-spacing:-.01em;color:var(--fg)}
nav .nav-links{display:flex;gap:1.1rem;font-size:.95rem}
footer{margin-top:3rem;color:var(--fg3);font-size:.85rem}
.post-card{margin-bottom:2rem;padding-bottom:1.5rem;border-bottom:1px solid var(--border)}
.post-card h2{font-size:1.5rem;line-height:1.3;color:var(--fg)}
.post-card h3{font-size:1.05rem;font-weight:400;color:var(--fg2)}
.byline{color:var(--fg3);font-size:.85rem;font-style:italic;margin-top:.35rem}
.empty{color:var(--fg3)}
.cover{width:100%;max-height:320px;object-fit:cover;border-radius:6px;margin-bottom:1.25rem}
.post h1{font-size:2rem;line-height:1.25;letter-spacing:-.01em}
.post h2{font-size:1.15rem;font-weight:400;color:var(--fg2);margin:.35rem 0 .5rem}
.post-body{margin:1.5rem 0;font-size:1.05rem}
.post-body p{margin:.75rem 0}
.post-body h1,.post-body h2,.post-body h3{margin:1.25rem 0 .5rem}
.post-body ul,.post-body ol{margin:.75rem 0;padding-left:1.5rem}
.post-body pre{background:#f4f4f0;border:1px solid var(--border);border-radius:6px;padding:.75rem 1rem;overflow-x:auto}
.post-body table{border-collapse:collapse;margin:.75rem 0}
.post-body th,.post-body td{border:1px solid var(--border);padding:.4rem .75rem}
.compose label{display:block;margin-top:1rem;font-weight:600;font-size:.95rem}
.compose input,.compose textarea{width:100%;padding:.55rem .7rem;margin-top:.3rem;font:inherit;border:1px solid var(--border);border-radius:6px;background:#fff}
.compose textarea{resize:vertical}
.compose button{margin-top:1.25rem;padding:.6rem 1.4rem;font:inherit;color:#fff;background:var(--accent);border:none;border-radius:6px;cursor:pointer}
.field-errors{margin:1rem 0;padding:.75rem 1rem .75rem 2rem;border:1px solid #c0392b;border-radius:6px;color:#c0392b;background:#fdf0ee}
.error h1{font-size:2rem}
.static-page h1{font-size:1.8rem;margin-bottom:.75rem}
"#;

/// Wrap page content in the shared document shell with nav and footer.
pub fn page_shell(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                nav {
                    a class="brand" href="/" { "Quill" }
                    div class="nav-links" {
                        a href="/" { "Home" }
                        a href="/new-post" { "New Post" }
                        a href="/about" { "About" }
                        a href="/contact" { "Contact" }
                    }
                }
                main { (content) }
                footer { "Powered by Quill" }
            }
        }
    }
}

/// Standalone error page for failures that are not form feedback.
pub fn error_page(status: StatusCode, message: &str) -> Markup {
    page_shell(
        &format!("{} - Quill", status.as_u16()),
        html! {
            section class="error" {
                h1 { (status.as_u16()) " " (status.canonical_reason().unwrap_or("Error")) }
                p { (message) }
                p { a href="/" { "Back to all posts" } }
            }
        },
    )
}
