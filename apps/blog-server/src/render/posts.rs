//! Post list, detail and compose-form pages.

use maud::{Markup, PreEscaped, html};

use quill_core::domain::Post;
use quill_core::error::FieldError;
use quill_shared::PostForm;

use super::components::page_shell;

/// Front page: every post, oldest first.
pub fn index(posts: &[Post]) -> Markup {
    page_shell(
        "Quill",
        html! {
            section class="post-list" {
                @if posts.is_empty() {
                    p class="empty" { "Nothing published yet." }
                }
                @for post in posts {
                    article class="post-card" {
                        a href={ "/post/" (post.id) } {
                            h2 { (post.title) }
                            h3 { (post.subtitle) }
                        }
                        p class="byline" { "Posted by " (post.author) " on " (post.date) }
                    }
                }
            }
        },
    )
}

/// Single post page.
///
/// The body is injected unescaped; it has already been sanitized before
/// storage.
pub fn detail(post: &Post) -> Markup {
    page_shell(
        &post.title,
        html! {
            article class="post" {
                img class="cover" src=(post.img_url) alt=(post.title);
                h1 { (post.title) }
                h2 { (post.subtitle) }
                p class="byline" { "Posted by " (post.author) " on " (post.date) }
                div class="post-body" { (PreEscaped(post.body.as_str())) }
                p { a href={ "/edit-post/" (post.id) } { "Edit Post" } }
            }
        },
    )
}

/// Compose form, shared by the create and edit pages.
///
/// On a failed submission the entered values come back in `form` and the
/// violations in `errors`, so nothing the author typed is lost.
pub fn compose(form: &PostForm, action: &str, amend: bool, errors: &[FieldError]) -> Markup {
    let heading = if amend { "Edit Post" } else { "New Post" };

    page_shell(
        heading,
        html! {
            section class="compose" {
                h1 { (heading) }
                @if !errors.is_empty() {
                    ul class="field-errors" {
                        @for error in errors {
                            li { (error) }
                        }
                    }
                }
                form method="post" action=(action) {
                    label for="title" { "Blog Post Title" }
                    input type="text" id="title" name="title" value=(form.title);
                    label for="subtitle" { "Subtitle" }
                    input type="text" id="subtitle" name="subtitle" value=(form.subtitle);
                    label for="author" { "Your Name" }
                    input type="text" id="author" name="author" value=(form.author);
                    label for="img_url" { "Blog Image URL" }
                    input type="text" id="img_url" name="img_url" value=(form.img_url);
                    label for="body" { "Blog Content" }
                    textarea id="body" name="body" rows="14" { (form.body) }
                    button type="submit" { "Submit Post" }
                }
            }
        },
    )
}
