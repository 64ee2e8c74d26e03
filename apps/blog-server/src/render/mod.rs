//! HTML rendering for all blog pages.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/) for compile-time HTML
//! generation with automatic escaping of dynamic values. The single unescaped
//! injection is the post body, which is sanitized before it is ever stored.

mod components;
mod pages;
mod posts;

pub use components::error_page;
pub use pages::{about, contact};
pub use posts::{compose, detail, index};
