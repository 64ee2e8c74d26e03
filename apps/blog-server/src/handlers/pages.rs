//! Static pages.

use maud::Markup;

use crate::render;

/// GET /about
pub async fn about() -> Markup {
    render::about()
}

/// GET /contact
pub async fn contact() -> Markup {
    render::contact()
}
