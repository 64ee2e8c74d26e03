//! Post list, detail, create and edit handlers.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use maud::Markup;

use quill_core::error::{DomainError, FieldError};
use quill_core::service::PostInput;
use quill_shared::PostForm;

use crate::middleware::error::AppResult;
use crate::render;
use crate::state::AppState;

/// GET /
pub async fn index(state: web::Data<AppState>) -> AppResult<Markup> {
    let posts = state.posts.all_posts().await?;
    Ok(render::index(&posts))
}

/// GET /post/{id}
pub async fn detail(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<Markup> {
    let post = state.posts.post_by_id(path.into_inner()).await?;
    Ok(render::detail(&post))
}

/// GET /new-post
pub async fn new_post_form() -> Markup {
    render::compose(&PostForm::default(), "/new-post", false, &[])
}

/// POST /new-post
pub async fn create_post(
    state: web::Data<AppState>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    match state.posts.create_post(to_input(&form)).await {
        Ok(post) => Ok(redirect_to_detail(post.id)),
        Err(err) => resubmit(form, "/new-post".to_string(), false, err),
    }
}

/// GET /edit-post/{id}
pub async fn edit_post_form(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<Markup> {
    let id = path.into_inner();
    let post = state.posts.post_by_id(id).await?;

    let form = PostForm {
        title: post.title,
        subtitle: post.subtitle,
        author: post.author,
        img_url: post.img_url,
        body: post.body,
    };

    Ok(render::compose(&form, &format!("/edit-post/{id}"), true, &[]))
}

/// POST /edit-post/{id}
pub async fn edit_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let form = form.into_inner();

    match state.posts.edit_post(id, to_input(&form)).await {
        Ok(post) => Ok(redirect_to_detail(post.id)),
        Err(err) => resubmit(form, format!("/edit-post/{id}"), true, err),
    }
}

fn to_input(form: &PostForm) -> PostInput {
    PostInput {
        title: form.title.clone(),
        subtitle: form.subtitle.clone(),
        author: form.author.clone(),
        img_url: form.img_url.clone(),
        body: form.body.clone(),
    }
}

fn redirect_to_detail(id: i32) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", format!("/post/{id}")))
        .finish()
}

/// Form feedback: redisplay the compose form with the entered values and the
/// violations listed. Anything that is not form feedback escalates to the
/// error middleware.
fn resubmit(
    form: PostForm,
    action: String,
    amend: bool,
    err: DomainError,
) -> AppResult<HttpResponse> {
    let (status, errors) = match err {
        DomainError::Validation(fields) => (StatusCode::UNPROCESSABLE_ENTITY, fields),
        DomainError::Conflict(message) => (
            StatusCode::CONFLICT,
            vec![FieldError::new("title", message)],
        ),
        other => return Err(other.into()),
    };

    let page = render::compose(&form, &action, amend, &errors);

    Ok(HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(page.into_string()))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test, web};

    use super::*;
    use crate::handlers;
    use crate::state::AppState;

    fn form(title: &str) -> PostForm {
        PostForm {
            title: title.to_string(),
            subtitle: "World".to_string(),
            author: "A".to_string(),
            img_url: "https://x/y.png".to_string(),
            body: "<p>Hi</p><script>bad()</script>".to_string(),
        }
    }

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::in_memory()))
                    .configure(handlers::configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn create_redirects_to_detail_with_sanitized_body() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/new-post")
            .set_form(form("Hello"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let location = resp
            .headers()
            .get("Location")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert_eq!(location, "/post/1");

        let req = test::TestRequest::get().uri(&location).to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = String::from_utf8(body.to_vec()).unwrap();

        assert!(html.contains("Hello"));
        assert!(html.contains("<p>Hi</p>"));
        assert!(!html.contains("bad()"));
    }

    #[actix_web::test]
    async fn duplicate_title_redisplays_the_form_with_values() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/new-post")
            .set_form(form("Hello"))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/new-post")
            .set_form(form("Hello"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body = test::read_body(resp).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("already exists"));
        // entered values survive the failed submission
        assert!(html.contains(r#"value="Hello""#));
    }

    #[actix_web::test]
    async fn empty_submission_lists_every_violated_field() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/new-post")
            .set_form(PostForm::default())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = test::read_body(resp).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        for field in ["title", "subtitle", "author", "img_url", "body"] {
            assert!(html.contains(&format!("{field}: must not be empty")));
        }
    }

    #[actix_web::test]
    async fn missing_post_renders_a_404_page() {
        let app = test_app!();

        let req = test::TestRequest::get().uri("/post/99").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn edit_keeps_the_publication_date() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/new-post")
            .set_form(form("Hello"))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/post/1").to_request();
        let before = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();

        let mut changed = form("Renamed");
        changed.body = "<p>updated</p>".to_string();
        let req = test::TestRequest::post()
            .uri("/edit-post/1")
            .set_form(changed)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);

        let req = test::TestRequest::get().uri("/post/1").to_request();
        let after = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();

        assert!(after.contains("Renamed"));
        assert!(after.contains("<p>updated</p>"));
        // the stamped date shows up unchanged on both pages
        let date_of = |html: &str| {
            let byline = &html[html.find("Posted by").unwrap()..];
            let date = &byline[byline.find(" on ").unwrap() + 4..];
            date[..date.find("</p>").unwrap()].to_string()
        };
        assert_eq!(date_of(&before), date_of(&after));
    }

    #[actix_web::test]
    async fn edit_of_missing_post_is_a_404() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/edit-post/42")
            .set_form(form("Hello"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
