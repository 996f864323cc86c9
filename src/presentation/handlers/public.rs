use crate::application::moderation_service::ModerationService;
use crate::presentation::dto::NewPostForm;
use crate::presentation::error::{ApiError, PageError};
use crate::presentation::handlers::{redirect_to, request_id};
use crate::presentation::templates::{IndexTemplate, NewPostTemplate, html_response};
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use tracing::info;

#[get("/")]
pub async fn index(
    service: web::Data<ModerationService>,
) -> Result<HttpResponse, PageError> {
    let posts = service
        .approved_posts()
        .await
        .map_err(|e| PageError::new("Error fetching posts", e))?;

    html_response(&IndexTemplate { posts }).map_err(|e| PageError::new("Error fetching posts", e))
}

#[get("/post")]
pub async fn new_post_form() -> Result<HttpResponse, PageError> {
    html_response(&NewPostTemplate).map_err(|e| PageError::new("Error rendering form", e))
}

#[post("/post")]
pub async fn submit_post(
    req: HttpRequest,
    service: web::Data<ModerationService>,
    form: web::Form<NewPostForm>,
) -> Result<HttpResponse, PageError> {
    let NewPostForm { content, author } = form.into_inner();
    let post = service
        .submit(content, author)
        .await
        .map_err(|e| PageError::new("Error creating post", e))?;

    info!(
        request_id = %request_id(&req),
        post_id = %post.id,
        "post submitted for review"
    );

    Ok(redirect_to("/"))
}

/// Machine-readable feed of the wall, approved posts only.
#[get("/posts")]
pub async fn approved_feed(
    service: web::Data<ModerationService>,
) -> Result<HttpResponse, ApiError> {
    let posts = service
        .approved_posts()
        .await
        .map_err(|e| ApiError::new("Error fetching approved posts", e))?;

    Ok(HttpResponse::Ok().json(posts))
}
