use crate::application::moderation_service::ModerationService;
use crate::presentation::dto::ModerationForm;
use crate::presentation::error::PageError;
use crate::presentation::handlers::{redirect_to, request_id};
use crate::presentation::templates::{AdminPostsTemplate, html_response};
use crate::presentation::utils::AdminUser;
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use tracing::{debug, info};
use uuid::Uuid;

#[get("/posts")]
pub async fn list_posts(
    req: HttpRequest,
    admin: AdminUser,
    service: web::Data<ModerationService>,
) -> Result<HttpResponse, PageError> {
    let posts = service
        .all_posts()
        .await
        .map_err(|e| PageError::new("Error fetching posts", e))?;

    info!(
        request_id = %request_id(&req),
        admin = %admin.username,
        total = posts.len(),
        "moderation queue viewed"
    );

    html_response(&AdminPostsTemplate { posts })
        .map_err(|e| PageError::new("Error fetching posts", e))
}

#[post("/posts/{id}")]
pub async fn decide_post(
    req: HttpRequest,
    admin: AdminUser,
    service: web::Data<ModerationService>,
    path: web::Path<String>,
    form: web::Form<ModerationForm>,
) -> Result<HttpResponse, PageError> {
    let approved = form.is_approval();

    // Ids are opaque. A path segment that does not parse cannot name a
    // stored post, so it gets the same silent no-op as an unknown id.
    match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => {
            service
                .decide(id, approved)
                .await
                .map_err(|e| PageError::new("Error updating post", e))?;

            info!(
                request_id = %request_id(&req),
                admin = %admin.username,
                post_id = %id,
                approved,
                "post moderated"
            );
        }
        Err(_) => {
            debug!(
                request_id = %request_id(&req),
                admin = %admin.username,
                "moderation target is not a valid id, ignoring"
            );
        }
    }

    Ok(redirect_to("/admin/posts"))
}
