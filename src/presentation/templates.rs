use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use askama::Template;

use crate::domain::error::DomainError;
use crate::domain::post::Post;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub posts: Vec<Post>,
}

#[derive(Template)]
#[template(path = "new_post.html")]
pub struct NewPostTemplate;

#[derive(Template)]
#[template(path = "admin_posts.html")]
pub struct AdminPostsTemplate {
    pub posts: Vec<Post>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub message: &'a str,
    pub error: String,
}

/// Renders a template into a 200 HTML response.
pub fn html_response(template: &impl Template) -> Result<HttpResponse, DomainError> {
    let body = template
        .render()
        .map_err(|e| DomainError::Render(e.to_string()))?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_lists_posts() {
        let page = IndexTemplate {
            posts: vec![Post::new("Hello world".into(), "Alice".into())],
        };
        let html = page.render().unwrap();
        assert!(html.contains("Hello world"));
        assert!(html.contains("Alice"));
    }

    #[test]
    fn index_escapes_markup_in_content() {
        let page = IndexTemplate {
            posts: vec![Post::new("<script>alert(1)</script>".into(), "Mallory".into())],
        };
        let html = page.render().unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn error_page_carries_message_and_detail() {
        let page = ErrorTemplate {
            message: "Error fetching posts",
            error: "storage error: connection refused".into(),
        };
        let html = page.render().unwrap();
        assert!(html.contains("Error fetching posts"));
        assert!(html.contains("connection refused"));
    }
}
