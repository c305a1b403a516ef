// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, AuthorDto},
    queries::articles::{GetArticleByIdQuery, GetArticlesByAuthorQuery, GetArticlesByTagQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full article state sent by callers on create and update. Absent fields
/// default to empty, so an update that omits a field clears it.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ArticleRequest {
    pub title: String,
    pub subtitle: String,
    pub introduction: String,
    pub body: String,
    pub tags: Vec<String>,
    pub author: AuthorDto,
    pub likes: i32,
    pub dislikes: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn json(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

#[utoipa::path(
    post,
    path = "/posts/v1",
    request_body = ArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Title or body missing.", body = ErrorResponse),
        (status = 500, description = "Storage failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        subtitle: payload.subtitle,
        introduction: payload.introduction,
        body: payload.body,
        tags: payload.tags,
        author: payload.author,
        likes: payload.likes,
        dislikes: payload.dislikes,
    };

    let article = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    get,
    path = "/posts/v1",
    responses(
        (status = 200, description = "Every stored article.", body = [ArticleDto]),
        (status = 500, description = "Storage failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .get_articles()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/posts/v1/{post_id}",
    params(("post_id" = String, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No article with that id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_id(
    Extension(state): Extension<HttpState>,
    Path(post_id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id: post_id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/posts/v1/author/{author_id}",
    params(("author_id" = String, Path, description = "Author identifier")),
    responses(
        (status = 200, description = "Articles written by the author.", body = [ArticleDto])
    ),
    tag = "Articles"
)]
pub async fn get_articles_by_author(
    Extension(state): Extension<HttpState>,
    Path(author_id): Path<String>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .get_articles_by_author(GetArticlesByAuthorQuery { author_id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/posts/v1/tag/{tag_name}",
    params(("tag_name" = String, Path, description = "Tag to look for")),
    responses(
        (status = 200, description = "Articles carrying the tag.", body = [ArticleDto])
    ),
    tag = "Articles"
)]
pub async fn get_articles_by_tag(
    Extension(state): Extension<HttpState>,
    Path(tag_name): Path<String>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .get_articles_by_tag(GetArticlesByTagQuery { tag: tag_name })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/posts/v1/{post_id}",
    params(("post_id" = String, Path, description = "Article identifier")),
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "Updated article.", body = ArticleDto),
        (status = 400, description = "Title or body missing.", body = ErrorResponse),
        (status = 404, description = "No article with that id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(post_id): Path<String>,
    Json(payload): Json<ArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id: post_id,
        title: payload.title,
        subtitle: payload.subtitle,
        introduction: payload.introduction,
        body: payload.body,
        tags: payload.tags,
        author: payload.author,
        likes: payload.likes,
        dislikes: payload.dislikes,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/posts/v1/{post_id}",
    params(("post_id" = String, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article deleted.", body = MessageResponse),
        (status = 404, description = "No article with that id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(post_id): Path<String>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand {
            id: post_id.clone(),
        })
        .await
        .into_http()?;

    Ok(MessageResponse::json(format!("article [{post_id}] deleted")))
}

#[utoipa::path(
    delete,
    path = "/posts/v1",
    responses(
        (status = 200, description = "Every article deleted.", body = MessageResponse),
        (status = 404, description = "There was nothing to delete.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_all_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .article_commands
        .delete_all_articles()
        .await
        .into_http()?;

    Ok(MessageResponse::json("all articles deleted"))
}
