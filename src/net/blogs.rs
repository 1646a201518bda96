//! Blog CRUD endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these and always refetch after a write; nothing here caches.
//!
//! DESIGN
//! ======
//! List and create payloads differ between envelope modes (see `envelope`);
//! get and update are bare `Blog` bodies in both.

#[cfg(test)]
#[path = "blogs_test.rs"]
mod blogs_test;

use super::client::ApiClient;
use super::envelope::{BlogListEnvelope, decode_record};
use super::error::ApiError;
use super::http::{HttpRequest, to_body};
use super::types::{Blog, BlogDraft, BlogPage, BlogPatch, PaginationParams};

pub const LIST_ENDPOINT: &str = "/blogs";
pub const MY_BLOGS_ENDPOINT: &str = "/blogs/my";
pub const CREATE_ENDPOINT: &str = "/blogs/blog";

pub fn blog_endpoint(id: i64) -> String {
    format!("/blogs/{id}")
}

#[derive(Clone, Debug)]
pub struct BlogService {
    client: ApiClient,
}

impl BlogService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// One page of every active blog, sorted and optionally searched.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport/HTTP failure or an unexpected body.
    pub async fn list_all(&self, params: &PaginationParams) -> Result<BlogPage, ApiError> {
        let request = HttpRequest::get(LIST_ENDPOINT).with_query(params.list_all_query());
        self.list(request).await
    }

    /// One page of the caller's own blogs.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport/HTTP failure or an unexpected body.
    pub async fn list_mine(&self, params: &PaginationParams) -> Result<BlogPage, ApiError> {
        let request = HttpRequest::get(MY_BLOGS_ENDPOINT).with_query(params.list_mine_query());
        self.list(request).await
    }

    /// `Ok(None)` when the backend answers 404.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for every other failure.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Blog>, ApiError> {
        match self.client.fetch_json(HttpRequest::get(blog_endpoint(id))).await {
            Ok(blog) => Ok(Some(blog)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] when the backend rejects the draft.
    pub async fn create(&self, draft: &BlogDraft) -> Result<Blog, ApiError> {
        let mode = self.client.envelope();
        let request = HttpRequest::post(CREATE_ENDPOINT, to_body(draft));
        let blog: Blog = self.client.fetch(request, |body| decode_record(mode, body)).await?;
        log::info!("created blog {}", blog.id);
        Ok(blog)
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] when the blog is missing, not owned, or the patch is rejected.
    pub async fn update(&self, id: i64, patch: &BlogPatch) -> Result<Blog, ApiError> {
        let request = HttpRequest::put(blog_endpoint(id), to_body(patch));
        self.client.fetch_json(request).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] when the blog is missing or not owned.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.execute(HttpRequest::delete(blog_endpoint(id))).await?;
        log::info!("deleted blog {id}");
        Ok(())
    }

    async fn list(&self, request: HttpRequest) -> Result<BlogPage, ApiError> {
        let mode = self.client.envelope();
        let envelope = self.client.fetch(request, |body| BlogListEnvelope::decode(mode, body)).await?;
        Ok(envelope.into_page())
    }
}
