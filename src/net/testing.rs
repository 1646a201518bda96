//! Test doubles for the transport and navigation seams.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::client::ApiClient;
use super::http::{HttpRequest, HttpResponse, Method, Transport, TransportError};
use super::types::{Blog, BlogPage};
use crate::config::EnvelopeMode;
use crate::state::credentials::CredentialStore;
use crate::util::navigation::Navigator;

pub(crate) fn blog_json(id: i64, title: &str, content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "content": content,
        "user_id": 1,
        "created_at": "2024-01-05T10:00:00",
        "updated_at": "2024-01-05T10:00:00",
        "is_active": true
    })
}

pub(crate) fn user_json() -> serde_json::Value {
    serde_json::json!({ "id": 1, "email": "alice@example.com", "first_name": "Alice", "last_name": "Liddell" })
}

pub(crate) fn login_body() -> serde_json::Value {
    serde_json::json!({
        "message": "Login successful",
        "status": 200,
        "results": { "access_token": "at-1", "refresh_token": "rt-1", "user": user_json() }
    })
}

// =============================================================
// MockBackend
// =============================================================

/// Records every request and replies from a FIFO queue (404 when empty).
#[derive(Default)]
pub(crate) struct MockBackend {
    requests: Mutex<Vec<HttpRequest>>,
    replies: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
}

impl MockBackend {
    pub(crate) fn reply(&self, status: u16, body: serde_json::Value) {
        self.reply_raw(status, &body.to_string());
    }

    pub(crate) fn reply_raw(&self, status: u16, body: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
    }

    pub(crate) fn fail(&self, message: &str) {
        self.replies.lock().unwrap().push_back(Err(TransportError(message.to_owned())));
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().expect("no request was sent")
    }
}

#[async_trait(?Send)]
impl Transport for MockBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse { status: 404, body: String::new() }))
    }
}

// =============================================================
// RecordingNavigator
// =============================================================

#[derive(Default)]
pub(crate) struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub(crate) fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits.lock().unwrap().push(path.to_owned());
    }
}

// =============================================================
// Harness
// =============================================================

/// An `ApiClient` wired to test doubles, with handles to inspect them.
pub(crate) struct Harness<T> {
    pub client: ApiClient,
    pub backend: Arc<T>,
    pub credentials: CredentialStore,
    pub navigator: Arc<RecordingNavigator>,
}

pub(crate) fn harness(mode: EnvelopeMode) -> Harness<MockBackend> {
    harness_with(Arc::new(MockBackend::default()), mode)
}

pub(crate) fn harness_with<T: Transport + 'static>(backend: Arc<T>, mode: EnvelopeMode) -> Harness<T> {
    let credentials = CredentialStore::in_memory();
    let navigator = Arc::new(RecordingNavigator::default());
    let client = ApiClient::new(backend.clone(), credentials.clone(), navigator.clone(), mode);
    Harness { client, backend, credentials, navigator }
}

// =============================================================
// FakeBlogApi
// =============================================================

/// Stateful blog table speaking either envelope, for write-then-read tests.
pub(crate) struct FakeBlogApi {
    mode: EnvelopeMode,
    owner_id: i64,
    blogs: Mutex<Vec<Blog>>,
}

impl FakeBlogApi {
    pub(crate) fn new(mode: EnvelopeMode) -> Self {
        Self { mode, owner_id: 1, blogs: Mutex::new(Vec::new()) }
    }

    fn respond(status: u16, body: serde_json::Value) -> HttpResponse {
        HttpResponse { status, body: body.to_string() }
    }

    fn not_found() -> HttpResponse {
        Self::respond(404, serde_json::json!({ "message": "Blog not found" }))
    }

    fn list(&self, request: &HttpRequest) -> HttpResponse {
        let query = |key: &str| {
            request
                .query
                .iter()
                .find(|(k, _)| k == key)
                .and_then(|(_, v)| v.parse::<u32>().ok())
        };
        let page = query("page").unwrap_or(1).max(1);
        let per_page = query("per_page").or_else(|| query("limit")).unwrap_or(10).max(1);

        let blogs = self.blogs.lock().unwrap();
        let mine: Vec<Blog> = blogs.iter().filter(|b| b.user_id == self.owner_id).cloned().collect();
        let total = mine.len();
        let total_pages = u32::try_from(total.div_ceil(per_page as usize)).unwrap();
        let items: Vec<Blog> =
            mine.into_iter().skip(((page - 1) * per_page) as usize).take(per_page as usize).collect();

        let body = match self.mode {
            EnvelopeMode::Flat => serde_json::to_value(BlogPage {
                blogs: items,
                total: total as u64,
                page,
                per_page,
                total_pages,
            })
            .unwrap(),
            EnvelopeMode::Nested => serde_json::json!({
                "results": { "items": items, "total": total, "page": page, "limit": per_page, "pages": total_pages }
            }),
        };
        Self::respond(200, body)
    }

    fn create(&self, request: &HttpRequest) -> HttpResponse {
        let body = request.body.clone().unwrap_or_default();
        let mut blogs = self.blogs.lock().unwrap();
        let id = blogs.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        let blog = Blog {
            id,
            title: body["title"].as_str().unwrap_or_default().to_owned(),
            content: body["content"].as_str().unwrap_or_default().to_owned(),
            user_id: self.owner_id,
            created_at: "2024-01-05T10:00:00".to_owned(),
            updated_at: "2024-01-05T10:00:00".to_owned(),
            is_active: true,
        };
        blogs.push(blog.clone());
        let blog = serde_json::to_value(blog).unwrap();
        match self.mode {
            EnvelopeMode::Flat => Self::respond(201, blog),
            EnvelopeMode::Nested => {
                Self::respond(201, serde_json::json!({ "message": "Blog created", "status": 201, "results": blog }))
            }
        }
    }

    fn by_id(&self, request: &HttpRequest, id: i64) -> HttpResponse {
        let mut blogs = self.blogs.lock().unwrap();
        let Some(index) = blogs.iter().position(|b| b.id == id) else {
            return Self::not_found();
        };
        match request.method {
            Method::Get => Self::respond(200, serde_json::to_value(&blogs[index]).unwrap()),
            Method::Put => {
                let patch = request.body.clone().unwrap_or_default();
                let blog = &mut blogs[index];
                if let Some(title) = patch["title"].as_str() {
                    blog.title = title.to_owned();
                }
                if let Some(content) = patch["content"].as_str() {
                    blog.content = content.to_owned();
                }
                blog.updated_at = "2024-01-06T09:00:00".to_owned();
                Self::respond(200, serde_json::to_value(&*blog).unwrap())
            }
            Method::Delete => {
                blogs.remove(index);
                HttpResponse { status: 204, body: String::new() }
            }
            Method::Post => Self::respond(405, serde_json::json!({ "message": "Method not allowed" })),
        }
    }
}

#[async_trait(?Send)]
impl Transport for FakeBlogApi {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let path = request.path.trim_end_matches('/').to_owned();
        let response = match (request.method, path.as_str()) {
            (Method::Get, "/blogs" | "/blogs/my") => self.list(&request),
            (Method::Post, "/blogs/blog") => self.create(&request),
            (_, other) => match other.strip_prefix("/blogs/").and_then(|id| id.parse::<i64>().ok()) {
                Some(id) => self.by_id(&request, id),
                None => Self::not_found(),
            },
        };
        Ok(response)
    }
}
