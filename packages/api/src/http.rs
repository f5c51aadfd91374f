//! # HTTP user service
//!
//! [`HttpUserService`] is the [`UserService`] used by the running app. It talks to
//! the REST backend with [`reqwest`], which compiles to `fetch` on WASM and to a
//! native client elsewhere.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | `list_users` | `GET {base}/users?page=&limit=&search=` |
//! | `get_user` | `GET {base}/users/{id}` |
//! | `create_user` | `POST {base}/users` with `{name, email}` |
//! | `update_user` | `PUT {base}/users/{id}` with `{name, email}` |
//! | `delete_user` | `DELETE {base}/users/{id}` |
//!
//! A non-success status becomes [`ApiError::Server`] carrying the body's `message`
//! field (or the operation's fallback). A request that never gets a response
//! becomes [`ApiError::Transport`]. The underlying cause is logged at `warn`.

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use store::DashboardConfig;

use crate::error::{ApiError, Operation};
use crate::models::{UserDraft, UserId, UserPage, UserRecord};
use crate::service::UserService;

/// REST-backed user service.
#[derive(Clone, Debug)]
pub struct HttpUserService {
    client: Client,
    base_url: String,
}

impl PartialEq for HttpUserService {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl HttpUserService {
    /// Create a service rooted at `base_url` (e.g. `http://localhost:3000/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    /// `{base}/users/{id}` with `id` escaped as a single path segment.
    fn user_url(&self, op: Operation, id: &UserId) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.users_url()).map_err(|e| {
            tracing::warn!("invalid base url {:?}: {}", self.base_url, e);
            ApiError::transport(op)
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                tracing::warn!("base url {:?} cannot hold a path", self.base_url);
                ApiError::transport(op)
            })?
            .push(id.as_str());
        Ok(url)
    }

    async fn send(
        &self,
        op: Operation,
        request: RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("{:?} request failed: {}", op, e);
            ApiError::transport(op)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_response(op, status.as_u16(), &body);
        tracing::warn!("{:?} returned {}: {}", op, status, err);
        Err(err)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        op: Operation,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(op, request).await?;
        response.json::<T>().await.map_err(|e| {
            tracing::warn!("{:?} response could not be decoded: {}", op, e);
            ApiError::decode(op)
        })
    }
}

impl UserService for HttpUserService {
    async fn list_users(&self, page: u32, limit: u32, search: &str) -> Result<UserPage, ApiError> {
        tracing::debug!("GET users page={} limit={} search={:?}", page, limit, search);
        let request = self.client.get(self.users_url()).query(&[
            ("page", page.to_string()),
            ("limit", limit.to_string()),
            ("search", search.to_string()),
        ]);
        self.send_json(Operation::List, request).await
    }

    async fn get_user(&self, id: &UserId) -> Result<UserRecord, ApiError> {
        tracing::debug!("GET user {}", id);
        let request = self.client.get(self.user_url(Operation::Get, id)?);
        self.send_json(Operation::Get, request).await
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<UserRecord, ApiError> {
        tracing::debug!("POST user {:?}", draft.email);
        let request = self.client.post(self.users_url()).json(draft);
        self.send_json(Operation::Create, request).await
    }

    async fn update_user(&self, id: &UserId, draft: &UserDraft) -> Result<UserRecord, ApiError> {
        tracing::debug!("PUT user {}", id);
        let request = self.client.put(self.user_url(Operation::Update, id)?).json(draft);
        self.send_json(Operation::Update, request).await
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), ApiError> {
        tracing::debug!("DELETE user {}", id);
        let request = self.client.delete(self.user_url(Operation::Delete, id)?);
        self.send(Operation::Delete, request).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    fn local_service(base_url: &str) -> HttpUserService {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpUserService::with_client(client, base_url)
    }

    /// Read one request (head and `content-length` body) off `socket`.
    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            if let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..head_end]).to_lowercase();
                let body_len = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|len| len.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= head_end + 4 + body_len {
                    break;
                }
            }
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Answer a single request with `status` and `body`, returning the base URL
    /// and a handle resolving to the raw request.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/api", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            request
        });
        (base_url, handle)
    }

    fn request_line(request: &str) -> &str {
        request.lines().next().unwrap_or_default()
    }

    #[test]
    fn test_urls_strip_trailing_slash() {
        let service = HttpUserService::new("http://localhost:3000/api/");
        assert_eq!(service.base_url(), "http://localhost:3000/api");
        assert_eq!(service.users_url(), "http://localhost:3000/api/users");
        assert_eq!(
            service.user_url(Operation::Get, &UserId::from(42)).unwrap().as_str(),
            "http://localhost:3000/api/users/42"
        );
    }

    #[test]
    fn test_user_id_is_one_path_segment() {
        let service = HttpUserService::new("http://localhost:3000/api");
        let url = service
            .user_url(Operation::Delete, &UserId::new("a/b?c#d"))
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/users/a%2Fb%3Fc%23d");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_unparseable_base_url_is_a_transport_error() {
        let service = HttpUserService::new("not a url");
        let err = service.user_url(Operation::Get, &UserId::from(1)).unwrap_err();
        assert_eq!(err, ApiError::transport(Operation::Get));
    }

    #[test]
    fn test_from_default_config() {
        let service = HttpUserService::from_config(&DashboardConfig::default());
        assert_eq!(service.base_url(), "http://localhost:3000/api");
    }

    #[tokio::test]
    async fn test_list_sends_page_limit_and_search() {
        let body = r#"{"users":[{"id":21,"name":"Ravi Kumar","email":"ravi@example.com"}],
            "currentPage":3,"totalPages":3,"totalUsers":21}"#;
        let (base_url, server) = serve_once("200 OK", body).await;

        let page = local_service(&base_url).list_users(3, 10, "ravi").await.unwrap();
        assert_eq!(page.current_page, 3);
        assert_eq!(page.total_users, 21);
        assert_eq!(page.users[0].id, UserId::from(21));

        let request = server.await.unwrap();
        assert_eq!(
            request_line(&request),
            "GET /api/users?page=3&limit=10&search=ravi HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_conflict_carries_server_message() {
        let (base_url, server) =
            serve_once("409 Conflict", r#"{"message":"Email already exists"}"#).await;

        let draft = UserDraft::new("Anita Rao", "anita@example.com");
        let err = local_service(&base_url).create_user(&draft).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 409,
                message: "Email already exists".to_string(),
            }
        );

        let request = server.await.unwrap();
        assert_eq!(request_line(&request), "POST /api/users HTTP/1.1");
        assert!(request.ends_with(r#"{"name":"Anita Rao","email":"anita@example.com"}"#));
    }

    #[tokio::test]
    async fn test_html_error_body_falls_back() {
        let (base_url, server) =
            serve_once("500 Internal Server Error", "<html><body>oops</body></html>").await;

        let draft = UserDraft::new("Anita Rao", "anita@example.com");
        let err = local_service(&base_url)
            .update_user(&UserId::from(7), &draft)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to update user");
        assert_eq!(err.status(), Some(500));

        let request = server.await.unwrap();
        assert_eq!(request_line(&request), "PUT /api/users/7 HTTP/1.1");
    }

    #[tokio::test]
    async fn test_undecodable_success_body() {
        let (base_url, _server) = serve_once("200 OK", "not json").await;

        let err = local_service(&base_url).get_user(&UserId::from(1)).await.unwrap_err();
        assert_eq!(err, ApiError::decode(Operation::Get));
    }

    #[tokio::test]
    async fn test_delete_escapes_id() {
        let (base_url, server) = serve_once("204 No Content", "").await;

        local_service(&base_url)
            .delete_user(&UserId::new("a/b"))
            .await
            .unwrap();

        let request = server.await.unwrap();
        assert_eq!(request_line(&request), "DELETE /api/users/a%2Fb HTTP/1.1");
    }

    #[tokio::test]
    async fn test_refused_connection_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/api", listener.local_addr().unwrap());
        drop(listener);

        let err = local_service(&base_url).list_users(1, 10, "").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Transport {
                message: "Failed to fetch users".to_string(),
            }
        );
    }
}
