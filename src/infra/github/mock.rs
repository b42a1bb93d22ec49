//! wiremock-based GitHub mock server for testing.
//!
//! Provides `GitHubMockServer` for HTTP-level mocking of the endpoints ghpm
//! talks to.
//!
//! # Usage
//!
//! ```ignore
//! let mock = GitHubMockServer::start().await;
//! mock.current_user("alice").await;
//!
//! let alice = mock.owner("alice");
//!
//! // Listing pages
//! alice.public_page(1).repos(&["a", "b"]).mount().await;
//! alice.public_page(2).generated(100).expect(1).mount().await;
//! alice.authenticated_page(Visibility::Private, 1).repos(&["x"]).private(true).mount().await;
//!
//! // Single repository
//! alice.repo("app").stars(3).get().await;
//! alice.repo("app").patch_expecting(Visibility::Private).await;
//! alice.repo("app").patch_status(404).await;
//! alice.repo("app").patch_never().await;
//! alice.repo("app").patch_with(ResponseTemplate::new(204)).await;
//! mock.any_patch_succeeds().await;
//! ```

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client::GitHubClient;
use super::types::Visibility;

/// Create a mock repository JSON object with the fields GitHub returns.
pub fn mock_repository(
    owner: &str,
    name: &str,
    stars: u64,
    is_private: bool,
    fork: bool,
) -> serde_json::Value {
    json!({
        "id": 1,
        "node_id": "R_test",
        "name": name,
        "full_name": format!("{owner}/{name}"),
        "private": is_private,
        "owner": {"login": owner, "id": 1, "type": "User"},
        "html_url": format!("https://github.com/{owner}/{name}"),
        "description": "Test repository",
        "fork": fork,
        "url": format!("https://api.github.com/repos/{owner}/{name}"),
        "stargazers_count": stars,
        "watchers_count": stars,
        "default_branch": "main"
    })
}

/// wiremock-based GitHub mock server for testing.
pub struct GitHubMockServer {
    server: MockServer,
}

impl GitHubMockServer {
    /// Start a new mock server.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get a GitHubClient configured to use this mock server.
    pub fn client(&self) -> GitHubClient {
        self.client_with_timeout(Duration::from_secs(5))
    }

    /// Get a GitHubClient with a custom request timeout.
    pub fn client_with_timeout(&self, timeout: Duration) -> GitHubClient {
        GitHubClient::with_base_url(&self.server.uri(), "test-token", timeout).unwrap()
    }

    /// Raw server, for tests that mount custom mocks.
    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Create an owner context for building mocks.
    pub fn owner<'a>(&'a self, owner: &'a str) -> MockOwnerContext<'a> {
        MockOwnerContext {
            server: &self.server,
            owner,
        }
    }

    /// Mock GET /user for current user.
    pub async fn current_user(&self, login: &str) {
        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "login": login,
                "id": 1,
                "type": "User"
            })))
            .mount(&self.server)
            .await;
    }

    /// Answer 200 to any PATCH not matched by a more specific mock.
    pub async fn any_patch_succeeds(&self) {
        Mock::given(method("PATCH"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(mock_repository("any", "repo", 0, true, false)),
            )
            .with_priority(10)
            .mount(&self.server)
            .await;
    }

    /// Mock GET /user with an error status.
    pub async fn current_user_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(
                ResponseTemplate::new(status).set_body_json(json!({"message": "Bad credentials"})),
            )
            .mount(&self.server)
            .await;
    }
}

/// Owner context for building mocks.
pub struct MockOwnerContext<'a> {
    server: &'a MockServer,
    owner: &'a str,
}

impl<'a> MockOwnerContext<'a> {
    /// One page of `GET /users/{owner}/repos?visibility=public`.
    pub fn public_page(&self, page: u32) -> MockPageBuilder<'a> {
        MockPageBuilder::new(
            self.server,
            self.owner,
            format!("/users/{}/repos", self.owner),
            Visibility::Public,
            page,
        )
    }

    /// One page of `GET /user/repos?visibility=...`.
    pub fn authenticated_page(&self, visibility: Visibility, page: u32) -> MockPageBuilder<'a> {
        MockPageBuilder::new(
            self.server,
            self.owner,
            "/user/repos".to_string(),
            visibility,
            page,
        )
    }

    /// Single repository endpoints.
    pub fn repo(&self, name: &'a str) -> MockRepoBuilder<'a> {
        MockRepoBuilder {
            server: self.server,
            owner: self.owner,
            name,
            stars: 0,
            is_private: false,
            fork: false,
        }
    }
}

/// Builder for one page of a repository listing.
pub struct MockPageBuilder<'a> {
    server: &'a MockServer,
    owner: &'a str,
    path: String,
    visibility: Visibility,
    page: u32,
    names: Vec<String>,
    entries: Vec<serde_json::Value>,
    is_private: bool,
    status: u16,
    expected_calls: Option<u64>,
}

impl<'a> MockPageBuilder<'a> {
    fn new(
        server: &'a MockServer,
        owner: &'a str,
        path: String,
        visibility: Visibility,
        page: u32,
    ) -> Self {
        Self {
            server,
            owner,
            path,
            visibility,
            page,
            names: Vec::new(),
            entries: Vec::new(),
            is_private: visibility.is_private(),
            status: 200,
            expected_calls: None,
        }
    }

    /// Plain repositories (0 stars, not forks) with the given names.
    pub fn repos(mut self, names: &[&str]) -> Self {
        self.names.extend(names.iter().map(|n| n.to_string()));
        self
    }

    /// `count` plain repositories named `p{page}-r{i}`.
    pub fn generated(mut self, count: usize) -> Self {
        let page = self.page;
        self.names
            .extend((0..count).map(|i| format!("p{page}-r{i}")));
        self
    }

    /// Fully specified repository JSON objects (see `mock_repository`).
    pub fn entries(mut self, entries: Vec<serde_json::Value>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Visibility flag of the repositories built from names.
    pub fn private(mut self, is_private: bool) -> Self {
        self.is_private = is_private;
        self
    }

    /// Respond with an error status instead of the page.
    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Verify the page is requested exactly `n` times.
    pub fn expect(mut self, n: u64) -> Self {
        self.expected_calls = Some(n);
        self
    }

    pub async fn mount(self) {
        let mut body: Vec<serde_json::Value> = self
            .names
            .iter()
            .map(|n| mock_repository(self.owner, n, 0, self.is_private, false))
            .collect();
        body.extend(self.entries);

        let response = if self.status == 200 {
            ResponseTemplate::new(200).set_body_json(body)
        } else {
            ResponseTemplate::new(self.status).set_body_json(json!({"message": "error"}))
        };

        let mut mock = Mock::given(method("GET"))
            .and(path(self.path.as_str()))
            .and(query_param("visibility", self.visibility.as_query()))
            .and(query_param("per_page", "100"))
            .and(query_param("page", self.page.to_string()))
            .respond_with(response);
        if let Some(n) = self.expected_calls {
            mock = mock.expect(n);
        }
        mock.mount(self.server).await;
    }
}

/// Builder for single repository endpoints.
pub struct MockRepoBuilder<'a> {
    server: &'a MockServer,
    owner: &'a str,
    name: &'a str,
    stars: u64,
    is_private: bool,
    fork: bool,
}

impl<'a> MockRepoBuilder<'a> {
    pub fn stars(mut self, stars: u64) -> Self {
        self.stars = stars;
        self
    }

    pub fn private(mut self, is_private: bool) -> Self {
        self.is_private = is_private;
        self
    }

    pub fn fork(mut self, fork: bool) -> Self {
        self.fork = fork;
        self
    }

    fn repo_path(&self) -> String {
        format!("/repos/{}/{}", self.owner, self.name)
    }

    fn json(&self, is_private: bool) -> serde_json::Value {
        mock_repository(self.owner, self.name, self.stars, is_private, self.fork)
    }

    /// Mount mock for GET /repos/{owner}/{repo} (success).
    pub async fn get(self) {
        Mock::given(method("GET"))
            .and(path(self.repo_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(self.json(self.is_private)))
            .mount(self.server)
            .await;
    }

    /// Mount mock for GET /repos/{owner}/{repo} with an error status.
    pub async fn get_status(self, status: u16) {
        Mock::given(method("GET"))
            .and(path(self.repo_path()))
            .respond_with(
                ResponseTemplate::new(status).set_body_json(json!({"message": "error"})),
            )
            .mount(self.server)
            .await;
    }

    /// Mount a PATCH mock that only matches the expected body and must be hit once.
    pub async fn patch_expecting(self, target: Visibility) {
        Mock::given(method("PATCH"))
            .and(path(self.repo_path()))
            .and(body_json(json!({"private": target.is_private()})))
            .respond_with(ResponseTemplate::new(200).set_body_json(self.json(target.is_private())))
            .expect(1)
            .mount(self.server)
            .await;
    }

    /// Mount a PATCH mock answering with the given status.
    pub async fn patch_status(self, status: u16) {
        let response = if status < 300 {
            ResponseTemplate::new(status).set_body_json(self.json(true))
        } else {
            ResponseTemplate::new(status).set_body_json(json!({"message": "error"}))
        };
        Mock::given(method("PATCH"))
            .and(path(self.repo_path()))
            .respond_with(response)
            .expect(1)
            .mount(self.server)
            .await;
    }

    /// Mount a PATCH mock answering with `response` as is, hit exactly once.
    pub async fn patch_with(self, response: ResponseTemplate) {
        Mock::given(method("PATCH"))
            .and(path(self.repo_path()))
            .respond_with(response)
            .expect(1)
            .mount(self.server)
            .await;
    }

    /// Mount a PATCH mock that answers 200 only after `delay`.
    pub async fn patch_delayed(self, delay: Duration) {
        Mock::given(method("PATCH"))
            .and(path(self.repo_path()))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(self.json(true))
                    .set_delay(delay),
            )
            .mount(self.server)
            .await;
    }

    /// Assert that no PATCH reaches this repository.
    pub async fn patch_never(self) {
        Mock::given(method("PATCH"))
            .and(path(self.repo_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(self.json(true)))
            .expect(0)
            .mount(self.server)
            .await;
    }
}
