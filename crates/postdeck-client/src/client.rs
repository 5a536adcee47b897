use postdeck_types::{ApiError, Post, PostDraft, PostId, PostPatch, Result};
use serde::de::DeserializeOwned;

/// Client for a posts collection at `{base_url}/posts`.
///
/// Each operation issues exactly one HTTP request. No retries, and no
/// request timeout: a stalled connection hangs the caller, matching the
/// upstream API contract.
#[derive(Debug, Clone)]
pub struct PostsClient {
    base_url: String,
    http: reqwest::Client,
}

impl PostsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    fn item_url(&self, id: &PostId) -> String {
        format!("{}/posts/{}", self.base_url, id)
    }

    /// Fetch every post, in server-returned order.
    pub async fn list(&self) -> Result<Vec<Post>> {
        let response = self
            .http
            .get(self.collection_url())
            .send()
            .await
            .map_err(ApiError::transport)?;
        read_json(response).await
    }

    /// Fetch a single post.
    pub async fn get(&self, id: &PostId) -> Result<Post> {
        let response = self
            .http
            .get(self.item_url(id))
            .send()
            .await
            .map_err(ApiError::transport)?;
        read_json(response).await
    }

    /// Create a post; the server assigns the id.
    pub async fn create(&self, draft: &PostDraft) -> Result<Post> {
        let response = self
            .http
            .post(self.collection_url())
            .json(draft)
            .send()
            .await
            .map_err(ApiError::transport)?;
        read_json(response).await
    }

    /// Update a post's title and content. The author is not editable.
    pub async fn update(&self, id: &PostId, patch: &PostPatch) -> Result<Post> {
        let response = self
            .http
            .patch(self.item_url(id))
            .json(patch)
            .send()
            .await
            .map_err(ApiError::transport)?;
        read_json(response).await
    }

    /// Delete a post. The confirmation body is discarded.
    pub async fn delete(&self, id: &PostId) -> Result<()> {
        let response = self
            .http
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(ApiError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
        });
    }
    response.json::<T>().await.map_err(ApiError::decode)
}
