use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use postdeck_types::{Post, PostDraft, PostId};

/// Canonical three-post seed used across the test suite.
pub fn seed_posts() -> Vec<PostDraft> {
    vec![
        PostDraft::new("First Post", "Sam", "Welcome to the blog."),
        PostDraft::new("Second Post", "Alex", "More words about things."),
        PostDraft::new("Third Post", "Sam", "A closing thought."),
    ]
}

/// Posts are stored with integer ids, the way json-server serves them, so
/// clients see numeric ids on the wire.
#[derive(Debug, Clone, Serialize)]
struct StoredPost {
    id: u64,
    title: String,
    author: String,
    content: String,
}

impl StoredPost {
    fn to_post(&self) -> Post {
        Post {
            id: PostId::new(self.id.to_string()),
            title: self.title.clone(),
            author: self.author.clone(),
            content: self.content.clone(),
        }
    }
}

#[derive(Debug, Default)]
struct StubStore {
    posts: Vec<StoredPost>,
    next_id: u64,
}

impl StubStore {
    fn seeded(seed: Vec<PostDraft>) -> Self {
        let mut store = StubStore {
            posts: Vec::new(),
            next_id: 1,
        };
        for draft in seed {
            store.insert(draft);
        }
        store
    }

    fn insert(&mut self, draft: PostDraft) -> StoredPost {
        let post = StoredPost {
            id: self.next_id,
            title: draft.title,
            author: draft.author,
            content: draft.content,
        };
        self.next_id += 1;
        self.posts.push(post.clone());
        post
    }

    fn find(&self, id: u64) -> Option<&StoredPost> {
        self.posts.iter().find(|post| post.id == id)
    }
}

type SharedStore = Arc<Mutex<StubStore>>;

/// In-process stand-in for the external posts API.
///
/// Serves json-server-compatible CRUD on an ephemeral local port from a
/// dedicated thread, so both sync (assert_cmd) and async (tokio) tests
/// can use it. Shuts down on drop.
pub struct StubPostsServer {
    base_url: String,
    store: SharedStore,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl StubPostsServer {
    /// Bind an ephemeral port and start serving the seeded store.
    pub fn launch(seed: Vec<PostDraft>) -> anyhow::Result<Self> {
        let store: SharedStore = Arc::new(Mutex::new(StubStore::seeded(seed)));
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let (addr_tx, addr_rx) = std::sync::mpsc::channel::<SocketAddr>();

        let served_store = store.clone();
        let thread = std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("stub server runtime");

            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind stub listener");
                let addr = listener.local_addr().expect("stub listener addr");
                addr_tx.send(addr).expect("report stub addr");

                axum::serve(listener, router(served_store))
                    .with_graceful_shutdown(async {
                        let _ = shutdown_rx.await;
                    })
                    .await
                    .expect("stub server");
            });
        });

        let addr = addr_rx.recv()?;
        Ok(Self {
            base_url: format!("http://{}", addr),
            store,
            shutdown: Some(shutdown_tx),
            thread: Some(thread),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Snapshot of the server-side collection, in server order.
    pub fn posts(&self) -> Vec<Post> {
        self.store
            .lock()
            .expect("stub store lock")
            .posts
            .iter()
            .map(StoredPost::to_post)
            .collect()
    }

    pub fn post_count(&self) -> usize {
        self.store.lock().expect("stub store lock").posts.len()
    }
}

impl Drop for StubPostsServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).patch(patch_post).delete(delete_post),
        )
        .with_state(store)
}

async fn list_posts(State(store): State<SharedStore>) -> Json<Vec<StoredPost>> {
    Json(store.lock().expect("stub store lock").posts.clone())
}

async fn get_post(
    Path(id): Path<String>,
    State(store): State<SharedStore>,
) -> Result<Json<StoredPost>, StatusCode> {
    let store = store.lock().expect("stub store lock");
    parse_id(&id)
        .and_then(|id| store.find(id).cloned())
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

#[derive(Debug, Deserialize)]
struct CreateBody {
    title: String,
    author: String,
    content: String,
}

async fn create_post(
    State(store): State<SharedStore>,
    Json(body): Json<CreateBody>,
) -> (StatusCode, Json<StoredPost>) {
    let mut store = store.lock().expect("stub store lock");
    let post = store.insert(PostDraft::new(body.title, body.author, body.content));
    (StatusCode::CREATED, Json(post))
}

#[derive(Debug, Deserialize)]
struct PatchBody {
    title: Option<String>,
    content: Option<String>,
}

async fn patch_post(
    Path(id): Path<String>,
    State(store): State<SharedStore>,
    Json(body): Json<PatchBody>,
) -> Result<Json<StoredPost>, StatusCode> {
    let mut store = store.lock().expect("stub store lock");
    let id = parse_id(&id).ok_or(StatusCode::NOT_FOUND)?;
    let post = store
        .posts
        .iter_mut()
        .find(|post| post.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;

    if let Some(title) = body.title {
        post.title = title;
    }
    if let Some(content) = body.content {
        post.content = content;
    }
    Ok(Json(post.clone()))
}

async fn delete_post(
    Path(id): Path<String>,
    State(store): State<SharedStore>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let mut store = store.lock().expect("stub store lock");
    let id = parse_id(&id).ok_or(StatusCode::NOT_FOUND)?;
    let before = store.posts.len();
    store.posts.retain(|post| post.id != id);
    if store.posts.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    // json-server answers a delete with an empty object.
    Ok(Json(serde_json::json!({})))
}

fn parse_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}
