use postdeck_client::PostsClient;
use postdeck_types::{Post, PostDraft, PostId, PostPatch, Result};

/// A network request the state machine wants issued.
///
/// List and detail fetches carry the generation current at issue time;
/// [`crate::BoardState::absorb`] discards a completed fetch whose
/// generation is no longer current.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchList { generation: u64, select_first: bool },
    FetchDetail { id: PostId, generation: u64 },
    SubmitUpdate { id: PostId, patch: PostPatch },
    SubmitCreate { draft: PostDraft },
    SubmitDelete { id: PostId },
}

/// A completed request, ready to be absorbed into the state.
#[derive(Debug)]
pub enum Outcome {
    ListLoaded {
        generation: u64,
        select_first: bool,
        result: Result<Vec<Post>>,
    },
    DetailLoaded {
        generation: u64,
        result: Result<Post>,
    },
    Updated {
        id: PostId,
        result: Result<()>,
    },
    Created {
        result: Result<Post>,
    },
    Deleted {
        id: PostId,
        result: Result<()>,
    },
}

impl Outcome {
    /// Whether this is a successfully completed create; the surface
    /// resets its create form on seeing one.
    pub fn is_created_ok(&self) -> bool {
        matches!(self, Outcome::Created { result: Ok(_) })
    }
}

/// Run one effect to completion against the API.
///
/// The single place requests are actually made; drivers spawn this so the
/// surface stays responsive while a call is pending.
pub async fn run_effect(client: &PostsClient, effect: Effect) -> Outcome {
    match effect {
        Effect::FetchList {
            generation,
            select_first,
        } => Outcome::ListLoaded {
            generation,
            select_first,
            result: client.list().await,
        },

        Effect::FetchDetail { id, generation } => Outcome::DetailLoaded {
            generation,
            result: client.get(&id).await,
        },

        Effect::SubmitUpdate { id, patch } => {
            let result = client.update(&id, &patch).await.map(|_| ());
            Outcome::Updated { id, result }
        }

        Effect::SubmitCreate { draft } => Outcome::Created {
            result: client.create(&draft).await,
        },

        Effect::SubmitDelete { id } => {
            let result = client.delete(&id).await;
            Outcome::Deleted { id, result }
        }
    }
}
