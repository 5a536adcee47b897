use anyhow::{Context, Result};

use postdeck_client::PostsClient;
use postdeck_types::{PostId, PostPatch};

use crate::args::OutputFormat;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;

pub fn handle(
    client: &PostsClient,
    id: &str,
    title: Option<String>,
    content: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    if title.is_none() && content.is_none() {
        anyhow::bail!("nothing to change; pass --title and/or --content");
    }

    let ctx = HandlerContext::new(format)?;
    let id = PostId::new(id);

    // Fields not being changed are pre-filled from the current post, the
    // way the edit form pre-fills before submitting.
    let current = ctx
        .block_on(client.get(&id))
        .with_context(|| format!("fetching post {}", id))?;

    let patch = PostPatch {
        title: title.unwrap_or(current.title),
        content: content.unwrap_or(current.content),
    };

    let updated = ctx
        .block_on(client.update(&id, &patch))
        .with_context(|| format!("updating post {}", id))?;

    ctx.render(&presenters::present_updated(&updated))
}
