use anyhow::{Context, Result};

use postdeck_client::PostsClient;
use postdeck_types::PostDraft;

use crate::args::OutputFormat;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;

pub fn handle(
    client: &PostsClient,
    title: String,
    author: String,
    content: String,
    format: OutputFormat,
) -> Result<()> {
    let draft = PostDraft::new(title, author, content);
    if !draft.is_complete() {
        anyhow::bail!("title, author and content must all be non-empty");
    }

    let ctx = HandlerContext::new(format)?;
    let post = ctx
        .block_on(client.create(&draft))
        .context("creating post")?;

    ctx.render(&presenters::present_created(&post))
}
