use anyhow::{Context, Result};

use postdeck_client::PostsClient;
use postdeck_types::PostId;

use crate::args::OutputFormat;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;

pub fn handle(client: &PostsClient, id: &str, format: OutputFormat) -> Result<()> {
    let ctx = HandlerContext::new(format)?;
    let id = PostId::new(id);

    let post = ctx
        .block_on(client.get(&id))
        .with_context(|| format!("fetching post {}", id))?;

    ctx.render(&presenters::present_post_detail(&post))
}
