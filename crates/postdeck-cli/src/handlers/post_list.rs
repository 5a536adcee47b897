use anyhow::{Context, Result};

use postdeck_client::PostsClient;

use crate::args::OutputFormat;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;

pub fn handle(client: &PostsClient, format: OutputFormat) -> Result<()> {
    let ctx = HandlerContext::new(format)?;

    let posts = ctx.block_on(client.list()).context("listing posts")?;

    let view_model = presenters::present_post_list(&posts, client.base_url());
    ctx.render(&view_model)
}
