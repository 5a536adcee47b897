use std::io::Write;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;

use postdeck_app::Diagnostics;
use postdeck_client::PostsClient;
use postdeck_types::{Post, PostId};

use crate::args::OutputFormat;
use crate::handlers::HandlerContext;
use crate::presentation::{ConsoleDiagnostics, presenters};

pub fn handle(client: &PostsClient, id: &str, yes: bool, format: OutputFormat) -> Result<()> {
    let ctx = HandlerContext::new(format)?;
    let id = PostId::new(id);

    let post = ctx
        .block_on(client.get(&id))
        .with_context(|| format!("fetching post {}", id))?;

    if !yes && !confirm_deletion(&post)? {
        println!("Deletion cancelled.");
        return Ok(());
    }

    ctx.block_on(client.delete(&id))
        .with_context(|| format!("deleting post {}", id))?;

    // The remaining count is cosmetic; a failed re-fetch is only logged.
    let remaining = match ctx.block_on(client.list()) {
        Ok(posts) => posts.len(),
        Err(err) => {
            ConsoleDiagnostics.failure("fetching posts", &err);
            0
        }
    };

    ctx.render(&presenters::present_deleted(id.as_str(), remaining))
}

/// Explicit confirmation before anything is sent. Declining, or running
/// without a terminal on stdin, means no request at all.
fn confirm_deletion(post: &Post) -> Result<bool> {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        return Ok(false);
    }

    print!("Are you sure you want to delete \"{}\"? [y/N] ", post.title);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    stdin.read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
