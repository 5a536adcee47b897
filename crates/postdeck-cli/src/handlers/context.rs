use std::future::Future;

use anyhow::{Context, Result};

use crate::args::OutputFormat;
use crate::presentation::{ConsoleRenderer, Render};

/// Shared plumbing for one-shot command handlers: an async runtime to
/// drive client calls and the renderer for the chosen output format.
pub struct HandlerContext {
    renderer: ConsoleRenderer,
    runtime: tokio::runtime::Runtime,
}

impl HandlerContext {
    pub fn new(format: OutputFormat) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("starting async runtime")?;
        Ok(Self {
            renderer: ConsoleRenderer::new(format),
            runtime,
        })
    }

    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    pub fn render<V: Render>(&self, view_model: &V) -> Result<()> {
        self.renderer.render(view_model)
    }
}
