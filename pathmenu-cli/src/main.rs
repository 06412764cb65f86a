//! Pathmenu - resolve and run context actions for a path from the shell.

mod cli;
mod logging;
mod notify;
mod render;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use pathmenu_kernel::{classify, Host, InlineDispatcher, Resolver, TracingErrorLog};

use crate::cli::Args;
use crate::logging::setup_logging;
use crate::notify::StderrNotifier;

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let host = Host::new(Arc::new(StderrNotifier), Arc::new(TracingErrorLog));
    // One-shot process: run dispatched work before exiting.
    let resolver = Resolver::system(host, Arc::new(InlineDispatcher));

    let entry = classify(&args.path);
    let actions = resolver.resolve_actions(&entry);
    tracing::debug!(entry = %entry, count = actions.len(), "resolved");

    let Some(kind) = args.run else {
        let output = if args.json {
            render::json(&actions)?
        } else {
            render::table(&actions)
        };
        println!("{output}");
        return Ok(());
    };

    let action = actions
        .iter()
        .find(|a| a.kind == kind)
        .ok_or_else(|| anyhow::anyhow!("'{}' is not offered for {}", kind, entry))?;

    if !resolver.execute(action) {
        anyhow::bail!("{} failed for {}", kind.title(), entry.full_path().display());
    }
    Ok(())
}
