//! Rolodex - Main entry point
//!
//! Loads the address book from disk, runs the interactive shell over
//! stdin/stdout, and saves the book back on orderly exit.

use anyhow::{Context, Result};
use rolodex::{AddressBook, Config};
use std::io;
use std::num::NonZeroUsize;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logging goes to stderr only; stdout belongs to the shell
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    info!(path = %config.book_path.display(), "starting rolodex");

    let mut book = AddressBook::load(&config.book_path)
        .with_context(|| format!("failed to load address book from {}", config.book_path.display()))?;

    // validated > 0 in Config::from_env
    let page_size = NonZeroUsize::new(config.page_size)
        .context("page size must be greater than zero")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    rolodex::shell::run(&mut book, page_size, stdin.lock(), stdout.lock())
        .context("shell I/O failed")?;

    book.save(&config.book_path)
        .with_context(|| format!("failed to save address book to {}", config.book_path.display()))?;

    info!(records = book.len(), "address book saved, goodbye");
    Ok(())
}
