//! Get command: fetch one paper through the retrying fetcher.

use anyhow::{bail, Context, Result};
use paperfetch_core::checksum::copy_with_sha256;
use paperfetch_core::config::PaperfetchConfig;
use paperfetch_core::fetcher::{DirFetcher, Fetcher, HttpFetcher};
use paperfetch_core::retry::{RetryPolicy, RetryingFetcher};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct GetArgs {
    pub id: String,
    pub out: Option<PathBuf>,
    pub tries: Option<u32>,
    pub base_url: Option<String>,
    pub dir: Option<PathBuf>,
    pub sha256: bool,
}

/// Where papers come from, after CLI flags override config.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Dir(PathBuf),
    Http(String),
}

fn resolve_source(cfg: &PaperfetchConfig, args: &GetArgs) -> Result<Source> {
    if let Some(dir) = &args.dir {
        return Ok(Source::Dir(dir.clone()));
    }
    if let Some(url) = &args.base_url {
        return Ok(Source::Http(url.clone()));
    }
    if let Some(dir) = &cfg.source_dir {
        return Ok(Source::Dir(dir.clone()));
    }
    if let Some(url) = &cfg.base_url {
        return Ok(Source::Http(url.clone()));
    }
    bail!("no paper source: pass --dir or --base-url, or set source_dir/base_url in config");
}

fn resolve_policy(cfg: &PaperfetchConfig, tries: Option<u32>) -> Result<RetryPolicy> {
    let policy = cfg.retry_policy()?;
    Ok(match tries {
        Some(n) => RetryPolicy::new(n).with_delay_unit(policy.delay_unit()),
        None => policy,
    })
}

fn build_fetcher(cfg: &PaperfetchConfig, args: &GetArgs) -> Result<Box<dyn Fetcher + Send + Sync>> {
    let inner: Box<dyn Fetcher + Send + Sync> = match resolve_source(cfg, args)? {
        Source::Dir(dir) => Box::new(DirFetcher::new(dir).with_suffix(cfg.suffix.clone())),
        Source::Http(url) => Box::new(HttpFetcher::new(&url, cfg.http_options())?),
    };
    let policy = resolve_policy(cfg, args.tries)?;
    tracing::debug!(
        max_attempts = policy.max_attempts(),
        delay_unit = ?policy.delay_unit(),
        "retry policy"
    );
    Ok(Box::new(RetryingFetcher::with_policy(inner, policy)))
}

pub fn run_get(cfg: &PaperfetchConfig, args: GetArgs) -> Result<()> {
    let fetcher = build_fetcher(cfg, &args)?;
    let mut stream = fetcher
        .fetch(&args.id)
        .with_context(|| format!("fetch paper {}", args.id))?;

    let (bytes, digest) = match &args.out {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
            let mut w = BufWriter::new(file);
            copy_with_sha256(&mut stream, &mut w)
                .with_context(|| format!("write {}", path.display()))?
        }
        None => {
            let stdout = io::stdout();
            let mut w = stdout.lock();
            copy_with_sha256(&mut stream, &mut w).context("write stdout")?
        }
    };
    tracing::info!(id = %args.id, bytes, "fetched paper");

    if args.sha256 {
        // Keep stdout clean when it carries the document.
        if args.out.is_some() {
            println!("{}  {}", digest, args.id);
        } else {
            let mut err = io::stderr().lock();
            writeln!(err, "{}  {}", digest, args.id)?;
        }
    }
    Ok(())
}
