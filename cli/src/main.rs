//! `folio-sync`: push a directory of Markdown posts to a folio server.
//!
//! ```bash
//! folio-sync --server https://alex.example.dev --token $TOKEN --dir content/posts
//! folio-sync --dir content/posts --dry-run
//! ```
//!
//! Every `*.md` file under `--dir` must start with a YAML front matter block
//! (`title`, `category`, `published`, optional `slug`, `excerpt`, `image`,
//! `tags`, `read_time_minutes`, `author`). The body becomes the post content.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(name = "folio-sync", version, about = "Sync Markdown posts to a folio server")]
struct Cli {
    /// Base URL of the folio server.
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    server: String,

    /// Service token authorising post ingestion.
    #[arg(long, env = "FOLIO_SERVICE_TOKEN", hide_env_values = true, default_value = "")]
    token: String,

    /// Directory scanned recursively for `*.md` files.
    #[arg(long)]
    dir: PathBuf,

    /// Parse and print what would be sent without contacting the server.
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct Author {
    name: String,
    #[serde(default)]
    avatar: String,
    #[serde(default)]
    bio: String,
}

#[derive(Debug, Deserialize)]
struct FrontMatter {
    title: String,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    excerpt: String,
    #[serde(default)]
    image: String,
    category: String,
    #[serde(default)]
    tags: Vec<String>,
    /// `YYYY-MM-DD`; validated by the server.
    published: String,
    #[serde(default)]
    read_time_minutes: Option<u32>,
    #[serde(default)]
    author: Option<Author>,
}

/// Body of `POST /api/v1/posts`.
#[derive(Debug, Serialize)]
struct IngestRequest {
    service_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    slug: Option<String>,
    title: String,
    excerpt: String,
    content: String,
    image: String,
    category: String,
    tags: Vec<String>,
    published: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    read_time_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<Author>,
}

#[derive(Debug, Deserialize)]
struct IngestResponse {
    slug: String,
    id: u32,
}

/// All `*.md` files below `dir`, sorted by path.
fn collect_markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("{} is not a directory", dir.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "md") {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Split `---\n<yaml>\n---\n<body>`. `None` without a front matter block.
fn split_front_matter(raw: &str) -> Option<(&str, &str)> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let rest = raw
        .strip_prefix("---\n")
        .or_else(|| raw.strip_prefix("---\r\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let body = &rest[offset + line.len()..];
            return Some((&rest[..offset], body));
        }
        offset += line.len();
    }
    None
}

fn build_request(path: &Path, raw: &str, token: &str) -> Result<IngestRequest> {
    let (yaml, body) = split_front_matter(raw)
        .with_context(|| format!("{}: missing front matter block", path.display()))?;
    let meta: FrontMatter = serde_yaml::from_str(yaml)
        .with_context(|| format!("{}: invalid front matter", path.display()))?;

    Ok(IngestRequest {
        service_token: token.to_string(),
        slug: meta.slug,
        title: meta.title,
        excerpt: meta.excerpt,
        content: body.trim_start_matches(['\r', '\n']).to_string(),
        image: meta.image,
        category: meta.category,
        tags: meta.tags,
        published: meta.published,
        read_time_minutes: meta.read_time_minutes,
        author: meta.author,
    })
}

async fn upload(
    client: &reqwest::Client,
    server: &str,
    request: &IngestRequest,
) -> Result<IngestResponse> {
    let url = format!("{}/api/v1/posts", server.trim_end_matches('/'));
    let response = client
        .post(&url)
        .json(request)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        bail!("Server returned {}: {}", status, body);
    }

    response
        .json()
        .await
        .context("Failed to decode ingest response")
}

async fn sync_file(client: &reqwest::Client, cli: &Cli, path: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let request = build_request(path, &raw, &cli.token)?;

    if cli.dry_run {
        println!(
            "[dry-run] {} -> {} ({}, {} tags)",
            path.display(),
            request.slug.as_deref().unwrap_or("<from title>"),
            request.category,
            request.tags.len()
        );
        return Ok(());
    }

    let response = upload(client, &cli.server, &request).await?;
    println!("{} -> {} (id {})", path.display(), response.slug, response.id);
    Ok(())
}

async fn run(cli: Cli) -> Result<bool> {
    if !cli.dry_run && cli.token.is_empty() {
        bail!("A service token is required (--token or FOLIO_SERVICE_TOKEN)");
    }

    let files = collect_markdown_files(&cli.dir)?;
    if files.is_empty() {
        println!("No markdown files found in {}", cli.dir.display());
        return Ok(true);
    }

    let client = reqwest::Client::new();
    let mut synced = 0usize;
    let mut failed = 0usize;

    for path in &files {
        match sync_file(&client, &cli, path).await {
            Ok(()) => synced += 1,
            Err(e) => {
                eprintln!("error: {:#}", e);
                failed += 1;
            }
        }
    }

    println!("{} synced, {} failed", synced, failed);
    Ok(failed == 0)
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
