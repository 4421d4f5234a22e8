use anyhow::anyhow;
use serde_json::Value;
use std::time::Instant;

use domain::AnalysedComment;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
const PREVIEW_CHARS: usize = 80;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let community = args
        .next()
        .ok_or_else(|| anyhow!("usage: client <community> [filter_by] [limit]"))?;
    let filter_by = args.next();
    let limit = args.next();

    let base_url =
        std::env::var("ANALYSE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(f) = filter_by {
        query.push(("filter_by", f));
    }
    if let Some(l) = limit {
        query.push(("limit", l));
    }

    let client = reqwest::Client::new();
    println!("Analysing r/{} via {}...", community, base_url);

    let start = Instant::now();
    let url = format!("{}/analyse/{}", base_url.trim_end_matches('/'), community);
    let resp = client.get(&url).query(&query).send().await?;
    let status = resp.status();

    if !status.is_success() {
        let body: Value = resp.json().await.unwrap_or_default();
        println!(
            "   -> ❌ {}: {}",
            status,
            body["detail"].as_str().unwrap_or("no detail")
        );
        return Ok(());
    }

    let comments: Vec<AnalysedComment> = resp.json().await?;
    println!(
        "   -> Retrieved {} comment(s) in {:.2?}:",
        comments.len(),
        start.elapsed()
    );
    for c in comments {
        println!(
            "      - [{:<8}] {:+.3} {}: {}",
            c.sentiment,
            c.polarity,
            c.id,
            preview(&c.text)
        );
    }

    Ok(())
}

fn preview(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > PREVIEW_CHARS {
        let cut: String = flat.chars().take(PREVIEW_CHARS).collect();
        format!("{}…", cut)
    } else {
        flat
    }
}
