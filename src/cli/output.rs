//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WaypostArgs};
use crate::error::Result;

/// A single search result row.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResultRow {
    pub id: String,
    pub title: String,
    pub href: String,
    pub score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchReport {
    pub query: String,
    pub hits: Vec<SearchResultRow>,
    pub total_hits: usize,
}

/// Result structure for related-content lookups.
#[derive(Debug, Serialize, Deserialize)]
pub struct RelatedReport {
    pub reference_id: String,
    pub hits: Vec<SearchResultRow>,
}

/// Content index statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexStatsReport {
    pub total_documents: usize,
    pub blog_posts: usize,
    pub categories: usize,
    pub tags: usize,
    pub category_counts: Vec<(String, usize)>,
}

/// Result structure for index validation.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub total_documents: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &WaypostArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

fn output_json<T: Serialize>(result: &T, args: &WaypostArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

fn output_human<T: Serialize>(message: &str, result: &T, args: &WaypostArgs) -> Result<()> {
    if args.verbosity() > 0 && !message.is_empty() {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    if let Some(hits) = value.get("hits").and_then(|h| h.as_array()) {
        if hits.is_empty() {
            println!("No results.");
            return Ok(());
        }
        for (i, hit) in hits.iter().enumerate() {
            let title = hit.get("title").and_then(|v| v.as_str()).unwrap_or("?");
            let href = hit.get("href").and_then(|v| v.as_str()).unwrap_or("");
            let score = hit.get("score").and_then(|v| v.as_u64()).unwrap_or(0);
            println!("{:2}. {title}  [{href}]  (score: {score})", i + 1);
            if args.verbosity() > 1
                && let Some(description) = hit.get("description").and_then(|v| v.as_str())
            {
                println!("      {description}");
            }
        }
        if let Some(total) = value.get("total_hits").and_then(|v| v.as_u64()) {
            println!();
            println!("{total} matching document(s)");
        }
    } else {
        // Generic key/value output for stats and validation reports
        output_json(result, args)?;
    }
    Ok(())
}
