//! Command implementations for the Waypost CLI.

use crate::cli::args::*;
use crate::cli::output::*;
use crate::document::{Document, DocumentKind};
use crate::error::{Result, WaypostError};
use crate::index::ContentIndex;
use crate::related::{RelatedConfig, RelatedMatcher};
use crate::search::{HighlightConfig, Highlighter, SearchRequest, Searcher};

/// Execute a CLI command.
pub fn execute_command(args: WaypostArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search_index(search_args.clone(), &args),
        Command::Related(related_args) => find_related(related_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
        Command::Validate(validate_args) => validate_index(validate_args.clone(), &args),
    }
}

fn load_index(path: &std::path::Path, cli_args: &WaypostArgs) -> Result<ContentIndex> {
    if cli_args.verbosity() > 1 {
        println!("Loading content index from: {}", path.display());
    }
    ContentIndex::from_json_file(path)
}

fn result_row(document: &Document, score: u32, index: &ContentIndex) -> SearchResultRow {
    SearchResultRow {
        id: document.id.clone(),
        title: document.title.clone(),
        href: document.href.clone(),
        score,
        description: document.description.clone(),
        category: document
            .category
            .as_deref()
            .and_then(|key| index.taxonomy().category_name(key))
            .map(str::to_string),
    }
}

/// Search a content index.
fn search_index(args: SearchArgs, cli_args: &WaypostArgs) -> Result<()> {
    let index = load_index(&args.index_file, cli_args)?;
    let searcher = Searcher::new(&index);
    let request = SearchRequest::new(&args.query).limit(args.limit);
    let results = searcher.search(&request);

    let mut rows: Vec<SearchResultRow> = results
        .hits
        .iter()
        .map(|hit| result_row(&hit.document, hit.score, &index))
        .collect();

    if args.highlight {
        let highlighter = Highlighter::new(&args.query, HighlightConfig::default())?;
        for row in &mut rows {
            row.title = highlighter.highlight(&row.title);
            if let Some(description) = &row.description {
                row.description = Some(highlighter.highlight(description));
            }
        }
    }

    let report = SearchReport {
        query: args.query.clone(),
        hits: rows,
        total_hits: results.total_hits,
    };
    output_result(&format!("Search results for '{}'", args.query), &report, cli_args)
}

/// Find documents related to a reference document.
fn find_related(args: RelatedArgs, cli_args: &WaypostArgs) -> Result<()> {
    let index = load_index(&args.index_file, cli_args)?;
    let reference = index.get(&args.document_id).ok_or_else(|| {
        WaypostError::query(format!("no document with id '{}'", args.document_id))
    })?;

    let config = RelatedConfig::new().max_results(args.max);
    let matcher = RelatedMatcher::with_config(&index, config);
    let hits = matcher.related(reference);

    let report = RelatedReport {
        reference_id: args.document_id.clone(),
        hits: hits
            .iter()
            .map(|hit| result_row(&hit.document, hit.score, &index))
            .collect(),
    };
    output_result(
        &format!("Documents related to '{}'", args.document_id),
        &report,
        cli_args,
    )
}

/// Show statistics for a content index.
fn show_stats(args: StatsArgs, cli_args: &WaypostArgs) -> Result<()> {
    let index = load_index(&args.index_file, cli_args)?;

    let report = IndexStatsReport {
        total_documents: index.len(),
        blog_posts: index
            .documents()
            .iter()
            .filter(|d| d.kind == DocumentKind::Blog)
            .count(),
        categories: index.taxonomy().categories().len(),
        tags: index.taxonomy().tags().len(),
        category_counts: index.category_counts(),
    };
    output_result("Content index statistics", &report, cli_args)
}

/// Validate a content index file.
fn validate_index(args: ValidateArgs, cli_args: &WaypostArgs) -> Result<()> {
    let report = match ContentIndex::from_json_file(&args.index_file) {
        Ok(index) => ValidationReport {
            valid: true,
            total_documents: index.len(),
            error: None,
        },
        Err(e) => ValidationReport {
            valid: false,
            total_documents: 0,
            error: Some(e.to_string()),
        },
    };
    let valid = report.valid;
    output_result("Content index validation", &report, cli_args)?;
    if !valid {
        return Err(WaypostError::index("content index file is invalid"));
    }
    Ok(())
}
