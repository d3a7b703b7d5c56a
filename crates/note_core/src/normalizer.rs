//! Post-processing of raw model output.

use crate::models::{ConsistencyResult, PastArticle};
use crate::prompts::PAST_ARTICLE_SEPARATOR;

const HEADING_MARKER: &str = "# ";

/// Title from a leading `# ` heading, otherwise `fallback`.
///
/// Only the first line is inspected. The heading is not removed from the
/// content the caller returns.
pub fn extract_title(content: &str, fallback: &str) -> String {
    content
        .split('\n')
        .next()
        .and_then(|first| first.strip_prefix(HEADING_MARKER))
        .map(|title| title.trim().to_string())
        .unwrap_or_else(|| fallback.to_string())
}

pub fn render_past_articles(past_articles: &[PastArticle]) -> String {
    past_articles
        .iter()
        .map(|article| format!("### {}\n{}", article.title, article.content))
        .collect::<Vec<_>>()
        .join(PAST_ARTICLE_SEPARATOR)
}

/// Parse a consistency report, degrading to a summary-only result.
///
/// Never fails: text that does not parse becomes the summary verbatim.
pub fn parse_consistency_result(raw: &str) -> ConsistencyResult {
    match serde_json::from_str::<ConsistencyResult>(raw) {
        Ok(result) => result,
        Err(err) => {
            log::warn!(
                "Consistency check returned non-JSON output ({}), using raw text as summary",
                err
            );
            ConsistencyResult::summary_only(raw)
        }
    }
}
