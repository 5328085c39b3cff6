use tracing::{debug, info, warn};

use crate::models::{EvidenceSet, SearchHit};
use crate::pipeline::traits::EvidenceSearcher;

/// Filters raw hits down to the snippets worth showing the model.
pub fn select_evidence(hits: &[SearchHit]) -> EvidenceSet {
    let set = EvidenceSet::from_hits(hits);
    debug!(
        candidates = hits.len(),
        kept = set.len(),
        "selected evidence snippets"
    );
    set
}

/// Searches for `claim` and renders the selected snippets as a context block.
///
/// A failed search is not an error here: it yields the same empty string as a
/// search that found nothing usable.
pub async fn fetch_context<S>(searcher: &S, claim: &str) -> String
where
    S: EvidenceSearcher + ?Sized,
{
    info!("fetching web context");
    match searcher.search(claim).await {
        Ok(hits) => select_evidence(&hits).render(),
        Err(e) => {
            warn!(error = %e, "web search failed, continuing without context");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::mock::{FailingSearcher, StaticSearcher};

    #[tokio::test]
    async fn renders_selected_snippets() {
        let searcher = StaticSearcher::new([
            "short",
            "This is a sufficiently long valid snippet text",
            "Another valid one that is long enough...",
        ]);
        let context = fetch_context(&searcher, "anything").await;
        assert_eq!(context, "- This is a sufficiently long valid snippet text");
    }

    #[tokio::test]
    async fn failed_search_yields_empty_context() {
        let context = fetch_context(&FailingSearcher::new("connection refused"), "x").await;
        assert_eq!(context, "");
    }

    #[tokio::test]
    async fn no_valid_snippets_yields_empty_context() {
        let searcher = StaticSearcher::new(["tiny", "also truncated here, sadly..."]);
        assert_eq!(fetch_context(&searcher, "x").await, "");
    }
}
