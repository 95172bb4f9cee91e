use super::tracker::QueryError;

/// Ceiling on the number of flights a bulk query may hand to the caller.
/// An area query covering the whole globe returns thousands of rows, more
/// than the downstream consumer can process in one response.
pub const MAX_QUERY_RESULTS: usize = 500;

/// Rejects an oversized result set before it reaches the caller.
pub(crate) fn check_result_size(count: usize) -> Result<(), QueryError> {
    if count > MAX_QUERY_RESULTS {
        Err(QueryError::ResultTooLarge { count, max: MAX_QUERY_RESULTS })
    } else {
        Ok(())
    }
}
