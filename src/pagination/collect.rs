//! Materializing a stream into memory

use super::limits::MAX_PAGE_SIZE;
use super::stream::RecordStream;
use crate::error::Result;
use futures::TryStreamExt;

/// Drain `stream` into a vector of at most `limit` records.
///
/// Stops pulling as soon as the limit is held, so no page past the limit is
/// ever requested. Any fetch failure discards the records gathered so far.
pub async fn collect<T>(mut stream: RecordStream<T>) -> Result<Vec<T>>
where
    T: Clone + Send + Sync + 'static,
{
    let limit = stream
        .limit()
        .map(|limit| usize::try_from(limit).unwrap_or(usize::MAX));

    let capacity = limit.unwrap_or(0).min(MAX_PAGE_SIZE as usize);
    let mut records = Vec::with_capacity(capacity);

    if limit == Some(0) {
        return Ok(records);
    }

    while let Some(record) = stream.try_next().await? {
        records.push(record);
        if limit.is_some_and(|limit| records.len() >= limit) {
            break;
        }
    }

    Ok(records)
}
