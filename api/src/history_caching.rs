//! Handles the caching logic for the upstream deploy-history response.

use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

use tokio::sync::OnceCell;
use tokio::sync::RwLock;

use crate::client;
use crate::deploy_record::DeploymentRecord;
use crate::endpoints::Endpoints;
use crate::ApiError;

#[derive(Clone, Debug)]
struct CachedHistories {
    records: Vec<DeploymentRecord>,
    last_fetched: Instant,
}

/// Retrieves deployment histories, using a lazy, time-based cache.
///
/// This function acts as a gatekeeper to the upstream compiler service. It only
/// calls the service when the cache is empty or older than `CACHE_DURATION`.
pub async fn get_cached_deploy_histories(
    endpoints: &Endpoints,
) -> Result<Vec<DeploymentRecord>, ApiError> {
    static CACHE: OnceCell<Arc<RwLock<Option<CachedHistories>>>> = OnceCell::const_new();
    const CACHE_DURATION: Duration = Duration::from_secs(60);

    let cache_lock = CACHE
        .get_or_init(|| async { Arc::new(RwLock::new(None)) })
        .await;

    // Check for a valid, non-stale entry first with a read lock.
    let read_lock = cache_lock.read().await;
    if let Some(cache) = &*read_lock {
        if cache.last_fetched.elapsed() < CACHE_DURATION {
            return Ok(cache.records.clone());
        }
    }
    drop(read_lock); // Release read lock before attempting to acquire a write lock.

    let mut write_lock = cache_lock.write().await;

    // Another task might have refreshed the cache while we waited for the write lock.
    if let Some(cache) = &*write_lock {
        if cache.last_fetched.elapsed() < CACHE_DURATION {
            return Ok(cache.records.clone());
        }
    }

    let records = client::fetch_deploy_histories(endpoints).await?;

    *write_lock = Some(CachedHistories {
        records: records.clone(),
        last_fetched: Instant::now(),
    });

    Ok(records)
}
