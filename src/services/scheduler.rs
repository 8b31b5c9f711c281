use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use crate::services::RecommendationService;

/// Retrains the model on a fixed interval
///
/// The first tick fires immediately, giving the eager train at startup.
/// Failures are logged and absorbed; the next tick is the retry. The engine
/// guarantees a failed train never disturbs the generation in service.
pub async fn run_retrain_loop(service: Arc<RecommendationService>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);

    loop {
        ticker.tick().await;
        match service.train().await {
            Ok(groups) => info!(groups, "scheduled retrain complete"),
            Err(e) => error!(error = %e, "scheduled retrain failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Group;
    use crate::services::providers::{MockGroupProvider, MockUserPreferenceProvider};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_service(fetches: Arc<AtomicUsize>) -> Arc<RecommendationService> {
        let mut groups = MockGroupProvider::new();
        groups.expect_fetch_groups().returning(move || {
            fetches.fetch_add(1, Ordering::SeqCst);
            Ok(vec![Group {
                id: 1,
                name: "group-1".to_string(),
                genres: vec!["rock".to_string()],
                image_url: String::new(),
            }])
        });

        Arc::new(RecommendationService::new(
            Arc::new(groups),
            Arc::new(MockUserPreferenceProvider::new()),
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn test_trains_eagerly_then_on_interval() {
        let fetches = Arc::new(AtomicUsize::new(0));
        let service = counting_service(fetches.clone());

        let handle = tokio::spawn(run_retrain_loop(service.clone(), Duration::from_secs(60)));

        // First tick fires without waiting for the interval.
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        assert!(service.engine().current().await.is_some());

        tokio::time::sleep(Duration::from_secs(61)).await;
        assert_eq!(fetches.load(Ordering::SeqCst), 2);

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_retrain_is_absorbed_and_retried() {
        let fetches = Arc::new(AtomicUsize::new(0));
        let mut groups = MockGroupProvider::new();
        {
            let fetches = fetches.clone();
            groups.expect_fetch_groups().returning(move || {
                fetches.fetch_add(1, Ordering::SeqCst);
                Ok(Vec::new())
            });
        }
        let service = Arc::new(RecommendationService::new(
            Arc::new(groups),
            Arc::new(MockUserPreferenceProvider::new()),
        ));

        let handle = tokio::spawn(run_retrain_loop(service.clone(), Duration::from_secs(60)));

        tokio::time::sleep(Duration::from_secs(121)).await;
        // Every failure was absorbed and the loop kept ticking.
        assert!(fetches.load(Ordering::SeqCst) >= 3);
        assert!(service.engine().current().await.is_none());

        handle.abort();
    }
}
