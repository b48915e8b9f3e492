use std::collections::HashSet;
use std::sync::Arc;

use mem_shortener::application::services::{LinkService, StatsService};
use mem_shortener::domain::repositories::LinkRepository;
use mem_shortener::infrastructure::persistence::InMemoryLinkRepository;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_unique_urls_are_all_stored() {
    const N: usize = 500;

    let repo = Arc::new(InMemoryLinkRepository::new());
    let service = Arc::new(LinkService::new(repo.clone()));

    let handles: Vec<_> = (0..N)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .shorten(&format!("https://host{}.example.com/{i}", i % 7))
                    .await
                    .unwrap()
                    .code
            })
        })
        .collect();

    let mut codes = HashSet::new();
    for handle in handles {
        codes.insert(handle.await.unwrap());
    }

    assert_eq!(codes.len(), N);
    assert_eq!(repo.count().await.unwrap(), N);

    for (i, code) in codes.iter().enumerate().take(20) {
        let link = service.resolve(code).await.unwrap();
        assert_eq!(&link.code, code, "lookup {i}");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_same_url_yields_one_code() {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let service = Arc::new(LinkService::new(repo.clone()));

    let handles: Vec<_> = (0..64)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .shorten("https://example.com/shared")
                    .await
                    .unwrap()
                    .code
            })
        })
        .collect();

    let mut codes = HashSet::new();
    for handle in handles {
        codes.insert(handle.await.unwrap());
    }

    assert_eq!(codes.len(), 1);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_statistics_during_writes() {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let links = Arc::new(LinkService::new(repo.clone()));
    let stats = Arc::new(StatsService::new(repo.clone()));

    let writer = {
        let links = links.clone();
        tokio::spawn(async move {
            for i in 0..200 {
                links
                    .shorten(&format!("https://example.com/{i}"))
                    .await
                    .unwrap();
            }
        })
    };

    let reader = {
        let stats = stats.clone();
        tokio::spawn(async move {
            let mut last = 0;
            for _ in 0..50 {
                let counts = stats.domain_counts().await.unwrap();
                let seen = counts.get("example.com").copied().unwrap_or(0);
                assert!(seen >= last, "snapshot went backwards: {seen} < {last}");
                last = seen;
                tokio::task::yield_now().await;
            }
        })
    };

    writer.await.unwrap();
    reader.await.unwrap();

    let counts = stats.domain_counts().await.unwrap();
    assert_eq!(counts["example.com"], 200);
}
