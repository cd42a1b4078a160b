use std::sync::Arc;

use tokio::sync::Semaphore;
use url::Url;

use crate::domain::{ExtractOptions, ResolveError};
use crate::resolver::Resolver;

pub const DEFAULT_WORKERS: usize = 4;

/// Resolves many links at once with a bounded number of in-flight
/// resolutions.
pub struct ParallelResolver {
    resolver: Arc<Resolver>,
    semaphore: Arc<Semaphore>,
}

impl ParallelResolver {
    pub fn new(resolver: Arc<Resolver>) -> Self {
        Self::with_workers(resolver, DEFAULT_WORKERS)
    }

    pub fn with_workers(resolver: Arc<Resolver>, workers: usize) -> Self {
        Self {
            resolver,
            semaphore: Arc::new(Semaphore::new(workers.max(1))),
        }
    }

    /// Resolve every input; results come back in input order.
    pub async fn resolve_all(
        &self,
        inputs: Vec<String>,
        options: ExtractOptions,
    ) -> Vec<(String, Result<String, ResolveError>)> {
        let mut handles = Vec::with_capacity(inputs.len());

        for input in inputs {
            let resolver = self.resolver.clone();
            let semaphore = self.semaphore.clone();

            let handle = tokio::spawn(async move {
                let _permit = semaphore.acquire().await.expect("Semaphore closed");

                let result = resolver.extract_str(&input, options).await;
                (input, result)
            });

            handles.push(handle);
        }

        let mut results = Vec::with_capacity(handles.len());
        for handle in futures::future::join_all(handles).await {
            match handle {
                Ok(result) => results.push(result),
                Err(e) => {
                    tracing::error!("Task join error: {}", e);
                }
            }
        }

        results
    }

    /// Same as [`ParallelResolver::resolve_all`] for already parsed URLs.
    pub async fn resolve_urls(
        &self,
        urls: Vec<Url>,
        options: ExtractOptions,
    ) -> Vec<(String, Result<String, ResolveError>)> {
        self.resolve_all(urls.into_iter().map(String::from).collect(), options)
            .await
    }
}
