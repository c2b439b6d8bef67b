//! In-memory implementation of the click log.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// Process-local click log.
///
/// Each code owns its own `Vec<Click>`; appends take the write lock of that
/// entry's shard only, so different codes rarely contend.
#[derive(Default)]
pub struct InMemoryClickRepository {
    clicks: DashMap<String, Vec<Click>>,
}

impl InMemoryClickRepository {
    pub fn new() -> Self {
        Self {
            clicks: DashMap::new(),
        }
    }
}

#[async_trait]
impl ClickRepository for InMemoryClickRepository {
    async fn record_click(&self, new_click: NewClick) -> Result<u64, AppError> {
        let mut log = self.clicks.entry(new_click.code.clone()).or_default();
        log.push(Click::from_new(new_click));
        Ok(log.len() as u64)
    }

    async fn clicks_for(&self, code: &str) -> Result<Vec<Click>, AppError> {
        Ok(self
            .clicks
            .get(code)
            .map(|log| log.value().clone())
            .unwrap_or_default())
    }

    async fn count_for(&self, code: &str) -> Result<u64, AppError> {
        Ok(self
            .clicks
            .get(code)
            .map(|log| log.len() as u64)
            .unwrap_or(0))
    }
}
