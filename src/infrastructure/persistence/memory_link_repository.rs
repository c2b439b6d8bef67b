//! In-memory implementation of link repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Process-local link store keyed by short code.
///
/// Creation goes through the `DashMap` entry API, so the "is this code
/// taken" check and the insert happen under the same shard lock.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: DashMap<String, Link>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
        }
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        match self.links.entry(new_link.code.clone()) {
            Entry::Occupied(occupied) => Err(AppError::collision(
                "Shortcode already in use",
                json!({ "shortcode": occupied.key() }),
            )),
            Entry::Vacant(vacant) => {
                let link = Link::from_new(new_link);
                vacant.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.get(code).map(|entry| entry.value().clone()))
    }

    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Link>, AppError> {
        // Sort on keys only; full links are cloned for the requested page.
        let mut keys: Vec<_> = self
            .links
            .iter()
            .map(|e| (e.value().created_at, e.key().clone()))
            .collect();
        keys.sort_unstable();

        Ok(keys
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .filter_map(|(_, code)| self.links.get(&code).map(|e| e.value().clone()))
            .collect())
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.links.len() as u64)
    }
}
