use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::pages::dtos::SavePageDto;
use crate::features::pages::models::PageContent;
use crate::modules::storage::ContentStore;

/// Service for page copy
pub struct PageService {
    store: Arc<ContentStore>,
}

impl PageService {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<PageContent>> {
        Ok(self.store.get_all().await?)
    }

    pub async fn get(&self, slug: &str) -> Result<PageContent> {
        self.store
            .find_one(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Page '{}' not found", slug)))
    }

    /// Upsert the page identified by `slug`
    pub async fn save(&self, slug: &str, dto: SavePageDto) -> Result<PageContent> {
        let page = self
            .store
            .save_one(PageContent {
                slug: slug.to_string(),
                title: dto.title,
                content: dto.content,
            })
            .await?;

        tracing::info!("Page saved: slug={}", page.slug);
        Ok(page)
    }
}
