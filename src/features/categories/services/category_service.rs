use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoryTreeDto, SaveCategoryDto};
use crate::features::categories::models::Category;
use crate::modules::storage::{new_record_id, ContentStore};
use crate::shared::localized::{pick, LanguageCode};

/// Service for category operations
pub struct CategoryService {
    store: Arc<ContentStore>,
}

impl CategoryService {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }

    /// List all categories (flat list, storage order)
    pub async fn list(&self) -> Result<Vec<Category>> {
        Ok(self.store.get_all().await?)
    }

    /// List all categories as tree structure
    pub async fn list_tree(&self) -> Result<Vec<CategoryTreeDto>> {
        let categories: Vec<Category> = self.store.get_all().await?;
        Ok(CategoryTreeDto::build_tree(&categories))
    }

    pub async fn get(&self, id: &str) -> Result<Category> {
        let categories: Vec<Category> = self.store.get_all().await?;
        categories
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", id)))
    }

    pub async fn create(&self, dto: SaveCategoryDto, lang: LanguageCode) -> Result<Category> {
        self.save(&new_record_id(), dto, lang).await
    }

    /// Write the category at `id`, replacing it or appending it
    pub async fn save(&self, id: &str, dto: SaveCategoryDto, lang: LanguageCode) -> Result<Category> {
        let parent_id = dto.parent_id.filter(|p| !p.is_empty());

        if parent_id.as_deref() == Some(id) {
            return Err(AppError::Validation(pick(
                lang,
                "A category cannot be its own parent.",
                "分类不能作为自己的父分类。",
            )));
        }

        let category = self
            .store
            .save_one(Category {
                id: id.to_string(),
                parent_id,
                name: dto.name,
            })
            .await?;

        tracing::info!(
            "Category saved: id={}, parent={:?}, name={}",
            category.id,
            category.parent_id,
            category.name.en
        );

        Ok(category)
    }

    /// Delete a category. Products and child categories keep their references.
    pub async fn delete(&self, id: &str) -> Result<()> {
        if !self.store.delete_one::<Category>(id).await? {
            return Err(AppError::NotFound(format!("Category '{}' not found", id)));
        }

        tracing::info!("Category deleted: id={}", id);
        Ok(())
    }
}
