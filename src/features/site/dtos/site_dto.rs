use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::categories::dtos::LocalizedCategoryNode;
use crate::features::categories::models::Category;
use crate::features::pages::models::PageContent;
use crate::features::products::models::Product;
use crate::shared::localized::LanguageCode;

/// Query params for the localized catalog
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct CatalogQuery {
    /// Content language: "en" (default) or "zh"
    #[serde(default)]
    pub lang: LanguageCode,
    /// Selected category id
    pub category: Option<String>,
}

/// Page copy in one language
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocalizedPageDto {
    pub slug: String,
    pub title: String,
    pub content: String,
}

impl LocalizedPageDto {
    pub fn from_page(page: &PageContent, lang: LanguageCode) -> Self {
        Self {
            slug: page.slug.clone(),
            title: page.title.resolve(lang),
            content: page.content.resolve(lang),
        }
    }
}

/// Product tile shown on the home page and in the catalog grid
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductCardDto {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
}

impl ProductCardDto {
    pub fn from_product(product: &Product, lang: LanguageCode) -> Self {
        Self {
            id: product.id.clone(),
            category_id: product.category_id.clone(),
            name: product.name.resolve(lang),
            description: product.description.resolve(lang),
            price: product.price.clone(),
            image_url: product.image_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomeViewDto {
    pub lang: LanguageCode,
    /// None when the `home` page has been removed from storage
    pub page: Option<LocalizedPageDto>,
    pub featured: Vec<ProductCardDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogViewDto {
    pub lang: LanguageCode,
    pub categories: Vec<LocalizedCategoryNode>,
    pub selected_category: Option<String>,
    pub heading: String,
    /// e.g. "Showing 2 results"
    pub summary: String,
    pub total: usize,
    pub products: Vec<ProductCardDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryRefDto {
    pub id: String,
    pub name: String,
}

impl CategoryRefDto {
    pub fn from_category(category: &Category, lang: LanguageCode) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.resolve(lang),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductViewDto {
    pub lang: LanguageCode,
    pub id: String,
    pub name: String,
    pub description: String,
    pub features: String,
    pub price: String,
    /// None when the product's category no longer exists
    pub category: Option<CategoryRefDto>,
    /// Gallery, or the thumbnail alone when the gallery is empty
    pub images: Vec<String>,
}
