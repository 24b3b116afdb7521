use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryTreeDto;
use crate::features::categories::models::Category;
use crate::features::pages::models::PageContent;
use crate::features::products::models::Product;
use crate::features::products::services::filter_by_category;
use crate::features::site::dtos::{
    CatalogViewDto, CategoryRefDto, HomeViewDto, LocalizedPageDto, ProductCardDto,
    ProductViewDto,
};
use crate::modules::storage::ContentStore;
use crate::shared::constants::FEATURED_PRODUCT_COUNT;
use crate::shared::localized::{pick, LanguageCode};

/// Read-only views of the public site, rendered for one language
pub struct SiteService {
    store: Arc<ContentStore>,
}

impl SiteService {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }

    /// Home page copy plus the first products as featured cards
    pub async fn home(&self, lang: LanguageCode) -> Result<HomeViewDto> {
        let (page, products) = futures::try_join!(
            self.store.find_one::<PageContent>("home"),
            self.store.get_all::<Product>()
        )?;

        Ok(HomeViewDto {
            lang,
            page: page.map(|p| LocalizedPageDto::from_page(&p, lang)),
            featured: products
                .iter()
                .take(FEATURED_PRODUCT_COUNT)
                .map(|p| ProductCardDto::from_product(p, lang))
                .collect(),
        })
    }

    /// A single page (about, contact, ...)
    pub async fn page(&self, slug: &str, lang: LanguageCode) -> Result<LocalizedPageDto> {
        let page = self
            .store
            .find_one::<PageContent>(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Page '{}' not found", slug)))?;

        Ok(LocalizedPageDto::from_page(&page, lang))
    }

    /// Category sidebar, heading and the products of the selection
    pub async fn catalog(
        &self,
        lang: LanguageCode,
        selected: Option<&str>,
    ) -> Result<CatalogViewDto> {
        let (categories, products) = futures::try_join!(
            self.store.get_all::<Category>(),
            self.store.get_all::<Product>()
        )?;

        let selected = selected.filter(|s| !s.is_empty());
        let heading = catalog_heading(&categories, selected, lang);
        let products = filter_by_category(products, &categories, selected);
        let total = products.len();

        Ok(CatalogViewDto {
            lang,
            categories: CategoryTreeDto::build_tree(&categories)
                .iter()
                .map(|node| node.localize(lang))
                .collect(),
            selected_category: selected.map(str::to_string),
            heading,
            summary: pick(
                lang,
                &format!("Showing {} results", total),
                &format!("显示 {} 个结果", total),
            ),
            total,
            products: products
                .iter()
                .map(|p| ProductCardDto::from_product(p, lang))
                .collect(),
        })
    }

    pub async fn product(&self, id: &str, lang: LanguageCode) -> Result<ProductViewDto> {
        let (products, categories) = futures::try_join!(
            self.store.get_all::<Product>(),
            self.store.get_all::<Category>()
        )?;

        let product = products
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Product '{}' not found", id)))?;

        let category = categories
            .iter()
            .find(|c| c.id == product.category_id)
            .map(|c| CategoryRefDto::from_category(c, lang));

        Ok(ProductViewDto {
            lang,
            images: product.display_images(),
            name: product.name.resolve(lang),
            description: product.description.resolve(lang),
            features: product.features.resolve(lang),
            price: product.price,
            id: product.id,
            category,
        })
    }
}

/// No selection: "All Products". A selection that no longer resolves:
/// "Products".
fn catalog_heading(categories: &[Category], selected: Option<&str>, lang: LanguageCode) -> String {
    match selected {
        None => pick(lang, "All Products", "所有产品"),
        Some(id) => categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.resolve(lang))
            .unwrap_or_else(|| pick(lang, "Products", "产品")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::localized::LocalizedString;
    use crate::shared::test_helpers::memory_store;

    #[tokio::test]
    async fn test_home_features_first_three_products() {
        let store = memory_store();
        let service = SiteService::new(store.clone());
        store
            .save_one(Product {
                id: "p4".to_string(),
                category_id: "c3".to_string(),
                name: LocalizedString::new("Extra", ""),
                description: LocalizedString::default(),
                features: LocalizedString::default(),
                price: String::new(),
                image_url: String::new(),
                images: vec![],
            })
            .await
            .unwrap();

        let home = service.home(LanguageCode::Zh).await.unwrap();
        let featured: Vec<&str> = home.featured.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(featured, vec!["p1", "p2", "p3"]);
        assert_eq!(home.featured[1].name, "银河手机 Ultra");
        assert_eq!(home.page.unwrap().title, "欢迎来到未来科技");
    }

    #[tokio::test]
    async fn test_page_falls_back_to_english() {
        let store = memory_store();
        store
            .save_one(PageContent {
                slug: "about".to_string(),
                title: LocalizedString::new("About", ""),
                content: LocalizedString::new("Text", "文本"),
            })
            .await
            .unwrap();

        let about = SiteService::new(store)
            .page("about", LanguageCode::Zh)
            .await
            .unwrap();
        assert_eq!(about.title, "About");
        assert_eq!(about.content, "文本");
    }

    #[tokio::test]
    async fn test_catalog_headings() {
        let service = SiteService::new(memory_store());

        let all = service.catalog(LanguageCode::En, None).await.unwrap();
        assert_eq!(all.heading, "All Products");
        assert_eq!(all.total, 3);
        assert_eq!(all.summary, "Showing 3 results");
        assert_eq!(all.categories.len(), 2);

        let services = service.catalog(LanguageCode::Zh, Some("c2")).await.unwrap();
        assert_eq!(services.heading, "企业服务");
        assert_eq!(services.total, 1);
        assert_eq!(services.summary, "显示 1 个结果");

        let gone = service.catalog(LanguageCode::Zh, Some("c9")).await.unwrap();
        assert_eq!(gone.heading, "产品");
        assert!(gone.products.is_empty());
    }

    #[tokio::test]
    async fn test_product_view_without_category() {
        let store = memory_store();
        store.delete_one::<Category>("c4").await.unwrap();
        let service = SiteService::new(store);

        let phone = service.product("p2", LanguageCode::En).await.unwrap();
        assert!(phone.category.is_none());
        assert_eq!(phone.images.len(), 3);

        let audit = service.product("p3", LanguageCode::Zh).await.unwrap();
        assert_eq!(audit.category.unwrap().name, "咨询服务");
        assert_eq!(audit.features, "符合 ISO 27001 标准");
        assert_eq!(audit.images, vec!["https://picsum.photos/seed/service1/400/300"]);
    }
}
