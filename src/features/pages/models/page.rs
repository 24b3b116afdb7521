use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::storage::Record;
use crate::shared::constants::KEY_PAGES;
use crate::shared::localized::LocalizedString;

/// Editable copy of a static page, keyed by slug
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PageContent {
    pub slug: String,
    pub title: LocalizedString,
    pub content: LocalizedString,
}

impl Record for PageContent {
    const COLLECTION: &'static str = KEY_PAGES;

    fn record_key(&self) -> &str {
        &self.slug
    }

    fn seed() -> Vec<Self> {
        vec![
            PageContent {
                slug: "home".to_string(),
                title: LocalizedString::new("Welcome to FutureCorp", "欢迎来到未来科技"),
                content: LocalizedString::new(
                    "We build the technology of tomorrow, today. Explore our innovative solutions designed to empower your business.",
                    "我们今天就在创造明日科技。探索我们要为您的业务赋能的创新解决方案。",
                ),
            },
            PageContent {
                slug: "about".to_string(),
                title: LocalizedString::new("About Us", "关于我们"),
                content: LocalizedString::new(
                    "Founded in 2024, FutureCorp is a global leader in innovation. Our mission is to simplify complexity through technology.",
                    "未来科技成立于2024年，是全球创新的领导者。我们的使命是通过技术简化复杂性。",
                ),
            },
            PageContent {
                slug: "contact".to_string(),
                title: LocalizedString::new("Contact Us", "联系我们"),
                content: LocalizedString::new(
                    "123 Tech Avenue, Silicon Valley, CA. Phone: +1 (555) 123-4567",
                    "加利福尼亚州硅谷科技大道123号。电话：+1 (555) 123-4567",
                ),
            },
        ]
    }
}
