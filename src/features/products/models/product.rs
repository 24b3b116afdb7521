use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::storage::Record;
use crate::shared::constants::KEY_PRODUCTS;
use crate::shared::localized::LocalizedString;

/// Catalog entry. `category_id` is not checked against existing categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub category_id: String,
    pub name: LocalizedString,
    #[serde(default)]
    pub description: LocalizedString,
    #[serde(default)]
    pub features: LocalizedString,
    /// Free text, e.g. "$999" or "Contact Us"
    #[serde(default)]
    pub price: String,
    /// Card thumbnail
    #[serde(default)]
    pub image_url: String,
    /// Gallery: http(s) URLs or inlined `data:` URLs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

impl Product {
    /// The gallery, or the thumbnail alone when the gallery is empty
    pub fn display_images(&self) -> Vec<String> {
        if self.images.is_empty() {
            vec![self.image_url.clone()]
        } else {
            self.images.clone()
        }
    }
}

impl Record for Product {
    const COLLECTION: &'static str = KEY_PRODUCTS;

    fn record_key(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        let gallery = |names: &[&str]| -> Vec<String> {
            names
                .iter()
                .map(|n| format!("https://picsum.photos/seed/{}/800/600", n))
                .collect()
        };

        vec![
            Product {
                id: "p1".to_string(),
                category_id: "c3".to_string(),
                name: LocalizedString::new("Pro Workstation X1", "专业工作站 X1"),
                description: LocalizedString::new(
                    "High-performance computing for professionals.",
                    "专为专业人士设计的高性能计算设备。",
                ),
                features: LocalizedString::new("32-core CPU, 128GB RAM", "32核处理器, 128GB 内存"),
                price: "$2,999".to_string(),
                image_url: "https://picsum.photos/seed/tech1/400/300".to_string(),
                images: gallery(&["tech1", "tech1_angle", "tech1_detail", "tech1_setup"]),
            },
            Product {
                id: "p2".to_string(),
                category_id: "c4".to_string(),
                name: LocalizedString::new("Galaxy Phone Ultra", "银河手机 Ultra"),
                description: LocalizedString::new("The future in your hands.", "未来尽在掌握。"),
                features: LocalizedString::new("5G, AI Camera", "5G网络, AI相机"),
                price: "$999".to_string(),
                image_url: "https://picsum.photos/seed/phone1/400/300".to_string(),
                images: gallery(&["phone1", "phone1_back", "phone1_screen"]),
            },
            Product {
                id: "p3".to_string(),
                category_id: "c5".to_string(),
                name: LocalizedString::new("IT Audit Service", "IT 审计服务"),
                description: LocalizedString::new(
                    "Comprehensive security analysis.",
                    "全面的安全分析服务。",
                ),
                features: LocalizedString::new("ISO 27001 compliant", "符合 ISO 27001 标准"),
                price: "Contact Us".to_string(),
                image_url: "https://picsum.photos/seed/service1/400/300".to_string(),
                images: vec![],
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_images_prefers_gallery() {
        let seed = Product::seed();

        assert_eq!(seed[0].display_images().len(), 4);
        assert_eq!(
            seed[0].display_images()[1],
            "https://picsum.photos/seed/tech1_angle/800/600"
        );
        assert_eq!(
            seed[2].display_images(),
            vec!["https://picsum.photos/seed/service1/400/300".to_string()]
        );
    }

    #[test]
    fn test_missing_images_field_deserializes_as_empty() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": "p9",
            "categoryId": "c1",
            "name": { "en": "Widget", "zh": "" },
            "price": "$1",
            "imageUrl": "https://example.com/w.png"
        }))
        .unwrap();

        assert!(product.images.is_empty());
        assert_eq!(product.description, LocalizedString::default());
    }
}
