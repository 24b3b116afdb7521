use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::storage::Record;
use crate::shared::constants::KEY_CATEGORIES;
use crate::shared::localized::LocalizedString;

/// Product category; the tree is formed by `parent_id` pointers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    pub name: LocalizedString,
}

impl Record for Category {
    const COLLECTION: &'static str = KEY_CATEGORIES;

    fn record_key(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        let category = |id: &str, parent: Option<&str>, en: &str, zh: &str| Category {
            id: id.to_string(),
            parent_id: parent.map(str::to_string),
            name: LocalizedString::new(en, zh),
        };

        vec![
            category("c1", None, "Electronics", "电子产品"),
            category("c2", None, "Services", "企业服务"),
            category("c3", Some("c1"), "Computers", "计算机"),
            category("c4", Some("c1"), "Smartphones", "智能手机"),
            category("c5", Some("c2"), "Consulting", "咨询服务"),
        ]
    }
}

/// Ids matched by a category filter: the category itself plus its direct
/// children. Grandchildren are not included.
pub fn with_direct_children<'a>(categories: &'a [Category], id: &'a str) -> HashSet<&'a str> {
    let mut ids: HashSet<&str> = categories
        .iter()
        .filter(|c| c.parent_id.as_deref() == Some(id))
        .map(|c| c.id.as_str())
        .collect();
    ids.insert(id);
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_includes_one_level_of_children() {
        let mut categories = Category::seed();
        categories.push(Category {
            id: "c6".to_string(),
            parent_id: Some("c3".to_string()),
            name: LocalizedString::new("Laptops", "笔记本"),
        });

        let ids = with_direct_children(&categories, "c1");
        assert_eq!(ids, HashSet::from(["c1", "c3", "c4"]));
    }

    #[test]
    fn test_filter_on_unknown_id_matches_only_itself() {
        let categories = Category::seed();
        assert_eq!(with_direct_children(&categories, "zz"), HashSet::from(["zz"]));
    }

    #[test]
    fn test_root_parent_serializes_as_null() {
        let value = serde_json::to_value(&Category::seed()[0]).unwrap();
        assert!(value["parentId"].is_null());
        assert_eq!(value["name"]["zh"], "电子产品");
    }
}
