use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::models::Category;
use crate::shared::localized::{validate_localized_required, LanguageCode, LocalizedString};

/// Request DTO for creating or updating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveCategoryDto {
    /// Parent category id; null for a root category
    #[serde(default)]
    pub parent_id: Option<String>,

    #[validate(custom(function = "validate_localized_required"))]
    pub name: LocalizedString,
}

/// Category with both locales, nested under its parent
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(no_recursion)]
pub struct CategoryTreeDto {
    pub id: String,
    pub name: LocalizedString,
    pub children: Vec<CategoryTreeDto>,
}

impl CategoryTreeDto {
    /// Build tree from flat list of categories
    ///
    /// Categories whose parent no longer exists are left out.
    pub fn build_tree(categories: &[Category]) -> Vec<CategoryTreeDto> {
        categories
            .iter()
            .filter(|c| c.parent_id.is_none())
            .map(|root| Self::build_node(root, categories))
            .collect()
    }

    fn build_node(category: &Category, all_categories: &[Category]) -> CategoryTreeDto {
        let children: Vec<CategoryTreeDto> = all_categories
            .iter()
            .filter(|c| c.parent_id.as_deref() == Some(category.id.as_str()))
            .map(|child| Self::build_node(child, all_categories))
            .collect();

        CategoryTreeDto {
            id: category.id.clone(),
            name: category.name.clone(),
            children,
        }
    }

    /// Same tree with every name resolved to one language
    pub fn localize(&self, lang: LanguageCode) -> LocalizedCategoryNode {
        LocalizedCategoryNode {
            id: self.id.clone(),
            name: self.name.resolve(lang),
            children: self.children.iter().map(|c| c.localize(lang)).collect(),
        }
    }
}

/// Category tree node rendered for one language
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(no_recursion)]
pub struct LocalizedCategoryNode {
    pub id: String,
    pub name: String,
    pub children: Vec<LocalizedCategoryNode>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::storage::Record;

    #[test]
    fn test_build_tree_from_seed() {
        let tree = CategoryTreeDto::build_tree(&Category::seed());

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].id, "c1");
        let children: Vec<&str> = tree[0].children.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(children, vec!["c3", "c4"]);
        assert_eq!(tree[1].children[0].id, "c5");
    }

    #[test]
    fn test_orphans_are_not_in_tree() {
        let mut categories = Category::seed();
        categories.push(Category {
            id: "c9".to_string(),
            parent_id: Some("deleted".to_string()),
            name: LocalizedString::new("Orphan", ""),
        });

        let tree = CategoryTreeDto::build_tree(&categories);
        let all_ids: Vec<&str> = tree
            .iter()
            .flat_map(|r| std::iter::once(r).chain(r.children.iter()))
            .map(|n| n.id.as_str())
            .collect();
        assert!(!all_ids.contains(&"c9"));
    }

    #[test]
    fn test_localize_falls_back_to_english() {
        let categories = vec![Category {
            id: "x".to_string(),
            parent_id: None,
            name: LocalizedString::new("Tools", ""),
        }];

        let tree = CategoryTreeDto::build_tree(&categories);
        assert_eq!(tree[0].localize(LanguageCode::Zh).name, "Tools");
    }

    #[test]
    fn test_save_dto_requires_a_name() {
        let dto = SaveCategoryDto {
            parent_id: None,
            name: LocalizedString::new(" ", ""),
        };
        assert!(dto.validate().is_err());

        let dto = SaveCategoryDto {
            parent_id: None,
            name: LocalizedString::new("", "配件"),
        };
        assert!(dto.validate().is_ok());
    }
}
