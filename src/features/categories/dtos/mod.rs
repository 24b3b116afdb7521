mod category_dto;

pub use category_dto::{CategoryTreeDto, LocalizedCategoryNode, SaveCategoryDto};
