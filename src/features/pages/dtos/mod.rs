mod page_dto;

pub use page_dto::{PageSlug, SavePageDto};
