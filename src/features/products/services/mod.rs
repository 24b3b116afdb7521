mod product_service;

pub use product_service::{filter_by_category, ImageUpload, ProductService};
