mod site_dto;

pub use site_dto::{
    CatalogQuery, CatalogViewDto, CategoryRefDto, HomeViewDto, LocalizedPageDto, ProductCardDto,
    ProductViewDto,
};
