mod product_dto;

pub use product_dto::{
    ImageUploadResponseDto, ProductDetailDto, ProductQueryParams, SaveProductDto,
    SkippedUploadDto, UploadImagesDto,
};
