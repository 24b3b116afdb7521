use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers, model as auth_model};
use crate::features::categories::{
    dtos as categories_dtos, handlers as categories_handlers, models as categories_models,
};
use crate::features::messages::{
    dtos as messages_dtos, handlers as messages_handlers, models as messages_models,
};
use crate::features::pages::{dtos as pages_dtos, handlers as pages_handlers, models as pages_models};
use crate::features::products::{
    dtos as products_dtos, handlers as products_handlers, models as products_models,
};
use crate::features::site::{dtos as site_dtos, handlers as site_handlers};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers, models as users_models};
use crate::shared::localized::{LanguageCode, LocalizedString};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::login,
        auth_handlers::logout,
        auth_handlers::get_me,
        // Users (super admin)
        users_handlers::list_users,
        users_handlers::create_user,
        users_handlers::update_user,
        users_handlers::delete_user,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Products
        products_handlers::list_products,
        products_handlers::get_product,
        products_handlers::admin_list_products,
        products_handlers::create_product,
        products_handlers::update_product,
        products_handlers::delete_product,
        products_handlers::upload_images,
        products_handlers::remove_image,
        // Pages
        pages_handlers::get_page,
        pages_handlers::list_pages,
        pages_handlers::save_page,
        // Contact (public)
        messages_handlers::send_message,
        // Site views (public)
        site_handlers::home,
        site_handlers::about,
        site_handlers::contact,
        site_handlers::products,
        site_handlers::product,
    ),
    components(
        schemas(
            // Shared
            Meta,
            LanguageCode,
            LocalizedString,
            // Auth
            auth_model::SessionUser,
            auth_dtos::LoginRequestDto,
            auth_dtos::LoginResponseDto,
            auth_dtos::MeResponseDto,
            ApiResponse<auth_dtos::LoginResponseDto>,
            ApiResponse<auth_dtos::MeResponseDto>,
            // Users
            users_models::UserRole,
            users_dtos::CreateUserDto,
            users_dtos::UpdateUserDto,
            users_dtos::UserResponseDto,
            ApiResponse<users_dtos::UserResponseDto>,
            ApiResponse<Vec<users_dtos::UserResponseDto>>,
            // Categories
            categories_models::Category,
            categories_dtos::SaveCategoryDto,
            categories_dtos::CategoryTreeDto,
            categories_dtos::LocalizedCategoryNode,
            ApiResponse<categories_models::Category>,
            ApiResponse<Vec<categories_models::Category>>,
            // Products
            products_models::Product,
            products_dtos::SaveProductDto,
            products_dtos::ProductDetailDto,
            products_dtos::UploadImagesDto,
            products_dtos::SkippedUploadDto,
            products_dtos::ImageUploadResponseDto,
            ApiResponse<products_models::Product>,
            ApiResponse<Vec<products_models::Product>>,
            ApiResponse<products_dtos::ProductDetailDto>,
            ApiResponse<products_dtos::ImageUploadResponseDto>,
            // Pages
            pages_models::PageContent,
            pages_dtos::SavePageDto,
            ApiResponse<pages_models::PageContent>,
            ApiResponse<Vec<pages_models::PageContent>>,
            // Contact
            messages_models::ContactMessage,
            messages_dtos::SendMessageDto,
            ApiResponse<messages_models::ContactMessage>,
            // Site
            site_dtos::LocalizedPageDto,
            site_dtos::ProductCardDto,
            site_dtos::CategoryRefDto,
            site_dtos::HomeViewDto,
            site_dtos::CatalogViewDto,
            site_dtos::ProductViewDto,
            ApiResponse<site_dtos::HomeViewDto>,
            ApiResponse<site_dtos::LocalizedPageDto>,
            ApiResponse<site_dtos::CatalogViewDto>,
            ApiResponse<site_dtos::ProductViewDto>,
        )
    ),
    tags(
        (name = "auth", description = "CMS login and current session"),
        (name = "users", description = "CMS account management (super admin only)"),
        (name = "categories", description = "Product categories"),
        (name = "products", description = "Product catalog and gallery images"),
        (name = "pages", description = "Editable page copy"),
        (name = "contact", description = "Contact form (public)"),
        (name = "site", description = "Localized public views"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "FutureCorp CMS API",
        version = "0.1.0",
        description = "Bilingual corporate site and content management API",
    )
)]
pub struct ApiDoc;

/// Adds the session bearer token scheme to the OpenAPI document
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Token returned by POST /api/auth/login"))
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_public_and_admin_paths() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/auth/login",
            "/api/admin/users/{id}",
            "/api/admin/products/{id}/images/{index}",
            "/api/site/products",
            "/api/contact",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }

        let schemes = doc.components.unwrap().security_schemes;
        assert!(schemes.contains_key("bearer_auth"));
    }
}
