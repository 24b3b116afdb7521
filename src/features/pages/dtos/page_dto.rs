use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::localized::LocalizedString;
use crate::shared::validation::SLUG_REGEX;

/// Request DTO for saving a page's title and content
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SavePageDto {
    #[serde(default)]
    pub title: LocalizedString,
    #[serde(default)]
    pub content: LocalizedString,
}

/// Path parameter for page upserts
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PageSlug {
    #[validate(regex(
        path = *SLUG_REGEX,
        message = "slug must be lowercase words joined by hyphens (e.g. 'terms-of-service')"
    ))]
    pub slug: String,
}
