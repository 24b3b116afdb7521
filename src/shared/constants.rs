// =============================================================================
// STORAGE KEYS
// =============================================================================

pub const KEY_CATEGORIES: &str = "categories";
pub const KEY_PRODUCTS: &str = "products";
pub const KEY_PAGES: &str = "pages";
pub const KEY_MESSAGES: &str = "messages";
pub const KEY_USERS: &str = "users";

/// Holds the logged-in identity (password stripped)
pub const KEY_CURRENT_USER: &str = "currentUser";

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Editor role - can manage categories, products and pages
pub const ROLE_ADMIN: &str = "admin";

/// Super admin role - everything an admin can do, plus user management
pub const ROLE_SUPER_ADMIN: &str = "super_admin";

// =============================================================================
// CONTENT
// =============================================================================

/// Largest image accepted by the product upload endpoint (bytes)
pub const DEFAULT_MAX_IMAGE_SIZE: usize = 5_000_000;

/// Images at the size limit one upload request may carry
pub const MAX_IMAGES_PER_UPLOAD: usize = 5;

/// Allowance for multipart boundaries and part headers (1MB)
pub const MULTIPART_OVERHEAD: usize = 1024 * 1024;

/// Number of products shown on the home page
pub const FEATURED_PRODUCT_COUNT: usize = 3;

/// Image used for products created without one
pub const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/400/300";
