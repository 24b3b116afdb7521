mod category;

pub use category::{with_direct_children, Category};
