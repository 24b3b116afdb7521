mod page;

pub use page::PageContent;
