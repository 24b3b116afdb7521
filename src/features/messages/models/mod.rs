mod message;

pub use message::ContactMessage;
