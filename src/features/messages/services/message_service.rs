use std::sync::Arc;

use chrono::Utc;

use crate::core::error::Result;
use crate::features::messages::dtos::SendMessageDto;
use crate::features::messages::models::ContactMessage;
use crate::modules::storage::{new_record_id, ContentStore};

/// Service for contact form submissions
pub struct MessageService {
    store: Arc<ContentStore>,
}

impl MessageService {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }

    /// Stamp the submission with an id and the current time, then append it
    pub async fn send(&self, dto: SendMessageDto) -> Result<ContactMessage> {
        let message = ContactMessage {
            id: new_record_id(),
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_string(),
            message: dto.message,
            date: Utc::now(),
        };

        let message = self.store.append(message).await?;
        tracing::info!("Contact message received: id={}", message.id);

        Ok(message)
    }
}
