mod message_dto;

pub use message_dto::SendMessageDto;
