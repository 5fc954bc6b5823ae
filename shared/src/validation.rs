pub const MAX_MESSAGE_LENGTH: usize = 5000;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Message is empty")]
    EmptyMessage,
    #[error("Message exceeds maximum length of {MAX_MESSAGE_LENGTH}")]
    MessageTooLong,
}

pub fn validate_message(message: &str) -> Result<(), ValidationError> {
    if message.trim().is_empty() {
        return Err(ValidationError::EmptyMessage);
    }
    if message.len() > MAX_MESSAGE_LENGTH {
        return Err(ValidationError::MessageTooLong);
    }
    Ok(())
}
