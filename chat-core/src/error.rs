use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ChatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display_names_the_problem() {
        let err = ChatError::Config("GEMINI_API_KEY not set".to_string());
        assert_eq!(err.to_string(), "Config error: GEMINI_API_KEY not set");
    }
}
