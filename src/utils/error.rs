use thiserror::Error;

/// Message shown when a line cannot be read as a number.
pub const INVALID_NUMBER_MESSAGE: &str = "Некорректный ввод. Введите число.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{}", INVALID_NUMBER_MESSAGE)]
    InvalidNumber { input: Option<String> },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Service not registered: {service}")]
    ServiceNotRegistered { service: &'static str },

    #[error("Circular dependency while resolving: {service}")]
    CircularDependency { service: &'static str },
}

impl AppError {
    pub fn invalid_number(input: Option<&str>) -> Self {
        AppError::InvalidNumber {
            input: input.map(str::to_string),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AppError::InvalidNumber { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::InvalidNumber { .. } => INVALID_NUMBER_MESSAGE.to_string(),
            AppError::IoError(e) => format!("сбой ввода-вывода: {}", e),
            AppError::ConfigParseError(e) => format!("Не удалось разобрать файл конфигурации: {}", e),
            AppError::ConfigError { message } => format!("Ошибка конфигурации: {}", message),
            AppError::InvalidConfigValueError { field, value, reason } => {
                format!("Недопустимое значение '{}' для '{}': {}", value, field, reason)
            }
            AppError::ServiceNotRegistered { service } => {
                format!("Сервис не зарегистрирован: {}", service)
            }
            AppError::CircularDependency { service } => {
                format!("Циклическая зависимость при создании: {}", service)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::InvalidNumber { .. } => "Enter a number such as 2, -3 or 2,5",
            AppError::IoError(_) => "Check that standard input and output are available",
            AppError::ConfigParseError(_) | AppError::ConfigError { .. } => {
                "Make sure the config file exists and is valid TOML"
            }
            AppError::InvalidConfigValueError { .. } => {
                "Fix the highlighted value in the config file or pass a CLI override"
            }
            AppError::ServiceNotRegistered { .. } | AppError::CircularDependency { .. } => {
                "Check the service registrations in the container setup"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_displays_prompt_message() {
        let err = AppError::invalid_number(Some("abc"));
        assert_eq!(err.to_string(), "Некорректный ввод. Введите число.");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_other_errors_are_not_invalid_input() {
        let err = AppError::ServiceNotRegistered { service: "dyn Logger" };
        assert!(!err.is_invalid_input());
        assert!(err.user_friendly_message().contains("dyn Logger"));
    }
}
