use std::path::PathBuf;

/// Reasons a move is rejected. The board and state are left unchanged in
/// every case; callers re-prompt or ignore as appropriate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range (valid columns are 0-6)")]
    ColumnOutOfRange(usize),

    #[error("column {0} is already full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::ColumnOutOfRange(9).to_string(),
            "column 9 is out of range (valid columns are 0-6)"
        );
        assert_eq!(
            MoveError::ColumnFull(3).to_string(),
            "column 3 is already full"
        );
        assert_eq!(MoveError::GameOver.to_string(), "the game is already over");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("search.max_depth must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: search.max_depth must be >= 1"
        );
    }
}
