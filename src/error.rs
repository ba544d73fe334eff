use std::path::PathBuf;

/// Errors returned when a move cannot be applied. The game state is left
/// untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("illegal move: column {column} is not playable (legal: {legal:?})")]
    IllegalMove { column: usize, legal: Vec<usize> },

    #[error("no legal moves available")]
    NoLegalMoves,
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
    fn test_illegal_move_display() {
        let err = MoveError::IllegalMove {
            column: 7,
            legal: vec![0, 1, 2],
        };
        assert_eq!(
            err.to_string(),
            "illegal move: column 7 is not playable (legal: [0, 1, 2])"
        );
    }

    #[test]
    fn test_no_legal_moves_display() {
        assert_eq!(
            MoveError::NoLegalMoves.to_string(),
            "no legal moves available"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.rows must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.rows must be > 0"
        );
    }
}
