//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod softball_error_tests {
    use super::*;

    #[test]
    fn test_hits_exceed_at_bats_message() {
        let error = SoftballError::hits_exceed_at_bats();

        assert!(error.is_invariant_violation());
        assert_eq!(error.to_string(), "Invariant violated: hits must be <= at_bats");
    }

    #[test]
    fn test_database_error_conversion() {
        let db_error = rusqlite::Error::QueryReturnedNoRows;
        let error = SoftballError::from(db_error);

        match error {
            SoftballError::Database(_) => (),
            _ => panic!("Expected Database error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SoftballError::from(io_error);

        match error {
            SoftballError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = SoftballError::from(json_error);

        match error {
            SoftballError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_date_error_conversion() {
        let parse_error = chrono::NaiveDate::parse_from_str("2009-13-45", "%Y-%m-%d").unwrap_err();
        let error = SoftballError::from(parse_error);

        match error {
            SoftballError::InvalidDate(_) => (),
            _ => panic!("Expected InvalidDate error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<i64>().unwrap_err();
        let error = SoftballError::from(parse_error);

        match error {
            SoftballError::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
    }

    #[test]
    fn test_validation_error_display() {
        let error = SoftballError::validation("first_name", "must not be empty");
        assert_eq!(error.to_string(), "Invalid first_name: must not be empty");
    }

    #[test]
    fn test_not_found_errors_display() {
        let player = SoftballError::PlayerNotFound {
            id: PlayerId::new(7),
        };
        assert_eq!(player.to_string(), "Player not found: 7");

        let game = SoftballError::GameNotFound { id: GameId::new(3) };
        assert_eq!(game.to_string(), "Game not found: 3");

        let line = SoftballError::StatisticNotFound {
            player_id: PlayerId::new(7),
            game_id: GameId::new(3),
        };
        assert_eq!(line.to_string(), "No statistic line for player 7 in game 3");
    }

    #[test]
    fn test_duplicate_player_display() {
        let error = SoftballError::DuplicatePlayer {
            first_name: "Test".to_string(),
            last_name: "Player".to_string(),
        };
        assert_eq!(error.to_string(), "Player Test Player already exists");
    }

    #[test]
    fn test_missing_data_dir_mentions_env_var() {
        let error = SoftballError::MissingDataDir {
            env_var: "SOFTBALL_DB_PATH".to_string(),
        };
        assert!(error.to_string().contains("SOFTBALL_DB_PATH"));
    }

    #[test]
    fn test_error_debug_format() {
        let error = SoftballError::hits_exceed_at_bats();
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("InvariantViolation"));
    }
}
