//! Game configuration - result range and target score
//!
//! Built once from the positional startup arguments and immutable for the
//! lifetime of the process.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Lowest allowed `res_min`
pub const RES_MIN_FLOOR: u32 = 4;
/// Lowest allowed `res_max`
pub const RES_MAX_FLOOR: u32 = 5;
/// Lowest allowed `score_max`
pub const SCORE_MAX_FLOOR: u32 = 1;

/// Validated configuration for a game
///
/// # Example
///
/// ```
/// use calcul_core::GameConfig;
///
/// let config = GameConfig::new(4, 20, 10).unwrap();
/// assert_eq!(config.res_max(), 20);
///
/// assert!(GameConfig::new(3, 20, 10).is_err());
/// assert!(GameConfig::new(8, 8, 10).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    res_min: u32,
    res_max: u32,
    score_max: u32,
}

impl GameConfig {
    /// Create a configuration, checking every constraint
    pub fn new(res_min: u32, res_max: u32, score_max: u32) -> Result<Self> {
        Self::check(i64::from(res_min), i64::from(res_max), i64::from(score_max))?;
        Ok(Self {
            res_min,
            res_max,
            score_max,
        })
    }

    /// Build from process arguments, `args[0]` being the program name
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        if args.len() != 4 {
            return Err(ConfigError::WrongArgCount {
                got: args.len().saturating_sub(1),
            });
        }

        let res_min = parse_arg("res_min", args[1].as_ref())?;
        let res_max = parse_arg("res_max", args[2].as_ref())?;
        let score_max = parse_arg("score_max", args[3].as_ref())?;

        Self::check(res_min, res_max, score_max)?;
        Ok(Self {
            res_min: to_u32("res_min", res_min)?,
            res_max: to_u32("res_max", res_max)?,
            score_max: to_u32("score_max", score_max)?,
        })
    }

    fn check(res_min: i64, res_max: i64, score_max: i64) -> Result<()> {
        let reason = if res_min < i64::from(RES_MIN_FLOOR) {
            format!("res_min must be >= {RES_MIN_FLOOR}")
        } else if res_max < i64::from(RES_MAX_FLOOR) {
            format!("res_max must be >= {RES_MAX_FLOOR}")
        } else if res_min >= res_max {
            "res_min must be < res_max".to_string()
        } else if score_max < i64::from(SCORE_MAX_FLOOR) {
            format!("score_max must be >= {SCORE_MAX_FLOOR}")
        } else {
            return Ok(());
        };
        Err(ConfigError::OutOfRange { reason })
    }

    /// Smallest result a problem can have
    pub fn res_min(&self) -> u32 {
        self.res_min
    }

    /// Largest result a problem can have
    pub fn res_max(&self) -> u32 {
        self.res_max
    }

    /// Correct answers needed to finish a run
    pub fn score_max(&self) -> u32 {
        self.score_max
    }

    /// Window or screen title
    pub fn title(&self) -> String {
        format!(
            "Calcul Mental - Results between {} and {}",
            self.res_min, self.res_max
        )
    }
}

fn parse_arg(name: &'static str, value: &str) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ConfigError::InvalidNumber {
            name,
            value: value.to_string(),
        })
}

fn to_u32(name: &'static str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| ConfigError::OutOfRange {
        reason: format!("{name} must be <= {}", u32::MAX),
    })
}

/// Usage message, one constraint per line
pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <res_min> <res_max> <score_max>\n\
         \x20 - res_min must be >= {RES_MIN_FLOOR}\n\
         \x20 - res_max must be >= {RES_MAX_FLOOR}\n\
         \x20 - res_min must be < res_max\n\
         \x20 - score_max must be >= {SCORE_MAX_FLOOR}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        std::iter::once("calcul-mental")
            .chain(values.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_from_args_valid() {
        let config = GameConfig::from_args(&args(&["4", "5", "1"])).unwrap();
        assert_eq!(config.res_min(), 4);
        assert_eq!(config.res_max(), 5);
        assert_eq!(config.score_max(), 1);
    }

    #[test]
    fn test_wrong_arg_count() {
        let err = GameConfig::from_args(&args(&["4", "5"])).unwrap_err();
        assert_eq!(err, ConfigError::WrongArgCount { got: 2 });

        let err = GameConfig::from_args(&args(&["4", "5", "1", "9"])).unwrap_err();
        assert_eq!(err, ConfigError::WrongArgCount { got: 4 });

        let empty: [&str; 0] = [];
        let err = GameConfig::from_args(&empty).unwrap_err();
        assert_eq!(err, ConfigError::WrongArgCount { got: 0 });
    }

    #[test]
    fn test_not_a_number() {
        let err = GameConfig::from_args(&args(&["four", "5", "1"])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidNumber { name: "res_min", .. }
        ));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_constraints() {
        let cases = [
            (["3", "10", "1"], "res_min must be >= 4"),
            (["4", "4", "1"], "res_max must be >= 5"),
            (["6", "6", "1"], "res_min must be < res_max"),
            (["9", "6", "1"], "res_min must be < res_max"),
            (["4", "10", "0"], "score_max must be >= 1"),
            (["-4", "10", "1"], "res_min must be >= 4"),
        ];

        for (values, expected) in cases {
            let err = GameConfig::from_args(&args(&values)).unwrap_err();
            assert_eq!(
                err,
                ConfigError::OutOfRange {
                    reason: expected.to_string()
                },
                "args {values:?}"
            );
        }
    }

    #[test]
    fn test_new_matches_from_args() {
        assert!(GameConfig::new(4, 5, 1).is_ok());
        assert!(GameConfig::new(4, 5, 0).is_err());
        assert_eq!(
            GameConfig::new(10, 99, 20).unwrap(),
            GameConfig::from_args(&args(&["10", "99", "20"])).unwrap()
        );
    }

    #[test]
    fn test_too_large() {
        let err = GameConfig::from_args(&args(&["4", "99999999999", "1"])).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { .. }));
    }

    #[test]
    fn test_usage() {
        let text = usage("calcul-mental");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Usage: calcul-mental <res_min> <res_max> <score_max>",
                "  - res_min must be >= 4",
                "  - res_max must be >= 5",
                "  - res_min must be < res_max",
                "  - score_max must be >= 1",
            ]
        );
    }

    #[test]
    fn test_title() {
        let config = GameConfig::new(4, 20, 5).unwrap();
        assert_eq!(config.title(), "Calcul Mental - Results between 4 and 20");
    }
}
