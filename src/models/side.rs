use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Breast used for a feeding session.
///
/// Stored as `"L"` / `"D"` (lijeva / desna) for compatibility with existing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "D")]
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "Left"),
            Side::Right => write!(f, "Right"),
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Ok(Side::Left),
            "right" | "r" | "d" => Ok(Side::Right),
            _ => Err(format!(
                "Invalid side '{}'. Valid options: left, right",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_display() {
        assert_eq!(format!("{}", Side::Left), "Left");
        assert_eq!(format!("{}", Side::Right), "Right");
    }

    #[test]
    fn test_side_from_str() {
        assert_eq!(Side::from_str("left").unwrap(), Side::Left);
        assert_eq!(Side::from_str("L").unwrap(), Side::Left);
        assert_eq!(Side::from_str("RIGHT").unwrap(), Side::Right);
        assert_eq!(Side::from_str("d").unwrap(), Side::Right);
    }

    #[test]
    fn test_side_from_str_invalid() {
        assert!(Side::from_str("middle").is_err());
        assert!(Side::from_str("").is_err());
    }

    #[test]
    fn test_side_wire_values() {
        assert_eq!(serde_json::to_string(&Side::Left).unwrap(), "\"L\"");
        assert_eq!(serde_json::to_string(&Side::Right).unwrap(), "\"D\"");

        let parsed: Side = serde_json::from_str("\"D\"").unwrap();
        assert_eq!(parsed, Side::Right);
    }
}
