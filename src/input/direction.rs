use strum::{Display as StrumDisplay, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, StrumDisplay)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    #[strum(serialize = "up", serialize = "u")]
    Up,
    #[strum(serialize = "down", serialize = "d")]
    Down,
    #[strum(serialize = "left", serialize = "l")]
    Left,
    #[strum(serialize = "right", serialize = "r")]
    Right,
    #[strum(serialize = "shake", serialize = "s")]
    Shake,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_direction_parsing() {
        let cases = vec![
            ("up", Direction::Up),
            ("Up", Direction::Up),
            ("UP", Direction::Up),
            ("u", Direction::Up),
            ("shake", Direction::Shake),
            ("s", Direction::Shake),
        ];

        for (text, expected) in cases {
            assert_eq!(Direction::from_str(text).unwrap(), expected);
        }
        assert!(Direction::from_str("sideways").is_err());
    }
}
