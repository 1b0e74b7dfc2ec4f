use std::{
    fmt::{Display, LowerHex, UpperHex},
    str::FromStr,
};

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
mod parser;

/// Highest save format whose item numbering predates the canonical space.
pub const LEGACY_FORMAT: u8 = 3;

/// An item code as written by a user or a tool, independent of generation.
///
/// Accepts decimal (`213`), C style hex (`0xD5`) and Game Boy style hex
/// (`$D5`). Underscores may be used as digit separators.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ItemCode(pub u32);

impl ItemCode {
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl Display for ItemCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl LowerHex for ItemCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        LowerHex::fmt(&self.0, f)
    }
}

impl UpperHex for ItemCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        UpperHex::fmt(&self.0, f)
    }
}

impl FromStr for ItemCode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rest, code) =
            parser::item_code(s).map_err(|_| anyhow!("Can't parse item code \"{s}\""))?;
        if !rest.is_empty() {
            return Err(anyhow!("trailing input at end of valid item code \"{s}\""));
        }
        Ok(code)
    }
}

/// A save file format version, e.g. `2`, `g3` or `gen4`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct FormatVersion(pub u8);

impl FormatVersion {
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Formats at or below this boundary use their own item numbering.
    pub const fn is_legacy(&self) -> bool {
        self.0 <= LEGACY_FORMAT
    }
}

impl Display for FormatVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "gen{}", self.0)
    }
}

impl FromStr for FormatVersion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rest, version) =
            parser::format_version(s).map_err(|_| anyhow!("Can't parse format version \"{s}\""))?;
        if !rest.is_empty() {
            return Err(anyhow!(
                "trailing input at end of valid format version \"{s}\""
            ));
        }
        Ok(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! code_test {
        ($text:literal, $value:expr) => {
            assert_eq!($text.parse::<ItemCode>().unwrap(), ItemCode($value));
        };
    }

    #[test]
    fn item_codes_parse_correctly() {
        code_test!("0", 0);
        code_test!("213", 213);
        code_test!("1_000", 1000);
        code_test!("0x32", 0x32);
        code_test!("0XAE", 0xAE);
        code_test!("$ad", 0xAD);
        code_test!("$FF", 0xFF);
    }

    #[test]
    fn unknown_prefix_returns_error() {
        assert!("#32".parse::<ItemCode>().is_err());
        assert!("-1".parse::<ItemCode>().is_err());
        assert!("".parse::<ItemCode>().is_err());
    }

    #[test]
    fn trailing_input_returns_error() {
        assert!("0x32💣".parse::<ItemCode>().is_err());
        assert!("12 ".parse::<ItemCode>().is_err());
    }

    #[test]
    fn oversized_item_code_returns_error() {
        assert!("0x1_0000_0000".parse::<ItemCode>().is_err());
    }

    #[test]
    fn item_code_formats_as_hex() {
        let code = ItemCode(0xAE);
        assert_eq!(format!("{code}"), "174");
        assert_eq!(format!("{code:#x}"), "0xae");
        assert_eq!(format!("{code:#04X}"), "0xAE");
    }

    #[test]
    fn format_versions_parse_correctly() {
        assert_eq!("1".parse::<FormatVersion>().unwrap(), FormatVersion(1));
        assert_eq!("g2".parse::<FormatVersion>().unwrap(), FormatVersion(2));
        assert_eq!("GEN3".parse::<FormatVersion>().unwrap(), FormatVersion(3));
        assert_eq!("gen7".parse::<FormatVersion>().unwrap(), FormatVersion(7));
    }

    #[test]
    fn bad_format_version_returns_error() {
        assert!("gen".parse::<FormatVersion>().is_err());
        assert!("256".parse::<FormatVersion>().is_err());
        assert!("x3".parse::<FormatVersion>().is_err());
        assert!("3rd".parse::<FormatVersion>().is_err());
    }

    #[test]
    fn legacy_boundary_is_gen3() {
        assert!(FormatVersion(1).is_legacy());
        assert!(FormatVersion(3).is_legacy());
        assert!(!FormatVersion(4).is_legacy());
        assert_eq!(format!("{}", FormatVersion(4)), "gen4");
    }
}
