//! Engine and collator version numbers

use std::fmt;

/// Four-part version number as reported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersionInfo([u8; 4]);

impl VersionInfo {
    /// Wrap raw version bytes
    pub const fn new(parts: [u8; 4]) -> Self {
        Self(parts)
    }

    /// The four version parts, most significant first
    pub const fn to_array(self) -> [u8; 4] {
        self.0
    }

    /// Major version
    pub const fn major(self) -> u8 {
        self.0[0]
    }
}

impl From<[u8; 4]> for VersionInfo {
    fn from(parts: [u8; 4]) -> Self {
        Self(parts)
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_dotted() {
        assert_eq!(VersionInfo::new([74, 2, 0, 0]).to_string(), "74.2.0.0");
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(VersionInfo::new([74, 2, 0, 0]) > VersionInfo::new([73, 9, 9, 9]));
    }
}
