//! Icon tags attached to tree nodes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Presentational icon tag for a [`TreeNode`](crate::TreeNode).
///
/// Parsers only carry this value through; they never interpret it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileIcon {
    /// A regular file.
    File,
    /// A function or other code symbol.
    Function,
    /// A directory.
    Folder,
    /// A layout file.
    Layout,
}

impl FileIcon {
    /// All icon tags, in declaration order.
    pub const ALL: [FileIcon; 4] = [
        FileIcon::File,
        FileIcon::Function,
        FileIcon::Folder,
        FileIcon::Layout,
    ];

    /// Returns the tag as written in source text.
    pub const fn as_str(&self) -> &'static str {
        match self {
            FileIcon::File => "file",
            FileIcon::Function => "function",
            FileIcon::Folder => "folder",
            FileIcon::Layout => "layout",
        }
    }
}

impl fmt::Display for FileIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the four icon tags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown icon tag: {0}")]
pub struct UnknownIcon(pub String);

impl FromStr for FileIcon {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FileIcon::ALL
            .into_iter()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| UnknownIcon(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("file", FileIcon::File)]
    #[case("function", FileIcon::Function)]
    #[case("folder", FileIcon::Folder)]
    #[case("layout", FileIcon::Layout)]
    fn test_from_str(#[case] input: &str, #[case] expected: FileIcon) {
        assert_eq!(input.parse::<FileIcon>().unwrap(), expected);
        assert_eq!(expected.to_string(), input);
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!("Folder".parse::<FileIcon>().is_err());
        assert_eq!(
            "dir".parse::<FileIcon>().unwrap_err(),
            UnknownIcon("dir".to_string())
        );
    }

    #[test]
    fn test_unknown_icon_message() {
        let err = "rocket".parse::<FileIcon>().unwrap_err();

        assert_eq!(err.to_string(), "unknown icon tag: rocket");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&FileIcon::Layout).unwrap();
        assert_eq!(json, "\"layout\"");

        let icon: FileIcon = serde_json::from_str("\"function\"").unwrap();
        assert_eq!(icon, FileIcon::Function);
    }
}
