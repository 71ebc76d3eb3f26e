use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A download target of the landing page.
///
/// The set is closed: every platform key in the output document is one of these.
/// Serialized as [`Platform::id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    WindowsX64,
    LinuxX64,
    LinuxArm64,
    MacosX64,
    MacosArm64,
    WindowsArm64,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::WindowsX64,
        Platform::LinuxX64,
        Platform::LinuxArm64,
        Platform::MacosX64,
        Platform::MacosArm64,
        Platform::WindowsArm64,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Platform::WindowsX64 => "windows-x64",
            Platform::LinuxX64 => "linux-x64",
            Platform::LinuxArm64 => "linux-arm64",
            Platform::MacosX64 => "macos-x64",
            Platform::MacosArm64 => "macos-arm64",
            Platform::WindowsArm64 => "windows-arm64",
        }
    }

    /// Operating system name used by the disco API.
    pub fn foojay_os(self) -> &'static str {
        match self {
            Platform::WindowsX64 | Platform::WindowsArm64 => "windows",
            Platform::LinuxX64 | Platform::LinuxArm64 => "linux",
            Platform::MacosX64 | Platform::MacosArm64 => "macos",
        }
    }

    /// Architecture name used by the disco API.
    pub fn foojay_arch(self) -> &'static str {
        match self {
            Platform::WindowsX64 | Platform::LinuxX64 | Platform::MacosX64 => "x64",
            Platform::WindowsArm64 | Platform::LinuxArm64 | Platform::MacosArm64 => "aarch64",
        }
    }

    /// Archive format requested from the disco API.
    pub fn archive_type(self) -> &'static str {
        if self.foojay_os() == "windows" {
            "zip"
        } else {
            "tar.gz"
        }
    }

    /// Substring identifying this platform's asset in a jenv release.
    pub fn release_asset_token(self) -> &'static str {
        match self {
            Platform::WindowsX64 => "windows-x86_64",
            Platform::LinuxX64 => "linux-x86_64",
            Platform::LinuxArm64 => "linux-aarch_64",
            Platform::MacosX64 => "osx-x86_64",
            Platform::MacosArm64 => "osx-aarch_64",
            Platform::WindowsArm64 => "windows-aarch_64",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown platform: {0}")]
pub struct UnknownPlatform(String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| UnknownPlatform(s.to_owned()))
    }
}

impl Serialize for Platform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        id.parse().map_err(serde::de::Error::custom)
    }
}
