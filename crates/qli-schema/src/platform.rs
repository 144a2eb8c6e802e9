//! Host systems and build targets known to the Qt online repository.

/// Operating system the SDK runs on.
///
/// The repository groups packages per host, with a bitness suffix in the
/// directory name (see [`Host::repo_dir`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Host {
    /// Linux desktops.
    Linux,
    /// macOS.
    Mac,
    /// Microsoft Windows.
    Windows,
}

impl Host {
    /// All hosts, in the order they are listed in help text.
    pub const ALL: [Self; 3] = [Self::Linux, Self::Mac, Self::Windows];

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Mac => "mac",
            Self::Windows => "windows",
        }
    }

    /// Repository directory for this host.
    ///
    /// Windows packages live under `windows_x86`, every other host under
    /// `<host>_x64`.
    pub fn repo_dir(&self) -> String {
        match self {
            Self::Windows => format!("{}_x86", self.as_str()),
            _ => format!("{}_x64", self.as_str()),
        }
    }
}

impl std::fmt::Display for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Host {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linux" => Ok(Self::Linux),
            "mac" => Ok(Self::Mac),
            "windows" => Ok(Self::Windows),
            _ => Err(format!("Unknown host: '{s}' (expected linux, mac or windows)")),
        }
    }
}

/// Platform the installed SDK builds applications for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Native desktop applications.
    Desktop,
    /// Android, cross-compiled from any host.
    Android,
    /// iOS, cross-compiled from macOS only.
    Ios,
}

impl Target {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Android => "android",
            Self::Ios => "ios",
        }
    }

    /// Whether the repository publishes this target for `host`.
    pub fn is_supported_on(&self, host: Host) -> bool {
        match self {
            Self::Desktop | Self::Android => true,
            Self::Ios => host == Host::Mac,
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desktop" => Ok(Self::Desktop),
            "android" => Ok(Self::Android),
            "ios" => Ok(Self::Ios),
            _ => Err(format!(
                "Unknown target: '{s}' (expected desktop, android or ios)"
            )),
        }
    }
}
