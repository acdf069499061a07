//! Compile-time build identification

/// Version and commit the binary was built from.
///
/// Fixed at compile time and handed to the entrypoint; there is no mutable
/// global holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: &'static str,
}

/// Build info of the running binary.
///
/// The commit is taken from `TRAMPOLINE_COMMIT_ID` when set at build time.
pub const BUILD_INFO: BuildInfo = BuildInfo {
    version: env!("CARGO_PKG_VERSION"),
    commit: match option_env!("TRAMPOLINE_COMMIT_ID") {
        Some(commit) => commit,
        None => "unknown",
    },
};

impl std::fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.version, self.commit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_build_info_when_displayed_then_shows_version_and_commit() {
        let info = BuildInfo {
            version: "1.2.3",
            commit: "abc123",
        };
        assert_eq!(info.to_string(), "1.2.3 (abc123)");
    }

    #[test]
    fn given_running_binary_when_reading_build_info_then_version_matches_package() {
        assert_eq!(BUILD_INFO.version, env!("CARGO_PKG_VERSION"));
        assert!(!BUILD_INFO.commit.is_empty());
    }
}
