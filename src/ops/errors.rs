//! Error types for vendoring operations.

use thiserror::Error;

/// Remediation printed when the `vendor` tool is missing.
pub const INSTALL_VENDOR: [&str; 2] = [
    "The save/restore functionality uses 'vendor'.",
    "To install vendor, 'go get github.com/skelterjohn/vendor'.",
];

/// Remediation printed when the `vendor` tool is too old.
pub const UPDATE_VENDOR: [&str; 2] = [
    "Your copy of vendor is out of date.",
    "To update vendor, 'go get -u github.com/skelterjohn/vendor'.",
];

/// Error raised while discovering or vendoring packages.
#[derive(Debug, Error)]
pub enum VendorError {
    #[error("`vendor` is not installed")]
    ToolMissing,

    #[error("`vendor` is out of date (found {}, need build {required} or newer)", describe_build(.found))]
    ToolOutdated {
        found: Option<String>,
        required: u32,
    },

    #[error("`{command}` failed ({}){}", describe_exit(.exit_code), describe_stderr(.stderr))]
    SubprocessFailure {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("cannot find package `{import_path}`")]
    UnresolvablePackage { import_path: String },

    #[error("failed to launch `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

fn describe_build(found: &Option<String>) -> &str {
    found.as_deref().unwrap_or("an unknown build")
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code".to_string(),
    }
}

fn describe_stderr(stderr: &str) -> String {
    match stderr.trim() {
        "" => String::new(),
        text => format!(": {}", text),
    }
}

impl VendorError {
    /// Install or update instructions for toolchain problems.
    pub fn remediation(&self) -> Option<&'static [&'static str]> {
        match self {
            VendorError::ToolMissing => Some(&INSTALL_VENDOR[..]),
            VendorError::ToolOutdated { .. } => Some(&UPDATE_VENDOR[..]),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remediation_only_for_toolchain_errors() {
        assert_eq!(VendorError::ToolMissing.remediation(), Some(&INSTALL_VENDOR[..]));
        let outdated = VendorError::ToolOutdated {
            found: Some("2".into()),
            required: 3,
        };
        assert_eq!(outdated.remediation(), Some(&UPDATE_VENDOR[..]));
        assert!(VendorError::UnresolvablePackage {
            import_path: "C".into()
        }
        .remediation()
        .is_none());
    }

    #[test]
    fn test_outdated_message() {
        let err = VendorError::ToolOutdated {
            found: None,
            required: 3,
        };
        assert_eq!(
            err.to_string(),
            "`vendor` is out of date (found an unknown build, need build 3 or newer)"
        );
    }

    #[test]
    fn test_subprocess_failure_message() {
        let err = VendorError::SubprocessFailure {
            command: "go env GOROOT".into(),
            exit_code: None,
            stderr: "unusable GOROOT ``\n".into(),
        };
        assert_eq!(
            err.to_string(),
            "`go env GOROOT` failed (no exit code): unusable GOROOT ``"
        );

        let err = VendorError::SubprocessFailure {
            command: "vendor wgo vendor -r".into(),
            exit_code: Some(2),
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "`vendor wgo vendor -r` failed (exit code 2)");
    }
}
