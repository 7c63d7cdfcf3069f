use std::{
    io,
    process::{Command, Stdio},
};

use anyhow::Context;
use jmd_host_contracts::navigator::{NavigatorService, OpenOutcome};
use url::Url;

/// Opens links with the desktop's default handler.
///
/// "Navigating the current context" has no meaning in a terminal, so
/// [`NavigatorService::navigate`] prints the link for the operator instead.
#[derive(Debug, Clone, Copy)]
pub struct SystemNavigatorService {
    opener: Option<Opener>,
}

/// A program that hands a url over to the default handler and exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opener {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

#[cfg(target_os = "macos")]
pub const PLATFORM_OPENER: Opener = Opener {
    program: "open",
    args: &[],
};

#[cfg(target_os = "windows")]
pub const PLATFORM_OPENER: Opener = Opener {
    program: "cmd",
    args: &["/C", "start", ""],
};

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub const PLATFORM_OPENER: Opener = Opener {
    program: "xdg-open",
    args: &[],
};

impl SystemNavigatorService {
    pub fn new() -> Self {
        Self::with_opener(PLATFORM_OPENER)
    }

    pub fn with_opener(opener: Opener) -> Self {
        Self {
            opener: Some(opener),
        }
    }

    /// A navigator that never launches anything, so every open is reported as
    /// blocked.
    pub fn disabled() -> Self {
        Self { opener: None }
    }
}

impl Default for SystemNavigatorService {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigatorService for SystemNavigatorService {
    fn open(&self, url: &Url) -> anyhow::Result<OpenOutcome> {
        let Some(opener) = self.opener else {
            return Ok(OpenOutcome::Blocked);
        };

        // The opener returns as soon as the handler has the url, so waiting
        // here reaps it and tells whether the hand-over worked.
        let status = Command::new(opener.program)
            .args(opener.args)
            .arg(url.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => Ok(OpenOutcome::Opened),
            Ok(status) => {
                tracing::warn!(program = opener.program, %status, "url opener failed");
                Ok(OpenOutcome::Blocked)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(program = opener.program, "no url opener available");
                Ok(OpenOutcome::Blocked)
            }
            Err(err) => Err(err).context("Failed to launch the url opener"),
        }
    }

    fn navigate(&self, url: &Url) -> anyhow::Result<()> {
        println!("{url}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn url() -> Url {
        "https://wa.me/918607002111?text=Hi".parse().unwrap()
    }

    #[test]
    fn disabled_reports_blocked() {
        // Arrange
        let sut = SystemNavigatorService::disabled();

        // Act
        let result = sut.open(&url());

        // Assert
        assert_eq!(result.unwrap(), OpenOutcome::Blocked);
    }

    #[cfg(unix)]
    #[test]
    fn opener_success_reports_opened() {
        // Arrange
        let sut = SystemNavigatorService::with_opener(Opener {
            program: "true",
            args: &[],
        });

        // Act
        let result = sut.open(&url());

        // Assert
        assert_eq!(result.unwrap(), OpenOutcome::Opened);
    }

    #[cfg(unix)]
    #[test]
    fn opener_failure_reports_blocked() {
        // Arrange
        let sut = SystemNavigatorService::with_opener(Opener {
            program: "false",
            args: &[],
        });

        // Act
        let result = sut.open(&url());

        // Assert
        assert_eq!(result.unwrap(), OpenOutcome::Blocked);
    }

    #[test]
    fn missing_opener_reports_blocked() {
        // Arrange
        let sut = SystemNavigatorService::with_opener(Opener {
            program: "jmd-no-such-url-opener",
            args: &[],
        });

        // Act
        let result = sut.open(&url());

        // Assert
        assert_eq!(result.unwrap(), OpenOutcome::Blocked);
    }
}
