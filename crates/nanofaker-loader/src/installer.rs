use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use nanofaker_core::{AVAILABLE_BASE_LOCALES, PACKAGE_SCOPE};
use tracing::{info, warn};

/// Makes a locale package available for subsequent loads.
///
/// Implementations may block (e.g. by running a subprocess); the resolver
/// calls them on the blocking pool.
pub trait PackageInstaller: Send + Sync {
    /// Attempts the installation and reports whether it succeeded.
    fn install(&self, package: &str) -> bool;

    /// Command a user would run to install the package by hand.
    fn install_command(&self, package: &str) -> String;
}

/// Package managers recognised from lock files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Bun,
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Detect the package manager from lock files in `dir`, defaulting to bun.
    pub fn detect(dir: &Path) -> Self {
        if dir.join("bun.lockb").exists() || dir.join("bun.lock").exists() {
            return Self::Bun;
        }
        if dir.join("pnpm-lock.yaml").exists() {
            return Self::Pnpm;
        }
        if dir.join("yarn.lock").exists() {
            return Self::Yarn;
        }
        if dir.join("package-lock.json").exists() {
            return Self::Npm;
        }
        Self::Bun
    }

    pub fn program(self) -> &'static str {
        match self {
            Self::Bun => "bun",
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }

    pub fn install_verb(self) -> &'static str {
        match self {
            Self::Npm => "install",
            Self::Bun | Self::Yarn | Self::Pnpm => "add",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// Installs packages by running the detected package manager.
#[derive(Debug, Clone)]
pub struct CommandInstaller {
    working_dir: PathBuf,
    manager: PackageManager,
    silent: bool,
}

impl CommandInstaller {
    pub fn new(working_dir: PathBuf, manager: PackageManager) -> Self {
        Self {
            working_dir,
            manager,
            silent: false,
        }
    }

    /// Installer for `dir` using whatever package manager its lock files point to.
    pub fn detect(dir: impl Into<PathBuf>) -> Self {
        let working_dir = dir.into();
        let manager = PackageManager::detect(&working_dir);
        Self::new(working_dir, manager)
    }

    /// Installer for the process working directory.
    pub fn from_current_dir() -> Self {
        Self::detect(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Suppress the package manager's own output.
    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn manager(&self) -> PackageManager {
        self.manager
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }
}

impl PackageInstaller for CommandInstaller {
    fn install(&self, package: &str) -> bool {
        info!(
            event = "package_install_started",
            package = %package,
            manager = %self.manager
        );

        let (stdout, stderr) = if self.silent {
            (Stdio::null(), Stdio::null())
        } else {
            (Stdio::inherit(), Stdio::inherit())
        };

        let status = Command::new(self.manager.program())
            .arg(self.manager.install_verb())
            .arg(package)
            .current_dir(&self.working_dir)
            .stdout(stdout)
            .stderr(stderr)
            .status();

        match status {
            Ok(status) if status.success() => {
                info!(event = "package_install_finished", package = %package);
                true
            }
            Ok(status) => {
                warn!(
                    event = "package_install_failed",
                    package = %package,
                    code = status.code()
                );
                false
            }
            Err(err) => {
                warn!(
                    event = "package_install_failed",
                    package = %package,
                    error = %err
                );
                false
            }
        }
    }

    fn install_command(&self, package: &str) -> String {
        format!(
            "{} {} {package}",
            self.manager.program(),
            self.manager.install_verb()
        )
    }
}

/// Package list installing every base locale in one shot, e.g.
/// `@nanofaker/locale-{af,ar,...}`.
pub fn all_locales_packages() -> String {
    format!("{PACKAGE_SCOPE}{{{}}}", AVAILABLE_BASE_LOCALES.join(","))
}

/// Remediation text for a locale package that is not installed.
pub fn missing_locale_hint(installer: &dyn PackageInstaller, package: &str) -> String {
    format!(
        "locale package is not installed. Install it with: {}\n\
         Or install all locales with: {}\n\
         Or enable auto-install in faker.toml: auto_install_locales = true",
        installer.install_command(package),
        installer.install_command(&all_locales_packages()),
    )
}
