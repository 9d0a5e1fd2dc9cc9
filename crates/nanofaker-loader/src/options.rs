/// Options that control how locales are resolved.
#[derive(Debug, Clone, Default)]
pub struct LoaderOptions {
    /// Install a missing locale package through the package manager, then retry once.
    pub auto_install_locales: bool,
}
