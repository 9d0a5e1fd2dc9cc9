mod config;
mod logging;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use config::{CONFIG_FILE, ConfigError, DEFAULT_LOCALE_DIR, FakerConfig, load_config, save_config};
use logging::init_logging;
use nanofaker_core::{available_locales, parse_locale};
use nanofaker_generate::{Category, Faker, FakerOptions, GenerateError, registry};
use nanofaker_loader::{
    CommandInstaller, DirectorySource, LoaderOptions, LocaleResolver, ResolveError,
};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Generate(#[from] GenerateError),
    #[error("{0}")]
    Resolve(#[from] ResolveError),
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("{failed} of {total} locales failed to load")]
    Preload { failed: usize, total: usize },
    #[error("auto-install needs a node_modules locale dir, got {}", .0.display())]
    AutoInstallDir(PathBuf),
}

#[derive(Parser, Debug)]
#[command(name = "nanofaker", version, about = "Locale-aware fake data generator")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Config file (defaults to ./faker.toml when present).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Log debug events to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,
    /// Emit logs as JSON lines.
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,
    /// Directory holding installed locale packages.
    #[arg(long, global = true, value_name = "DIR")]
    locale_dir: Option<PathBuf>,
    /// Install missing locale packages with the detected package manager.
    #[arg(long, global = true, default_value_t = false)]
    auto_install: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate values for one method.
    Generate(GenerateArgs),
    /// List generator categories.
    Categories,
    /// List the methods of a category with an example value each.
    Methods(MethodsArgs),
    /// List supported locale identifiers.
    Locales,
    /// Load locales ahead of time and report failures.
    Preload(PreloadArgs),
    /// Write a default faker.toml.
    Init(InitArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    category: String,
    method: String,
    /// Locale identifier, e.g. `en_GB` or `pt-br`.
    #[arg(long, short)]
    locale: Option<String>,
    /// Number of values.
    #[arg(long, short = 'n', default_value_t = 1)]
    count: usize,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Print a JSON array instead of one value per line.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct MethodsArgs {
    category: String,
    #[arg(long, short)]
    locale: Option<String>,
}

#[derive(Args, Debug)]
struct PreloadArgs {
    #[arg(required = true, value_name = "LOCALE")]
    locales: Vec<String>,
}

#[derive(Args, Debug)]
struct InitArgs {
    /// Overwrite an existing file.
    #[arg(long, default_value_t = false)]
    force: bool,
}

/// File config with command-line overrides applied.
struct Settings {
    config: FakerConfig,
    config_path: PathBuf,
}

impl Settings {
    fn resolve(global: &GlobalArgs) -> Result<Self, CliError> {
        let cwd = std::env::current_dir()?;
        let mut config = load_config(global.config.as_deref(), &cwd)?;
        config.verbose |= global.verbose;
        config.auto_install_locales |= global.auto_install;
        if let Some(dir) = &global.locale_dir {
            config.locale_dir = Some(dir.clone());
        }
        let config_path = global
            .config
            .clone()
            .unwrap_or_else(|| cwd.join(CONFIG_FILE));
        let settings = Self {
            config,
            config_path,
        };
        settings.check()?;
        Ok(settings)
    }

    /// Installs land in `<project>/node_modules`, so auto-install only works
    /// when the locale dir is one.
    fn check(&self) -> Result<(), CliError> {
        let locale_dir = self.config.locale_dir();
        if self.config.auto_install_locales && install_root(&locale_dir).is_none() {
            return Err(CliError::AutoInstallDir(locale_dir));
        }
        Ok(())
    }

    /// Installer running in the project that owns the locale dir.
    fn installer(&self) -> Option<CommandInstaller> {
        install_root(&self.config.locale_dir()).map(|root| CommandInstaller::detect(root))
    }

    fn resolver(&self) -> LocaleResolver {
        let source = DirectorySource::new(self.config.locale_dir());
        let options = LoaderOptions {
            auto_install_locales: self.config.auto_install_locales,
        };
        let resolver = LocaleResolver::new(Arc::new(source), options);
        match self.installer() {
            Some(installer) => resolver.with_installer(Arc::new(installer)),
            None => resolver,
        }
    }

    fn faker_options(&self, locale: Option<String>, seed: Option<u64>) -> FakerOptions {
        FakerOptions {
            locale: locale.unwrap_or_else(|| self.config.locale.clone()),
            seed: seed.or(self.config.seed),
        }
    }
}

/// Project directory whose `node_modules` is `locale_dir`.
fn install_root(locale_dir: &Path) -> Option<PathBuf> {
    if locale_dir.file_name()? != DEFAULT_LOCALE_DIR {
        return None;
    }
    Some(match locale_dir.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    })
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = Settings::resolve(&cli.global)?;
    init_logging(settings.config.verbose, cli.global.log_json).map_err(CliError::Logging)?;

    match cli.command {
        Command::Generate(args) => run_generate(&settings, args).await,
        Command::Categories => run_categories(),
        Command::Methods(args) => run_methods(&settings, args).await,
        Command::Locales => run_locales(&settings),
        Command::Preload(args) => run_preload(&settings, args).await,
        Command::Init(args) => run_init(&settings, args),
    }
}

async fn run_generate(settings: &Settings, args: GenerateArgs) -> Result<(), CliError> {
    let entry = registry().lookup(&args.category, &args.method)?;
    let resolver = settings.resolver();
    let options = settings.faker_options(args.locale, args.seed);
    let mut faker = Faker::create(&resolver, &options).await?;

    let values = (0..args.count)
        .map(|_| entry.generate(&mut faker))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(
        event = "values_generated",
        method = %entry.id(),
        locale = %faker.locale_id(),
        count = values.len()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else {
        for value in values {
            println!("{value}");
        }
    }
    Ok(())
}

fn run_categories() -> Result<(), CliError> {
    for category in registry().categories() {
        println!(
            "{:<10} {:>3} methods  {}",
            category.as_str(),
            registry().methods(category).len(),
            category.description()
        );
    }
    Ok(())
}

async fn run_methods(settings: &Settings, args: MethodsArgs) -> Result<(), CliError> {
    let category = Category::parse(&args.category)
        .ok_or_else(|| GenerateError::UnknownCategory(args.category.clone()))?;
    let resolver = settings.resolver();
    let options = settings.faker_options(args.locale, None);
    let mut faker = Faker::create(&resolver, &options).await?;

    for entry in registry().methods(category) {
        let example = entry
            .generate(&mut faker)
            .unwrap_or_else(|err| format!("<{err}>"));
        println!("{:<20} {example}", entry.name);
    }
    Ok(())
}

fn run_locales(settings: &Settings) -> Result<(), CliError> {
    let source = DirectorySource::new(settings.config.locale_dir());
    for locale in available_locales() {
        let marker = if installed(&source, locale) {
            "installed"
        } else {
            ""
        };
        println!("{locale:<8} {marker}");
    }
    Ok(())
}

fn installed(source: &DirectorySource, locale: &str) -> bool {
    if locale == nanofaker_core::DEFAULT_LOCALE {
        return true;
    }
    parse_locale(locale).is_ok_and(|info| source.path_for(&info).is_file())
}

async fn run_preload(settings: &Settings, args: PreloadArgs) -> Result<(), CliError> {
    let resolver = Arc::new(settings.resolver());
    let total = args.locales.len();
    let timer = Instant::now();
    let report = resolver.preload(args.locales).await;

    for locale in &report.loaded {
        println!("ok      {locale}");
    }
    for (locale, err) in &report.failed {
        println!("failed  {locale}: {err}");
    }
    tracing::info!(
        event = "preload_finished",
        loaded = report.loaded.len(),
        failed = report.failed.len(),
        duration_ms = timer.elapsed().as_millis()
    );

    if report.is_success() {
        Ok(())
    } else {
        Err(CliError::Preload {
            failed: report.failed.len(),
            total,
        })
    }
}

fn run_init(settings: &Settings, args: InitArgs) -> Result<(), CliError> {
    write_config(&settings.config_path, &settings.config, args.force)?;
    println!("wrote {}", settings.config_path.display());
    Ok(())
}

fn write_config(path: &Path, config: &FakerConfig, force: bool) -> Result<(), CliError> {
    save_config(path, config, force)?;
    tracing::info!(event = "config_written", path = %path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from([
            "nanofaker",
            "generate",
            "person",
            "first_name",
            "--locale",
            "de",
            "-n",
            "3",
            "--auto-install",
            "--locale-dir",
            "vendor",
        ])
        .unwrap();
        assert!(cli.global.auto_install);
        assert_eq!(cli.global.locale_dir, Some(PathBuf::from("vendor")));
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.locale.as_deref(), Some("de"));
        assert_eq!(args.count, 3);
        assert!(!args.json);
    }

    #[test]
    fn preload_requires_locales() {
        assert!(Cli::try_parse_from(["nanofaker", "preload"]).is_err());
    }

    #[test]
    fn flags_override_file_values() {
        let settings = Settings {
            config: FakerConfig {
                locale: "fr".to_string(),
                seed: Some(1),
                ..FakerConfig::default()
            },
            config_path: PathBuf::from(CONFIG_FILE),
        };
        let options = settings.faker_options(None, None);
        assert_eq!(options.locale, "fr");
        assert_eq!(options.seed, Some(1));
        let options = settings.faker_options(Some("it".to_string()), Some(9));
        assert_eq!(options.locale, "it");
        assert_eq!(options.seed, Some(9));
    }

    #[test]
    fn install_root_is_the_project_owning_node_modules() {
        assert_eq!(
            install_root(Path::new("node_modules")),
            Some(PathBuf::from("."))
        );
        assert_eq!(
            install_root(Path::new("app/node_modules")),
            Some(PathBuf::from("app"))
        );
        assert_eq!(install_root(Path::new("vendor/locales")), None);
    }

    #[test]
    fn installer_follows_the_locale_dir() {
        let settings = Settings {
            config: FakerConfig {
                auto_install_locales: true,
                locale_dir: Some(PathBuf::from("web/node_modules")),
                ..FakerConfig::default()
            },
            config_path: PathBuf::from(CONFIG_FILE),
        };
        assert!(settings.check().is_ok());
        let installer = settings.installer().expect("node_modules layout");
        assert_eq!(installer.working_dir(), Path::new("web"));
    }

    #[test]
    fn auto_install_rejects_custom_locale_dir() {
        let mut settings = Settings {
            config: FakerConfig {
                auto_install_locales: true,
                locale_dir: Some(PathBuf::from("vendor/locales")),
                ..FakerConfig::default()
            },
            config_path: PathBuf::from(CONFIG_FILE),
        };
        assert!(matches!(
            settings.check(),
            Err(CliError::AutoInstallDir(dir)) if dir == Path::new("vendor/locales")
        ));

        settings.config.auto_install_locales = false;
        assert!(settings.check().is_ok());
        assert!(settings.installer().is_none());
    }

    #[test]
    fn default_locale_counts_as_installed() {
        let source = DirectorySource::new("/nonexistent");
        assert!(installed(&source, "en"));
        assert!(!installed(&source, "de"));
    }
}
