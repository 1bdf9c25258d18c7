use config::{Config, Environment, File, FileFormat, FileSourceFile};
use encontra_domain::config::EngineConfig;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Prefix of environment overrides (`ENCONTRA__TENANCY__APEX_LABEL`).
pub const ENV_PREFIX: &str = "ENCONTRA";
/// File stem looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_STEM: &str = "encontra";

/// Custom error type for config loading.
#[encontra_derive::encontra_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads [`EngineConfig`] from a file and overlays `ENCONTRA__`-prefixed
/// environment variables.
///
/// With `path` that file must exist. Without it the optional
/// `encontra.{toml,json,yaml}` in the working directory is used when present,
/// and every section falls back to its defaults. Nested keys use a double
/// underscore, e.g. `ENCONTRA__DATABASE__URL` maps to `database.url`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicitly given file is missing or
/// any source holds values of the wrong type.
pub fn load_engine_config(path: Option<&Path>) -> Result<EngineConfig, ConfigError> {
    let file = path.map_or_else(
        || File::with_name(DEFAULT_CONFIG_STEM).required(false),
        |p| File::from(p).required(true),
    );
    info!(path = %path.unwrap_or(Path::new(DEFAULT_CONFIG_STEM)).display(), "Loading config");
    build(file, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .convert_case(config::Case::Snake)
}

fn build(
    file: File<FileSourceFile, FileFormat>,
    env: Environment,
) -> Result<EngineConfig, ConfigError> {
    Config::builder()
        .add_source(file)
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<EngineConfig>()
        .context("Failed to deserialize config")
}
