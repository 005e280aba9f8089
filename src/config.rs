use crate::circuits::{ConnectionBudget, Counting};

pub const DEFAULT_CONFIG: &str = "\
# Pairs to connect before measuring circuits.
connection_limit: 1000
# Which connections count toward connection_limit: successful or attempted.
counting: successful
# How many of the largest circuits to multiply together.
top_components: 3
";

pub fn default_config_path() -> Option<std::path::PathBuf> {
    use etcetera::AppStrategy;
    app_dirs().map(|d| d.config_dir().join("spanlink.yml")).ok()
}

pub fn app_dirs() -> Result<impl etcetera::AppStrategy, etcetera::HomeDirError> {
    etcetera::choose_app_strategy(etcetera::AppStrategyArgs {
        top_level_domain: "com".to_string(),
        author: "spanlink".to_string(),
        app_name: "spanlink".to_string(),
    })
}

/// The config file as written, before defaults are filled in.
#[derive(Debug, PartialEq, Default)]
struct ConfigFile {
    connection_limit: Option<u64>,
    counting: Option<String>,
    top_components: Option<u64>,
}

merde::derive! {
    impl (Deserialize) for struct ConfigFile { connection_limit, counting, top_components }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub budget: ConnectionBudget,
    pub top_components: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            budget: ConnectionBudget::default(),
            top_components: 3,
        }
    }
}

#[derive(Debug)]
pub enum ConfigParseError {
    Deserialize(merde::MerdeError<'static>),
    NotUtf8(std::str::Utf8Error),
    UnreadableFile(std::path::PathBuf, std::io::Error),
    UnknownCounting(String),
    Invalid(&'static str),
}

impl From<merde::MerdeError<'_>> for ConfigParseError {
    fn from(value: merde::MerdeError<'_>) -> Self {
        use merde::IntoStatic;
        Self::Deserialize(value.into_static())
    }
}

impl From<std::str::Utf8Error> for ConfigParseError {
    fn from(value: std::str::Utf8Error) -> Self {
        Self::NotUtf8(value)
    }
}

#[rustfmt::skip]
impl std::fmt::Display for ConfigParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deserialize(e)
                => write!(f, "{}", e),
            Self::NotUtf8(e)
                => write!(f, "{}", e),
            Self::UnreadableFile(path, e)
                => write!(f, "{}: {}", path.display(), e),
            Self::UnknownCounting(counting)
                => write!(f, "unknown counting {:?}, expected successful or attempted", counting),
            Self::Invalid(message)
                => write!(f, "{}", message),
        }
    }
}

impl Config {
    pub fn load_default() -> Self {
        match Self::load_from_str(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::error!("built-in config is broken: {}", e);
                Self::default()
            }
        }
    }

    /// Built-in defaults overlaid with `path`, or with the default config
    /// path when `path` is `None`. Only an explicitly named file has to exist.
    pub fn load(path: Option<&std::path::Path>) -> Result<Self, ConfigParseError> {
        let defaults = Self::load_default();
        let (path, required) = match path {
            Some(path) => (path.to_owned(), true),
            None => match default_config_path() {
                Some(path) => (path, false),
                None => return Ok(defaults),
            },
        };
        let config_bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {:?}, using defaults", path);
                return Ok(defaults);
            }
            Err(e) => return Err(ConfigParseError::UnreadableFile(path, e)),
        };
        log::debug!("loading config from {:?}", path);
        let config_str = std::str::from_utf8(&config_bytes)?;
        defaults.overlay(merde::yaml::from_str::<ConfigFile>(config_str)?)
    }

    pub fn load_from_str(config_str: &str) -> Result<Self, ConfigParseError> {
        Self::default().overlay(merde::yaml::from_str::<ConfigFile>(config_str)?)
    }

    fn overlay(mut self, file: ConfigFile) -> Result<Self, ConfigParseError> {
        if let Some(limit) = file.connection_limit {
            self.budget.limit = usize::try_from(limit)
                .map_err(|_| ConfigParseError::Invalid("connection_limit is too large"))?;
        }
        if let Some(counting) = file.counting {
            self.budget.counting = counting
                .parse::<Counting>()
                .map_err(ConfigParseError::UnknownCounting)?;
        }
        if let Some(top) = file.top_components {
            self.top_components = usize::try_from(top)
                .ok()
                .filter(|&top| top > 0)
                .ok_or(ConfigParseError::Invalid("top_components must be at least 1"))?;
        }
        Ok(self)
    }
}
