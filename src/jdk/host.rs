/// A Java SDK as known to the host's SDK table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sdk {
    pub name: String,
    pub version: Option<String>,
    pub home_path: Option<String>,
    /// Whether the home path still points to a usable installation
    pub valid_path: bool,
}

impl Sdk {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            home_path: None,
            valid_path: true,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_home_path(mut self, path: impl Into<String>) -> Self {
        self.home_path = Some(path.into());
        self
    }

    pub fn with_valid_path(mut self, valid: bool) -> Self {
        self.valid_path = valid;
        self
    }
}

/// Host owned table of configured SDKs
pub trait SdkRegistry {
    /// All registered Java SDKs, in the order they should be offered
    fn java_sdks(&self) -> Vec<Sdk>;

    /// JDK the host itself runs on, if it ships one
    fn internal_jdk(&self) -> Option<Sdk>;

    fn add_sdk(&mut self, sdk: Sdk);

    /// Whether `path` looks like the home of a Java installation
    fn is_valid_java_home(&self, path: &str) -> bool;
}

pub trait ProjectContext {
    fn is_disposed(&self) -> bool;

    fn project_sdk(&self) -> Option<Sdk>;
}

/// Access to environment variables, replaceable in tests
pub trait Environment {
    fn var(&self, name: &str) -> Option<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl<K, V> Environment for std::collections::HashMap<K, V>
where
    K: std::borrow::Borrow<str> + std::hash::Hash + Eq,
    V: AsRef<str>,
{
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).map(|v| v.as_ref().to_owned())
    }
}
