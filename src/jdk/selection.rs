use std::sync::Arc;

use indexmap::IndexMap;

use super::{
    Environment, JAVA_HOME_VAR, JdkItem, ProjectContext, Sdk, SdkRegistry, SystemEnvironment,
    USE_INTERNAL_JAVA, USE_JAVA_HOME, USE_PROJECT_JDK, build_comment, truncate_long_path,
};

const NOT_DEFINED: &str = "not defined yet";
const INTERNAL_JRE_LABEL: &str = "Use Internal JRE";
const PROJECT_JDK_LABEL: &str = "Use Project JDK";
const JAVA_HOME_LABEL: &str = "Use JAVA_HOME";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JdkError {
    #[error("JDK name must not be empty")]
    EmptyName,
    #[error("Host doesn't provide an internal JDK")]
    NoInternalJdk,
    #[error("Project JDK is not defined")]
    UndefinedProjectJdk,
    #[error("JAVA_HOME is not defined")]
    UndefinedJavaHome,
    #[error("JAVA_HOME doesn't point to a valid JDK: {0}")]
    InvalidJavaHome(String),
}

///
/// Items offered for selection plus the current choice.
///
/// Items are keyed by `jdk_name` and keep the order in which they were first collected:
/// registered SDKs, internal JRE, project JDK, `JAVA_HOME`.
///
pub struct JdkSelection<R, E = SystemEnvironment> {
    registry: R,
    env: E,
    project: Option<Arc<dyn ProjectContext>>,
    suggest_jre: bool,
    items: IndexMap<String, JdkItem>,
    selected: Option<usize>,
}

impl<R: SdkRegistry> JdkSelection<R> {
    pub fn new(registry: R) -> Self {
        Self::with_environment(registry, SystemEnvironment)
    }
}

impl<R: SdkRegistry, E: Environment> JdkSelection<R, E> {
    pub fn with_environment(registry: R, env: E) -> Self {
        Self {
            registry,
            env,
            project: None,
            suggest_jre: true,
            items: IndexMap::new(),
            selected: None,
        }
    }

    pub fn with_project(mut self, project: Arc<dyn ProjectContext>) -> Self {
        self.project = Some(project);
        self
    }

    /// Don't offer the JRE bundled with the host
    pub fn without_jre(mut self) -> Self {
        self.suggest_jre = false;
        self
    }

    pub fn project(&self) -> Option<&Arc<dyn ProjectContext>> {
        self.project.as_ref()
    }

    pub fn set_project(&mut self, project: Option<Arc<dyn ProjectContext>>) {
        self.project = project;
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn items(&self) -> impl ExactSizeIterator<Item = &JdkItem> {
        self.items.values()
    }

    pub fn collect_items(&self) -> IndexMap<String, JdkItem> {
        let mut result = IndexMap::new();

        for sdk in self.registry.java_sdks() {
            result.insert(sdk.name.clone(), JdkItem::from_sdk(&sdk));
        }

        if self.suggest_jre {
            match self.registry.internal_jdk() {
                Some(internal) => {
                    result.insert(
                        USE_INTERNAL_JAVA.to_owned(),
                        JdkItem::new(
                            USE_INTERNAL_JAVA,
                            INTERNAL_JRE_LABEL,
                            build_comment(&internal),
                            true,
                        ),
                    );
                }
                None => log::debug!("No internal JDK available, not offering it"),
            }
        }

        if let Some(project) = self.live_project() {
            let item = match project.project_sdk() {
                Some(sdk) => {
                    JdkItem::new(USE_PROJECT_JDK, PROJECT_JDK_LABEL, build_comment(&sdk), true)
                }
                None => JdkItem::new(USE_PROJECT_JDK, PROJECT_JDK_LABEL, NOT_DEFINED, false),
            };
            result.insert(USE_PROJECT_JDK.to_owned(), item);
        }

        let item = match self.env.var(JAVA_HOME_VAR) {
            Some(path) => {
                JdkItem::new(USE_JAVA_HOME, JAVA_HOME_LABEL, truncate_long_path(&path), true)
            }
            None => JdkItem::new(USE_JAVA_HOME, JAVA_HOME_LABEL, NOT_DEFINED, false),
        };
        result.insert(USE_JAVA_HOME.to_owned(), item);

        result
    }

    ///
    /// Recollects all items and selects `selected`.
    /// A name which is no longer known is kept as invalid item, so the setting isn't lost silently.
    ///
    pub fn refresh(&mut self, selected: Option<&str>) -> Result<(), JdkError> {
        if selected.is_some_and(str::is_empty) {
            return Err(JdkError::EmptyName);
        }

        let mut items = self.collect_items();
        if let Some(name) = selected {
            if !items.contains_key(name) {
                log::debug!("Keeping unknown JDK '{name}' as invalid entry");
                items.insert(name.to_owned(), JdkItem::new(name, name, "", false));
            }
        }
        log::debug!("Refreshed JDK selection with {} items", items.len());

        self.items = items;
        self.select(selected);
        Ok(())
    }

    /// Selects the item named `name`, or the first one if there is no such item
    pub fn select(&mut self, name: Option<&str>) {
        self.selected = name
            .and_then(|n| self.items.get_index_of(n))
            .or_else(|| (!self.items.is_empty()).then_some(0));
    }

    pub fn selected_item(&self) -> Option<&JdkItem> {
        self.items.get_index(self.selected?).map(|(_, item)| item)
    }

    pub fn selected_value(&self) -> Option<&str> {
        self.selected_item().map(|item| item.jdk_name.as_str())
    }

    /// SDK behind the current selection. Resolution failures are logged and reported as `None`.
    pub fn selected_jdk(&self) -> Option<Sdk> {
        let name = self.selected_value()?;
        match self.resolve_jdk(name) {
            Ok(sdk) => sdk,
            Err(e) => {
                log::warn!("Unable to resolve JDK '{name}': {e}");
                None
            }
        }
    }

    /// Maps a stored name, real or pseudo, to an SDK. Unknown real names resolve to `None`.
    pub fn resolve_jdk(&self, name: &str) -> Result<Option<Sdk>, JdkError> {
        match name {
            USE_INTERNAL_JAVA => self
                .registry
                .internal_jdk()
                .ok_or(JdkError::NoInternalJdk)
                .map(Some),
            USE_PROJECT_JDK => self
                .live_project()
                .and_then(|p| p.project_sdk())
                .ok_or(JdkError::UndefinedProjectJdk)
                .map(Some),
            USE_JAVA_HOME => {
                let path = self
                    .env
                    .var(JAVA_HOME_VAR)
                    .ok_or(JdkError::UndefinedJavaHome)?;
                if !self.registry.is_valid_java_home(&path) {
                    return Err(JdkError::InvalidJavaHome(path));
                }
                Ok(Some(Sdk::new(&path).with_home_path(path)))
            }
            _ => Ok(self
                .registry
                .java_sdks()
                .into_iter()
                .find(|sdk| sdk.name == name)),
        }
    }

    ///
    /// Adds a freshly set up JDK and selects it.
    /// If one with the same home path is already registered, that one is selected instead.
    ///
    pub fn add_jdk(&mut self, sdk: Sdk) -> Result<String, JdkError> {
        let existing = sdk.home_path.as_ref().and_then(|home| {
            self.registry
                .java_sdks()
                .into_iter()
                .find(|known| known.home_path.as_ref() == Some(home))
        });

        let name = match existing {
            Some(known) => {
                log::debug!(
                    "JDK at {:?} is already registered as '{}'",
                    sdk.home_path,
                    known.name
                );
                known.name
            }
            None => {
                if sdk.name.is_empty() {
                    return Err(JdkError::EmptyName);
                }
                log::debug!("Registering JDK '{}'", sdk.name);
                let name = sdk.name.clone();
                self.registry.add_sdk(sdk);
                name
            }
        };
        self.refresh(Some(&name))?;
        Ok(name)
    }

    fn live_project(&self) -> Option<&Arc<dyn ProjectContext>> {
        self.project.as_ref().filter(|p| !p.is_disposed())
    }
}
