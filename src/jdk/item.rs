use itertools::Itertools;

use super::Sdk;

const MAX_PATH_LENGTH: usize = 50;

/// One entry of the selection box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JdkItem {
    /// Key which is stored in settings, either an SDK name or one of the `USE_*` pseudo names
    pub jdk_name: String,
    pub label: String,
    pub comment: String,
    pub valid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Plain,
    Selected,
    Muted,
    Error,
}

impl JdkItem {
    pub fn new(
        jdk_name: impl Into<String>,
        label: impl Into<String>,
        comment: impl Into<String>,
        valid: bool,
    ) -> Self {
        Self {
            jdk_name: jdk_name.into(),
            label: label.into(),
            comment: comment.into(),
            valid,
        }
    }

    pub(crate) fn from_sdk(sdk: &Sdk) -> Self {
        Self::new(&sdk.name, &sdk.name, build_comment(sdk), sdk.valid_path)
    }

    /// Comment shown next to the label. Omitted if it would just repeat the name.
    pub fn display_comment(&self) -> Option<&str> {
        (!self.comment.is_empty() && self.comment != self.jdk_name)
            .then_some(self.comment.as_str())
    }

    pub fn label_style(&self, selected: bool) -> TextStyle {
        match (self.valid, selected) {
            (false, _) => TextStyle::Error,
            (true, true) => TextStyle::Selected,
            (true, false) => TextStyle::Plain,
        }
    }

    pub fn comment_style(&self) -> TextStyle {
        if self.valid {
            TextStyle::Muted
        } else {
            TextStyle::Error
        }
    }
}

/// "`version`, path: `home`", leaving out whatever is unknown
pub fn build_comment(sdk: &Sdk) -> String {
    let path = sdk
        .home_path
        .as_deref()
        .map(|p| format!("path: {}", truncate_long_path(p)));
    sdk.version.iter().cloned().chain(path).join(", ")
}

/// Shortens paths above 50 characters by replacing their middle with `...`
pub fn truncate_long_path(path: &str) -> String {
    let len = path.chars().count();
    if len <= MAX_PATH_LENGTH {
        return path.to_owned();
    }
    let head = path.chars().take(MAX_PATH_LENGTH / 2);
    let tail = path.chars().skip(len - MAX_PATH_LENGTH / 2 - 3);
    head.chain("...".chars()).chain(tail).collect()
}
