use crate::model::ProjectConfig;

/// Placeholder values, applied in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateVariables {
    entries: Vec<(String, String)>,
}

impl TemplateVariables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a value. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Value for `key`, without brackets.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of placeholders.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The six placeholders every template may use.
    ///
    /// A monorepo gets `-monorepo` appended to `project_name`. The first
    /// package name falls back to the project name and loses its scope;
    /// `package_name_letters_only` keeps only its ASCII letters.
    pub fn from_config(config: &ProjectConfig) -> Self {
        let first_package_full = config
            .first_package_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(config.project_name.as_str());
        let project_name = if config.is_monorepo {
            format!("{}-monorepo", config.project_name)
        } else {
            config.project_name.clone()
        };
        let first_package_name = extract_package_name(first_package_full);
        let letters_only = if first_package_name.is_empty() {
            strip_non_alphabetic(&project_name)
        } else {
            strip_non_alphabetic(first_package_name)
        };

        let mut vars = Self::new();
        vars.insert("project_name", project_name);
        vars.insert("project_description", config.description.as_str());
        vars.insert("repo_name", config.repo_name.as_str());
        vars.insert("username", config.username.as_str());
        vars.insert("first_package_name", first_package_name);
        vars.insert("package_name_letters_only", letters_only);
        vars
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TemplateVariables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Self::new();
        for (k, v) in iter {
            vars.insert(k, v);
        }
        vars
    }
}

/// `@scope/pkg` -> `pkg`; unscoped names are returned as is.
pub fn extract_package_name(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// Drops every character that is not an ASCII letter.
pub fn strip_non_alphabetic(s: &str) -> String {
    s.chars().filter(char::is_ascii_alphabetic).collect()
}
