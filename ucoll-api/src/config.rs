//! High-level configuration API

use crate::error::{ApiError, Result};
use std::collections::BTreeMap;
#[cfg(feature = "serde")]
use std::path::Path;
use ucoll_core::{Attribute, AttributeValue, Collator};

/// Locale used when none is configured
pub const DEFAULT_LOCALE: &str = "root";

/// High-level configuration for collation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Locale identifier, ignored when `rules` is set
    pub locale: String,
    /// Inline tailoring rules
    pub rules: Option<String>,
    /// Attributes applied after the collator is opened, in attribute order
    pub attributes: BTreeMap<Attribute, AttributeValue>,
    /// Sort through precomputed sort keys instead of pairwise comparison
    pub sort_by_key: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            rules: None,
            attributes: BTreeMap::new(),
            sort_by_key: false,
        }
    }
}

/// On-disk shape of a configuration file
///
/// ```toml
/// locale = "nb"
/// sort_by_key = true
///
/// [attributes]
/// numeric_collation = "on"
/// strength = "secondary"
/// ```
#[cfg(feature = "serde")]
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    locale: Option<String>,
    rules: Option<String>,
    rules_file: Option<String>,
    sort_by_key: bool,
    attributes: BTreeMap<String, String>,
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reopen this configuration for further changes
    pub fn into_builder(self) -> ConfigBuilder {
        ConfigBuilder { config: self }
    }

    /// Configuration for a single locale with engine defaults
    pub fn for_locale(locale: impl Into<String>) -> Result<Self> {
        Self::builder().locale(locale)?.build()
    }

    /// Parse a TOML configuration
    ///
    /// `rules_file` paths are resolved against the current directory.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Self::from_toml_in(text, None)
    }

    /// Load a TOML configuration file
    ///
    /// A relative `rules_file` is resolved against the configuration file's directory.
    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        log::debug!("loading collation config from {}", path.display());
        Self::from_toml_in(&text, path.parent())
    }

    #[cfg(feature = "serde")]
    fn from_toml_in(text: &str, base: Option<&Path>) -> Result<Self> {
        let file: ConfigFile = toml::from_str(text)?;

        let mut builder = Self::builder().sort_by_key(file.sort_by_key);
        if let Some(locale) = file.locale {
            builder = builder.locale(locale)?;
        }

        match (file.rules, file.rules_file) {
            (Some(_), Some(_)) => {
                return Err(ApiError::Config(
                    "'rules' and 'rules_file' are mutually exclusive".to_string(),
                ))
            }
            (Some(rules), None) => builder = builder.rules(rules),
            (None, Some(rules_file)) => {
                let rules_path = match base {
                    Some(dir) => dir.join(&rules_file),
                    None => rules_file.into(),
                };
                builder = builder.rules(std::fs::read_to_string(rules_path)?);
            }
            (None, None) => {}
        }

        for (name, value) in &file.attributes {
            builder = builder.attribute_str(name, value)?;
        }

        builder.build()
    }

    /// Open a collator for this configuration and apply its attributes
    pub fn open_collator(&self) -> Result<Collator> {
        let mut collator = match &self.rules {
            Some(rules) => Collator::from_rules(rules)?,
            None => Collator::new(&self.locale)?,
        };

        for (&attribute, &value) in &self.attributes {
            log::debug!("setting {attribute} = {value}");
            collator.set(attribute, value)?;
        }

        Ok(collator)
    }

    /// Short description of where the collator comes from
    pub fn source_label(&self) -> &str {
        if self.rules.is_some() {
            "<rules>"
        } else {
            &self.locale
        }
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the locale
    pub fn locale(mut self, locale: impl Into<String>) -> Result<Self> {
        let locale = locale.into();
        if locale.contains('\0') {
            return Err(ApiError::Config(format!(
                "locale '{}' contains a NUL byte",
                locale.escape_debug()
            )));
        }
        self.config.locale = locale;
        Ok(self)
    }

    /// Use tailoring rules instead of locale data
    pub fn rules(mut self, rules: impl Into<String>) -> Self {
        self.config.rules = Some(rules.into());
        self
    }

    /// Drop tailoring rules and use locale data again
    pub fn clear_rules(mut self) -> Self {
        self.config.rules = None;
        self
    }

    /// Set one attribute
    pub fn attribute(mut self, attribute: Attribute, value: AttributeValue) -> Self {
        self.config.attributes.insert(attribute, value);
        self
    }

    /// Set one attribute from its symbolic names
    pub fn attribute_str(self, attribute: &str, value: &str) -> Result<Self> {
        let attribute: Attribute = attribute.parse()?;
        let value: AttributeValue = value.parse()?;
        Ok(self.attribute(attribute, value))
    }

    /// Sort through precomputed sort keys
    pub fn sort_by_key(mut self, enabled: bool) -> Self {
        self.config.sort_by_key = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.rules.is_none() && self.config.locale.trim().is_empty() {
            return Err(ApiError::Config("locale or rules required".to_string()));
        }

        for (attribute, value) in &self.config.attributes {
            if *value != AttributeValue::Default && !attribute.supported_values().contains(value) {
                return Err(ApiError::Config(format!(
                    "value '{value}' is not supported by attribute '{attribute}'"
                )));
            }
        }

        Ok(self.config)
    }

    /// Build and open a collator directly
    pub fn build_collator(self) -> Result<Collator> {
        self.build()?.open_collator()
    }
}
