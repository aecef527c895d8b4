//! CLI command implementations

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{OutputFormat, Sink};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use ucoll_api::{Attribute, AttributeValue, CollationProcessor, Config, ConfigBuilder};

pub mod compare;
pub mod key;
pub mod list;
pub mod rules;
pub mod sort;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sort lines (or a JSON array) in locale order
    Sort(sort::SortArgs),

    /// Compare two strings
    Compare(compare::CompareArgs),

    /// Print sort keys
    Key(key::KeyArgs),

    /// Print the tailoring rules a collator was built from
    Rules(rules::RulesArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Check that rules or a collation config open a collator
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List locales with engine collation data
    Locales,

    /// List collation keywords and their values
    Keywords,

    /// List locales served from embedded rules
    Overrides,

    /// List collator attributes and the values they accept
    Attributes,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self, settings: &CliConfig, quiet: bool) -> Result<()> {
        match self {
            Commands::Sort(args) => args.execute(settings, quiet),
            Commands::Compare(args) => args.execute(settings),
            Commands::Key(args) => args.execute(settings),
            Commands::Rules(args) => args.execute(settings),
            Commands::List { subcommand } => list::execute(*subcommand),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// Collator selection flags shared by several commands
#[derive(Debug, Clone, Default, Args)]
pub struct CollatorArgs {
    /// Locale identifier, e.g. nb, de-u-co-phonebk, bo
    #[arg(short, long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Tailoring rules file, used instead of locale data
    #[arg(short, long, value_name = "FILE", conflicts_with = "locale")]
    pub rules: Option<PathBuf>,

    /// Collation config file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Attribute assignment, repeatable (e.g. -a numeric_collation=on)
    #[arg(
        short,
        long = "attribute",
        value_name = "NAME=VALUE",
        value_parser = parse_attribute
    )]
    pub attributes: Vec<(Attribute, AttributeValue)>,
}

impl CollatorArgs {
    /// Merge config file, settings defaults and flags into a builder
    ///
    /// Flags override the config file, which overrides the settings default locale.
    pub fn builder(&self, settings: &CliConfig) -> Result<ConfigBuilder> {
        let mut builder = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?
                .into_builder(),
            None => Config::builder().locale(settings.defaults.locale.as_str())?,
        };

        if let Some(locale) = &self.locale {
            builder = builder.locale(locale.as_str())?.clear_rules();
        }
        if let Some(path) = &self.rules {
            builder = builder.rules(FileReader::read_text(path)?);
        }
        for &(attribute, value) in &self.attributes {
            builder = builder.attribute(attribute, value);
        }

        Ok(builder)
    }

    /// Build a processor from the merged configuration
    pub fn processor(&self, settings: &CliConfig) -> Result<CollationProcessor> {
        let config = self.builder(settings)?.build()?;
        Ok(CollationProcessor::with_config(config)?)
    }
}

/// Parse a `NAME=VALUE` attribute assignment
pub fn parse_attribute(arg: &str) -> std::result::Result<(Attribute, AttributeValue), String> {
    let (name, value) = arg.split_once('=').ok_or_else(|| {
        CliError::InvalidAttribute(format!("expected NAME=VALUE, got '{arg}'")).to_string()
    })?;

    let attribute: Attribute = name.trim().parse().map_err(|e| format!("{e}"))?;
    let value: AttributeValue = value.trim().parse().map_err(|e| format!("{e}"))?;
    Ok((attribute, value))
}

/// Open the output destination: a file, or stdout
pub fn open_output(path: Option<&Path>) -> Result<Sink> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Resolve the output format from a flag and the settings file
pub fn output_format(flag: Option<OutputFormat>, settings: &CliConfig) -> OutputFormat {
    OutputFormat::resolve(flag, &settings.defaults.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_attribute() {
        assert_eq!(
            parse_attribute("numeric_collation=on").unwrap(),
            (Attribute::NumericCollation, AttributeValue::On)
        );
        assert_eq!(
            parse_attribute("strength = default_strength").unwrap(),
            (Attribute::Strength, AttributeValue::Tertiary)
        );
    }

    #[test]
    fn test_parse_attribute_without_equals() {
        let err = parse_attribute("strength").unwrap_err();
        assert!(err.contains("expected NAME=VALUE"));
    }

    #[test]
    fn test_parse_attribute_unknown_name() {
        let err = parse_attribute("loudness=on").unwrap_err();
        assert!(err.contains("loudness"));
    }

    #[test]
    fn test_builder_uses_settings_locale() {
        let mut settings = CliConfig::default();
        settings.defaults.locale = "nb".to_string();

        let config = CollatorArgs::default()
            .builder(&settings)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.locale, "nb");
    }

    #[test]
    fn test_flags_override_settings() {
        let args = CollatorArgs {
            locale: Some("sv".to_string()),
            attributes: vec![(Attribute::Strength, AttributeValue::Primary)],
            ..Default::default()
        };

        let config = args
            .builder(&CliConfig::default())
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.locale, "sv");
        assert_eq!(
            config.attributes.get(&Attribute::Strength),
            Some(&AttributeValue::Primary)
        );
    }

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Overrides,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Overrides"));
    }
}
