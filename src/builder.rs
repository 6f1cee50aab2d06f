//! Rule-set assembly
//!
//! The builder turns a set of registered policy bundles plus a validated
//! configuration into one immutable [`Sanitizer`]. Bundle order in
//! `config.extensions` becomes the engine's registration order (enter
//! order; leave order is its reverse).
//!
//! Three core visitors are appended unconditionally after the bundles:
//! the `script` and `style` suppression rules and the text rule. The
//! traversal engine's unwrap policy means omitting a rule can never remove
//! content, so subtree removal for script/style has to be positively
//! registered, and without the text rule every sanitize call would return
//! markup with all its text missing.

use crate::config::SanitizerConfig;
use crate::error::ConfigError;
use crate::extension::Extension;
use crate::sanitizer::Sanitizer;
use crate::visitor::{DomVisitor, NodeVisitor};
use crate::visitors::{DropVisitor, TextVisitor};

/// Assembles a [`Sanitizer`] from registered extensions and configuration
#[derive(Default)]
pub struct SanitizerBuilder {
    extensions: Vec<Box<dyn Extension>>,
}

impl SanitizerBuilder {
    pub fn new() -> Self {
        Self {
            extensions: Vec::new(),
        }
    }

    /// Make a policy bundle available for enabling via configuration
    pub fn register_extension(&mut self, extension: Box<dyn Extension>) {
        self.extensions.push(extension);
    }

    /// Assemble a sanitizer
    ///
    /// Fails fast on any misconfiguration: invalid option values and
    /// enabled extension names that match no registered bundle surface
    /// here, never from a later sanitize call.
    pub fn build(&self, config: &SanitizerConfig) -> Result<Sanitizer, ConfigError> {
        config.validate()?;

        let mut visitors: Vec<Box<dyn NodeVisitor>> = Vec::new();
        for name in &config.extensions {
            let extension = self
                .extensions
                .iter()
                .find(|extension| extension.name() == name.as_str())
                .ok_or_else(|| ConfigError::UnknownExtension(name.clone()))?;
            visitors.extend(extension.create_node_visitors(config));
        }

        visitors.push(Box::new(DropVisitor::new("script")));
        visitors.push(Box::new(DropVisitor::new("style")));
        visitors.push(Box::new(TextVisitor));

        Ok(Sanitizer::new(DomVisitor::new(
            visitors,
            config.max_input_depth,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::BasicExtension;

    #[test]
    fn test_unknown_extension_name_is_fatal() {
        let mut builder = SanitizerBuilder::new();
        builder.register_extension(Box::new(BasicExtension));
        let config = SanitizerConfig {
            extensions: vec!["basic".to_string(), "tables".to_string()],
            ..Default::default()
        };
        match builder.build(&config) {
            Err(ConfigError::UnknownExtension(name)) => assert_eq!(name, "tables"),
            other => panic!("Expected UnknownExtension, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_invalid_config_is_fatal() {
        let mut builder = SanitizerBuilder::new();
        builder.register_extension(Box::new(BasicExtension));
        let config = SanitizerConfig {
            max_input_depth: 0,
            ..Default::default()
        };
        assert!(builder.build(&config).is_err());
    }

    #[test]
    fn test_core_visitors_present_without_extensions() {
        // Even with no bundle enabled, scripts are suppressed and text kept
        let builder = SanitizerBuilder::new();
        let config = SanitizerConfig {
            extensions: vec![],
            ..Default::default()
        };
        let sanitizer = builder.build(&config).expect("builds");
        assert_eq!(
            sanitizer.sanitize("<script>alert(1)</script>plain"),
            "plain"
        );
    }
}
