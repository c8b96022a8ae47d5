pub mod config;
pub mod error;
pub mod visitor;

use crate::ast::Element;
use config::FormatterConfig;
use error::FormatterError;
use visitor::FormatterVisitor;

pub struct Formatter {
    config: FormatterConfig,
}

impl Formatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, element: &Element) -> Result<String, FormatterError> {
        let mut visitor = FormatterVisitor::new(self.config.clone());
        visitor.format_element(element)
    }
}

/// Renders `element` as markup that parses back to an equal tree.
pub fn render(element: &Element, config: &FormatterConfig) -> Result<String, FormatterError> {
    Formatter::new(config.clone()).format(element)
}
