use crate::ast::Element;
use crate::formatter::config::FormatterConfig;
use crate::formatter::error::FormatterError;

pub struct FormatterVisitor {
    config: FormatterConfig,
    indent_level: usize,
    output: String,
}

impl FormatterVisitor {
    pub fn new(config: FormatterConfig) -> Self {
        Self {
            config,
            indent_level: 0,
            output: String::new(),
        }
    }

    pub fn format_element(&mut self, element: &Element) -> Result<String, FormatterError> {
        self.output.clear();
        self.indent_level = 0;
        self.visit_element(element)?;
        Ok(std::mem::take(&mut self.output))
    }

    fn visit_element(&mut self, element: &Element) -> Result<(), FormatterError> {
        check_name(&element.name)?;
        self.write("<");
        self.write(&element.name);

        for (name, value) in &element.attributes {
            check_name(name)?;
            if value.contains('"') {
                return Err(FormatterError::InvalidAttributeValue {
                    name: name.clone(),
                    value: value.clone(),
                });
            }
            self.write(&format!(" {}=\"{}\"", name, value));
        }

        if element.children.is_empty() {
            if self.config.self_close_empty {
                self.write("/>");
            } else {
                self.write(&format!("></{}>", element.name));
            }
            return Ok(());
        }

        self.write(">");
        self.indent();
        for child in &element.children {
            self.newline();
            self.visit_element(child)?;
        }
        self.dedent();
        self.newline();
        self.write(&format!("</{}>", element.name));
        Ok(())
    }

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn indent(&mut self) {
        self.indent_level += 1;
    }

    fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    // only spaces: tabs are not whitespace to the parser
    fn newline(&mut self) {
        if self.config.pretty {
            self.output.push('\n');
            self.output
                .push_str(&" ".repeat(self.indent_level * self.config.indent_spaces));
        }
    }
}

/// Names must be non-empty runs of ASCII letters and hyphens.
fn check_name(name: &str) -> Result<(), FormatterError> {
    if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
        Ok(())
    } else {
        Err(FormatterError::InvalidName(name.to_string()))
    }
}
