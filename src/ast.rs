use serde::{Deserialize, Serialize};

/// An attribute as written: `(name, value)` with the quotes removed.
pub type Attribute = (String, String);

/// One markup element with its attributes and child elements.
///
/// Attributes keep their declaration order and are not deduplicated.
/// A self-closing element has no children.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Finishes an element whose children were parsed after its opening tag.
    ///
    /// Replaces any children the element already had.
    pub fn with_children(self, children: Vec<Element>) -> Self {
        Self { children, ..self }
    }

    /// Value of the first attribute called `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children_named<'s>(&'s self, name: &'s str) -> impl Iterator<Item = &'s Element> + 's {
        self.children.iter().filter(move |child| child.name == name)
    }

    pub fn is_self_closing(&self) -> bool {
        self.children.is_empty()
    }
}
