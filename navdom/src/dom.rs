use thiserror::Error;

use crate::element::{find_element, find_element_mut, Element};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("no element with id {id:?} in the tree")]
    MissingElement { id: String },
}

/// Retained element tree with lookup by stable identifier.
///
/// The tree is built once and mutated in place; there is no structural
/// removal, so an identifier that resolved at bind time keeps resolving
/// for the lifetime of the Dom.
#[derive(Debug, Clone)]
pub struct Dom {
    root: Element,
}

impl Dom {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// The document element. Its background is the page background.
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    /// Validate that an identifier resolves, without touching the element.
    pub fn require(&self, id: &str) -> Result<(), DomError> {
        match self.get(id) {
            Some(_) => Ok(()),
            None => Err(DomError::MissingElement { id: id.to_string() }),
        }
    }

    /// Lookup that surfaces a missing identifier as an error, for `?`.
    pub fn element_mut(&mut self, id: &str) -> Result<&mut Element, DomError> {
        match find_element_mut(&mut self.root, id) {
            Some(element) => Ok(element),
            None => Err(DomError::MissingElement { id: id.to_string() }),
        }
    }
}
