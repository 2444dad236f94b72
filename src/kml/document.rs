use std::{fs, path::Path};

use crate::error::{ConvertError, ParseError};

/// Read the whole KML file into memory.
pub fn read_kml_file(filepath: &Path) -> Result<String, ConvertError> {
    if !filepath.exists() {
        return Err(ConvertError::NotFound(filepath.to_path_buf()));
    }
    fs::read_to_string(filepath).map_err(|source| ConvertError::Read {
        path: filepath.to_path_buf(),
        source,
    })
}

/// Parsed KML tree together with the namespace its placemarks live in.
///
/// Every lookup made through [`KmlNode`] is qualified by that namespace, so elements of
/// extension namespaces (e.g. `gx:`) with a matching local name are never picked up.
pub struct KmlDocument<'input> {
    document: roxmltree::Document<'input>,
    namespace: Option<String>,
}

impl<'input> KmlDocument<'input> {
    pub fn parse(text: &'input str) -> Result<Self, ConvertError> {
        let document = roxmltree::Document::parse(text).map_err(ParseError::from)?;
        let namespace = detect_namespace(&document);
        log::debug!("Using KML namespace {:?}", namespace);
        Ok(Self {
            document,
            namespace,
        })
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn root<'a>(&'a self) -> KmlNode<'a, 'input> {
        KmlNode {
            node: self.document.root_element(),
            namespace: self.namespace(),
        }
    }

    /// All elements with the given local name, in document order.
    pub fn elements<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = KmlNode<'a, 'input>> + 'a {
        self.root().descendants(name)
    }
}

/// The placemarks decide the namespace; documents without any fall back to the root element's.
fn detect_namespace(document: &roxmltree::Document) -> Option<String> {
    let root = document.root_element();
    root.descendants()
        .find(|node| node.is_element() && node.tag_name().name() == "Placemark")
        .unwrap_or(root)
        .tag_name()
        .namespace()
        .map(str::to_owned)
}

#[derive(Clone, Copy, Debug)]
pub struct KmlNode<'a, 'input: 'a> {
    node: roxmltree::Node<'a, 'input>,
    namespace: Option<&'a str>,
}

impl<'a, 'input: 'a> KmlNode<'a, 'input> {
    fn wrap(&self, node: roxmltree::Node<'a, 'input>) -> Self {
        Self {
            node,
            namespace: self.namespace,
        }
    }

    fn matches(&self, node: &roxmltree::Node, name: &str) -> bool {
        node.is_element()
            && node.tag_name().name() == name
            && node.tag_name().namespace() == self.namespace
    }

    /// First direct child with the given local name.
    pub fn child(&self, name: &str) -> Option<Self> {
        self.node
            .children()
            .find(|child| self.matches(child, name))
            .map(|child| self.wrap(child))
    }

    /// All direct children with the given local name.
    pub fn children(&self, name: &'a str) -> impl Iterator<Item = Self> + 'a {
        let this = *self;
        self.node
            .children()
            .filter(move |child| this.matches(child, name))
            .map(move |child| this.wrap(child))
    }

    /// Follow a path of direct children, e.g. `["IconStyle", "color"]`.
    pub fn path(&self, names: &[&str]) -> Option<Self> {
        names.iter().try_fold(*self, |node, name| node.child(name))
    }

    /// All descendants with the given local name, excluding `self`, in document order.
    pub fn descendants(&self, name: &'a str) -> impl Iterator<Item = Self> + 'a {
        let this = *self;
        self.node
            .descendants()
            .skip(1)
            .filter(move |node| this.matches(node, name))
            .map(move |node| this.wrap(node))
    }

    pub fn descendant(&self, name: &'a str) -> Option<Self> {
        self.descendants(name).next()
    }

    /// Text preceding the first child element, as it appears in the document.
    pub fn text(&self) -> Option<&'a str> {
        self.node.text()
    }

    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.node.attribute(name)
    }
}
