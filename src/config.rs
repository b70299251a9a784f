use crate::macros::MacroTable;

/// Configuration shared by every field of an [`EquationList`](crate::fields::EquationList).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Macros registered with every field, on top of the macros the field already knows about.
    /// (default: [`MacroTable::builtin`])
    pub macros: MacroTable,
    /// Identifiers of the entries of a field's own context menu that are kept when the menu is
    /// rebuilt. Every other entry is dropped. (default: `["cut", "copy", "paste"]`)
    pub keep_items: Vec<String>,
    /// LaTeX snippets offered in the "Insert Quantity" submenu, in order. (default: empty)
    pub quantities: Vec<String>,
    /// Character placed between the values of two consecutive fields when serializing the whole
    /// list to a single string. (default: `'\u{b}'`, the vertical tab)
    pub separator: char,
}

impl EditorConfig {
    pub fn with_macros(mut self, macros: MacroTable) -> Self {
        self.macros = macros;
        self
    }

    pub fn with_keep_items<I, S>(mut self, keep_items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keep_items = keep_items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_quantities<I, S>(mut self, quantities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.quantities = quantities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            macros: MacroTable::builtin(),
            keep_items: ["cut", "copy", "paste"].map(String::from).to_vec(),
            quantities: Vec::new(),
            separator: '\u{b}',
        }
    }
}
