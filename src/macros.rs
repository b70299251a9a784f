//! Macro definitions and the table the expander looks them up in.
//!
//! A [`MacroTable`] is built once, usually from [`MacroTable::builtin`], and is then only read.
use std::collections::HashMap;

use thiserror::Error;

/// The largest number of positional arguments a macro can take.
pub const MAX_ARITY: u8 = 9;

/// A named, fixed-arity text template with positional placeholders `#1` to `#9`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroDef {
    arity: u8,
    template: Box<str>,
    /// Whether the editor should treat the expansion as a single, non-editable unit.
    pub capture_selection: bool,
    /// Whether the editor should expand the macro itself when serializing its content.
    pub expand: bool,
}

impl MacroDef {
    /// Create a new definition, checking that every placeholder in the template is in range.
    ///
    /// Placeholders are a `#` followed by a digit. A `#` followed by anything else is kept as is.
    pub fn new(arity: u8, template: &str) -> Result<Self, DefinitionError> {
        if arity > MAX_ARITY {
            return Err(DefinitionError::TooManyParams(arity));
        }

        let bytes = template.as_bytes();
        for (index, _) in template.match_indices('#') {
            let Some(digit) = bytes.get(index + 1).filter(|b| b.is_ascii_digit()) else {
                continue;
            };
            let param_index = digit - b'0';
            if param_index == 0 || param_index > arity {
                return Err(DefinitionError::IncorrectReplacementParams(
                    param_index,
                    arity,
                ));
            }
        }

        Ok(Self {
            arity,
            template: template.into(),
            capture_selection: true,
            expand: true,
        })
    }

    pub fn arity(&self) -> u8 {
        self.arity
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Fill the template with the given arguments.
    ///
    /// Each `#k` is replaced by its argument in order, and only the first occurrence of each
    /// placeholder is replaced. Arguments are inserted literally.
    pub(crate) fn substitute<'a>(&self, arguments: impl IntoIterator<Item = &'a str>) -> String {
        let mut expansion = String::from(&*self.template);
        for (index, argument) in arguments.into_iter().enumerate() {
            let placeholder = format!("#{}", index + 1);
            expansion = expansion.replacen(&placeholder, argument, 1);
        }
        expansion
    }
}

/// Anything that could go wrong while defining a macro.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("macro definition takes {0} parameters, the maximum is 9")]
    TooManyParams(u8),
    #[error(
        "macro definition found parameter #{0} but expected a parameter in the range [#1, #{1}]"
    )]
    IncorrectReplacementParams(u8, u8),
    #[error("macro names must be made of ascii letters, digits and underscores, found `{0}`")]
    InvalidName(String),
}

/// Mapping from macro names to their definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacroTable {
    definitions: HashMap<Box<str>, MacroDef>,
}

impl MacroTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table registered with every editor field: `\prop` and `\variable`.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (name, arity, template) in BUILTINS {
            let def = MacroDef::new(*arity, template).expect("builtin macros are well formed");
            table.insert(name, def).expect("builtin macro names are valid");
        }
        table
    }

    /// Define a new macro from its name, arity, and template.
    pub fn define(&mut self, name: &str, arity: u8, template: &str) -> Result<(), DefinitionError> {
        let def = MacroDef::new(arity, template)?;
        self.insert(name, def)
    }

    /// Insert an already built definition, replacing any previous definition of the same name.
    pub fn insert(&mut self, name: &str, def: MacroDef) -> Result<(), DefinitionError> {
        if name.is_empty() || !name.bytes().all(is_word_byte) {
            return Err(DefinitionError::InvalidName(name.to_string()));
        }
        self.definitions.insert(name.into(), def);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&MacroDef> {
        self.definitions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MacroDef)> {
        self.definitions.iter().map(|(name, def)| (&**name, def))
    }

    /// Merge the definitions of `other` into this table. Definitions of `other` win.
    pub fn extend_from(&mut self, other: &MacroTable) {
        self.definitions.extend(
            other
                .definitions
                .iter()
                .map(|(name, def)| (name.clone(), def.clone())),
        );
    }
}

/// Name, arity, and template of the builtin macros.
const BUILTINS: &[(&str, u8, &str)] = &[
    ("prop", 2, r"\,\text{#1}^\text{#2}\,{}"),
    ("variable", 1, r"\,\text{#1}"),
];

/// Characters that can be part of a macro name.
pub(crate) fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
