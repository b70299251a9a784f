//! Context menu entries of an editor field.
//!
//! Menus are plain values: [`build_menu`] computes the menu of a field from its current entries,
//! and the field is then handed the result.
use log::debug;

use crate::{
    expander::{expand, ExpandError},
    fields::MarkupRenderer,
    macros::MacroTable,
};

/// Label of the submenu listing the insertable quantities.
pub const INSERT_QUANTITY: &str = "Insert Quantity";

/// An entry of a context menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Submenu {
        label: MenuLabel,
        entries: Vec<MenuEntry>,
    },
    Divider,
    Action {
        /// Identifier of the entry, if any. Entries provided by the editor itself (`cut`,
        /// `copy`, ...) have one.
        id: Option<String>,
        label: MenuLabel,
        /// LaTeX inserted into the field when the entry is selected, if any.
        insert: Option<String>,
    },
}

impl MenuEntry {
    /// An entry provided by the editor, identified by `id`.
    pub fn action(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Action {
            id: Some(id.into()),
            label: MenuLabel::Text(label.into()),
            insert: None,
        }
    }

    /// An entry inserting `latex` into the field, labelled with its rendering.
    pub fn insert(latex: impl Into<String>) -> Self {
        let latex = latex.into();
        Self::Action {
            id: None,
            label: MenuLabel::Latex(latex.clone()),
            insert: Some(latex),
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Action { id, .. } => id.as_deref(),
            _ => None,
        }
    }
}

/// What is displayed for a menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuLabel {
    /// Displayed as is.
    Text(String),
    /// Displayed as the rendering of the LaTeX. See [`insert_label`].
    Latex(String),
}

impl MenuLabel {
    /// The markup to display for this label.
    pub fn render(
        &self,
        macros: &MacroTable,
        renderer: &dyn MarkupRenderer,
    ) -> Result<String, ExpandError> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::Latex(latex) => insert_label(latex, None, macros, renderer),
        }
    }
}

impl From<&str> for MenuLabel {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Compute the menu of a field.
///
/// Only the entries of `existing` whose identifier appears in `keep` are kept, in their original
/// order. They are preceded by a submenu inserting each of the `quantities`, and a divider.
pub fn build_menu<S: AsRef<str>>(
    existing: &[MenuEntry],
    keep: &[S],
    quantities: &[S],
) -> Vec<MenuEntry> {
    let kept = existing.iter().filter(|entry| {
        entry
            .id()
            .is_some_and(|id| keep.iter().any(|k| k.as_ref() == id))
    });

    let submenu = MenuEntry::Submenu {
        label: INSERT_QUANTITY.into(),
        entries: quantities
            .iter()
            .map(|q| MenuEntry::insert(q.as_ref()))
            .collect(),
    };

    let mut menu = Vec::with_capacity(existing.len() + 2);
    menu.push(submenu);
    menu.push(MenuEntry::Divider);
    menu.extend(kept.cloned());

    debug!(
        "built menu with {} quantities, kept {} of {} entries",
        quantities.len(),
        menu.len() - 2,
        existing.len()
    );
    menu
}

/// Markup for the label of an entry inserting `latex`, optionally followed by a keyboard shortcut
/// `key`.
///
/// The LaTeX is expanded with `macros` before being rendered, since the renderer does not know
/// about them.
pub fn insert_label(
    latex: &str,
    key: Option<&str>,
    macros: &MacroTable,
    renderer: &dyn MarkupRenderer,
) -> Result<String, ExpandError> {
    let markup = renderer.latex_to_markup(&expand(latex, macros)?);
    let mut label = format!("<span class='ML__insert-template'> {markup}</span>");
    if let Some(key) = key {
        label.push_str(&format!("<span class=\"ML__insert-label\">{key}</span>"));
    }
    Ok(label)
}

#[cfg(test)]
mod tests {
    use super::{build_menu, insert_label, MenuEntry, MenuLabel, INSERT_QUANTITY};
    use crate::{fields::MarkupRenderer, macros::MacroTable};

    struct Brackets;

    impl MarkupRenderer for Brackets {
        fn latex_to_markup(&self, latex: &str) -> String {
            format!("[{latex}]")
        }
    }

    fn editor_menu() -> Vec<MenuEntry> {
        vec![
            MenuEntry::action("insert", "Insert"),
            MenuEntry::action("paste", "Paste"),
            MenuEntry::Divider,
            MenuEntry::action("cut", "Cut"),
            MenuEntry::action("select-all", "Select All"),
        ]
    }

    #[test]
    fn keeps_only_listed_entries() {
        let menu = build_menu(&editor_menu(), &["cut", "copy", "paste"], &[]);
        assert_eq!(
            menu,
            vec![
                MenuEntry::Submenu {
                    label: INSERT_QUANTITY.into(),
                    entries: vec![],
                },
                MenuEntry::Divider,
                MenuEntry::action("paste", "Paste"),
                MenuEntry::action("cut", "Cut"),
            ]
        );
    }

    #[test]
    fn quantities_become_insert_actions() {
        let menu = build_menu(&[], &["cut"], &[r"\prop{mass}{kg}", "x"]);
        let MenuEntry::Submenu { entries, .. } = &menu[0] else {
            panic!("expected the quantity submenu first, got {:?}", menu[0]);
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0],
            MenuEntry::Action {
                id: None,
                label: MenuLabel::Latex(r"\prop{mass}{kg}".to_string()),
                insert: Some(r"\prop{mass}{kg}".to_string()),
            }
        );
        assert_eq!(menu[1], MenuEntry::Divider);
    }

    #[test]
    fn rebuilding_drops_previous_submenu() {
        let first = build_menu(&editor_menu(), &["cut"], &["a"]);
        let second = build_menu(&first, &["cut"], &["b"]);
        assert_eq!(second.len(), 3);
        assert_eq!(second[2], MenuEntry::action("cut", "Cut"));
    }

    #[test]
    fn labels() {
        let macros = MacroTable::builtin();
        assert_eq!(
            insert_label(r"\variable{v}", None, &macros, &Brackets).unwrap(),
            r"<span class='ML__insert-template'> [\,\text{v}]</span>"
        );
        assert_eq!(
            insert_label("x", Some("ctrl-x"), &macros, &Brackets).unwrap(),
            "<span class='ML__insert-template'> [x]</span>\
             <span class=\"ML__insert-label\">ctrl-x</span>"
        );
        assert!(insert_label(r"\prop{m}", None, &macros, &Brackets).is_err());
        assert_eq!(
            MenuLabel::from("Cut").render(&macros, &Brackets).unwrap(),
            "Cut"
        );
    }
}
