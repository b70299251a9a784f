//! The list of equation fields of a page.
//!
//! The editor widget hosting each field is not implemented here. It is reached through the
//! [`MathField`] and [`MarkupRenderer`] traits, and the [`EquationList`] only keeps track of which
//! fields exist, prepares them, and serializes their content.
use log::debug;

use crate::{
    config::EditorConfig,
    expander::{expand, expand_in, ExpandError, Storage},
    macros::MacroTable,
    menu::{build_menu, MenuEntry},
};

/// Converts LaTeX into markup that can be displayed, e.g. in a menu label.
pub trait MarkupRenderer {
    fn latex_to_markup(&self, latex: &str) -> String;
}

/// A single math editing field, as provided by the editor widget.
pub trait MathField {
    /// Macros currently known to the field.
    fn macros(&self) -> &MacroTable;

    fn set_macros(&mut self, macros: MacroTable);

    /// Entries of the field's context menu.
    fn menu_items(&self) -> &[MenuEntry];

    fn set_menu_items(&mut self, items: Vec<MenuEntry>);

    /// Insert LaTeX at the caret.
    fn insert(&mut self, latex: &str);

    /// The raw content of the field, with macros left as they are.
    fn latex(&self) -> &str;

    /// The content of the field with its macros expanded by the widget.
    fn value(&self) -> String;
}

/// Identifies a callback registered with [`EquationList::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Callback = Box<dyn FnMut(usize)>;

/// The ordered list of equation fields of a page.
pub struct EquationList<F> {
    config: EditorConfig,
    fields: Vec<F>,
    subscribers: Vec<(SubscriptionId, Callback)>,
    next_subscription: usize,
}

impl<F: MathField> EquationList<F> {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            fields: Vec::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Create a list from the fields already present on the page, preparing each of them.
    pub fn init(config: EditorConfig, fields: impl IntoIterator<Item = F>) -> Self {
        let mut list = Self::new(config);
        for field in fields {
            list.add_field(field);
        }
        debug!("initialized equation list with {} fields", list.len());
        list
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Prepare `field` and append it to the list, returning its index.
    pub fn add_field(&mut self, mut field: F) -> usize {
        self.prepare(&mut field);
        self.fields.push(field);
        debug!("added equation field #{}", self.fields.len() - 1);
        self.fields.len() - 1
    }

    /// Remove the field at `index`, if there is one.
    pub fn remove_field(&mut self, index: usize) -> Option<F> {
        if index >= self.fields.len() {
            return None;
        }
        debug!("removed equation field #{index}");
        Some(self.fields.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&F> {
        self.fields.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut F> {
        self.fields.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &F> {
        self.fields.iter()
    }

    /// Rebuild the context menu of the field at `index`.
    ///
    /// When `quantities` is `None`, the quantities of the configuration are used. Returns `false`
    /// if there is no such field.
    pub fn update_menu(&mut self, index: usize, quantities: Option<&[String]>) -> bool {
        let Some(field) = self.fields.get_mut(index) else {
            return false;
        };
        let quantities = quantities.unwrap_or(self.config.quantities.as_slice());
        let menu = build_menu(field.menu_items(), self.config.keep_items.as_slice(), quantities);
        field.set_menu_items(menu);
        true
    }

    /// Run the menu entry of the field at `index` identified by `entry`, looking through
    /// submenus. Entries without an identifier are matched by the LaTeX they insert.
    ///
    /// Returns whether something was inserted. The insertion notifies subscribers like any other
    /// edit.
    pub fn select(&mut self, index: usize, entry: &str) -> bool {
        let Some(field) = self.fields.get_mut(index) else {
            return false;
        };
        let Some(latex) = find_insert(field.menu_items(), entry).map(str::to_string) else {
            return false;
        };
        field.insert(&latex);
        self.notify_input(index);
        true
    }

    /// Register a callback called with the index of a field every time its content changes.
    pub fn subscribe(&mut self, callback: impl FnMut(usize) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns whether the callback was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        before != self.subscribers.len()
    }

    /// Signal that the content of the field at `index` changed.
    pub fn notify_input(&mut self, index: usize) {
        for (_, callback) in &mut self.subscribers {
            callback(index);
        }
    }

    /// The content of every field, with macros expanded by the widget.
    pub fn value(&self) -> Vec<String> {
        self.fields.iter().map(F::value).collect()
    }

    /// The content of every field, joined by the configured separator.
    pub fn value_string(&self) -> String {
        let separator = self.config.separator.to_string();
        self.value().join(separator.as_str())
    }

    /// The raw content of every field, expanded with the configured macros.
    pub fn expanded_values(&self) -> Result<Vec<String>, ExpandError> {
        self.fields
            .iter()
            .map(|field| expand(field.latex(), &self.config.macros))
            .collect()
    }

    /// Same as [`EquationList::expanded_values`], allocating the results in `storage`.
    pub fn expanded_values_in<'store>(
        &self,
        storage: &'store Storage,
    ) -> Result<Vec<&'store str>, ExpandError> {
        self.fields
            .iter()
            .map(|field| expand_in(field.latex(), &self.config.macros, storage))
            .collect()
    }

    fn prepare(&self, field: &mut F) {
        let mut macros = field.macros().clone();
        macros.extend_from(&self.config.macros);
        field.set_macros(macros);

        let menu = build_menu(
            field.menu_items(),
            self.config.keep_items.as_slice(),
            self.config.quantities.as_slice(),
        );
        field.set_menu_items(menu);
    }
}

impl<F> std::fmt::Debug for EquationList<F>
where
    F: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EquationList")
            .field("config", &self.config)
            .field("fields", &self.fields)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

fn find_insert<'a>(entries: &'a [MenuEntry], target: &str) -> Option<&'a str> {
    entries.iter().find_map(|entry| match entry {
        MenuEntry::Submenu { entries, .. } => find_insert(entries, target),
        MenuEntry::Action {
            id,
            insert: Some(latex),
            ..
        } if id.as_deref() == Some(target) || (id.is_none() && latex == target) => {
            Some(latex.as_str())
        }
        _ => None,
    })
}
