//! Storage for the expander to write its output into.

/// An arena holding the output of [`expand_in`](super::expand_in).
///
/// Serializing a list of fields expands every one of them, and the results usually live exactly
/// as long as the serialization. Allocating them in a single arena lets them be freed together.
#[derive(Default)]
pub struct Storage(pub(super) bumpalo::Bump);

impl Storage {
    /// Create a new storage for the expander.
    pub fn new() -> Self {
        Default::default()
    }

    /// Reset the storage's memory.
    ///
    /// It is recommended to call this method after each batch of expansions to free up memory.
    /// This is more efficient than dropping the storage and creating a new one.
    pub fn reset(&mut self) {
        self.0.reset();
    }

    /// Number of bytes currently allocated by the storage.
    pub fn allocated_bytes(&self) -> usize {
        self.0.allocated_bytes()
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("allocated_bytes", &self.allocated_bytes())
            .finish()
    }
}
