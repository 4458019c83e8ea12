use super::handle::Handle;

/// A single key-value pair in the table, threaded into its bucket's chain via
/// `next`. The map owns every entry through the arena; handles never escape
/// the crate.
#[derive(Clone)]
pub(crate) struct Entry<V> {
    pub(crate) key: i64,
    pub(crate) value: V,
    pub(crate) next: Option<Handle>,
}
