//! The serialization contract every document node implements.

use quire_markup::Element;

/// Settings threaded unchanged through a whole materialization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeContext {
    /// Keep runs whose text is empty instead of dropping them.
    pub emit_empty_runs: bool,
}

/// Produces the markup fragment for a node.
///
/// Implementations must be pure with respect to the node: calling
/// `materialize` twice with the same context yields equal fragments.
/// Returning `None` means the node contributes nothing and the parent
/// drops it.
pub trait Materialize {
    fn materialize(&self, ctx: &MaterializeContext) -> Option<Element>;
}

impl<T: Materialize + ?Sized> Materialize for Box<T> {
    fn materialize(&self, ctx: &MaterializeContext) -> Option<Element> {
        (**self).materialize(ctx)
    }
}

/// Materializes every item in order, dropping the ones that yield nothing.
pub fn materialize_all<'a, T>(
    items: impl IntoIterator<Item = &'a T>,
    ctx: &MaterializeContext,
) -> Vec<Element>
where
    T: Materialize + 'a,
{
    items
        .into_iter()
        .filter_map(|item| item.materialize(ctx))
        .collect()
}
