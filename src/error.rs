use thiserror::Error;

/// An error returned by a fallible tree, view or cursor operation.
///
/// A failed operation never mutates the tree.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The container has no items to return.
    #[error("container is empty")]
    EmptyContainer,
    /// A key lies outside the bounds of a view.
    #[error("key is out of the view's range")]
    OutOfRange,
    /// The operation is not supported by this container.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
    /// A cursor was requested at a key that is not present.
    #[error("cannot position a cursor at an absent key")]
    Unpositioned,
}
