//! Move-list input, event output, and the compiler between them.

pub(crate) mod compiler;
pub(crate) mod document;
pub(crate) mod event;
