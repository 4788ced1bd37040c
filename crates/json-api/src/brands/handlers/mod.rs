//! Brand Handlers

pub(crate) mod create;
