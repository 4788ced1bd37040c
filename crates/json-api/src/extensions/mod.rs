//! Extension traits

mod depot;
mod id_query;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use id_query::IdQueryExt as _;
pub(crate) use result::ResultExt as _;
