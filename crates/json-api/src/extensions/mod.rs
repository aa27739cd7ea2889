//! Extension traits

mod count_param;
mod depot;
mod result;

pub(crate) use count_param::CountParamExt as _;
pub(crate) use depot::DepotExt as _;
pub(crate) use result::ResultExt as _;
