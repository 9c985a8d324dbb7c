pub mod api;
pub mod consts;
pub mod policy;
