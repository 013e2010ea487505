pub mod composer;
pub mod list;
