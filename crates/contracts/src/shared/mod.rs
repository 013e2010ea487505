pub mod list_query;
pub mod record_set;
