use super::error::QueryError;
use crate::domain::common::ListRecord;

/// Where list pages get their records from.
///
/// The engine only needs a pre-resolved collection at query time, so a static
/// array and a remote service look the same from here.
pub trait RecordSource<R: ListRecord> {
    fn list(&self) -> Vec<R>;

    fn get(&self, id: &str) -> Result<R, QueryError> {
        self.list()
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| QueryError::not_found(R::KIND, id))
    }
}

impl<R: ListRecord> RecordSource<R> for Vec<R> {
    fn list(&self) -> Vec<R> {
        self.clone()
    }

    fn get(&self, id: &str) -> Result<R, QueryError> {
        self.iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| QueryError::not_found(R::KIND, id))
    }
}
