use contracts::domain::common::ListRecord;

/// Detail dialog of a list page.
///
/// `Closed -> Open(r)` on select, `Open(_) -> Closed` on dismiss,
/// `Open(a) -> Open(b)` when another record is selected while open.
/// Selecting an unknown id lands in `NotFound` instead of an empty dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState<R> {
    Closed,
    Open(R),
    NotFound(String),
}

impl<R: ListRecord> DetailState<R> {
    pub fn is_open(&self) -> bool {
        !matches!(self, DetailState::Closed)
    }

    pub fn record(&self) -> Option<&R> {
        match self {
            DetailState::Open(record) => Some(record),
            DetailState::Closed | DetailState::NotFound(_) => None,
        }
    }

    /// Id of the record shown (or looked for)
    pub fn selected_id(&self) -> Option<&str> {
        match self {
            DetailState::Closed => None,
            DetailState::Open(record) => Some(record.id()),
            DetailState::NotFound(id) => Some(id),
        }
    }
}
