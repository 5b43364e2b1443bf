//! Read-only views over a book's records.
//!
//! A [`View`] borrows the collection and an optional predicate. Nothing is
//! collected up front: every call to [`View::iter`] walks the records again,
//! so a view always reflects the state it borrows.

use crate::model::Record;

/// Completion filter for list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl StatusFilter {
    /// The completion value a record must have, or `None` for no constraint.
    pub fn wanted(self) -> Option<bool> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Completed => Some(true),
            StatusFilter::Incomplete => Some(false),
        }
    }
}

pub struct View<'a, R> {
    records: &'a [R],
    predicate: Option<Box<dyn Fn(&R) -> bool + 'a>>,
}

impl<'a, R> View<'a, R> {
    pub fn all(records: &'a [R]) -> Self {
        Self {
            records,
            predicate: None,
        }
    }

    pub fn filtered(records: &'a [R], predicate: impl Fn(&R) -> bool + 'a) -> Self {
        Self {
            records,
            predicate: Some(Box::new(predicate)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a R> + '_ {
        let predicate = self.predicate.as_deref();
        self.records
            .iter()
            .filter(move |record| predicate.map_or(true, |p| p(*record)))
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl<'a, R: Record> View<'a, R> {
    /// Filters by completion status. Records without a status only pass
    /// [`StatusFilter::All`].
    pub fn by_status(records: &'a [R], status: StatusFilter) -> Self {
        match status.wanted() {
            None => Self::all(records),
            Some(wanted) => Self::filtered(records, move |r: &R| r.is_completed() == Some(wanted)),
        }
    }
}
