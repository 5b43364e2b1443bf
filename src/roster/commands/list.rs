use crate::book::Book;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::query::StatusFilter;

pub fn run<R: Record>(book: &Book<R>, status: StatusFilter) -> Result<CmdResult<R>> {
    let listed: Vec<R> = book.view(status).iter().cloned().collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(empty_hint::<R>(status)));
    }
    Ok(result.with_listed(listed))
}

fn empty_hint<R: Record>(status: StatusFilter) -> String {
    match status {
        StatusFilter::All => format!(
            "Your {} is empty. Add a few {} to get started!",
            R::COLLECTION,
            R::PLURAL
        ),
        StatusFilter::Completed => format!(
            "No completed {} found. Get some {} done!",
            R::PLURAL,
            R::PLURAL
        ),
        StatusFilter::Incomplete => {
            format!("No incomplete {} found. Add some new {}!", R::PLURAL, R::PLURAL)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Contact, Task, TaskDraft};

    fn tasks() -> Book<Task> {
        let mut book: Book<Task> = Book::new();
        book.add(TaskDraft::new("Write", "High")).unwrap();
        book.add(TaskDraft::new("Test", "Low")).unwrap();
        book.complete(2).unwrap();
        book
    }

    #[test]
    fn lists_in_collection_order() {
        let result = run(&tasks(), StatusFilter::All).unwrap();
        let lines: Vec<_> = result.listed.iter().map(|t| t.to_string()).collect();
        assert_eq!(lines, vec!["1. High - [ ] Write", "2. Low - [X] Test"]);
    }

    #[test]
    fn filters_by_status() {
        let done = run(&tasks(), StatusFilter::Completed).unwrap();
        assert_eq!(done.listed.len(), 1);
        assert_eq!(done.listed[0].description(), "Test");

        let open = run(&tasks(), StatusFilter::Incomplete).unwrap();
        assert_eq!(open.listed[0].description(), "Write");
    }

    #[test]
    fn empty_views_explain_themselves() {
        let result = run(&Book::<Contact>::new(), StatusFilter::All).unwrap();
        assert_eq!(
            result.messages[0].content,
            "Your contact book is empty. Add a few contacts to get started!"
        );

        let mut book: Book<Task> = Book::new();
        book.add(TaskDraft::new("Open", "Medium")).unwrap();
        let result = run(&book, StatusFilter::Completed).unwrap();
        assert_eq!(
            result.messages[0].content,
            "No completed tasks found. Get some tasks done!"
        );
    }
}
