use crate::book::Book;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Task;

/// Deletes every completed task.
pub fn run(book: &mut Book<Task>) -> Result<CmdResult<Task>> {
    let removed = book.purge_completed();
    let message = if removed.is_empty() {
        CmdMessage::info("No completed tasks to delete. Get some tasks done!")
    } else {
        CmdMessage::success(format!(
            "All completed tasks deleted ({}).",
            removed.len()
        ))
    };
    Ok(CmdResult::default()
        .with_affected(removed)
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Record, TaskDraft};

    #[test]
    fn purges_and_renumbers() {
        let mut book: Book<Task> = Book::new();
        for d in ["A", "B", "C", "D"] {
            book.add(TaskDraft::new(d, "Low")).unwrap();
        }
        book.complete(2).unwrap();
        book.complete(3).unwrap();

        let result = run(&mut book).unwrap();
        assert_eq!(result.affected.len(), 2);
        assert_eq!(result.messages[0].content, "All completed tasks deleted (2).");

        let remaining: Vec<_> = book
            .records()
            .iter()
            .map(|t| (t.id(), t.description().to_string()))
            .collect();
        assert_eq!(remaining, vec![(1, "A".to_string()), (2, "D".to_string())]);
    }

    #[test]
    fn nothing_to_purge() {
        let mut book: Book<Task> = Book::new();
        let result = run(&mut book).unwrap();
        assert!(!result.is_mutation());
        assert_eq!(
            result.messages[0].content,
            "No completed tasks to delete. Get some tasks done!"
        );
    }
}
