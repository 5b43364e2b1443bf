use crate::book::{Book, Completion};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Record, RecordId, Task};

pub fn run(book: &mut Book<Task>, id: RecordId) -> Result<CmdResult<Task>> {
    match book.complete(id)? {
        Completion::Marked(task) => {
            let message = CmdMessage::success(format!(
                "Task {} has been marked as complete.",
                task.summary()
            ));
            Ok(CmdResult::default()
                .with_affected(vec![task])
                .with_message(message))
        }
        Completion::AlreadyCompleted(task) => Ok(CmdResult::default().with_message(
            CmdMessage::info(format!("Task {} was already completed.", task.summary())),
        )),
    }
}
