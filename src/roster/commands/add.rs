use crate::book::Book;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;

pub fn run<R: Record>(book: &mut Book<R>, draft: R::Draft) -> Result<CmdResult<R>> {
    let record = book.add(draft)?.clone();
    let message = CmdMessage::success(format!(
        "{} {} added successfully.",
        R::KIND,
        record.summary()
    ));
    Ok(CmdResult::default()
        .with_affected(vec![record])
        .with_message(message))
}
