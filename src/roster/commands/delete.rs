use crate::book::{Book, NameMatch};
use crate::commands::update::ambiguous;
use crate::commands::{CmdMessage, CmdResult, Selector};
use crate::error::Result;
use crate::model::Record;

pub fn run<R: Record>(book: &mut Book<R>, selector: &Selector) -> Result<CmdResult<R>> {
    let removed = match selector {
        Selector::Id(id) => book.delete_by_id(*id)?,
        Selector::Name(name) => match book.delete_by_name(name)? {
            NameMatch::Unique(record) => record,
            NameMatch::Ambiguous(candidates) => return Ok(ambiguous(name, candidates)),
        },
    };

    let message = CmdMessage::success(format!(
        "{} {} has been removed.",
        R::KIND,
        removed.summary()
    ));
    Ok(CmdResult::default()
        .with_affected(vec![removed])
        .with_message(message))
}
