use crate::book::Book;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Record, SearchField};

pub fn run<R: Record>(book: &Book<R>, query: &str, field: SearchField) -> Result<CmdResult<R>> {
    let query = query.trim();
    let found: Vec<R> = book.search(query, field)?.into_iter().cloned().collect();

    let mut result = CmdResult::default();
    if found.len() > 1 {
        result.add_message(CmdMessage::info(format!(
            "Found {} {} matching {} {}",
            found.len(),
            R::PLURAL,
            field,
            query
        )));
    }
    Ok(result.with_listed(found))
}
