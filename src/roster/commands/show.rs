use crate::book::Book;
use crate::commands::{CmdMessage, CmdResult, Selector};
use crate::error::{Lookup, Result, RosterError};
use crate::model::Record;

/// Looks records up without changing anything. A name may list several.
pub fn run<R: Record>(book: &Book<R>, selector: &Selector) -> Result<CmdResult<R>> {
    let found: Vec<R> = match selector {
        Selector::Id(id) => book.get_by_id(*id).into_iter().cloned().collect(),
        Selector::Name(name) => book.get_by_name(name).into_iter().cloned().collect(),
    };

    if found.is_empty() {
        let lookup = match selector {
            Selector::Id(id) => Lookup::Id(*id),
            Selector::Name(name) => Lookup::Name(name.clone()),
        };
        return Err(RosterError::NotFound {
            kind: R::KIND,
            lookup,
        });
    }

    let mut result = CmdResult::default();
    if found.len() > 1 {
        result.add_message(CmdMessage::info(format!(
            "{} {} with the same {}:",
            found.len(),
            R::PLURAL,
            selector
        )));
    }
    Ok(result.with_listed(found))
}
