use crate::book::{Book, NameMatch};
use crate::commands::{CmdMessage, CmdResult, Selector};
use crate::error::Result;
use crate::model::{Contact, ContactPatch, Record};

pub fn run(
    book: &mut Book<Contact>,
    selector: &Selector,
    patch: ContactPatch,
) -> Result<CmdResult<Contact>> {
    if patch.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(
            "Nothing to update. Pass --name, --phone or --email.",
        )));
    }
    let changed = patch.fields().join(", ");

    match selector {
        Selector::Id(id) => {
            let contact = book.update_by_id(*id, &patch)?.clone();
            let message = CmdMessage::success(format!(
                "Contact with ID {} has updated {}.",
                id, changed
            ));
            Ok(updated(contact, message))
        }
        Selector::Name(name) => match book.update_by_name(name, &patch)? {
            NameMatch::Unique(contact) => {
                let message =
                    CmdMessage::success(format!("{} has updated {}.", contact.name(), changed));
                Ok(updated(contact, message))
            }
            NameMatch::Ambiguous(candidates) => Ok(ambiguous(name, candidates)),
        },
    }
}

fn updated(contact: Contact, message: CmdMessage) -> CmdResult<Contact> {
    CmdResult::default()
        .with_affected(vec![contact.clone()])
        .with_listed(vec![contact])
        .with_message(message)
}

/// Result for a name that matched several records: nothing changed, the
/// candidates are listed so the user can retry by id.
pub(crate) fn ambiguous<R: Record>(name: &str, candidates: Vec<R>) -> CmdResult<R> {
    CmdResult::default()
        .with_message(CmdMessage::warning(
            "Please check the information again and select by ID",
        ))
        .with_message(CmdMessage::info(format!(
            "{} {} with the same Name {}:",
            candidates.len(),
            R::PLURAL,
            name
        )))
        .with_listed(candidates)
}
