use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::require_contact_mut;

/// Removes one phone from a contact. The contact has to exist; a phone it
/// does not have is reported but is not an error.
pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = require_contact_mut(book, name)?;

    if record.find_phone(phone).is_none() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Phone {} not found for {}. No changes made.",
            phone, name
        ))));
    }

    record.remove_phone(phone);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Phone {} removed from {}'s contact.",
            phone, name
        )))
        .with_affected_records(vec![record.clone()]))
}
