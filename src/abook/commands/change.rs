use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::require_contact_mut;

pub fn run(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let record = require_contact_mut(book, name)?;
    record.edit_phone(old, new)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Phone number for {} changed.",
            name
        )))
        .with_affected_records(vec![record.clone()]))
}
