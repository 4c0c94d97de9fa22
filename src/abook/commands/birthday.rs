use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::require_contact_mut;

pub fn run(book: &mut AddressBook, name: &str, date: &str) -> Result<CmdResult> {
    let record = require_contact_mut(book, name)?;
    record.set_birthday(date)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Birthday for {} set to {}.",
            name, date
        )))
        .with_affected_records(vec![record.clone()]))
}
