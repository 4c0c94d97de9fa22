use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AbookError, Result};
use crate::model::Record;

/// Creates a new, phone-less contact. Unlike `add`, an existing name is an
/// error rather than an overwrite.
pub fn run(book: &mut AddressBook, name: &str, birthday: Option<&str>) -> Result<CmdResult> {
    let record = match birthday {
        Some(date) => Record::with_birthday(name, date)?,
        None => Record::new(name)?,
    };
    if book.contains(name) {
        return Err(AbookError::DuplicateContact(name.to_string()));
    }

    book.add_record(record.clone());
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Contact {} created.", name)))
        .with_affected_records(vec![record]))
}
