use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use tracing::debug;

/// Adds `phone` to `name`, creating the contact if it does not exist yet.
pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        debug!(name, "appended phone");
        let record = record.clone();
        return Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!(
                "Phone {} added to {}'s contact.",
                phone, name
            )))
            .with_affected_records(vec![record]));
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record.clone());
    debug!(name, "created contact");
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Contact {} added.", name)))
        .with_affected_records(vec![record]))
}
