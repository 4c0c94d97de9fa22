use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match book.delete(name) {
        Some(record) => {
            result.add_message(CmdMessage::success(format!("Contact {} deleted.", name)));
            result.affected_records.push(record);
        }
        None => {
            result.add_message(CmdMessage::info(format!(
                "No contact named {}. Nothing to delete.",
                name
            )));
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::BookFixture;

    #[test]
    fn deletes_contact() {
        let mut book = BookFixture::new().with_contacts(2).book;
        let result = run(&mut book, "contact01").unwrap();
        assert_eq!(result.affected_records[0].name.value(), "contact01");
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn missing_contact_is_a_no_op() {
        let mut book = AddressBook::new();
        let result = run(&mut book, "missing_name").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert!(book.is_empty());
    }
}
