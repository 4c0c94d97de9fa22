use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &AddressBook, query: &str) -> Result<CmdResult> {
    let found: Vec<_> = book.search(query).into_iter().cloned().collect();
    if found.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No contacts found.")));
    }
    Ok(CmdResult::default().with_listed_records(found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::BookFixture;

    #[test]
    fn finds_by_partial_name_and_phone() {
        let book = BookFixture::new()
            .with_contact("john", &["1234567890"])
            .with_contact("anna", &["5551234000"])
            .with_contact("bob", &["9999999999"])
            .book;

        let by_name = run(&book, "oh").unwrap();
        assert_eq!(by_name.listed_records.len(), 1);
        assert_eq!(by_name.listed_records[0].name.value(), "john");

        let by_phone = run(&book, "1234").unwrap();
        let names: Vec<_> = by_phone
            .listed_records
            .iter()
            .map(|r| r.name.value())
            .collect();
        assert_eq!(names, ["anna", "john"]);
    }

    #[test]
    fn empty_query_lists_everything() {
        let book = BookFixture::new().with_contacts(4).book;
        assert_eq!(run(&book, "").unwrap().listed_records.len(), 4);
    }

    #[test]
    fn no_match_is_empty() {
        let book = BookFixture::new().with_contacts(4).book;
        let result = run(&book, "nobody").unwrap();
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
