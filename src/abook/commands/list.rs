use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Every contact, split into pages of at most `page_size` records.
pub fn run(book: &AddressBook, page_size: usize) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No contacts found.")));
    }
    let pages = book
        .iterate(page_size)
        .map(|page| page.into_iter().cloned().collect())
        .collect();
    Ok(CmdResult::default().with_pages(pages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::BookFixture;

    #[test]
    fn pages_by_size() {
        let book = BookFixture::new().with_contacts(12).book;
        let result = run(&book, 5).unwrap();
        let sizes: Vec<_> = result.pages.iter().map(Vec::len).collect();
        assert_eq!(sizes, [5, 5, 2]);
        assert_eq!(result.pages[0][0].name.value(), "contact01");
        assert_eq!(result.pages[2][1].name.value(), "contact12");
    }

    #[test]
    fn empty_book_has_no_pages() {
        let book = AddressBook::new();
        let result = run(&book, 5).unwrap();
        assert!(result.pages.is_empty());
        assert_eq!(result.messages[0].content, "No contacts found.");
    }
}
