use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use chrono::NaiveDate;

use super::helpers::require_contact;

/// Days from `today` to the contact's next birthday. A contact without a
/// birthday gets an informational message and no day count.
pub fn run(book: &AddressBook, name: &str, today: NaiveDate) -> Result<CmdResult> {
    let record = require_contact(book, name)?;

    let Some(days) = record.days_to_next_birthday_from(today) else {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "No birthday recorded for {}.",
            name
        ))));
    };

    let text = match days {
        0 => format!("Today is {}'s birthday!", name),
        1 => format!("1 day until {}'s birthday.", name),
        n => format!("{} days until {}'s birthday.", n, name),
    };
    Ok(CmdResult::default()
        .with_days_to_birthday(days)
        .with_message(CmdMessage::info(text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::BookFixture;

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn counts_days() {
        let book = BookFixture::new()
            .with_birthday("anna", "15.03.1990")
            .book;
        let result = run(&book, "anna", date(20, 3, 2024)).unwrap();
        assert_eq!(result.days_to_birthday, Some(360));
        assert!(result.messages[0].content.contains("360 days"));
    }

    #[test]
    fn birthday_today() {
        let book = BookFixture::new()
            .with_birthday("anna", "15.03.1990")
            .book;
        let result = run(&book, "anna", date(15, 3, 2024)).unwrap();
        assert_eq!(result.days_to_birthday, Some(0));
        assert!(result.messages[0].content.starts_with("Today"));
    }

    #[test]
    fn no_birthday_recorded() {
        let book = BookFixture::new().with_contact("john", &[]).book;
        let result = run(&book, "john", date(1, 1, 2024)).unwrap();
        assert_eq!(result.days_to_birthday, None);
        assert!(result.messages[0].content.contains("No birthday"));
    }
}
