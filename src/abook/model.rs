//! Core contact types.
//!
//! Every field type is constructed through a validator (`validate_name`,
//! `validate_phone`, `validate_birthday`), so a value that exists is a value
//! that passed its format check. Deserialization goes through the same
//! validators, which means a hand-edited book file cannot smuggle in a
//! malformed phone.

use crate::error::{AbookError, Result};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";
pub const PHONE_DIGITS: usize = 10;

/// A contact name. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Name {
    type Error = AbookError;

    fn try_from(value: String) -> Result<Self> {
        if value.is_empty() {
            return Err(AbookError::EmptyName);
        }
        Ok(Self(value))
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number: exactly ten ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn value(&self) -> &str {
        &self.0
    }

    fn is_valid(value: &str) -> bool {
        value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
    }
}

impl TryFrom<String> for Phone {
    type Error = AbookError;

    fn try_from(value: String) -> Result<Self> {
        if !Self::is_valid(&value) {
            return Err(AbookError::InvalidPhone(value));
        }
        Ok(Self(value))
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birthday, stored as a date and written as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The date this birthday falls on in `year`. A 29 February birthday
    /// falls on 28 February in non-leap years.
    fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }
}

impl TryFrom<String> for Birthday {
    type Error = AbookError;

    fn try_from(value: String) -> Result<Self> {
        // `%Y` alone takes any number of digits and a sign.
        if !has_birthday_shape(&value) {
            return Err(AbookError::InvalidBirthday(value));
        }
        NaiveDate::parse_from_str(&value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| AbookError::InvalidBirthday(value))
    }
}

/// Digits and dots only, with a four digit year.
fn has_birthday_shape(value: &str) -> bool {
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    match value.rsplit_once('.') {
        Some((day_month, year)) => {
            year.len() == 4
                && all_digits(year)
                && day_month.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        }
        None => false,
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

pub fn validate_name(value: &str) -> Result<Name> {
    Name::try_from(value.to_string())
}

pub fn validate_phone(value: &str) -> Result<Phone> {
    Phone::try_from(value.to_string())
}

pub fn validate_birthday(value: &str) -> Result<Birthday> {
    Birthday::try_from(value.to_string())
}

/// One contact: a name, an ordered list of phones and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: Name,
    #[serde(default)]
    pub phones: Vec<Phone>,
    #[serde(default)]
    pub birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: validate_name(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn with_birthday(name: &str, birthday: &str) -> Result<Self> {
        let mut record = Self::new(name)?;
        record.birthday = Some(validate_birthday(birthday)?);
        Ok(record)
    }

    /// Appends a phone. Duplicates are kept.
    pub fn add_phone(&mut self, value: &str) -> Result<()> {
        let phone = validate_phone(value)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Removes the first phone equal to `value`; does nothing when absent.
    pub fn remove_phone(&mut self, value: &str) {
        if let Some(pos) = self.position_of(value) {
            self.phones.remove(pos);
        }
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.value() == value)
    }

    /// Replaces `old` with `new`, keeping its position in the list.
    ///
    /// `new` is validated before anything changes, so a failed edit leaves
    /// the phones untouched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let pos = self
            .position_of(old)
            .ok_or_else(|| AbookError::PhoneNotFound {
                name: self.name.to_string(),
                phone: old.to_string(),
            })?;
        let phone = validate_phone(new)?;
        self.phones[pos] = phone;
        Ok(())
    }

    pub fn set_birthday(&mut self, value: &str) -> Result<()> {
        self.birthday = Some(validate_birthday(value)?);
        Ok(())
    }

    pub fn days_to_next_birthday(&self) -> Option<i64> {
        self.days_to_next_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` to the next occurrence of the birthday, 0 when
    /// `today` is the birthday. `None` if no birthday is recorded.
    pub fn days_to_next_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday?;
        let mut next = birthday.occurrence_in(today.year())?;
        if next < today {
            next = birthday.occurrence_in(today.year() + 1)?;
        }
        Some((next - today).num_days())
    }

    fn position_of(&self, value: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.value() == value)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::value).collect();
        write!(
            f,
            "Contact name: {}, phones: [{}]",
            self.name,
            phones.join(", ")
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
