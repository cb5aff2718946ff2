//! Word of the day - a deterministic daily pick from the local dictionary.

use chrono::{Datelike, NaiveDate};
use teenspeak_common::SlangEntry;

use crate::dictionary::LocalDictionary;

/// Entry featured on `date`. Same date, same entry.
pub fn pick(dictionary: &LocalDictionary, date: NaiveDate) -> Option<SlangEntry> {
    let day = date.num_days_from_ce().rem_euclid(i32::MAX) as usize;
    dictionary.entry_at(day).cloned()
}
