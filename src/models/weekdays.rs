//! Set of working weekdays, stored as a 7-bit mask (bit 0 = Monday).

use crate::errors::{AppError, AppResult};
use chrono::Weekday;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkingWeekdays(u8);

impl WorkingWeekdays {
    pub const MONDAY_TO_FRIDAY: WorkingWeekdays = WorkingWeekdays(0b0001_1111);

    pub const fn empty() -> Self {
        WorkingWeekdays(0)
    }

    /// Build from weekday indices, 0 = Monday .. 6 = Sunday.
    pub fn from_indices(indices: &[u8]) -> AppResult<Self> {
        let mut set = Self::empty();
        for &idx in indices {
            let day = Weekday::try_from(idx)
                .map_err(|_| AppError::InvalidWeekday(format!("{idx} (expected 0..=6)")))?;
            set.insert(day);
        }
        Ok(set)
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= 1 << day.num_days_from_monday();
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & (1 << day.num_days_from_monday()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        (0u8..7)
            .filter_map(|i| Weekday::try_from(i).ok())
            .filter(|d| self.contains(*d))
    }

    pub fn indices(&self) -> Vec<u8> {
        self.iter().map(|d| d.num_days_from_monday() as u8).collect()
    }
}

impl Default for WorkingWeekdays {
    fn default() -> Self {
        Self::MONDAY_TO_FRIDAY
    }
}

impl FromIterator<Weekday> for WorkingWeekdays {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = Self::empty();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

fn parse_one(token: &str) -> AppResult<Weekday> {
    let token = token.trim();
    if let Ok(idx) = token.parse::<u8>() {
        return Weekday::try_from(idx)
            .map_err(|_| AppError::InvalidWeekday(format!("{idx} (expected 0..=6)")));
    }
    token
        .parse::<Weekday>()
        .map_err(|_| AppError::InvalidWeekday(token.to_string()))
}

/// Accepts comma separated items, each an index (`0`), a name (`mon`,
/// `Monday`) or an inclusive range of either (`mon-fri`, `0-4`).
impl FromStr for WorkingWeekdays {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut set = Self::empty();

        for item in s.split(',').map(str::trim).filter(|i| !i.is_empty()) {
            match item.split_once('-') {
                Some((from, to)) => {
                    let from = parse_one(from)?.num_days_from_monday();
                    let to = parse_one(to)?.num_days_from_monday();
                    if from > to {
                        return Err(AppError::InvalidWeekday(format!(
                            "range '{item}' runs backwards"
                        )));
                    }
                    for idx in from..=to {
                        set.0 |= 1 << idx;
                    }
                }
                None => set.insert(parse_one(item)?),
            }
        }

        Ok(set)
    }
}

impl fmt::Display for WorkingWeekdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(|d| d.to_string()).collect();
        write!(f, "{}", names.join(","))
    }
}
