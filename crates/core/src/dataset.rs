use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where the browser build fetches its data from.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Month from its zero-based position in the year.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Month from the 1-based number used in the dataset.
    pub const fn from_number(number: u8) -> Option<Self> {
        if number == 0 {
            return None;
        }
        Self::from_index(number as usize - 1)
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    pub const fn short_label(self) -> &'static str {
        match self {
            Self::January => "Jan",
            Self::February => "Feb",
            Self::March => "Mar",
            Self::April => "Apr",
            Self::May => "May",
            Self::June => "Jun",
            Self::July => "Jul",
            Self::August => "Aug",
            Self::September => "Sep",
            Self::October => "Oct",
            Self::November => "Nov",
            Self::December => "Dec",
        }
    }
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset has no monthly variance entries")]
    Empty,
    #[error("entry {index} has month {month}, expected 1-12")]
    MonthOutOfRange { index: usize, month: u8 },
    #[error("entry {index} has a non-finite {field}")]
    NonFinite { index: usize, field: &'static str },
    #[error("base temperature is not finite")]
    NonFiniteBase,
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub year: i32,
    pub month: u8,
    pub variance: f64,
}

impl DataPoint {
    /// Zero-based month, as written to the `data-month` attribute.
    pub fn month_index(&self) -> usize {
        usize::from(self.month.saturating_sub(1))
    }

    pub const fn month_of_year(&self) -> Option<Month> {
        Month::from_number(self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<DataPoint>,
}

impl Dataset {
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let dataset: Self = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn validate(&self) -> Result<(), DatasetError> {
        if !self.base_temperature.is_finite() {
            return Err(DatasetError::NonFiniteBase);
        }
        if self.monthly_variance.is_empty() {
            return Err(DatasetError::Empty);
        }
        for (index, point) in self.monthly_variance.iter().enumerate() {
            if point.month_of_year().is_none() {
                return Err(DatasetError::MonthOutOfRange {
                    index,
                    month: point.month,
                });
            }
            if !point.variance.is_finite() {
                return Err(DatasetError::NonFinite {
                    index,
                    field: "variance",
                });
            }
        }
        Ok(())
    }

    pub fn absolute(&self, point: &DataPoint) -> f64 {
        self.base_temperature + point.variance
    }

    /// Years of the first and last entries. The entries are expected to be
    /// sorted by year already; this does not sort.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let first = self.monthly_variance.first()?;
        let last = self.monthly_variance.last()?;
        Some((first.year, last.year))
    }

    pub fn is_year_ordered(&self) -> bool {
        self.monthly_variance
            .windows(2)
            .all(|pair| pair[0].year <= pair[1].year)
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.monthly_variance
            .iter()
            .map(|point| point.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Lowest and highest absolute temperature.
    pub fn temperature_extent(&self) -> Option<(f64, f64)> {
        self.monthly_variance
            .iter()
            .map(|point| self.absolute(point))
            .fold(None, |extent, temp| match extent {
                None => Some((temp, temp)),
                Some((min, max)) => Some((min.min(temp), max.max(temp))),
            })
    }
}
