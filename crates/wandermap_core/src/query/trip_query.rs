//! Trip list search and sort.
//!
//! # Invariants
//! - Filtering matches `name` or `destination`, case-insensitively.
//! - Newest/oldest read the record id as a date (see [`date_value`]); ids
//!   that are not dates compare equal and keep their incoming order.
//!
//! [`date_value`]: crate::query::date_value::date_value

use crate::model::trip::Trip;
use crate::query::collation::locale_compare;
use crate::query::date_value::compare_date_values;
use crate::query::text_match::TextMatcher;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Selectable trip list ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripSort {
    #[default]
    Newest,
    Oldest,
    Name,
    Destination,
    /// Ascending travel start date.
    Date,
}

impl TripSort {
    /// Every key, in the order the sort picker lists them.
    pub const ALL: [TripSort; 5] = [
        TripSort::Newest,
        TripSort::Oldest,
        TripSort::Name,
        TripSort::Destination,
        TripSort::Date,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Name => "name",
            Self::Destination => "destination",
            Self::Date => "date",
        }
    }

    /// Picker label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::Oldest => "Oldest First",
            Self::Name => "Name A-Z",
            Self::Destination => "Destination A-Z",
            Self::Date => "Travel Date",
        }
    }

    fn compare(self, left: &Trip, right: &Trip) -> Ordering {
        match self {
            Self::Newest => compare_date_values(&right.id, &left.id),
            Self::Oldest => compare_date_values(&left.id, &right.id),
            Self::Name => locale_compare(&left.name, &right.name),
            Self::Destination => locale_compare(&left.destination, &right.destination),
            Self::Date => compare_date_values(&left.start_date, &right.start_date),
        }
    }
}

impl Display for TripSort {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortKey(pub String);

impl Display for UnknownSortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown trip sort key `{}`; expected newest|oldest|name|destination|date",
            self.0
        )
    }
}

impl Error for UnknownSortKey {}

impl FromStr for TripSort {
    type Err = UnknownSortKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sort| sort.as_str() == value)
            .ok_or_else(|| UnknownSortKey(value.to_string()))
    }
}

/// Search term plus sort key, as held by the trip list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripQuery {
    pub search: String,
    pub sort: TripSort,
}

impl TripQuery {
    pub fn new(search: impl Into<String>, sort: TripSort) -> Self {
        Self {
            search: search.into(),
            sort,
        }
    }

    /// Filter, then sort. `trips` is left untouched.
    pub fn apply(&self, trips: &[Trip]) -> Vec<Trip> {
        sort_trips(filter_trips(trips, &self.search), self.sort)
    }
}

/// Trips whose name or destination contains `term`, in incoming order.
pub fn filter_trips(trips: &[Trip], term: &str) -> Vec<Trip> {
    let matcher = TextMatcher::new(term);
    trips
        .iter()
        .filter(|trip| matcher.matches_any(&[trip.name.as_str(), trip.destination.as_str()]))
        .cloned()
        .collect()
}

/// Stable sort of `trips` by `sort`.
pub fn sort_trips(mut trips: Vec<Trip>, sort: TripSort) -> Vec<Trip> {
    stable_insertion_sort(&mut trips, |left, right| sort.compare(left, right));
    trips
}

// Date comparators treat invalid values as equal to everything, which is
// not a total order and can make `slice::sort_by` panic. Insertion sort
// only moves an element past strictly greater neighbours, so it stays
// stable and terminates for any comparator. Trip lists are small.
fn stable_insertion_sort<T>(items: &mut [T], mut compare: impl FnMut(&T, &T) -> Ordering) {
    for index in 1..items.len() {
        let mut cursor = index;
        while cursor > 0 && compare(&items[cursor - 1], &items[cursor]) == Ordering::Greater {
            items.swap(cursor - 1, cursor);
            cursor -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(id: &str, name: &str, destination: &str, start_date: &str) -> Trip {
        Trip {
            id: id.to_string(),
            name: name.to_string(),
            destination: destination.to_string(),
            start_date: start_date.to_string(),
            ..Trip::default()
        }
    }

    fn ids(trips: &[Trip]) -> Vec<&str> {
        trips.iter().map(|trip| trip.id.as_str()).collect()
    }

    #[test]
    fn sort_keys_round_trip_through_strings() {
        for sort in TripSort::ALL {
            assert_eq!(sort.as_str().parse::<TripSort>(), Ok(sort));
        }
        assert_eq!(
            "popular".parse::<TripSort>(),
            Err(UnknownSortKey("popular".to_string()))
        );
        assert_eq!(TripSort::default(), TripSort::Newest);
        assert_eq!(TripSort::Destination.label(), "Destination A-Z");
    }

    #[test]
    fn filter_matches_destination_as_well_as_name() {
        let trips = vec![
            trip("1", "Honeymoon", "Bali", ""),
            trip("2", "Work offsite", "Lisbon", ""),
        ];
        assert_eq!(ids(&filter_trips(&trips, "BALI")), ["1"]);
        assert_eq!(ids(&filter_trips(&trips, "o")), ["1", "2"]);
        assert!(filter_trips(&trips, "tokyo").is_empty());
    }

    #[test]
    fn date_sort_orders_by_start_and_keeps_ties_stable() {
        let trips = vec![
            trip("a", "A", "", "2024-09-01"),
            trip("b", "B", "", "2024-03-15"),
            trip("c", "C", "", "2024-09-01"),
            trip("d", "D", "", ""),
        ];
        let sorted = sort_trips(trips, TripSort::Date);
        assert_eq!(ids(&sorted), ["d", "b", "a", "c"]);
    }

    #[test]
    fn destination_sort_is_case_insensitive() {
        let trips = vec![
            trip("1", "", "tokyo", ""),
            trip("2", "", "Amsterdam", ""),
            trip("3", "", "berlin", ""),
        ];
        let sorted = sort_trips(trips, TripSort::Destination);
        assert_eq!(ids(&sorted), ["2", "3", "1"]);
    }

    #[test]
    fn insertion_sort_tolerates_inconsistent_comparators() {
        let mut values = vec![3, 1, 2, 5, 4];
        stable_insertion_sort(&mut values, |_, _| Ordering::Greater);
        assert_eq!(values.len(), 5);

        let mut values = vec![3, 1, 2];
        stable_insertion_sort(&mut values, |left, right| left.cmp(right));
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn apply_filters_before_sorting() {
        let trips = vec![
            trip("1", "Tokyo Trip", "Tokyo", ""),
            trip("2", "Paris Trip", "Paris", ""),
            trip("3", "Kyoto Trip", "Kyoto", ""),
        ];
        let query = TripQuery::new("to", TripSort::Name);
        assert_eq!(ids(&query.apply(&trips)), ["3", "1"]);
        assert_eq!(trips.len(), 3);
    }
}
