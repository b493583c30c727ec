//! Country → state → city lookup tables backing the cascading selectors.
//!
//! The tables are static and immutable for the lifetime of the process. A
//! lookup that finds nothing yields an empty list, which the form session
//! treats as "selector disabled".

use serde::Serialize;

/// A selectable country and its states, in display order.
#[derive(Debug, Clone, Serialize)]
pub struct Country {
    /// Lowercase selector value, e.g. `"us"`.
    pub code: &'static str,
    pub name: &'static str,
    pub states: &'static [&'static str],
}

const COUNTRIES: &[Country] = &[
    Country {
        code: "us",
        name: "United States",
        states: &["California", "New York", "Texas", "Florida", "Illinois"],
    },
    Country {
        code: "uk",
        name: "United Kingdom",
        states: &["England", "Scotland", "Wales", "Northern Ireland"],
    },
    Country {
        code: "ca",
        name: "Canada",
        states: &["Ontario", "Quebec", "British Columbia", "Alberta"],
    },
    Country {
        code: "au",
        name: "Australia",
        states: &["New South Wales", "Victoria", "Queensland", "Western Australia"],
    },
    Country {
        code: "in",
        name: "India",
        states: &["Maharashtra", "Karnataka", "Delhi", "Tamil Nadu", "Uttar Pradesh"],
    },
];

const CITIES: &[(&str, &[&str])] = &[
    ("California", &["Los Angeles", "San Francisco", "San Diego", "Sacramento"]),
    ("New York", &["New York City", "Buffalo", "Rochester", "Albany"]),
    ("Texas", &["Houston", "Dallas", "Austin", "San Antonio"]),
    ("Florida", &["Miami", "Orlando", "Tampa", "Jacksonville"]),
    ("England", &["London", "Manchester", "Birmingham", "Liverpool"]),
    ("Scotland", &["Edinburgh", "Glasgow", "Aberdeen", "Dundee"]),
    ("Ontario", &["Toronto", "Ottawa", "Mississauga", "Hamilton"]),
    ("Quebec", &["Montreal", "Quebec City", "Laval", "Gatineau"]),
    ("New South Wales", &["Sydney", "Newcastle", "Wollongong", "Central Coast"]),
    ("Victoria", &["Melbourne", "Geelong", "Ballarat", "Bendigo"]),
    ("Maharashtra", &["Mumbai", "Pune", "Nagpur", "Nashik"]),
    ("Karnataka", &["Bangalore", "Mysore", "Hubli", "Mangalore"]),
];

/// Two-level lookup: country → states, state → cities.
#[derive(Debug, Clone)]
pub struct LocationTable {
    countries: &'static [Country],
    cities: &'static [(&'static str, &'static [&'static str])],
}

impl Default for LocationTable {
    fn default() -> Self {
        Self {
            countries: COUNTRIES,
            cities: CITIES,
        }
    }
}

impl LocationTable {
    pub fn countries(&self) -> &'static [Country] {
        self.countries
    }

    /// Find a country by selector code or display name, ignoring case.
    pub fn country(&self, code_or_name: &str) -> Option<&'static Country> {
        let key = code_or_name.trim();
        if key.is_empty() {
            return None;
        }
        self.countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(key) || c.name.eq_ignore_ascii_case(key))
    }

    /// States of a country in display order; empty when the country is
    /// unknown or unselected.
    pub fn states_for(&self, country: &str) -> &'static [&'static str] {
        self.country(country).map(|c| c.states).unwrap_or(&[])
    }

    /// Cities of a state in display order; empty when the state is unknown,
    /// unselected, or has no city list.
    pub fn cities_for(&self, state: &str) -> &'static [&'static str] {
        let key = state.trim();
        self.cities
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, cities)| *cities)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_for_known_country_is_ordered() {
        let table = LocationTable::default();
        let states = table.states_for("us");
        assert_eq!(states.first(), Some(&"California"));
        assert_eq!(states.len(), 5);
    }

    #[test]
    fn states_for_accepts_name_and_any_case() {
        let table = LocationTable::default();
        assert_eq!(table.states_for("US"), table.states_for("United States"));
        assert_eq!(table.states_for("canada")[0], "Ontario");
    }

    #[test]
    fn states_for_empty_or_unknown_is_empty() {
        let table = LocationTable::default();
        assert!(table.states_for("").is_empty());
        assert!(table.states_for("   ").is_empty());
        assert!(table.states_for("fr").is_empty());
    }

    #[test]
    fn cities_for_known_state() {
        let table = LocationTable::default();
        assert_eq!(
            table.cities_for("Ontario"),
            &["Toronto", "Ottawa", "Mississauga", "Hamilton"]
        );
    }

    #[test]
    fn state_without_city_list_has_no_cities() {
        let table = LocationTable::default();
        assert!(table.states_for("us").contains(&"Illinois"));
        assert!(table.cities_for("Illinois").is_empty());
        assert!(table.cities_for("").is_empty());
    }
}
