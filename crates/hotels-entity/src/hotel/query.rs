//! List query for the hotel catalogue.

use std::fmt;
use std::str::FromStr;

use hotels_core::AppError;
use hotels_core::types::{PageRequest, SortDirection};

/// Columns the hotel list may be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HotelSortKey {
    /// Primary key.
    #[default]
    Id,
    /// Hotel name.
    Name,
    /// Star category.
    Category,
    /// Address city.
    City,
    /// Address country.
    Country,
}

impl HotelSortKey {
    /// The SQL column for this key. Never built from user input.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Category => "category",
            Self::City => "city",
            Self::Country => "country",
        }
    }
}

impl fmt::Display for HotelSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for HotelSortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "category" => Ok(Self::Category),
            "city" | "address.city" => Ok(Self::City),
            "country" | "address.country" => Ok(Self::Country),
            _ => Err(AppError::validation(format!(
                "Cannot sort hotels by '{s}'. Expected one of: id, name, category, city, country"
            ))),
        }
    }
}

/// Paging, ordering and filtering for a hotel listing.
#[derive(Debug, Clone, Default)]
pub struct HotelQuery {
    /// Which page to return.
    pub page: PageRequest,
    /// Ordering column.
    pub sort_by: HotelSortKey,
    /// Ordering direction.
    pub direction: SortDirection,
    /// Case-insensitive substring match on the city, when set.
    pub city: Option<String>,
}

impl HotelQuery {
    /// Returns the city filter, treating blank input as no filter.
    pub fn city_filter(&self) -> Option<&str> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }
}
