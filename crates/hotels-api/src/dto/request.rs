//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use hotels_core::error::AppError;
use hotels_core::types::{PageRequest, SortDirection};
use hotels_core::types::pagination::DEFAULT_PAGE_SIZE;
use hotels_entity::hotel::{Address, CreateHotel, HotelQuery, HotelSortKey};

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Username.
    #[validate(length(min = 3, max = 20, message = "Username must be between 3 and 20 characters"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 6, max = 100, message = "Password must be between 6 and 100 characters"))]
    pub password: String,
    /// Exactly `ADMIN` or `USER`.
    pub role: String,
}

/// Login request body.
///
/// Only presence is checked here. Length rules belong to registration, so a
/// too-short password is an ordinary failed login rather than a 400.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(custom(function = "not_blank", message = "Username cannot be empty"))]
    pub username: String,
    /// Password.
    #[validate(custom(function = "not_blank", message = "Password cannot be empty"))]
    pub password: String,
}

/// Hotel creation body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HotelRequest {
    #[validate(
        custom(function = "not_blank", message = "Name is required"),
        length(max = 50, message = "Name must be at most 50 characters")
    )]
    pub name: String,
    #[validate(range(min = 1, max = 5, message = "Category must be between 1 and 5"))]
    pub category: i32,
    #[validate(nested)]
    pub address: AddressRequest,
}

impl HotelRequest {
    pub fn into_create(self) -> CreateHotel {
        CreateHotel {
            name: self.name,
            category: self.category,
            address: self.address.into(),
        }
    }
}

/// Address body, used on create and on address replacement.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequest {
    #[validate(custom(function = "not_blank", message = "Street is required"))]
    pub street: String,
    #[validate(custom(function = "not_blank", message = "City is required"))]
    pub city: String,
    #[validate(custom(function = "not_blank", message = "Country is required"))]
    pub country: String,
    #[validate(custom(function = "not_blank", message = "Zip code is required"))]
    pub zip_code: String,
}

impl From<AddressRequest> for Address {
    fn from(req: AddressRequest) -> Self {
        Self {
            street: req.street,
            city: req.city,
            country: req.country,
            zip_code: req.zip_code,
        }
    }
}

/// Query string of `GET /api/hotels`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ListHotelsParams {
    /// Page number (0-based, default: 0).
    pub page: Option<u64>,
    /// Items per page (default: 5, clamped to 1..=100).
    pub size: Option<u64>,
    /// `id`, `name`, `category`, `city` or `country`.
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    pub sort_dir: Option<String>,
    /// Case-insensitive substring of the city.
    pub city: Option<String>,
}

impl ListHotelsParams {
    /// Converts to a store query; an unknown sort key is a validation error.
    pub fn into_query(self) -> Result<HotelQuery, AppError> {
        let sort_by = match self.sort_by.as_deref() {
            Some(key) => key.parse::<HotelSortKey>()?,
            None => HotelSortKey::default(),
        };

        Ok(HotelQuery {
            page: PageRequest::new(
                self.page.unwrap_or(0),
                self.size.unwrap_or(DEFAULT_PAGE_SIZE),
            ),
            sort_by,
            direction: self
                .sort_dir
                .as_deref()
                .map(SortDirection::parse_lenient)
                .unwrap_or_default(),
            city: self.city,
        })
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
