//! Hotel repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use hotels_core::error::{AppError, ErrorKind};
use hotels_core::result::AppResult;
use hotels_core::types::{PageRequest, PageResponse};
use hotels_entity::hotel::{Address, CreateHotel, Hotel, HotelQuery};

use crate::store::HotelStore;

/// PostgreSQL-backed hotel catalogue.
#[derive(Debug, Clone)]
pub struct HotelRepository {
    pool: PgPool,
}

impl HotelRepository {
    /// Create a new hotel repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HotelStore for HotelRepository {
    async fn find_page(&self, query: &HotelQuery) -> AppResult<PageResponse<Hotel>> {
        let (limit, offset) = page_bounds(&query.page)?;
        let pattern = query
            .city_filter()
            .map(|city| format!("%{}%", escape_like(city)));

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM hotels WHERE ($1::TEXT IS NULL OR city ILIKE $1)",
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count hotels", e))?;

        // Column and direction come from closed enums, so formatting them in is safe.
        let sql = format!(
            "SELECT * FROM hotels WHERE ($1::TEXT IS NULL OR city ILIKE $1) \
             ORDER BY {} {}, id ASC LIMIT $2 OFFSET $3",
            query.sort_by.column(),
            query.direction.as_sql(),
        );

        let hotels = sqlx::query_as::<_, Hotel>(&sql)
            .bind(&pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list hotels", e))?;

        Ok(PageResponse::new(hotels, &query.page, total as u64))
    }

    async fn insert(&self, data: CreateHotel) -> AppResult<Hotel> {
        sqlx::query_as::<_, Hotel>(
            "INSERT INTO hotels (name, category, street, city, country, zip_code) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(data.category)
        .bind(&data.address.street)
        .bind(&data.address.city)
        .bind(&data.address.country)
        .bind(&data.address.zip_code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create hotel", e))
    }

    async fn update_address(&self, id: i64, address: Address) -> AppResult<Hotel> {
        sqlx::query_as::<_, Hotel>(
            "UPDATE hotels SET street = $2, city = $3, country = $4, zip_code = $5 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.country)
        .bind(&address.zip_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update address", e))?
        .ok_or_else(|| AppError::not_found(format!("Hotel {id} not found")))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM hotels WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete hotel", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Hotel {id} not found")));
        }
        Ok(())
    }
}

/// Convert a page request into `LIMIT`/`OFFSET` values Postgres accepts.
fn page_bounds(page: &PageRequest) -> AppResult<(i64, i64)> {
    let out_of_range = |_| AppError::validation("Page is out of range");
    let limit = i64::try_from(page.limit()).map_err(out_of_range)?;
    let offset = i64::try_from(page.offset()).map_err(out_of_range)?;
    Ok((limit, offset))
}

/// Escape `LIKE` metacharacters so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
