//! In-memory hotel catalogue.

use std::cmp::Ordering as CmpOrdering;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use hotels_core::error::AppError;
use hotels_core::result::AppResult;
use hotels_core::types::{PageResponse, SortDirection};
use hotels_entity::hotel::{Address, CreateHotel, Hotel, HotelQuery, HotelSortKey};

use crate::store::HotelStore;

/// Hotels keyed by id.
#[derive(Debug, Clone, Default)]
pub struct MemoryHotelStore {
    hotels: Arc<RwLock<BTreeMap<i64, Hotel>>>,
    next_id: Arc<AtomicI64>,
}

impl MemoryHotelStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HotelStore for MemoryHotelStore {
    async fn find_page(&self, query: &HotelQuery) -> AppResult<PageResponse<Hotel>> {
        let hotels = self.hotels.read().await;
        let needle = query.city_filter().map(str::to_lowercase);

        let mut matching: Vec<&Hotel> = hotels
            .values()
            .filter(|hotel| match &needle {
                Some(city) => hotel.address.city.to_lowercase().contains(city.as_str()),
                None => true,
            })
            .collect();

        matching.sort_by(|a, b| {
            let ordered = compare(a, b, query.sort_by);
            let ordered = match query.direction {
                SortDirection::Asc => ordered,
                SortDirection::Desc => ordered.reverse(),
            };
            ordered.then(a.id.cmp(&b.id))
        });

        let total = matching.len() as u64;
        let content = matching
            .into_iter()
            .skip(query.page.offset() as usize)
            .take(query.page.limit() as usize)
            .cloned()
            .collect();

        Ok(PageResponse::new(content, &query.page, total))
    }

    async fn insert(&self, data: CreateHotel) -> AppResult<Hotel> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let hotel = data.into_hotel(id);
        self.hotels.write().await.insert(id, hotel.clone());
        Ok(hotel)
    }

    async fn update_address(&self, id: i64, address: Address) -> AppResult<Hotel> {
        let mut hotels = self.hotels.write().await;
        let hotel = hotels
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Hotel {id} not found")))?;
        hotel.address = address;
        Ok(hotel.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.hotels
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Hotel {id} not found")))
    }
}

fn compare(a: &Hotel, b: &Hotel, key: HotelSortKey) -> CmpOrdering {
    match key {
        HotelSortKey::Id => a.id.cmp(&b.id),
        HotelSortKey::Name => a.name.cmp(&b.name),
        HotelSortKey::Category => a.category.cmp(&b.category),
        HotelSortKey::City => a.address.city.cmp(&b.address.city),
        HotelSortKey::Country => a.address.country.cmp(&b.address.country),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotels_core::error::ErrorKind;
    use hotels_core::types::PageRequest;

    fn hotel(name: &str, category: i32, city: &str) -> CreateHotel {
        CreateHotel {
            name: name.to_string(),
            category,
            address: Address {
                street: "Main St 1".to_string(),
                city: city.to_string(),
                country: "Spain".to_string(),
                zip_code: "28001".to_string(),
            },
        }
    }

    async fn seeded() -> MemoryHotelStore {
        let store = MemoryHotelStore::new();
        store.insert(hotel("Paradise", 3, "Madrid")).await.unwrap();
        store.insert(hotel("Mars", 5, "Barcelona")).await.unwrap();
        store.insert(hotel("Aurora", 4, "madrid norte")).await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_city_filter_is_case_insensitive_substring() {
        let store = seeded().await;
        let query = HotelQuery {
            city: Some("MADRID".to_string()),
            ..HotelQuery::default()
        };
        let page = store.find_page(&query).await.unwrap();
        assert_eq!(page.total_elements, 2);
        assert!(page.content.iter().all(|h| h.name != "Mars"));
    }

    #[tokio::test]
    async fn test_sorting_and_paging() {
        let store = seeded().await;
        let query = HotelQuery {
            page: PageRequest::new(0, 2),
            sort_by: HotelSortKey::Category,
            direction: SortDirection::Desc,
            city: None,
        };
        let page = store.find_page(&query).await.unwrap();
        let names: Vec<_> = page.content.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Mars", "Aurora"]);
        assert_eq!(page.total_pages, 2);

        let second = HotelQuery {
            page: PageRequest::new(1, 2),
            ..query
        };
        let page = store.find_page(&second).await.unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].name, "Paradise");
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_hotel() {
        let store = seeded().await;
        let moved = Address {
            street: "Gran Via 2".to_string(),
            city: "Valencia".to_string(),
            country: "Spain".to_string(),
            zip_code: "46001".to_string(),
        };
        let updated = store.update_address(1, moved.clone()).await.unwrap();
        assert_eq!(updated.address, moved);

        let err = store.update_address(99, moved).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        store.delete(2).await.unwrap();
        assert_eq!(store.delete(2).await.unwrap_err().kind, ErrorKind::NotFound);
    }
}
