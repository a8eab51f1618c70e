use crate::models::room::Room;
use crate::models::search::{SearchCriteria, SortKey};

const FEATURED_COUNT: usize = 3;

fn matches_price(room: &Room, criteria: &SearchCriteria) -> bool {
    criteria.min_price.map_or(true, |min| room.price >= min)
        && criteria.max_price.map_or(true, |max| room.price <= max)
}

fn matches_location(room: &Room, criteria: &SearchCriteria) -> bool {
    match &criteria.location {
        Some(location) => room
            .location
            .to_lowercase()
            .contains(&location.trim().to_lowercase()),
        None => true,
    }
}

fn matches_amenities(room: &Room, criteria: &SearchCriteria) -> bool {
    criteria
        .amenities
        .iter()
        .all(|amenity| room.has_amenity(*amenity))
}

pub fn matches(room: &Room, criteria: &SearchCriteria) -> bool {
    matches_price(room, criteria)
        && matches_location(room, criteria)
        && matches_amenities(room, criteria)
}

/// Keeps the rooms satisfying every active predicate, in input order.
pub fn filter_rooms(rooms: &[Room], criteria: &SearchCriteria) -> Vec<Room> {
    rooms
        .iter()
        .filter(|room| matches(room, criteria))
        .cloned()
        .collect()
}

/// Stable in-place sort by the requested key.
pub fn sort_rooms(rooms: &mut [Room], key: SortKey) {
    match key {
        SortKey::PriceAsc => rooms.sort_by_key(|room| room.price),
        SortKey::PriceDesc => rooms.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::RatingDesc => rooms.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
}

/// Filter, then sort only when the criteria ask for it.
pub fn search_rooms(rooms: &[Room], criteria: &SearchCriteria) -> Vec<Room> {
    let mut result = filter_rooms(rooms, criteria);
    if let Some(key) = criteria.sort {
        sort_rooms(&mut result, key);
    }
    result
}

/// Highest rated rooms for the home page.
pub fn featured_rooms(rooms: &[Room]) -> Vec<Room> {
    let mut featured = rooms.to_vec();
    sort_rooms(&mut featured, SortKey::RatingDesc);
    featured.truncate(FEATURED_COUNT);
    featured
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::room::Amenity;
    use crate::services::sample_data;

    fn ids(rooms: &[Room]) -> Vec<u64> {
        rooms.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let rooms = sample_data::rooms();
        let criteria = SearchCriteria {
            min_price: Some(950_000),
            max_price: Some(1_800_000),
            ..Default::default()
        };

        assert_eq!(ids(&filter_rooms(&rooms, &criteria)), vec![1, 2, 5]);
    }

    #[test]
    fn test_price_filter_matches_predicate_for_every_bound() {
        let rooms = sample_data::rooms();
        let bounds = [0, 750_000, 950_000, 1_200_000, 2_500_000, 3_200_000, 5_000_000];

        for lo in bounds {
            for hi in bounds {
                let criteria = SearchCriteria {
                    min_price: Some(lo),
                    max_price: Some(hi),
                    ..Default::default()
                };
                let expected: Vec<u64> = rooms
                    .iter()
                    .filter(|r| lo <= r.price && r.price <= hi)
                    .map(|r| r.id)
                    .collect();
                assert_eq!(ids(&filter_rooms(&rooms, &criteria)), expected);
            }
        }
    }

    #[test]
    fn test_single_bound() {
        let rooms = sample_data::rooms();
        let criteria = SearchCriteria {
            min_price: Some(2_000_000),
            ..Default::default()
        };
        assert_eq!(ids(&filter_rooms(&rooms, &criteria)), vec![3, 6]);
    }

    #[test]
    fn test_location_is_case_insensitive_substring() {
        let rooms = sample_data::rooms();
        let criteria = SearchCriteria {
            location: Some("hà nội".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_rooms(&rooms, &criteria)), vec![1, 6]);

        let criteria = SearchCriteria {
            location: Some("Nẵng".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_rooms(&rooms, &criteria)), vec![2]);
    }

    #[test]
    fn test_amenities_require_all() {
        let rooms = sample_data::rooms();
        let criteria = SearchCriteria {
            amenities: [Amenity::Bathtub, Amenity::Gym].into_iter().collect(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_rooms(&rooms, &criteria)), vec![3, 6]);

        for room in filter_rooms(&rooms, &criteria) {
            assert!(room.has_amenity(Amenity::Bathtub) && room.has_amenity(Amenity::Gym));
        }
    }

    #[test]
    fn test_empty_criteria_returns_input() {
        let rooms = sample_data::rooms();
        assert_eq!(filter_rooms(&rooms, &SearchCriteria::default()), rooms);
        assert!(filter_rooms(&[], &SearchCriteria::default()).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let rooms = sample_data::rooms();
        let criteria = SearchCriteria {
            max_price: Some(2_000_000),
            amenities: [Amenity::Wifi, Amenity::Tv].into_iter().collect(),
            ..Default::default()
        };
        let once = filter_rooms(&rooms, &criteria);
        let twice = filter_rooms(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sorting_only_when_requested() {
        let rooms = sample_data::rooms();
        assert_eq!(
            ids(&search_rooms(&rooms, &SearchCriteria::default())),
            vec![1, 2, 3, 4, 5, 6]
        );

        let criteria = SearchCriteria {
            sort: Some(SortKey::PriceAsc),
            ..Default::default()
        };
        assert_eq!(ids(&search_rooms(&rooms, &criteria)), vec![4, 2, 1, 5, 3, 6]);

        let criteria = SearchCriteria {
            sort: Some(SortKey::PriceDesc),
            ..Default::default()
        };
        assert_eq!(ids(&search_rooms(&rooms, &criteria)), vec![6, 3, 5, 1, 2, 4]);
    }

    #[test]
    fn test_rating_sort_is_stable() {
        let rooms = sample_data::rooms();
        let criteria = SearchCriteria {
            sort: Some(SortKey::RatingDesc),
            ..Default::default()
        };
        // 3 and 6 tie at 4.9 and keep their input order
        assert_eq!(ids(&search_rooms(&rooms, &criteria)), vec![3, 6, 1, 5, 2, 4]);
        assert_eq!(ids(&featured_rooms(&rooms)), vec![3, 6, 1]);
    }
}
