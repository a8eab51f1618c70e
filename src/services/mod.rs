pub mod booking_service;
pub mod catalog_service;
pub mod pricing_service;
pub mod review_service;
pub mod sample_data;
pub mod search_service;
pub mod upstream;
