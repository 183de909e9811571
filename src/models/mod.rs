// Review record types - storage rows, API views and request payloads

pub mod review;

pub use review::{MessageResponse, Review, ReviewFields, ReviewRequest, ReviewRow, DATE_FORMAT};
