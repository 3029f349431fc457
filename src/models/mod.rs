// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    DwellingType, ExpresswayProximity, FilterCriteria, ImageRef, ImageVariant, Property,
    WaterReliability, NAIROBI_NEIGHBORHOODS,
};
pub use requests::{CompareQuery, ListingsQuery, LoginRequest, SignupRequest};
pub use responses::{
    AuthResponse, CompareResponse, ErrorResponse, HealthResponse, ListingsResponse,
    NeighborhoodsResponse, PropertyView, UserView, WaterBadge,
};
