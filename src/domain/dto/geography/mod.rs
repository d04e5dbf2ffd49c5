pub mod country;
pub mod state;
pub mod city;
pub mod location;

pub use country::{CountryDto, CountryMapper};
pub use state::{StateDto, StateMapper};
pub use city::{CityDto, CityMapper};
pub use location::{LocationDto, LocationMapper};
