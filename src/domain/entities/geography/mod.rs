//! 지리 참조 데이터: 국가 → 주 → 도시 → 주소(Location)

pub mod country;
pub mod state;
pub mod city;
pub mod location;

pub use country::Country;
pub use state::State;
pub use city::City;
pub use location::Location;
