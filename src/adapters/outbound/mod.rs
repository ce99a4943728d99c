mod fixed_country_resolver;
mod maxmind_country_resolver;

pub use fixed_country_resolver::FixedCountryResolver;
pub use maxmind_country_resolver::{MaxMindCountryResolver, DB_FILENAME};
