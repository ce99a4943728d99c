mod country_validator;

pub use country_validator::CountryValidator;
