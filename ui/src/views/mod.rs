mod about;
pub use about::About;

mod advanced_search;
pub use advanced_search::AdvancedSearch;

mod by_country;
pub use by_country::GenderByCountry;

mod by_dob;
pub use by_dob::GenderByDob;

mod by_language;
pub use by_language::GenderByLanguage;

mod home;
pub use home::Home;

mod labeled;
