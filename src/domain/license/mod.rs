//! Licence 'A' domain: the field dictionary, derived values and the fixed
//! legal wording.

mod document_type;
mod fields;
pub mod prose;
mod year_words;

pub use document_type::{DocumentType, UnknownDocumentType};
pub use fields::LicenseFields;
pub use prose::{Clause, LicenseProse};
pub use year_words::{year_in_words, FIRST_TABLED_YEAR, LAST_TABLED_YEAR};
