pub mod dates;
pub mod validation;

pub use dates::check_birth_date;
pub use validation::{check_email, check_name, check_phone};
