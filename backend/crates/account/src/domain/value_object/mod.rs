pub mod email;
pub mod person_name;

pub use email::Email;
pub use person_name::PersonName;
