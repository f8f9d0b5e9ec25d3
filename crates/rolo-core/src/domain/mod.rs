pub mod birthday;
pub mod book;
pub mod name;
pub mod phone;
pub mod record;

pub use birthday::{Birthday, DATE_FORMAT};
pub use book::AddressBook;
pub use name::Name;
pub use phone::Phone;
pub use record::Record;
