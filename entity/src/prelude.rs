pub use super::progress_photo::Entity as ProgressPhoto;
pub use super::user::Entity as User;
pub use super::weight_entry::Entity as WeightEntry;
