mod progress_photo;
mod user;
mod weight_entry;
