//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let photo = factory::progress_photo::create_photo(&db, user.id).await?;
//!
//! let (user, entry, photo) = factory::helpers::create_photo_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("dana@example.com")
//!     .theme("dark")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod progress_photo;
pub mod user;
pub mod weight_entry;

pub use progress_photo::create_photo;
pub use user::create_user;
pub use weight_entry::create_weight_entry;
