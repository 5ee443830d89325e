//! Data transfer objects shared by the server and the browser-side theme client.

pub mod api;
pub mod news;
pub mod theme;
pub mod user;
pub mod weight;
