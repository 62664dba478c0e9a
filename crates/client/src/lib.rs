//! Seatsurfing client
//!
//! REST access to a Seatsurfing instance for one account, with proactive token refresh and a
//! best-effort local cache of the location/space layout.

pub mod cache;
pub mod client;
pub mod config;
pub mod datetime;
pub mod error;
pub mod models;
pub mod session;

pub use cache::{render_spaces_list, CachedLocation, Snapshot, SpaceCache, SpaceDirectory};
pub use client::SeatsurfingClient;
pub use config::{Credentials, DataDir};
pub use datetime::{format_datetime, parse_datetime};
pub use error::{Result, SeatsurfingError};
pub use models::{Booking, BookingSpace, Location, Space, SpaceAvailability, User};
pub use session::{Session, SessionState};
