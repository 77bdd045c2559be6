//! Data model for the grid view: record identifiers, closed enums, and the
//! record shapes the view controller operates on.

pub mod enums;
pub mod error;
pub mod ids;
pub mod record;

pub use enums::{Label, PaymentStatus, Priority, StatusValue, TaskStatus};
pub use error::{ModelError, Result};
pub use ids::RecordId;
pub use record::{Payment, Record, Task};
