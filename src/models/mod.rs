pub mod ids;
pub mod local_date;
pub mod lookup;
pub mod minutes;
pub mod time_entry;

pub use ids::{ProjectId, ServiceId, TimeEntryId};
pub use local_date::LocalDate;
pub use lookup::{LookupTable, Lookups};
pub use minutes::Minutes;
pub use time_entry::TimeEntry;
