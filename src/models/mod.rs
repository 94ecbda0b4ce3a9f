mod comment;
mod day;
mod day_key;
mod diaper;
mod feeding;
mod log_entry;
mod side;
mod tracking;
mod weight;

pub use comment::Comment;
pub use day::DayData;
pub use day_key::DayKey;
pub use diaper::{DiaperEvent, DiaperKind, DiaperTag, DIAPER_TAG_FIELD};
pub use feeding::FeedingSession;
pub use log_entry::LogEntry;
pub use side::Side;
pub use tracking::TrackingData;
pub use weight::WeightMeasurement;
