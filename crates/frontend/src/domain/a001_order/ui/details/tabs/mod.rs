//! Tab components for Order details

mod reviews;
mod submissions;

pub use reviews::ReviewsTab;
pub use submissions::SubmissionsTab;
