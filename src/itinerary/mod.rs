mod planner;
mod prompt;
mod response;
mod types;

pub use planner::ItineraryPlanner;
pub use response::{parse_itinerary_response, ResponseFailure};
pub use types::*;

#[cfg(test)]
pub(crate) use planner::testing;
