// Facade for view components so the app can import `views::{CounterCard, ...}`.

pub mod counter_card;
pub use counter_card::{CardResponse, CounterCard};
