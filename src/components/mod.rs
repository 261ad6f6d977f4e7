//! The components module contains the leaf building blocks of the dashboard. Each one is a pure
//! function of its props and keeps no state between renders.

mod stats_card;
pub use stats_card::StatsCard;

mod tasks_list;
pub use tasks_list::TasksList;
