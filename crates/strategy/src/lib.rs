pub mod brute_force;
pub mod finder;
pub mod kadane;
pub mod single_pass;

pub use brute_force::brute_force;
pub use finder::{check_agreement, check_outcomes, find_max_profit, solve_file, Disagreement};
pub use kadane::{kadane, max_subarray, price_differences};
pub use single_pass::{single_pass, try_single_pass, SinglePassTracker};
