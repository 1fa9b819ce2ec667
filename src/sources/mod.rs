//! Seed data retrieval.

mod profiles;

pub use profiles::{SeedSource, bundled_profiles, load_profiles, parse_profiles};
