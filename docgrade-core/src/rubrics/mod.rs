//! Rubric tables for the five supported documentation types.

mod api;
mod architecture;
mod jsdoc;
mod openapi;
mod readme;

pub use api::API;
pub use architecture::ARCHITECTURE;
pub use jsdoc::JSDOC;
pub use openapi::OPENAPI;
pub use readme::README;

/// Every shipped rubric, in routing order.
pub fn all() -> [&'static crate::rubric::Rubric; 5] {
    [&README, &JSDOC, &API, &OPENAPI, &ARCHITECTURE]
}

#[cfg(test)]
mod tests {
    #[test]
    fn every_rubric_totals_one_hundred_points() {
        for rubric in super::all() {
            assert_eq!(rubric.max_total(), 100, "rubric {}", rubric.name);
        }
    }

    #[test]
    fn criterion_keys_are_unique_within_each_rubric() {
        for rubric in super::all() {
            let mut keys: Vec<&str> = rubric.criteria.iter().map(|c| c.key).collect();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), rubric.criteria.len(), "rubric {}", rubric.name);
        }
    }
}
