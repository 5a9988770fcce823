//! End-to-end scenario tests

pub mod complete_user_journey_test;
