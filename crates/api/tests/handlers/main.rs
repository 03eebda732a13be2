#[path = "../test_utils.rs"]
mod test_utils;

mod booking_test;
mod health_test;
