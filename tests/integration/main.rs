//! Integration test suite — drives the full router in process.

mod helpers;

mod conversation_test;
mod lifecycle_test;
mod message_test;
mod notification_test;
