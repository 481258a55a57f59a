//! Integration tests for albumkit-validator, exercised through the public API.

mod guid;
mod ipv6;
mod record;
