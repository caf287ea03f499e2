//! Shared wire types between the order details frontend and the API.

pub mod domain;
