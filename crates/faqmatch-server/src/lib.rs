//! Faqmatch HTTP server library (gateway layer used by the binary and tests).

pub mod gateway;
