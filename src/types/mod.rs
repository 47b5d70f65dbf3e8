//! Type definitions for the fraud prediction form

pub mod request;
pub mod verdict;

pub use request::{
    CardCategory, CardType, DeviceType, EmailDomain, PredictionRequest, ProductCode,
};
pub use verdict::{Verdict, VerdictReport};
