//! Data model for the company directory.
//!
//! Categories hold ordered [`CompanySummary`] listings; each listed company
//! resolves to a [`CompanyDetail`] profile. Scores are decomposed into
//! [`Criterion`] points held by a [`Breakdown`].

mod badge;
mod breakdown;
mod category;
mod company;

pub use badge::*;
pub use breakdown::*;
pub use category::*;
pub use company::*;
