#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![doc = include_str!("../README.md")]

extern crate alloc;
// Tests use std even when the library is built without it.
#[cfg(test)]
extern crate std;

mod calendar;
mod check;
mod consts;
mod convert;
mod date;
mod error;
mod ext;
mod format;

pub use crate::calendar::{CivilDateTime, StandardDateTime};
pub use crate::check::{Check, Provenance};
pub use crate::date::ImperialDate;
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::format::{Format, Formatted};

#[cfg(feature = "serde")]
mod serde;


#[cfg(test)]
fn random_data<T>(n: usize) -> alloc::vec::Vec<T>
where
    rand::distributions::Standard: rand::distributions::Distribution<T>,
{
    use rand::prelude::*;
    let mut rng = rand_chacha::ChaCha20Rng::from_seed(Default::default());
    (0..n).map(|_| rng.gen()).collect()
}

#[cfg(test)]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
