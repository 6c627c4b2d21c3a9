//! Key components: categories and dimension tuples.
//!
//! A table key is a tuple of one [`Category`] per header row (the
//! [`Dimensions`]) plus a row identifier, itself a [`Category`] decoded from
//! column 0 of each data row.
//!
//! Components are numbered in header order: `0..D::COUNT` are the dimensions
//! and `D::COUNT` is the row identifier.

use std::fmt;
use std::hash::Hash;

/// A closed set of values for one key component.
///
/// `decode` is the string converter for header cells and row labels. It must
/// accept every spelling used in the bundled data and reject anything else;
/// a rejection aborts table construction.
pub trait Category: Copy + Eq + Hash + fmt::Debug + fmt::Display {
    /// Component name used in diagnostics (e.g. "Province").
    const DIMENSION: &'static str;

    /// Converts a trimmed header cell or row label.
    fn decode(raw: &str) -> Result<Self, String>;
}

/// A header value that failed to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeFailure {
    /// Index of the component within the key.
    pub component: usize,
    /// The offending raw value.
    pub value: String,
    /// Message returned by the converter.
    pub reason: String,
}

/// The header-row part of a key: one category per header row.
///
/// Implemented for tuples of one to six [`Category`] types.
pub trait Dimensions: Copy + Eq + Hash + fmt::Debug {
    /// Number of header rows.
    const COUNT: usize;

    /// Component names in header order.
    fn names() -> Vec<&'static str>;

    /// Decodes one column's raw header values, one per header row.
    fn decode(raw: &[&str]) -> Result<Self, DecodeFailure>;

    /// Compares a single component; out-of-range indices compare equal.
    fn component_eq(&self, other: &Self, component: usize) -> bool;

    /// Display value of a single component.
    fn component_value(&self, component: usize) -> Option<String>;
}

fn decode_component<C: Category>(raw: &[&str], component: usize) -> Result<C, DecodeFailure> {
    let value = raw.get(component).copied().unwrap_or_default().trim();
    C::decode(value).map_err(|reason| DecodeFailure {
        component,
        value: value.to_string(),
        reason,
    })
}

macro_rules! impl_dimensions {
    ($count:expr; $($name:ident: $idx:tt),+) => {
        impl<$($name: Category),+> Dimensions for ($($name,)+) {
            const COUNT: usize = $count;

            fn names() -> Vec<&'static str> {
                vec![$($name::DIMENSION),+]
            }

            fn decode(raw: &[&str]) -> Result<Self, DecodeFailure> {
                Ok(($(decode_component::<$name>(raw, $idx)?,)+))
            }

            fn component_eq(&self, other: &Self, component: usize) -> bool {
                match component {
                    $($idx => self.$idx == other.$idx,)+
                    _ => true,
                }
            }

            fn component_value(&self, component: usize) -> Option<String> {
                match component {
                    $($idx => Some(self.$idx.to_string()),)+
                    _ => None,
                }
            }
        }
    };
}

impl_dimensions!(1; A: 0);
impl_dimensions!(2; A: 0, B: 1);
impl_dimensions!(3; A: 0, B: 1, C: 2);
impl_dimensions!(4; A: 0, B: 1, C: 2, D: 3);
impl_dimensions!(5; A: 0, B: 1, C: 2, D: 3, E: 4);
impl_dimensions!(6; A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);

/// Names of every key component: dimensions in header order, then the row
/// identifier.
pub fn component_names<D: Dimensions, R: Category>() -> Vec<&'static str> {
    let mut names = D::names();
    names.push(R::DIMENSION);
    names
}
