//! Element types and comparers shared by the integration tests.
#![allow(dead_code)]

use comparer_assertions::{ElementComparer, EqualityComparer};
use std::marker::PhantomData;

/// Element whose `PartialEq` is identity, so distinct field-equal values differ
#[derive(Debug)]
pub struct Item {
    pub int_prop: i32,
    pub string_prop: String,
}

impl Item {
    pub fn new(int_prop: i32, string_prop: &str) -> Self {
        Self {
            int_prop,
            string_prop: string_prop.to_string(),
        }
    }

    pub fn one() -> Self {
        Self::new(1, "One")
    }

    pub fn two() -> Self {
        Self::new(2, "Two")
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

/// `[ItemOne, ItemTwo]`, freshly allocated on every call
pub fn items() -> Vec<Item> {
    vec![Item::one(), Item::two()]
}

#[derive(Debug, Default)]
pub struct ByAllPropsComparer;

impl EqualityComparer<Item> for ByAllPropsComparer {
    fn equals(&self, x: &Item, y: &Item) -> bool {
        x.int_prop == y.int_prop && x.string_prop == y.string_prop
    }
}

impl ElementComparer for ByAllPropsComparer {
    type Element = Item;
}

#[derive(Debug, Default)]
pub struct AlwaysFalsyComparer;

impl EqualityComparer<Item> for AlwaysFalsyComparer {
    fn equals(&self, _x: &Item, _y: &Item) -> bool {
        false
    }
}

impl ElementComparer for AlwaysFalsyComparer {
    type Element = Item;
}

#[derive(Debug, Default)]
pub struct AlwaysTruthyComparer;

impl EqualityComparer<Item> for AlwaysTruthyComparer {
    fn equals(&self, _x: &Item, _y: &Item) -> bool {
        true
    }
}

/// Type that never gets a comparer registered
#[derive(Debug)]
pub struct Foo(pub u8);

/// Expected-sequence stand-in that fails the test if anything reads it
pub struct PanicsIfRead<T>(PhantomData<T>);

impl<T> PanicsIfRead<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for PanicsIfRead<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Iterator for PanicsIfRead<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        panic!("expected sequence was read before comparer resolution");
    }
}
