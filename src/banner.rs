//! Dismissible template banner backed by a session flag.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use crate::consts::{BANNER_ID, HIDDEN_CLASS};
use crate::dom::{Mutation, Target};
use crate::error::EnhanceError;
use crate::storage::KeyValueStore;

const CLOSED: &str = "true";

pub struct Banner {
    storage: Box<dyn KeyValueStore>,
    key: String,
}

impl Banner {
    #[must_use]
    pub fn new(storage: Box<dyn KeyValueStore>, key: &str) -> Self {
        Self { storage, key: key.to_owned() }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.storage.get(&self.key).as_deref() == Some(CLOSED)
    }

    /// Hide the banner at startup if it was closed earlier this session.
    #[must_use]
    pub fn startup(&self) -> Vec<Mutation> {
        if self.is_closed() { vec![hide()] } else { Vec::new() }
    }

    /// Hide the banner and remember it for the session.
    ///
    /// The banner hides even when the flag cannot be written.
    pub fn close(&mut self) -> (Vec<Mutation>, Result<(), EnhanceError>) {
        (vec![hide()], self.storage.set(&self.key, CLOSED))
    }
}

fn hide() -> Mutation {
    Mutation::add_class(Target::id(BANNER_ID), HIDDEN_CLASS)
}
