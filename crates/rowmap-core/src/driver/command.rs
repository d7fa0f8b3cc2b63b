use crate::stmt::Params;

use std::time::Duration;

/// A rendered statement ready for the execution engine.
///
/// Everything except `sql` is supplied by the caller and forwarded
/// untouched.
#[derive(Debug)]
pub struct Command<'a, Tx: ?Sized> {
    pub sql: &'a str,
    pub params: &'a Params,
    pub transaction: Option<&'a Tx>,
    pub timeout: Option<Duration>,
}

impl<'a, Tx: ?Sized> Command<'a, Tx> {
    pub fn new(sql: &'a str, params: &'a Params) -> Command<'a, Tx> {
        Command {
            sql,
            params,
            transaction: None,
            timeout: None,
        }
    }

    pub fn transaction(mut self, transaction: Option<&'a Tx>) -> Command<'a, Tx> {
        self.transaction = transaction;
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Command<'a, Tx> {
        self.timeout = timeout;
        self
    }
}

impl<Tx: ?Sized> Clone for Command<'_, Tx> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Tx: ?Sized> Copy for Command<'_, Tx> {}
