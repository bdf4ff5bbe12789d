use crate::domain::ports::DirectMessenger;
use std::ops::Deref;

/// Owns an open session and closes it when dropped, on success and on every
/// early return alike.
pub struct SessionGuard<S: DirectMessenger> {
    session: S,
}

impl<S: DirectMessenger> SessionGuard<S> {
    pub fn new(session: S) -> Self {
        Self { session }
    }
}

impl<S: DirectMessenger> Deref for SessionGuard<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.session
    }
}

impl<S: DirectMessenger> Drop for SessionGuard<S> {
    fn drop(&mut self) {
        self.session.close();
    }
}
