//! Test support.


pub(crate) use backend::FakeBackend;
