//! Core library of the "My Good Addresses" app: address and comment models,
//! CRUD services over an abstract document store, the live merged address
//! feed, and the image compression pipeline. The mobile shell plugs in the
//! real backend adapter, platform image codec, and device capability
//! providers; everything here runs against the ports in `infrastructure`.

pub mod application;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
