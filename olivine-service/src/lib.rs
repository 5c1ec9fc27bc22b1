//! Federated service-dispatch boundary.
//!
//! A remote-service sub-query ([`op::ServiceOp`]) is routed through a
//! registry-based chain of responsibility: each registered link either
//! handles the request or forwards it to the remainder of the chain. Two
//! call shapes exist, a bulk one operating on a whole stream of input
//! bindings and a single one operating per individual binding; which shape
//! is used is decided by the execution context.
//!
//! This crate contains no execution logic of its own beyond delegation.
//! Actual remote executors are plug-ins registered on a
//! [`registry::ServiceExecutorRegistry`]. The BGP reorder optimizer in the
//! `olivine` crate neither calls nor is called by this chain; both are
//! independent stages invoked by a surrounding query engine.

#[macro_use]
extern crate lazy_static;

pub mod binding;
pub mod context;
pub mod exec;
pub mod op;
pub mod registry;
