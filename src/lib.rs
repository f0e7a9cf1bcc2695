//! # RandNet - Random-topology network graphs for simulation experiments
//!
//! This library provides a small undirected graph of value-carrying nodes
//! together with a random topology generator, intended as the network
//! substrate of larger simulation programs.
//!
//! ## Overview
//!
//! A network holds a fixed set of nodes, each identified by its index and
//! carrying a scalar value, plus a symmetric link relation between node
//! indices. Topology generation draws a Poisson-distributed target degree
//! for every node and attempts random links until each target is met or the
//! node is saturated, with duplicate and self-loop attempts rejected and
//! redrawn.
//!
//! ## Key Features
//!
//! - **Random topologies**: Poisson-distributed degrees over uniform link
//!   candidates, with guaranteed termination at node saturation
//! - **Gaussian node values**: standard-normal initialization on resize
//! - **Injected sampling**: all randomness flows through the `Sampler` trait
//! - **Reproducible**: seedable ChaCha20-backed sampler for deterministic
//!   experiments
//! - **Degree analysis**: histogram and summary statistics over a built
//!   topology
//!
//! ## Architecture
//!
//! The library is organized into three modules:
//!
//! - `network`: the graph structure, link insertion, and topology generation
//! - `rng`: the `Sampler` capability and its ChaCha20-backed implementation
//! - `stats`: degree-distribution reports over a built network
//!
//! ## Example Usage
//!
//! ```rust
//! use randnet::network::Network;
//! use randnet::rng::SimRng;
//!
//! let mut rng = SimRng::from_seed(42);
//! let mut network = Network::new();
//!
//! // 25 nodes with standard-normal values, then a random topology with an
//! // average of 4 links per node.
//! network.resize(25, &mut rng);
//! let created = network.random_connect(4.0, &mut rng);
//!
//! assert_eq!(created, network.link_count());
//! assert!(network.neighbors(0).len() <= 24);
//! ```
//!
//! ## Error Handling
//!
//! Expected per-attempt failures during generation are signaled by boolean
//! returns and retried internally; contract violations on the accessor
//! surface return typed `NetworkError` values.

pub mod network;
pub mod rng;
pub mod stats;
