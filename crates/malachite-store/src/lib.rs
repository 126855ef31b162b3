//! Malachite Topological Storage
//!
//! A knowledge-graph store organized by evolutionary topology instead of
//! folders. Each unit of knowledge (a *layer*) sits on a polar crystal:
//! radius is how far it has evolved, angle is what it is about, and a parent
//! link records where it came from.
//!
//! # Structure
//!
//! - **Seeds**: six immutable axioms planted at r = 0 by genesis.
//! - **Crystallization**: the only way to add knowledge. Every layer must
//!   name an existing parent; "noise" with no lineage is rejected.
//! - **Voids**: records of lost knowledge, integrity 0.1.
//! - **Rays**: the lineage from a seed out to any layer.
//! - **Sectors**: EARTH, WATER and SKY, partitioning the circle.
//!
//! The parent links form a forest of six trees. Radius strictly increases
//! along every edge, so the forest cannot contain a cycle.
//!
//! # Example
//!
//! ```
//! use malachite_store::{FixedJitter, Malachite, NodeType, SequentialIds};
//!
//! let mut db = Malachite::builder()
//!     .jitter(FixedJitter(0.0))
//!     .ids(SequentialIds)
//!     .build();
//!
//! let sledge = db.crystallize("The Sledge", "SEED_LOG", 0.2)?;
//! let wheel = db.crystallize("Solid Disc Wheel + Axle", &sledge, 0.8)?;
//! assert_eq!(db.get(&wheel).unwrap().node_type, NodeType::Bud);
//!
//! let ray = db.trace_ray(&wheel);
//! assert_eq!(ray[0].id.as_str(), "SEED_LOG");
//! # Ok::<(), malachite_store::Error>(())
//! ```

mod config;
mod engine;
mod entropy;
mod error;
mod genesis;
mod navigator;
mod node;
mod shared;
mod snapshot;
mod store;
mod void;

pub use config::StoreConfig;
pub use engine::{Crystallization, Malachite, MalachiteBuilder, Tint};
pub use entropy::{
    FixedJitter, HashedIds, IdAllocator, IdRequest, JitterSource, RandomIds, RandomJitter,
    SequentialIds,
};
pub use error::{Error, Result};
pub use genesis::{Axiom, AXIOMS, AXIOM_TAG, SEED_COUNT};
pub use node::{
    Node, NodeId, NodeType, DEGRADED_THRESHOLD, LOST_KNOWLEDGE_MARKER, SOUND_INTEGRITY,
    VOID_INTEGRITY,
};
pub use shared::SharedMalachite;
pub use snapshot::{Snapshot, SNAPSHOT_VERSION};
pub use store::NodeStore;
pub use void::void_content;

pub use malachite_topology::{PolarCoord, Sector, Spectrum};
