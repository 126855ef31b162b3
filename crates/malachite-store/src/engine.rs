//! The Malachite engine: genesis and the crystallization write path.
//!
//! Every write goes through [`Malachite::grow_layer`], which validates the
//! request, resolves the parent, derives coordinates and mints an id before
//! touching the store. The single insertion at the end is the only mutation,
//! so a failed write leaves the store exactly as it was.

use crate::config::StoreConfig;
use crate::entropy::{HashedIds, IdAllocator, IdRequest, JitterSource};
use crate::error::{Error, Result};
use crate::genesis;
use crate::node::SOUND_INTEGRITY;
use crate::store::NodeStore;
use crate::{Node, NodeId, NodeType};
use malachite_topology::{Growth, Spectrum, DEFAULT_JITTER_BOUND};
use std::collections::BTreeSet;

/// How a new layer's spectrum relates to its parent's.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Tint {
    /// Carry the parent's spectrum unchanged.
    #[default]
    Inherit,
    /// Replace it outright.
    Override(Spectrum),
    /// Move the parent's spectrum towards `toward`; `weight` in [0, 1].
    Blend { toward: Spectrum, weight: f64 },
}

impl Tint {
    /// Reject tones that could not be stored or restored.
    fn validate(&self) -> Result<()> {
        match self {
            Tint::Inherit => Ok(()),
            Tint::Override(spectrum) if spectrum.is_bounded() => Ok(()),
            Tint::Blend { toward, weight }
                if toward.is_bounded() && (0.0..=1.0).contains(weight) =>
            {
                Ok(())
            }
            _ => Err(Error::InvalidSpectrum),
        }
    }

    /// The spectrum a child of `parent` receives.
    fn resolve(&self, parent: Spectrum) -> Spectrum {
        match self {
            Tint::Inherit => parent,
            Tint::Override(spectrum) => *spectrum,
            Tint::Blend { toward, weight } => parent.mix(toward, *weight),
        }
    }
}

/// A request to crystallize a new layer.
///
/// `crystallize` covers the common case; this builder adds a spectrum
/// override or blend and initial tags.
#[derive(Debug, Clone, PartialEq)]
pub struct Crystallization {
    content: String,
    parent_id: NodeId,
    mutation_degree: f64,
    tint: Tint,
    tags: BTreeSet<String>,
}

impl Crystallization {
    /// An incremental (mutation 0) layer on `parent_id`.
    pub fn new(content: impl Into<String>, parent_id: impl AsRef<str>) -> Self {
        Self {
            content: content.into(),
            parent_id: NodeId::new(parent_id.as_ref()),
            mutation_degree: 0.0,
            tint: Tint::Inherit,
            tags: BTreeSet::new(),
        }
    }

    /// How radical the step is, in [0, 1].
    pub fn mutation(mut self, degree: f64) -> Self {
        self.mutation_degree = degree;
        self
    }

    /// Override the inherited spectrum.
    pub fn spectrum(mut self, spectrum: Spectrum) -> Self {
        self.tint = Tint::Override(spectrum);
        self
    }

    /// Blend the inherited spectrum towards `toward` by `weight`.
    pub fn blend(mut self, toward: Spectrum, weight: f64) -> Self {
        self.tint = Tint::Blend { toward, weight };
        self
    }

    /// Add a tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }
}

/// Everything needed to grow one layer. Crate-private so that only the
/// crystallizer and the void registrar choose node types.
pub(crate) struct Layer {
    pub content: String,
    pub parent_id: NodeId,
    pub mutation_degree: f64,
    pub node_type: NodeType,
    pub integrity: f64,
    pub tint: Tint,
    pub tags: BTreeSet<String>,
}

/// Builder for [`Malachite`].
pub struct MalachiteBuilder {
    config: StoreConfig,
    jitter: Option<Box<dyn JitterSource>>,
    ids: Option<Box<dyn IdAllocator>>,
}

impl MalachiteBuilder {
    fn new() -> Self {
        Self {
            config: StoreConfig::default(),
            jitter: None,
            ids: None,
        }
    }

    /// Use this configuration.
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Inject a jitter source, overriding `config.jitter_seed`.
    pub fn jitter(mut self, jitter: impl JitterSource + 'static) -> Self {
        self.jitter = Some(Box::new(jitter));
        self
    }

    /// Inject an id allocator. Defaults to [`HashedIds`].
    pub fn ids(mut self, ids: impl IdAllocator + 'static) -> Self {
        self.ids = Some(Box::new(ids));
        self
    }

    /// Build a store on an existing node set, without running genesis.
    pub(crate) fn with_store(mut self, store: NodeStore) -> Malachite {
        let bound = self.config.jitter_bound;
        if !bound.is_finite() || bound < 0.0 {
            tracing::warn!(bound, "invalid jitter bound, using default");
            self.config.jitter_bound = DEFAULT_JITTER_BOUND;
        }
        let jitter = self.jitter.unwrap_or_else(|| self.config.jitter_source());
        Malachite {
            store,
            config: self.config,
            jitter,
            ids: self.ids.unwrap_or_else(|| Box::new(HashedIds)),
        }
    }

    /// Build a fresh store and plant the seeds.
    pub fn build(self) -> Malachite {
        let mut engine = self.with_store(NodeStore::new());
        engine.genesis();
        engine
    }
}

/// A topological knowledge store.
///
/// Writes take `&mut self`; share across threads through
/// [`SharedMalachite`](crate::SharedMalachite).
pub struct Malachite {
    pub(crate) store: NodeStore,
    config: StoreConfig,
    jitter: Box<dyn JitterSource>,
    ids: Box<dyn IdAllocator>,
}

impl Default for Malachite {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Malachite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Malachite")
            .field("nodes", &self.store.len())
            .field("config", &self.config)
            .finish()
    }
}

impl Malachite {
    /// A seeded store with default configuration.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> MalachiteBuilder {
        MalachiteBuilder::new()
    }

    /// Plant any missing seeds. Returns how many were planted; zero once
    /// genesis has run.
    pub fn genesis(&mut self) -> usize {
        genesis::plant(&mut self.store)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Read-only view of the underlying node store.
    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    /// Get a node by id.
    pub fn get(&self, id: impl AsRef<str>) -> Option<&Node> {
        self.store.get(&NodeId::new(id.as_ref()))
    }

    /// Number of nodes, seeds included.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Always false after genesis.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Add a new layer derived from `parent_id`.
    ///
    /// - radius: `parent.radius + 1 + mutation_degree × 2`
    /// - angle: `parent.angle + jitter × jitter_bound × mutation_degree`, wrapped
    /// - type: BUD above mutation 0.5, PETAL otherwise
    /// - spectrum inherited, integrity 1.0, no tags
    pub fn crystallize(
        &mut self,
        content: impl Into<String>,
        parent_id: impl AsRef<str>,
        mutation_degree: f64,
    ) -> Result<NodeId> {
        self.crystallize_with(Crystallization::new(content, parent_id).mutation(mutation_degree))
    }

    /// Crystallize from a full request.
    pub fn crystallize_with(&mut self, request: Crystallization) -> Result<NodeId> {
        let node_type = NodeType::for_mutation(request.mutation_degree);
        self.grow_layer(Layer {
            content: request.content,
            parent_id: request.parent_id,
            mutation_degree: request.mutation_degree,
            node_type,
            integrity: SOUND_INTEGRITY,
            tint: request.tint,
            tags: request.tags,
        })
    }

    /// The single constructor path for derived layers.
    pub(crate) fn grow_layer(&mut self, layer: Layer) -> Result<NodeId> {
        if layer.content.trim().is_empty() {
            tracing::warn!(parent = %layer.parent_id, "rejected empty content");
            return Err(Error::EmptyContent);
        }
        let mutation = layer.mutation_degree;
        if !mutation.is_finite() || !(0.0..=1.0).contains(&mutation) {
            tracing::warn!(parent = %layer.parent_id, mutation, "rejected mutation degree");
            return Err(Error::InvalidMutation(mutation));
        }
        if let Err(err) = layer.tint.validate() {
            tracing::warn!(parent = %layer.parent_id, tint = ?layer.tint, "rejected spectrum");
            return Err(err);
        }

        let (parent_position, parent_spectrum) = match self.store.get(&layer.parent_id) {
            Some(parent) => (parent.position, parent.spectrum),
            None => {
                tracing::warn!(parent = %layer.parent_id, "rejected write to missing parent");
                return Err(Error::ParentNotFound(layer.parent_id));
            }
        };

        let mut jitter = self.jitter.sample();
        if !jitter.is_finite() {
            tracing::warn!(jitter, "non-finite jitter sample, using 0");
            jitter = 0.0;
        }
        let growth = Growth {
            mutation_degree: mutation,
            jitter,
            jitter_bound: self.config.jitter_bound,
        };
        let position = parent_position.grow(&growth);

        let id = self.ids.allocate(&IdRequest {
            parent: &layer.parent_id,
            content: &layer.content,
            ordinal: self.store.len() as u64,
        });

        let node = Node {
            id: id.clone(),
            content: layer.content,
            position,
            parent_id: Some(layer.parent_id),
            node_type: layer.node_type,
            spectrum: layer.tint.resolve(parent_spectrum),
            integrity: layer.integrity,
            tags: layer.tags,
        };
        self.store.insert(node)?;

        tracing::debug!(
            id = %id,
            node_type = %layer.node_type,
            radius = position.radius,
            angle = position.angle,
            "crystallized layer"
        );
        Ok(id)
    }
}
