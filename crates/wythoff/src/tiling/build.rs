//! Breadth-first reflection generator.
//!
//! Starting from the fundamental chamber, every facet without a neighbour is
//! mirrored. The reflected vertex is merged with an existing vertex of the same
//! type when one lies within the merge tolerance; otherwise a new vertex is made.
//! Generation stops once every vertex that has any chamber has all of them
//! (`open == 0`), or fails with `DoesNotTile` when a ceiling is crossed or the
//! queue runs dry first.

use std::collections::HashMap;

use super::types::{Chamber, ChamberId, TilingCfg, Vertex, VertexId};
use crate::chamber::ChamberSymbol;
use crate::error::WythoffError;
use crate::sphere::{mirror_normal, Point, SpatialIndex, SphereCoord};

pub(crate) struct Generated<const N: usize> {
    pub vertices: Vec<Vertex<N>>,
    pub chambers: Vec<Chamber<N>>,
}

pub(crate) struct Builder<'a, S, const N: usize> {
    symbol: &'a S,
    valences: [usize; N],
    max_chambers: usize,
    max_vertices: usize,
    vertices: Vec<Vertex<N>>,
    chambers: Vec<Chamber<N>>,
    /// One index per vertex type; vertices of different types never merge.
    index: [SpatialIndex<N>; N],
    by_vertices: HashMap<[VertexId; N], ChamberId>,
    /// Vertices with at least one but fewer than `valence` chambers.
    open: usize,
}

impl<'a, S: ChamberSymbol<N>, const N: usize> Builder<'a, S, N> {
    pub fn new(symbol: &'a S, cfg: &TilingCfg) -> Result<Self, WythoffError> {
        let points = symbol.fundamental_chamber()?;
        let eps = cfg.merge_eps.unwrap_or_else(|| symbol.default_merge_eps());
        if !(eps.is_finite() && eps > 0.0) {
            return Err(WythoffError::invalid(format!(
                "merge_eps must be positive, got {eps}"
            )));
        }
        let max_chambers = cfg.max_chambers.unwrap_or_else(|| symbol.max_chambers());
        let valences = symbol.valences();
        let mut this = Self {
            symbol,
            valences,
            max_chambers,
            max_vertices: valences
                .iter()
                .map(|v| max_chambers / (*v).max(1))
                .sum::<usize>()
                .max(N),
            vertices: Vec::new(),
            chambers: Vec::new(),
            index: std::array::from_fn(|_| SpatialIndex::new(eps)),
            by_vertices: HashMap::new(),
            open: 0,
        };
        let ids: [VertexId; N] = std::array::from_fn(|k| this.push_vertex(points[k], k));
        let first = ChamberId(0);
        this.chambers.push(Chamber {
            id: first,
            kind: 0,
            vertices: ids,
            neighbors: [None; N],
        });
        this.by_vertices.insert(ids, first);
        this.attach(first);
        Ok(this)
    }

    pub fn run(mut self) -> Result<Generated<N>, WythoffError> {
        let mut pos = 0;
        while self.open > 0 {
            for facet in 0..N {
                self.expand(ChamberId(pos), facet)?;
            }
            pos += 1;
            if self.open > 0 && pos >= self.chambers.len() {
                return Err(self.fail());
            }
        }
        Ok(Generated {
            vertices: self.vertices,
            chambers: self.chambers,
        })
    }

    fn fail(&self) -> WythoffError {
        WythoffError::does_not_tile(self.symbol, self.chambers.len(), self.max_chambers)
    }

    fn push_vertex(&mut self, point: Point<N>, kind: usize) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.index[kind].insert(point, id.0);
        self.vertices.push(Vertex::new(id, kind, point, self.valences[kind]));
        id
    }

    /// Register a freshly created chamber with its vertices.
    fn attach(&mut self, id: ChamberId) {
        let verts = self.chambers[id.0].vertices;
        for v in verts {
            let vx = &mut self.vertices[v.0];
            vx.chambers.push(id);
            if vx.chambers.len() == 1 {
                self.open += 1;
            }
            if vx.chambers.len() == vx.valence {
                self.open -= 1;
            }
        }
    }

    fn link(&mut self, a: ChamberId, b: ChamberId, facet: usize) {
        if self.chambers[a.0].neighbors[facet].is_none()
            && self.chambers[b.0].neighbors[facet].is_none()
        {
            self.chambers[a.0].neighbors[facet] = Some(b);
            self.chambers[b.0].neighbors[facet] = Some(a);
        }
    }

    /// Mirror `target` across its facet `facet` unless that side is settled.
    fn expand(&mut self, target: ChamberId, facet: usize) -> Result<(), WythoffError> {
        let parent = &self.chambers[target.0];
        if parent.neighbors[facet].is_some() {
            return Ok(());
        }
        let mut verts = parent.vertices;
        let kind = parent.kind ^ 1;
        let points: [Point<N>; N] = verts.map(|v| self.vertices[v.0].point);
        let normal = mirror_normal(&points, facet);
        let image = SphereCoord::reflect(&points[facet], &normal);

        let found = self.index[facet].find(&image);
        if let Some(id) = found {
            verts[facet] = VertexId(id);
            if let Some(&existing) = self.by_vertices.get(&verts) {
                self.link(target, existing, facet);
                return Ok(());
            }
        }
        // A full vertex already has every chamber around it.
        let shared_full = (0..N)
            .filter(|&k| k != facet)
            .any(|k| self.vertices[verts[k].0].is_complete());
        if shared_full || found.is_some_and(|id| self.vertices[id].is_complete()) {
            return Ok(());
        }
        if found.is_none() {
            if self.vertices.len() >= self.max_vertices {
                return Err(self.fail());
            }
            verts[facet] = self.push_vertex(image, facet);
        }

        let id = ChamberId(self.chambers.len());
        self.chambers.push(Chamber {
            id,
            kind,
            vertices: verts,
            neighbors: [None; N],
        });
        self.by_vertices.insert(verts, id);
        self.link(target, id, facet);
        for other in (0..N).filter(|&k| k != facet) {
            if let Some(across) = self.sharing_facet(&verts, other) {
                self.link(id, across, other);
            }
        }
        self.attach(id);

        if self.chambers.len() > self.max_chambers {
            return Err(self.fail());
        }
        Ok(())
    }

    /// Existing chamber holding every vertex of `verts` except the one at `facet`.
    fn sharing_facet(&self, verts: &[VertexId; N], facet: usize) -> Option<ChamberId> {
        let pivot = verts[(facet + 1) % N];
        self.vertices[pivot.0].chambers.iter().copied().find(|c| {
            let ch = &self.chambers[c.0];
            ch.neighbors[facet].is_none()
                && (0..N)
                    .filter(|&k| k != facet)
                    .all(|k| ch.vertices[k] == verts[k])
        })
    }
}
