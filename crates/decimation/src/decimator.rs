use crate::graph::DecimationGraph;
use crate::math::Point;
use crate::mesh::{Edge, Facet, VertexId};
use crate::{DecimationInfo, DecimationOptions, DecimationResult, UnsupportedParameter};

#[cfg(debug_assertions)]
macro_rules! dec_log {
    ($obj:ident, $fmt:expr) => (
        if $obj.log {
            println!($fmt);
        }
    );
    ($obj:ident, $fmt:expr, $($arg:tt)*) => (
        if $obj.log {
            println!($fmt, $($arg)*);
        }
    );
}

#[cfg(not(debug_assertions))]
macro_rules! dec_log {
    ($obj:ident, $fmt:expr) => {};
    ($obj:ident, $fmt:expr, $($arg:tt)*) => {};
}

/// A mesh decimator.
///
/// Reduces the vertex count of a triangle mesh by repeatedly collapsing the
/// edges whose removal destroys the least surface information, until the
/// requested compression factor is reached or no legal collapse remains.
/// Output facets keep indexing the original position array; run
/// [`remap::compact`](../talus_mesh/remap/fn.compact.html) afterwards to
/// obtain a densely indexed mesh.
///
/// # Example
///
/// ```
/// use talus_decimation::{DecimationOptions, Decimator};
/// use talus_extra::shapes;
///
/// let mesh = shapes::icosahedron();
///
/// let mut facets = Vec::new();
/// let mut decimator = Decimator::new();
/// let info = decimator
///     .decimate(
///         &mesh.facets,
///         &mesh.positions,
///         &DecimationOptions::compression_factor(2.0),
///         &mut facets,
///     )
///     .unwrap();
///
/// assert!(info.vertex_count <= 6);
/// ```
#[derive(Default)]
pub struct Decimator {
    log: bool,
}

impl Decimator {
    /// Constructs a new decimator.
    pub fn new() -> Self {
        Decimator { log: false }
    }

    /// Enable some verbose logging during the decimation, for debugging
    /// purposes.
    pub fn set_logging(&mut self, is_enabled: bool) {
        self.log = is_enabled;
    }

    /// Decimates a mesh, appending the surviving facets to `output`.
    ///
    /// On success, returns the number of surviving vertices along with some
    /// counters. The vertex count is at most the live vertex count of the
    /// input divided by the compression factor, unless the legality rules
    /// ran out of collapsible edges first: an open boundary, for example,
    /// is never collapsed, and puts a floor on how far a mesh can shrink.
    pub fn decimate(
        &mut self,
        facets: &[Facet],
        positions: &[Point],
        options: &DecimationOptions,
        output: &mut Vec<Facet>,
    ) -> DecimationResult {
        if !options.compression_factor.is_finite() || options.compression_factor <= 1.0 {
            return Err(UnsupportedParameter::CompressionFactor.into());
        }
        if !(options.batch_fraction > 0.0 && options.batch_fraction <= 1.0) {
            return Err(UnsupportedParameter::BatchFraction.into());
        }

        let mut graph = DecimationGraph::new(facets, positions)?;
        #[cfg(debug_assertions)]
        graph.check_invariants();

        let base = graph.live_vertex_count();
        let target = (base as f32 / options.compression_factor) as usize;
        dec_log!(
            self,
            "decimating {} live vertices towards {}",
            base,
            target
        );

        let mut candidates: Vec<(f32, VertexId, VertexId)> = Vec::new();
        let mut info = DecimationInfo {
            vertex_count: base,
            collapses: 0,
            sweeps: 0,
        };

        while graph.live_vertex_count() > target {
            graph.clear_dirty();

            // Score every legal collapse. Both directions of an edge are
            // scored separately: collapsing a into b does not destroy the
            // same thing as collapsing b into a.
            candidates.clear();
            for v in graph.live_vertices() {
                let node = match graph.node(v) {
                    Some(node) => node,
                    None => continue,
                };
                for &adjacent in node.neighbors() {
                    if graph.is_horizon_edge(&Edge::new(v, adjacent)) {
                        continue;
                    }
                    if !graph.collapse_is_legal(v, adjacent, positions) {
                        continue;
                    }
                    let loss = match graph.collapse_loss(v, adjacent, positions) {
                        Some(loss) => loss,
                        None => continue,
                    };
                    // Rejects NaN losses from zero-area facets as well.
                    if !(loss >= 0.0) {
                        continue;
                    }

                    candidates.push((loss, v, adjacent));
                }
            }

            if candidates.is_empty() {
                dec_log!(self, "no legal collapse remains");
                break;
            }

            candidates.sort_unstable_by(|x, y| {
                x.0.total_cmp(&y.0)
                    .then(x.1.cmp(&y.1))
                    .then(x.2.cmp(&y.2))
            });

            // Apply the cheapest fraction of the batch. Scored losses go
            // stale as soon as a neighborhood mutates, so any candidate
            // whose endpoints were already touched this sweep is skipped
            // rather than re-scored.
            let max_batch = (candidates.len() as f32 * options.batch_fraction) as usize;
            let mut applied = 0;
            for &(_, v_keep, v_remove) in &candidates {
                if applied > max_batch {
                    break;
                }
                if graph.node(v_keep).is_none() || graph.node(v_remove).is_none() {
                    continue;
                }
                if graph.is_dirty(v_keep) || graph.is_dirty(v_remove) {
                    continue;
                }

                dec_log!(self, "collapse {:?} into {:?}", v_remove, v_keep);
                graph.collapse(v_keep, v_remove);
                applied += 1;
                info.collapses += 1;
            }

            info.sweeps += 1;
            dec_log!(
                self,
                "sweep {}: {} candidates, {} applied, {} vertices live",
                info.sweeps,
                candidates.len(),
                applied,
                graph.live_vertex_count()
            );
        }

        graph.emit_facets(output);
        info.vertex_count = graph.live_vertex_count();

        Ok(info)
    }
}
