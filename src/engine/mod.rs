mod bounds;
mod cursor;

pub use bounds::PathBounds;
pub use cursor::PathCursor;

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slotmap::{new_key_type, SlotMap};
use tracing::{debug, trace, warn};

use crate::config::{LiveParams, SpawnConfig};
use crate::error::{EngineError, Result};
use crate::fixture::Fixture;
use crate::geometry::BSpline;
use crate::math::{activation_intensity, Point2, Point3};
use crate::tessellation::{Polyline, PreviewSink, TessellateCurve};

new_key_type! {
    /// Stable handle to a path owned by a [`SpawnEngine`].
    pub struct PathId;
}

/// Owns the running paths and drives fixtures from them every frame.
///
/// Paths live in a generational arena; `order` keeps creation order so
/// iteration is deterministic. The random source is a type parameter so
/// tests can inject a seeded generator.
#[derive(Debug)]
pub struct SpawnEngine<R = StdRng> {
    paths: SlotMap<PathId, PathCursor>,
    order: Vec<PathId>,
    config: SpawnConfig,
    rng: R,
}

impl SpawnEngine<StdRng> {
    /// Creates an empty engine seeded from the operating system.
    #[must_use]
    pub fn new(config: SpawnConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates an empty engine with a reproducible random source.
    #[must_use]
    pub fn seeded(config: SpawnConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl Default for SpawnEngine<StdRng> {
    fn default() -> Self {
        Self::new(SpawnConfig::default())
    }
}

impl<R: Rng> SpawnEngine<R> {
    /// Creates an empty engine drawing path shapes from `rng`.
    #[must_use]
    pub fn with_rng(config: SpawnConfig, rng: R) -> Self {
        Self {
            paths: SlotMap::with_key(),
            order: Vec::new(),
            config,
            rng,
        }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &SpawnConfig {
        &self.config
    }

    /// Number of running paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no path is running.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates over the running paths in creation order.
    pub fn paths(&self) -> impl Iterator<Item = (PathId, &PathCursor)> + '_ {
        self.order.iter().map(|&id| (id, &self.paths[id]))
    }

    /// Returns the path with the given id, if it is still running.
    #[must_use]
    pub fn path(&self, id: PathId) -> Option<&PathCursor> {
        self.paths.get(id)
    }

    // --- Path management ---

    /// Spawns a new random path and makes it the only running one.
    ///
    /// The previous paths and their positions are discarded. On error the
    /// running paths are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if `point_count < 2`, `degree < 1`, `radius` is
    /// negative or not finite, or the configured bounds scaled by `radius`
    /// overflow.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn create_path(&mut self, point_count: usize, degree: usize, radius: f64) -> Result<PathId> {
        let cursor = self.build_path(point_count, degree, radius)?;
        self.clear();
        Ok(self.insert(cursor))
    }

    /// Spawns a new random path alongside the running ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid (see
    /// [`SpawnEngine::create_path`]) or `max_paths` paths are already running.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn add_path(&mut self, point_count: usize, degree: usize, radius: f64) -> Result<PathId> {
        if self.order.len() >= self.config.max_paths {
            warn!(limit = self.config.max_paths, "path limit reached");
            return Err(EngineError::PathLimitReached {
                limit: self.config.max_paths,
            }
            .into());
        }
        let cursor = self.build_path(point_count, degree, radius)?;
        Ok(self.insert(cursor))
    }

    /// Re-spawns the single running path from the operator's current values.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid.
    pub fn respawn(&mut self, params: &LiveParams) -> Result<PathId> {
        self.create_path(params.point_count, params.degree, params.radius)
    }

    /// Stops a path and hands it back.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not running.
    pub fn remove_path(&mut self, id: PathId) -> Result<PathCursor> {
        let cursor = self.paths.remove(id).ok_or(EngineError::PathNotFound)?;
        self.order.retain(|&other| other != id);
        debug!(?id, "path removed");
        Ok(cursor)
    }

    /// Stops every path.
    pub fn clear(&mut self) {
        self.paths.clear();
        self.order.clear();
    }

    #[allow(clippy::cast_precision_loss)]
    fn build_path(&mut self, point_count: usize, degree: usize, radius: f64) -> Result<PathCursor> {
        let invalid = |parameter: &'static str, value: f64, reason: &'static str| {
            warn!(parameter, value, reason, "rejected path parameters");
            EngineError::InvalidParameter {
                parameter,
                value,
                reason,
            }
        };
        if point_count < 2 {
            return Err(invalid(
                "point_count",
                point_count as f64,
                "at least two control points are required",
            )
            .into());
        }
        if degree < 1 {
            return Err(invalid("degree", degree as f64, "degree must be at least 1").into());
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(invalid("radius", radius, "radius must be finite and non-negative").into());
        }
        if !self.config.bounds.is_drawable(radius) {
            return Err(invalid("radius", radius, "path bounds overflow at this radius").into());
        }

        let points = self.config.bounds.generate(&mut self.rng, point_count, radius);
        let curve = BSpline::new(points, degree)?;
        debug!(
            point_count,
            requested_degree = degree,
            degree = curve.degree(),
            radius,
            "path spawned"
        );
        Ok(PathCursor::new(curve, radius))
    }

    fn insert(&mut self, cursor: PathCursor) -> PathId {
        let id = self.paths.insert(cursor);
        self.order.push(id);
        id
    }

    // --- Per-frame ---

    /// Advances every cursor by `speed` and lets them light nearby fixtures.
    ///
    /// `speed` is the normalized increment for this frame. `radius` replaces
    /// every cursor's activation radius. Each fixture within reach of some
    /// cursor receives the strongest intensity among them; fixtures out of
    /// reach are not touched, leaving them to fade on their own.
    pub fn advance_and_activate<F: Fixture>(&mut self, fixtures: &mut [F], speed: f64, radius: f64) {
        self.step(fixtures, speed, radius);
    }

    /// Like [`SpawnEngine::advance_and_activate`], with `speed` expressed per
    /// second and scaled by the time since the previous frame.
    pub fn advance_and_activate_elapsed<F: Fixture>(
        &mut self,
        fixtures: &mut [F],
        speed: f64,
        radius: f64,
        elapsed: Duration,
    ) {
        self.step(fixtures, speed * elapsed.as_secs_f64(), radius);
    }

    #[tracing::instrument(level = "trace", skip(self, fixtures), fields(fixtures = fixtures.len()))]
    fn step<F: Fixture>(&mut self, fixtures: &mut [F], delta: f64, radius: f64) {
        let delta = if delta.is_finite() {
            delta
        } else {
            warn!(delta, "non-finite speed, cursors held");
            0.0
        };
        let radius_ok = radius.is_finite() && radius >= 0.0;
        if !radius_ok {
            warn!(radius, "invalid radius, activation skipped");
        }

        for cursor in self.paths.values_mut() {
            cursor.advance(delta);
            if radius_ok {
                cursor.set_radius(radius);
            }
        }
        // Zero radius is valid but lights nothing.
        if !radius_ok || radius <= 0.0 || self.order.is_empty() {
            return;
        }

        let heads: Vec<Point3> = self
            .order
            .iter()
            .map(|&id| self.paths[id].current_position())
            .collect();

        let mut touched = 0usize;
        for fixture in fixtures.iter_mut() {
            let position = fixture.position();
            let intensity = heads
                .iter()
                .map(|head| activation_intensity((head - position).norm(), radius))
                .fold(0.0, f64::max);
            if intensity > 0.0 {
                fixture.set_brightness_influence(intensity);
                touched += 1;
            }
        }
        trace!(paths = heads.len(), touched, "frame");
    }

    // --- Queries ---

    /// Strongest activation any cursor would give a fixture at `point`.
    #[must_use]
    pub fn intensity_at(&self, point: &Point3, radius: f64) -> f64 {
        self.paths
            .values()
            .map(|cursor| activation_intensity(cursor.distance_to(point), radius))
            .fold(0.0, f64::max)
    }

    /// Whether `query` lies within some cursor's radius once cursor
    /// positions are projected onto the configured plane.
    #[must_use]
    pub fn contains_point(&self, query: &Point2) -> bool {
        let plane = self.config.projection;
        self.paths.values().any(|cursor| {
            let head = plane.project(&cursor.current_position());
            (head - query).norm() <= cursor.radius()
        })
    }

    // --- Preview ---

    /// Emits a wireframe of every curve and a marker at every cursor.
    ///
    /// Read-only: calling it any number of times never changes the engine.
    pub fn render_preview<S: PreviewSink + ?Sized>(&self, sink: &mut S) {
        let params = &self.config.preview;
        for (_, cursor) in self.paths() {
            let curve = cursor.curve();
            let segments = params.segment_count(curve.span_count());
            sink.polyline(TessellateCurve::new(curve, segments).execute());
            if params.control_polygon {
                sink.polyline(Polyline {
                    points: curve.control_points().to_vec(),
                    closed: true,
                });
            }
            sink.marker(cursor.current_position(), cursor.radius(), cursor.heading());
        }
    }
}
