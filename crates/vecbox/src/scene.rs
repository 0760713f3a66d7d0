//! Immutable scene state and its event transitions.
//!
//! A [`Scene`] is never edited in place. Each input event (generate,
//! length change, convergence change, box toggle) produces a new value,
//! and everything drawable is recomputed from it by [`Scene::frame`].
//!
//! Each axis has exactly one length. There is no separate "box length":
//! the box is always built on the axis tips as they are drawn.

use rand::Rng;
use vecbox_drafting::{build_box, AxisIndex, BoxGeometry, Point2D};
use vecbox_math::{polar_to_canvas, Point2};
use vecbox_sampler::{sample_axes, AxisSample};

use crate::config::SceneConfig;
use crate::error::Result;
use crate::frame::{AxisSegment, Frame};

/// Direction, length and tip of one axis.
///
/// The tip is always `polar_to_canvas(origin, length, angle)`; the fields
/// are private so the three cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisState {
    angle_degrees: f64,
    length: i64,
    tip: Point2,
}

impl AxisState {
    /// Build an axis from its polar parameters around `origin`.
    pub fn new(origin: &Point2, angle_degrees: f64, length: i64) -> Self {
        Self {
            angle_degrees,
            length,
            tip: polar_to_canvas(origin, length as f64, angle_degrees),
        }
    }

    /// Same direction, new length.
    pub fn with_length(&self, origin: &Point2, length: i64) -> Self {
        Self::new(origin, self.angle_degrees, length)
    }

    /// Direction in degrees.
    pub fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }

    /// Length in canvas units.
    pub fn length(&self) -> i64 {
        self.length
    }

    /// Canvas position of the tip.
    pub fn tip(&self) -> Point2 {
        self.tip
    }
}

/// The full parameter set behind one drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    origin: Point2,
    axes: [AxisState; 3],
    convergence: [f64; 3],
    show_box: bool,
    revision: u64,
}

impl Scene {
    /// Build a scene from explicit axis parameters. The box starts hidden.
    pub fn new(origin: Point2, samples: [AxisSample; 3], convergence: [f64; 3]) -> Self {
        Self {
            origin,
            axes: samples.map(|s| AxisState::new(&origin, s.angle_degrees, s.length as i64)),
            convergence,
            show_box: false,
            revision: 0,
        }
    }

    /// Draw fresh angles and lengths according to `config`.
    ///
    /// The origin is the canvas centre, convergence comes from the config
    /// and the box starts hidden.
    pub fn generate<R: Rng>(config: &SceneConfig, rng: &mut R) -> Result<Self> {
        let samples = sample_axes(&config.sampler, &config.lengths, rng)?;
        let scene = Self::new(config.canvas.origin(), samples, config.convergence);
        log::info!(
            "generated axes A={}° len {}, B={}° len {}, C={}° len {}",
            samples[0].angle_degrees,
            samples[0].length,
            samples[1].angle_degrees,
            samples[1].length,
            samples[2].angle_degrees,
            samples[2].length
        );
        Ok(scene)
    }

    /// Replace the whole axis set with a new draw, keeping convergence.
    ///
    /// Like a fresh [`Scene::generate`], this hides the box and starts
    /// the revision count over.
    pub fn regenerate<R: Rng>(&self, config: &SceneConfig, rng: &mut R) -> Result<Self> {
        let samples = sample_axes(&config.sampler, &config.lengths, rng)?;
        Ok(Self::new(self.origin, samples, self.convergence))
    }

    /// Change one axis length, keeping its angle.
    ///
    /// The length is taken as given; it is not checked against the
    /// generation bounds.
    pub fn with_length(&self, axis: AxisIndex, length: i64) -> Self {
        let mut next = self.next();
        let i = axis.index();
        next.axes[i] = self.axes[i].with_length(&self.origin, length);
        next
    }

    /// Change one axis convergence factor.
    pub fn with_convergence(&self, axis: AxisIndex, convergence: f64) -> Self {
        let mut next = self.next();
        next.convergence[axis.index()] = convergence;
        next
    }

    /// Show or hide the box.
    pub fn with_box_visible(&self, show_box: bool) -> Self {
        let mut next = self.next();
        next.show_box = show_box;
        next
    }

    fn next(&self) -> Self {
        Self {
            revision: self.revision + 1,
            ..self.clone()
        }
    }

    /// Shared origin of the axes.
    pub fn origin(&self) -> Point2 {
        self.origin
    }

    /// State of one axis.
    pub fn axis(&self, axis: AxisIndex) -> &AxisState {
        &self.axes[axis.index()]
    }

    /// Convergence factor of one axis.
    pub fn convergence(&self, axis: AxisIndex) -> f64 {
        self.convergence[axis.index()]
    }

    /// Whether the box is drawn.
    pub fn show_box(&self) -> bool {
        self.show_box
    }

    /// Number of transitions since this scene's axes were generated.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Tips of A, B, C.
    pub fn tips(&self) -> [Point2; 3] {
        self.axes.map(|a| a.tip)
    }

    /// Box construction, present only while the box is shown.
    pub fn box_geometry(&self) -> Option<BoxGeometry> {
        self.show_box
            .then(|| build_box(&self.origin, &self.tips(), &self.convergence))
    }

    /// Everything the renderer needs for this scene.
    pub fn frame(&self) -> Frame {
        let origin: Point2D = self.origin.into();
        let axes = AxisIndex::ALL.map(|axis| {
            let state = self.axis(axis);
            AxisSegment {
                axis,
                start: origin,
                end: state.tip.into(),
                angle_degrees: state.angle_degrees,
                length: state.length,
            }
        });
        let markers = [origin, axes[0].end, axes[1].end, axes[2].end];
        Frame {
            origin,
            axes,
            markers,
            box_geometry: self.box_geometry(),
        }
    }
}
