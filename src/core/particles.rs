use super::shapes::Shape;

/// Live particle positions, flattened as `x, y, z` triples.
///
/// Written only by the frame step; the renderer re-uploads it when `dirty`.
#[derive(Clone, Debug)]
pub struct ParticleBuffer {
    components: Vec<f32>,
    dirty: bool,
}

impl ParticleBuffer {
    /// All particles start at the origin.
    pub fn new(count: usize) -> Self {
        Self {
            components: vec![0.0; count * 3],
            dirty: true,
        }
    }

    pub fn len(&self) -> usize {
        self.components.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn components(&self) -> &[f32] {
        &self.components
    }

    /// Move every component `factor` of the way toward the matching component
    /// of `target`. Both sides must hold the same number of points.
    pub fn ease_toward(&mut self, target: &Shape, factor: f32) {
        debug_assert_eq!(self.components.len(), target.components.len());
        for (p, t) in self.components.iter_mut().zip(&target.components) {
            *p += (t - *p) * factor;
        }
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether an upload is pending and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Largest per-component distance to `target`.
    pub fn max_error(&self, target: &Shape) -> f32 {
        self.components
            .iter()
            .zip(&target.components)
            .map(|(p, t)| (t - p).abs())
            .fold(0.0, f32::max)
    }
}
