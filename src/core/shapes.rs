use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Heart,
    Flower,
    Saturn,
    Spiral,
    Firework,
    Dna,
    Birds,
    Sphere,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("unknown shape '{0}'")]
    UnknownShape(String),
}

impl ShapeKind {
    /// Every shape in selection order. Digit keys `1`..`8` follow this order.
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Heart,
        ShapeKind::Flower,
        ShapeKind::Saturn,
        ShapeKind::Spiral,
        ShapeKind::Firework,
        ShapeKind::Dna,
        ShapeKind::Birds,
        ShapeKind::Sphere,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Heart => "heart",
            ShapeKind::Flower => "flower",
            ShapeKind::Saturn => "saturn",
            ShapeKind::Spiral => "spiral",
            ShapeKind::Firework => "firework",
            ShapeKind::Dna => "dna",
            ShapeKind::Birds => "birds",
            ShapeKind::Sphere => "sphere",
        }
    }

    #[inline]
    pub fn for_key(key: &str) -> Option<ShapeKind> {
        match key {
            "1" => Some(ShapeKind::Heart),
            "2" => Some(ShapeKind::Flower),
            "3" => Some(ShapeKind::Saturn),
            "4" => Some(ShapeKind::Spiral),
            "5" => Some(ShapeKind::Firework),
            "6" => Some(ShapeKind::Dna),
            "7" => Some(ShapeKind::Birds),
            "8" => Some(ShapeKind::Sphere),
            _ => None,
        }
    }

    /// Uniform pick over [`ShapeKind::ALL`]; may return the current shape.
    pub fn random(rng: &mut impl Rng) -> ShapeKind {
        ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())]
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ShapeKind::ALL
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ShapeError::UnknownShape(s.to_string()))
    }
}

/// A named point cloud flattened as `x, y, z` triples.
#[derive(Clone, Debug)]
pub struct Shape {
    pub kind: ShapeKind,
    pub components: Vec<f32>,
}

impl Shape {
    /// Number of points (not components).
    pub fn len(&self) -> usize {
        self.components.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn point(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.components[i * 3..i * 3 + 3])
    }
}

/// Evaluate the parametric formula for `kind` at `count` points.
///
/// Flower, DNA and Birds are driven purely by the point index and never touch
/// `rng`; the rest sample their parameters from it.
pub fn generate(kind: ShapeKind, count: usize, rng: &mut impl Rng) -> Shape {
    let mut components = Vec::with_capacity(count * 3);
    for i in 0..count {
        let p = match kind {
            ShapeKind::Heart => heart_point(rng),
            ShapeKind::Flower => flower_point(i, count),
            ShapeKind::Saturn => saturn_point(rng),
            ShapeKind::Spiral => spiral_point(rng),
            ShapeKind::Firework => firework_point(rng),
            ShapeKind::Dna => dna_point(i, count),
            ShapeKind::Birds => birds_point(i, count),
            ShapeKind::Sphere => sphere_point(rng),
        };
        components.extend_from_slice(&p.to_array());
    }
    Shape { kind, components }
}

fn heart_point(rng: &mut impl Rng) -> Vec3 {
    let t = rng.gen_range(0.0..TAU);
    Vec3::new(
        16.0 * t.sin().powi(3) / 6.0,
        (13.0 * t.cos() - 5.0 * (2.0 * t).cos()) / 6.0,
        rng.gen_range(-0.1..0.1),
    )
}

fn flower_point(i: usize, count: usize) -> Vec3 {
    let t = TAU * i as f32 / count as f32;
    let r = (5.0 * t).cos();
    Vec3::new(r * t.cos(), r * t.sin(), 0.0)
}

fn saturn_point(rng: &mut impl Rng) -> Vec3 {
    let t = rng.gen_range(0.0..TAU);
    let r = rng.gen_range(1.0..1.4);
    Vec3::new(r * t.cos(), 0.0, r * t.sin())
}

fn spiral_point(rng: &mut impl Rng) -> Vec3 {
    let t = rng.gen_range(0.0..6.0 * PI);
    let r = 0.08 * t;
    Vec3::new(r * t.cos(), r * t.sin(), rng.gen_range(-0.15..0.15))
}

fn firework_point(rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        rng.gen_range(-1.5..1.5),
        rng.gen_range(-1.5..1.5),
        rng.gen_range(-1.5..1.5),
    )
}

fn dna_point(i: usize, count: usize) -> Vec3 {
    let t = 0.15 * i as f32;
    let strand = if i % 2 == 0 { 1.0 } else { -1.0 };
    Vec3::new(
        0.6 * t.cos(),
        (i as f32 / count as f32 - 0.5) * 3.0,
        0.6 * t.sin() * strand,
    )
}

fn birds_point(i: usize, count: usize) -> Vec3 {
    let side = if i % 2 == 0 { 1.0 } else { -1.0 };
    let offset = i as f32 / count as f32;
    Vec3::new(side * offset * 2.0, 0.3 * (6.0 * offset).sin(), -2.0 * offset)
}

// Inverse-CDF sampling keeps the density uniform over the surface.
fn sphere_point(rng: &mut impl Rng) -> Vec3 {
    let u: f32 = rng.gen();
    let v: f32 = rng.gen();
    let theta = TAU * u;
    let phi = (2.0 * v - 1.0).clamp(-1.0, 1.0).acos();
    Vec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos())
}

/// Every shape generated once with a single shared point count.
#[derive(Clone, Debug)]
pub struct ShapeLibrary {
    count: usize,
    shapes: Vec<Shape>,
}

impl ShapeLibrary {
    pub fn generate(count: usize, rng: &mut impl Rng) -> Self {
        let shapes = ShapeKind::ALL
            .iter()
            .map(|&kind| generate(kind, count, rng))
            .collect();
        Self { count, shapes }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn get(&self, kind: ShapeKind) -> &Shape {
        // `shapes` is built in `ShapeKind::ALL` order, one entry per variant.
        &self.shapes[kind as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }
}
