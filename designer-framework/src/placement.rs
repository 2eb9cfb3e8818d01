use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

/// Width reserved for the tools panel on the right of the canvas.
pub const SIDEBAR_WIDTH: f64 = 300.0;

/// Source of uniformly distributed numbers in `[0, 1)`.
pub trait RandomSource {
    fn unit(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Visible area of the host window, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Viewport { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(1280.0, 800.0)
    }
}

/// Picks starting positions for new elements.
pub struct Placement {
    viewport: Viewport,
    random: Box<dyn RandomSource>,
}

impl Placement {
    pub fn new(viewport: Viewport, random: impl RandomSource + 'static) -> Self {
        Placement {
            viewport,
            random: Box::new(random),
        }
    }

    /// Placement seeded from the operating system.
    pub fn from_entropy(viewport: Viewport) -> Self {
        Placement::new(viewport, StdRng::from_os_rng())
    }

    pub fn seeded(viewport: Viewport, seed: u64) -> Self {
        Placement::new(viewport, StdRng::seed_from_u64(seed))
    }

    /// A random point such that an element of the given size lands left of
    /// the tools panel. Spans that come out negative are not corrected.
    pub fn initial_position(&mut self, width: f64, height: f64) -> (f64, f64) {
        let x_span = self.viewport.width - width - SIDEBAR_WIDTH;
        let y_span = self.viewport.height - height;

        let x = (self.random.unit() * x_span).floor();
        let y = (self.random.unit() * y_span).floor();

        (x, y)
    }
}
