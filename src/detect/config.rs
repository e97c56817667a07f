use crate::utils::error::{BlobError, Result};

/// Whether `min_mass`/`max_mass` take part in filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MassFilter {
    /// Mass bounds are carried but not consulted; only width and height filter.
    #[default]
    Ignore,
    /// A blob must also satisfy `min_mass <= mass <= max_mass`.
    Apply,
}

/// Size filters and marker colors for [`BlobDetector`](super::BlobDetector).
///
/// All ranges are inclusive and measured on the tight (uninflated) box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectorConfig {
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
    pub min_mass: u64,
    pub max_mass: u64,
    pub mass_filter: MassFilter,
    /// Pixel value treated as foreground ink.
    pub symbol: u8,
    /// Pixel value ink is repainted with once consumed. Must not occur in
    /// the input, or those pixels can never be detected.
    pub completed: u8,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        DetectorConfig {
            min_width: 2,
            max_width: 50,
            min_height: 5,
            max_height: 50,
            min_mass: 10,
            max_mass: 300,
            mass_filter: MassFilter::Ignore,
            symbol: 0,
            completed: 50,
        }
    }
}

impl DetectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width_range(mut self, min: u32, max: u32) -> Self {
        self.min_width = min;
        self.max_width = max;
        self
    }

    pub fn with_height_range(mut self, min: u32, max: u32) -> Self {
        self.min_height = min;
        self.max_height = max;
        self
    }

    pub fn with_mass_range(mut self, min: u64, max: u64) -> Self {
        self.min_mass = min;
        self.max_mass = max;
        self
    }

    pub fn with_mass_filter(mut self, mass_filter: MassFilter) -> Self {
        self.mass_filter = mass_filter;
        self
    }

    /// Sets the ink value and the marker value used for consumed ink.
    pub fn with_colors(mut self, symbol: u8, completed: u8) -> Self {
        self.symbol = symbol;
        self.completed = completed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.symbol == self.completed {
            return Err(BlobError::InvalidConfig(format!(
                "symbol and completed colors are both {}",
                self.symbol
            )));
        }
        if self.min_width > self.max_width {
            return Err(BlobError::InvalidConfig(format!(
                "min_width {} exceeds max_width {}",
                self.min_width, self.max_width
            )));
        }
        if self.min_height > self.max_height {
            return Err(BlobError::InvalidConfig(format!(
                "min_height {} exceeds max_height {}",
                self.min_height, self.max_height
            )));
        }
        if self.mass_filter == MassFilter::Apply && self.min_mass > self.max_mass {
            return Err(BlobError::InvalidConfig(format!(
                "min_mass {} exceeds max_mass {}",
                self.min_mass, self.max_mass
            )));
        }
        Ok(())
    }

    /// Whether a blob with this tight size and mass is kept.
    pub fn accepts(&self, width: u32, height: u32, mass: u64) -> bool {
        let sized = (self.min_width..=self.max_width).contains(&width)
            && (self.min_height..=self.max_height).contains(&height);
        match self.mass_filter {
            MassFilter::Ignore => sized,
            MassFilter::Apply => sized && (self.min_mass..=self.max_mass).contains(&mass),
        }
    }
}
