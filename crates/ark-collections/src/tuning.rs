//! Construction-time tuning shared by every container.

use crate::error::{CollectionError, CollectionResult};
use ark_config::CollectionsSettings;

/// Slots allocated by a freshly constructed container
pub const DEFAULT_CAPACITY: usize = 16;

/// Hash containers rehash once their load would exceed this ratio
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.75;

/// Smallest accepted load factor; anything lower makes a rehash overflow
pub const MIN_MAX_LOAD_FACTOR: f64 = 0.1;

/// Initial capacity and load factor for a new container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    initial_capacity: usize,
    max_load_factor: f64,
}

impl Tuning {
    /// Validate and build a tuning
    ///
    /// # Errors
    /// `InvalidCapacity` for a zero capacity, `InvalidLoadFactor` unless
    /// `0.1 <= max_load_factor < 1`.
    pub fn new(initial_capacity: usize, max_load_factor: f64) -> CollectionResult<Self> {
        if initial_capacity == 0 {
            return Err(CollectionError::InvalidCapacity(initial_capacity));
        }
        if !(MIN_MAX_LOAD_FACTOR..1.0).contains(&max_load_factor) {
            return Err(CollectionError::InvalidLoadFactor(max_load_factor));
        }
        Ok(Self {
            initial_capacity,
            max_load_factor,
        })
    }

    /// Build from configuration, falling back to defaults for unset fields
    pub fn from_settings(settings: &CollectionsSettings) -> CollectionResult<Self> {
        Self::new(
            settings.initial_capacity.unwrap_or(DEFAULT_CAPACITY),
            settings.max_load_factor.unwrap_or(DEFAULT_MAX_LOAD_FACTOR),
        )
    }

    /// Same load factor, different starting capacity (clamped to at least 1)
    pub fn with_initial_capacity(self, initial_capacity: usize) -> Self {
        Self {
            initial_capacity: initial_capacity.max(1),
            ..self
        }
    }

    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let tuning = Tuning::default();
        assert_eq!(tuning.initial_capacity(), 16);
        assert_eq!(tuning.max_load_factor(), 0.75);
    }

    #[test]
    fn test_rejects_zero_capacity() {
        assert_eq!(Tuning::new(0, 0.5), Err(CollectionError::InvalidCapacity(0)));
    }

    #[test]
    fn test_rejects_full_load_factor() {
        assert!(matches!(
            Tuning::new(8, 1.0),
            Err(CollectionError::InvalidLoadFactor(_))
        ));
        assert!(Tuning::new(8, f64::NAN).is_err());
    }

    #[test]
    fn test_rejects_tiny_load_factor() {
        assert_eq!(
            Tuning::new(16, 1e-300),
            Err(CollectionError::InvalidLoadFactor(1e-300))
        );
        assert!(Tuning::new(16, 1e-9).is_err());
        assert!(Tuning::new(16, 0.09).is_err());
        assert_eq!(
            Tuning::new(16, MIN_MAX_LOAD_FACTOR).map(|t| t.max_load_factor()),
            Ok(MIN_MAX_LOAD_FACTOR)
        );
    }

    #[test]
    fn test_from_settings_fills_defaults() {
        let settings = CollectionsSettings {
            initial_capacity: Some(4),
            max_load_factor: None,
        };
        let tuning = Tuning::from_settings(&settings).unwrap();
        assert_eq!(tuning.initial_capacity(), 4);
        assert_eq!(tuning.max_load_factor(), DEFAULT_MAX_LOAD_FACTOR);
    }

    #[test]
    fn test_with_initial_capacity_clamps() {
        let tuning = Tuning::default().with_initial_capacity(0);
        assert_eq!(tuning.initial_capacity(), 1);
    }
}
