//! TSP solver configuration.

/// Configuration for the greedy + 2-opt TSP solver.
///
/// # Examples
///
/// ```
/// use u_graph::tsp::TspConfig;
///
/// let config = TspConfig::default()
///     .with_max_sweeps(50)
///     .with_epsilon(1e-9);
/// assert_eq!(config.max_sweeps, 50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspConfig {
    /// Maximum number of full 2-opt sweeps. `0` returns the greedy
    /// construction unchanged.
    pub max_sweeps: usize,

    /// Minimum length reduction for a 2-opt move to count as improving.
    pub epsilon: f64,
}

impl Default for TspConfig {
    fn default() -> Self {
        Self {
            max_sweeps: 1_000,
            epsilon: 1e-12,
        }
    }
}

impl TspConfig {
    /// Sets the 2-opt sweep cap.
    pub fn with_max_sweeps(mut self, n: usize) -> Self {
        self.max_sweeps = n;
        self
    }

    /// Sets the improvement threshold.
    pub fn with_epsilon(mut self, eps: f64) -> Self {
        self.epsilon = eps;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(format!(
                "epsilon must be finite and non-negative, got {}",
                self.epsilon
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TspConfig::default();
        assert_eq!(config.max_sweeps, 1_000);
        assert!((config.epsilon - 1e-12).abs() < 1e-20);
    }

    #[test]
    fn test_builder() {
        let config = TspConfig::default().with_max_sweeps(3).with_epsilon(0.5);
        assert_eq!(config.max_sweeps, 3);
        assert!((config.epsilon - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_validate_ok() {
        assert!(TspConfig::default().validate().is_ok());
        assert!(TspConfig::default().with_epsilon(0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_bad_epsilon() {
        assert!(TspConfig::default().with_epsilon(-1.0).validate().is_err());
        assert!(TspConfig::default().with_epsilon(f64::NAN).validate().is_err());
        assert!(TspConfig::default()
            .with_epsilon(f64::INFINITY)
            .validate()
            .is_err());
    }
}
