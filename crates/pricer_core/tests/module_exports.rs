//! Integration tests for module exports.
//!
//! Verify that all public modules and types are accessible via absolute paths.

/// Test that path vector types are accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::error::{PathVectorError, PricingError};
    use pricer_core::types::path_vector::{PathVector, PARALLEL_THRESHOLD};

    let v = PathVector::constant(1.0);
    assert!(v.is_deterministic());
    assert!(PARALLEL_THRESHOLD > 1);

    let err: PricingError = PathVectorError::Empty.into();
    assert!(matches!(err, PricingError::PathVector(_)));
}

/// Test that re-exports at module level match the full paths.
#[test]
fn test_types_reexports() {
    use pricer_core::types::{PathVector, PricingError};

    let err = PricingError::model_query(1.0, "missing");
    assert!(matches!(err, PricingError::ModelQuery { .. }));
    assert_eq!(PathVector::zero().get(0), 0.0);
}

/// Test that the traits are accessible and object safe.
#[test]
fn test_traits_module_exports() {
    use pricer_core::traits::product::{CashFlowEstimator, MonteCarloProduct};
    use pricer_core::traits::simulation::SimulationModel;
    use pricer_core::types::{PathVector, PricingError};

    struct Flat;

    impl SimulationModel for Flat {
        fn number_of_paths(&self) -> usize {
            1
        }
        fn numeraire(&self, _: f64) -> Result<PathVector, PricingError> {
            Ok(PathVector::constant(1.0))
        }
        fn forward_rate(&self, _: f64, _: f64, _: f64) -> Result<PathVector, PricingError> {
            Ok(PathVector::constant(0.02))
        }
    }

    struct Coupon;

    impl MonteCarloProduct for Coupon {
        fn present_value(
            &self,
            _: f64,
            model: &dyn SimulationModel,
        ) -> Result<PathVector, PricingError> {
            model.forward_rate(0.0, 0.0, 1.0)
        }
    }

    impl CashFlowEstimator for Coupon {
        fn forward_cash_flow(
            &self,
            initial_time: f64,
            _: f64,
            model: &dyn SimulationModel,
        ) -> Result<PathVector, PricingError> {
            self.present_value(initial_time, model)
        }
    }

    let products: Vec<Box<dyn MonteCarloProduct>> = vec![Box::new(Coupon)];
    assert_eq!(products[0].price(&Flat).unwrap(), 0.02);
    assert_eq!(Coupon.forward_cash_flow(0.0, 1.0, &Flat).unwrap().get(0), 0.02);
}
