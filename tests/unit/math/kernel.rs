//! Tests for Gaussian kernel construction and reflect-101 border indexing

#[cfg(test)]
mod tests {
    use seamtile::SeamError;
    use seamtile::math::kernel::{GaussianKernel, reflect_101};

    // Tests sigma derivation from kernel size
    // Verified by dropping the 0.8 offset
    #[test]
    fn test_auto_sigma() {
        assert!((GaussianKernel::auto_sigma(21) - 3.5).abs() < 1e-12);
        assert!((GaussianKernel::auto_sigma(3) - 0.8).abs() < 1e-12);
        assert!((GaussianKernel::auto_sigma(9) - 1.7).abs() < 1e-12);
    }

    // Tests weights are normalised, symmetric and peak at the centre
    // Verified by skipping normalisation
    #[test]
    fn test_weights_shape() {
        let kernel = GaussianKernel::new(21).expect("odd kernel size");
        let weights = kernel.weights();

        assert_eq!(kernel.size(), 21);
        assert_eq!(kernel.radius(), 10);
        assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-12);

        for tap in 0..10 {
            assert!((weights[tap] - weights[20 - tap]).abs() < 1e-15);
            assert!(weights[tap] < weights[tap + 1]);
        }
    }

    // Tests an explicit sigma is kept and widens the kernel
    // Verified by ignoring the sigma argument
    #[test]
    fn test_with_sigma() {
        let narrow = GaussianKernel::with_sigma(7, 0.5).expect("valid kernel");
        let wide = GaussianKernel::with_sigma(7, 5.0).expect("valid kernel");

        assert!((narrow.sigma() - 0.5).abs() < f64::EPSILON);
        assert!(narrow.weights()[3] > wide.weights()[3]);
        assert!(narrow.weights()[0] < wide.weights()[0]);
    }

    // Tests a single-tap kernel is the identity
    // Verified by rejecting size one
    #[test]
    fn test_single_tap_kernel() {
        let kernel = GaussianKernel::new(1).expect("size one is odd");

        assert_eq!(kernel.radius(), 0);
        assert_eq!(kernel.weights(), &[1.0]);
    }

    // Tests even and zero sizes are rejected
    // Verified by accepting any size
    #[test]
    fn test_rejects_even_sizes() {
        for size in [0, 2, 20] {
            assert!(matches!(
                GaussianKernel::new(size),
                Err(SeamError::InvalidParameter {
                    parameter: "kernel_size",
                    ..
                })
            ));
        }
    }

    // Tests non-positive and non-finite sigmas are rejected
    // Verified by removing the sigma check
    #[test]
    fn test_rejects_bad_sigma() {
        for sigma in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                GaussianKernel::with_sigma(5, sigma),
                Err(SeamError::InvalidParameter {
                    parameter: "sigma",
                    ..
                })
            ));
        }
    }

    // Tests mirroring without repeating the border sample
    // Verified by using reflect-101's edge-repeating variant
    #[test]
    fn test_reflect_101() {
        let mapped: Vec<usize> = (-4..=8).map(|i| reflect_101(i, 4)).collect();

        // Pattern: c d c b | a b c d | c b a b c
        assert_eq!(mapped, vec![2, 3, 2, 1, 0, 1, 2, 3, 2, 1, 0, 1, 2]);
    }

    // Tests degenerate lengths map everything to zero
    // Verified by dividing by the zero-length period
    #[test]
    fn test_reflect_101_degenerate_lengths() {
        assert_eq!(reflect_101(-3, 1), 0);
        assert_eq!(reflect_101(5, 1), 0);
        assert_eq!(reflect_101(2, 0), 0);
    }
}
