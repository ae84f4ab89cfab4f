use rand::Rng;

use crate::grid::GridDimensions;

/// Random initial population: each cell is alive with probability `density`.
///
/// `density` outside `[0, 1]` is clamped.
pub fn seed_cells<R: Rng + ?Sized>(dims: GridDimensions, density: f64, rng: &mut R) -> Vec<u32> {
    let density = density.clamp(0.0, 1.0);
    (0..dims.cell_count())
        .map(|_| u32::from(rng.r#gen::<f64>() < density))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn d() -> GridDimensions {
        GridDimensions::new(32, 32).unwrap()
    }

    #[test]
    fn one_value_per_cell_and_binary() {
        let cells = seed_cells(d(), 0.4, &mut StdRng::seed_from_u64(1));
        assert_eq!(cells.len(), 1024);
        assert!(cells.iter().all(|&c| c <= 1));
    }

    #[test]
    fn extremes_are_exact() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(seed_cells(d(), 0.0, &mut rng).iter().all(|&c| c == 0));
        assert!(seed_cells(d(), 1.0, &mut rng).iter().all(|&c| c == 1));
    }

    #[test]
    fn same_seed_same_population() {
        let a = seed_cells(d(), 0.4, &mut StdRng::seed_from_u64(42));
        let b = seed_cells(d(), 0.4, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn density_is_roughly_respected() {
        let dims = GridDimensions::new(200, 200).unwrap();
        let cells = seed_cells(dims, 0.4, &mut StdRng::seed_from_u64(3));
        let alive = cells.iter().filter(|&&c| c == 1).count() as f64;
        let ratio = alive / dims.cell_count() as f64;
        assert!((0.37..0.43).contains(&ratio), "ratio {ratio}");
    }
}
