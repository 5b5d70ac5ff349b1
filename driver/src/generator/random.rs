use anyhow::Context;
use matcore::{Element, Matrix};
use rand::distributions::uniform::SampleUniform;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fmt::Display;

/// Cell types the generator can fill, with the inclusive range it draws from.
pub trait GeneratedElement: Element + SampleUniform + PartialOrd + Display {
    const LOW: Self;
    const HIGH: Self;
}

impl GeneratedElement for i64 {
    const LOW: Self = 1;
    const HIGH: Self = 10;
}

impl GeneratedElement for f64 {
    const LOW: Self = 1.0;
    const HIGH: Self = 10.0;
}

/// Seeded source of random operand matrices.
pub struct MatrixGenerator {
    rng: StdRng,
}

impl MatrixGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn matrix<T: GeneratedElement>(
        &mut self,
        rows: usize,
        cols: usize,
    ) -> anyhow::Result<Matrix<T>> {
        rows.checked_mul(cols)
            .context("overflow computing cell count for generator")?;

        let data: Vec<Vec<T>> = (0..rows)
            .map(|_| {
                (0..cols)
                    .map(|_| self.rng.gen_range(T::LOW..=T::HIGH))
                    .collect()
            })
            .collect();
        Matrix::from_rows(data)
            .with_context(|| format!("generating {}x{} matrix", rows, cols))
    }

    pub fn square<T: GeneratedElement>(&mut self, size: usize) -> anyhow::Result<Matrix<T>> {
        self.matrix(size, size)
    }
}
