// ---------------------------------------------------------------------------
// Synthetic presence/absence matrices
// ---------------------------------------------------------------------------

/// Shape and randomness of a generated matrix.
#[derive(Debug, Clone)]
pub struct SampleOptions {
    pub sites: usize,
    pub species: usize,
    /// Probability that a species is present at a site (0.0 - 1.0).
    pub density: f64,
    pub seed: u64,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            sites: 20,
            species: 100,
            density: 0.15,
            seed: 42,
        }
    }
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

/// Generate the CSV text of a valid matrix.
///
/// Every species is present somewhere and every site holds something: a
/// species that draws no presence is placed at one random site, and a site
/// left empty afterwards receives one random species. Same options, same text.
pub fn generate(options: &SampleOptions) -> String {
    let n_sites = options.sites.max(1);
    let n_species = options.species.max(1);
    let mut rng = SimpleRng::new(options.seed);

    let mut grid = vec![vec![false; n_sites]; n_species];
    for row in &mut grid {
        for cell in row.iter_mut() {
            *cell = rng.next_f64() < options.density;
        }
        if !row.iter().any(|&p| p) {
            let site = rng.below(n_sites);
            row[site] = true;
        }
    }
    for site in 0..n_sites {
        if !grid.iter().any(|row| row[site]) {
            let sp = rng.below(n_species);
            grid[sp][site] = true;
        }
    }

    let mut text = String::new();
    for site in 0..n_sites {
        text.push_str(&format!(",site_{:03}", site + 1));
    }
    text.push('\n');
    for (sp, row) in grid.iter().enumerate() {
        text.push_str(&format!("species_{:04}", sp + 1));
        for &present in row {
            text.push_str(if present { ",1" } else { ",0" });
        }
        text.push('\n');
    }
    text
}
