use anyhow::Result;

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

    fn pick<'a>(&mut self, options: &[&'a str]) -> &'a str {
        options[(self.next_u64() % options.len() as u64) as usize]
    }
}

/// Write a sample CSV with a spread of column shapes: a high-cardinality
/// integer (id), text columns, a low-cardinality integer (team), a float
/// (score), and a column with missing fields (notes).
fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let first_names = ["Ada", "Brian", "Carol", "Dennis", "Erika", "Frank", "Grace", "Hal"];
    let last_names = ["Katz", "Lopez", "Moran", "Novak", "Osei", "Price", "Quinn", "Reyes"];
    let departments = ["Engineering", "Sales", "Support", "Finance"];

    let path = "sample_data.csv";
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["id", "name", "department", "team", "score", "notes"])?;

    for id in 1..=200u32 {
        let name = format!("{} {}", rng.pick(&first_names), rng.pick(&last_names));
        let department = rng.pick(&departments);
        let team = 1 + rng.next_u64() % 5;
        let score = (rng.next_f64() * 1000.0).round() / 10.0;
        let notes = if rng.next_f64() < 0.15 {
            String::new()
        } else {
            format!("review {}", 2020 + rng.next_u64() % 6)
        };

        writer.write_record([
            id.to_string(),
            name,
            department.to_string(),
            team.to_string(),
            score.to_string(),
            notes,
        ])?;
    }
    writer.flush()?;

    println!("Wrote {path} (200 rows)");
    Ok(())
}
