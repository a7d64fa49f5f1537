use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};

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

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

/// Artists and how likely each is to appear (relative weight).
const ARTISTS: [(&str, u64); 8] = [
    ("Taylor Swift", 9),
    ("Drake", 7),
    ("Bad Bunny", 6),
    ("The Weeknd", 5),
    ("Billie Eilish", 4),
    ("SZA", 3),
    ("Tommy Richman", 1),
    ("Beyoncé", 3),
];

const WORDS: [&str; 10] = [
    "Midnight", "Love", "Summer", "Ghost", "City", "Fire", "Dream", "Heart", "Road", "Gold",
];

fn pick_artist(rng: &mut SimpleRng) -> &'static str {
    let total: u64 = ARTISTS.iter().map(|(_, w)| w).sum();
    let mut roll = rng.below(total);
    for (name, weight) in ARTISTS {
        if roll < weight {
            return name;
        }
        roll -= weight;
    }
    ARTISTS[0].0
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let epoch = NaiveDate::from_ymd_opt(2015, 1, 1).context("epoch date")?;

    let output_path = "spotify-2024.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record([
        "Track",
        "Album Name",
        "Artist",
        "Release Date",
        "Track Score",
        "Spotify Streams",
        "Spotify Popularity",
    ])?;

    let rows = 400;
    for i in 0..rows {
        let title = format!(
            "{} {}",
            WORDS[rng.below(WORDS.len() as u64) as usize],
            WORDS[rng.below(WORDS.len() as u64) as usize]
        );
        let album = format!("{} Sessions", WORDS[rng.below(WORDS.len() as u64) as usize]);
        let artist = pick_artist(&mut rng);

        let released = epoch + Duration::days(rng.below(3400) as i64);
        // Alternate the two layouts the loader accepts.
        let release_date = if i % 2 == 0 {
            released.format("%-m/%-d/%Y").to_string()
        } else {
            released.format("%Y-%m-%d").to_string()
        };

        // Every 25th score is unparseable and every 40th is blank.
        let track_score = match i {
            i if i % 25 == 0 => "N/A".to_string(),
            i if i % 40 == 0 => String::new(),
            _ => format!("{:.1}", 19.4 + rng.next_f64() * 700.0),
        };
        let streams = rng.below(4_000_000_000);
        let popularity = if i % 30 == 0 {
            String::new()
        } else {
            (40 + rng.below(60)).to_string()
        };

        writer.write_record([
            title,
            album,
            artist.to_string(),
            release_date,
            track_score,
            streams.to_string(),
            popularity,
        ])?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {rows} tracks to {output_path}");
    Ok(())
}
