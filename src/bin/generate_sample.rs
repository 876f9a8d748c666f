use serde::Serialize;

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// One output row, in the column layout of the public fare dataset.
#[derive(Serialize)]
struct Row<'a> {
    airline: &'a str,
    flight: String,
    source_city: &'a str,
    departure_time: &'a str,
    stops: &'a str,
    destination_city: &'a str,
    class: &'a str,
    duration: f64,
    days_left: u32,
    price: u64,
}

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);

    // (name, code, price factor)
    let airlines = [
        ("AirAsia", "I5", 0.80),
        ("Indigo", "6E", 0.90),
        ("GO_FIRST", "G8", 0.95),
        ("SpiceJet", "SG", 1.00),
        ("Air_India", "AI", 1.20),
        ("Vistara", "UK", 1.35),
    ];
    let destinations = ["Mumbai", "Bangalore", "Kolkata", "Hyderabad", "Chennai"];
    let times = [
        "Early_Morning",
        "Morning",
        "Afternoon",
        "Evening",
        "Night",
        "Late_Night",
    ];
    // (label, price factor, extra hours)
    let stops = [("zero", 1.0, 0.0), ("one", 1.25, 4.0), ("two_or_more", 1.4, 9.0)];

    let output_path = "sample_flights.csv";
    let mut writer = csv::Writer::from_path(output_path)?;

    let n_rows = 3000;
    for _ in 0..n_rows {
        let &(airline, code, airline_factor) = rng.pick(&airlines);
        let destination = *rng.pick(&destinations);
        let time = *rng.pick(&times);
        let &(stop, stop_factor, extra_hours) = rng.pick(&stops);
        let days_left = 1 + (rng.next_u64() % 49) as u32;

        // Fares climb steeply in the last two weeks before departure.
        let urgency = if days_left < 15 {
            1.0 + (15 - days_left) as f64 * 0.08
        } else {
            1.0
        };
        let base = 3500.0 + rng.next_f64() * 2500.0;
        let price = (base * airline_factor * stop_factor * urgency).round() as u64;
        let duration = ((2.0 + extra_hours + rng.next_f64() * 3.0) * 100.0).round() / 100.0;

        writer.serialize(Row {
            airline,
            flight: format!("{code}-{}", 100 + rng.next_u64() % 900),
            source_city: "Delhi",
            departure_time: time,
            stops: stop,
            destination_city: destination,
            class: "Economy",
            duration,
            days_left,
            price,
        })?;
    }
    writer.flush()?;

    println!("Wrote {n_rows} flights to {output_path}");
    Ok(())
}
