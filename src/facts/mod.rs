use rand::Rng;

pub const SPACE_FACTS: [&str; 5] = [
    "A day on Venus is longer than its year!",
    "The footprints on the Moon will last for 100 million years.",
    "The Sun makes up 99.86% of our solar system's mass.",
    "One million Earths could fit inside the Sun.",
    "A year on Mercury is only 88 Earth days.",
];

/// Pick one fact uniformly at random.
pub fn random_fact<R: Rng>(rng: &mut R) -> &'static str {
    SPACE_FACTS[rng.random_range(0..SPACE_FACTS.len())]
}
