//! Decorative loading visuals and messages.

use rand::Rng;

/// Glyphs shown while a beer is loading or after a failure.
pub const LOADER_VISUALS: [&str; 4] = [
    "   .~~~~.\n   i====i_\n   |cccc|_)\n   |cccc|\n   `-==-'",
    "    (  )\n   .~~~~.\n   |    |]\n   |~~~~|\n   '----'",
    "   .-.  .-.\n  |   ||   |\n  |~~~||~~~|\n  '---''---'",
    "     ___\n    |___|\n    |   |\n   /     \\\n  |~~~~~~~|\n  '-------'",
];

pub const LOADING_MESSAGES: [&str; 5] = [
    "Brewing your beer! Please wait...",
    "Prost! Prost! Prost!",
    "Sláinte! Sláinte! Sláinte!",
    "Dont be afraid of Dark, Guinness for life...",
    "Drink Responsibly",
];

/// Picks an index in `0..n` uniformly. Returns 0 when `n` is 0.
pub fn pick<R: Rng + ?Sized>(rng: &mut R, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    rng.random_range(0..n)
}
