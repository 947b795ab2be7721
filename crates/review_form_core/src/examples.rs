/// Canned reviews offered by the page's example buttons.
pub const EXAMPLE_REVIEWS: [&str; 4] = [
    "The cinematography was absolutely stunning and the acting was superb, but the plot felt somewhat predictable.",
    "A masterpiece of storytelling with brilliant performances that kept me engaged from start to finish.",
    "Disappointing and boring. The characters were poorly developed and the story made no sense.",
    "The visual effects were amazing, but the weak script and terrible acting ruined the experience.",
];
