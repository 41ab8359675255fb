//! Label colours accepted by Planka.

/// Every colour name a Planka 1.x board accepts for a label.
pub const LABEL_COLOURS: &[&str] = &[
    "berry-red",
    "pumpkin-orange",
    "lagoon-blue",
    "pink-tulip",
    "light-mud",
    "orange-peel",
    "bright-moss",
    "antique-blue",
    "dark-granite",
    "lagune-yellow",
    "sunny-grass",
    "morning-sky",
    "light-orange",
    "midnight-blue",
    "tank-green",
    "gun-metal",
    "wet-moss",
    "red-burgundy",
    "light-concrete",
    "apricot-red",
    "desert-sand",
    "navy-blue",
    "egg-yellow",
    "coral-green",
    "light-cocoa",
];

/// Palette sorted alphabetically, for display.
pub fn sorted_colours() -> Vec<&'static str> {
    let mut colours = LABEL_COLOURS.to_vec();
    colours.sort_unstable();
    colours
}
