//! Theme
//!
//! Color tokens used throughout the dashboard, plus the renderer-owned
//! mapping from reaction category to display color. Data records stay purely
//! quantitative; presentation attributes live here.

pub const BACKGROUND: &str = "#0D1117";
pub const CARD: &str = "#161B22";
pub const CARD_INSET: &str = "#0F1418";
pub const BAR_TRACK: &str = "#0B0E11";
pub const GRID_LINE: &str = "#111318";
pub const PRIMARY_TEXT: &str = "#E6E6E6";
pub const SECONDARY_TEXT: &str = "#A3A3A3";
pub const ACCENT_YELLOW: &str = "#F7C843";
pub const ACCENT_BLUE: &str = "#58A6FF";
pub const ACCENT_GREEN: &str = "#3FB950";
pub const RED: &str = "#F85149";
pub const PURPLE: &str = "#B281EB";
pub const NEUTRAL_GRAY: &str = "#6E7681";

/// Display color for a reaction category. Unknown categories fall back to a
/// neutral swatch so new reaction types never break the pie or legend.
pub fn reaction_color(name: &str) -> &'static str {
    match name {
        "Like" => ACCENT_BLUE,
        "Love" => RED,
        "Insightful" => ACCENT_YELLOW,
        "Confused" => PURPLE,
        _ => NEUTRAL_GRAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_reactions_have_distinct_colors() {
        let colors = ["Like", "Love", "Insightful", "Confused"].map(reaction_color);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_unknown_reaction_falls_back_to_neutral() {
        assert_eq!(reaction_color("Celebrate"), NEUTRAL_GRAY);
    }
}
