use std::collections::BTreeMap;

const DEFAULT_BACKGROUND: &str = "#007bff";
const LIGHT_TEXT: &str = "#fff";
const DARK_TEXT: &str = "#000";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn luminance(self) -> f64 {
        let Rgb(r, g, b) = self;
        (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.
    }
}

/// Most common color of an RGBA pixel buffer.
///
/// Transparent and near-white pixels are skipped, the rest are grouped into
/// buckets of 5 bits per channel and the average of the largest bucket wins.
pub fn dominant_color(rgba: &[u8]) -> Option<Rgb> {
    let mut buckets: BTreeMap<(u8, u8, u8), (u64, [u64; 3])> = BTreeMap::new();
    for pixel in rgba.chunks_exact(4) {
        let (r, g, b, a) = (pixel[0], pixel[1], pixel[2], pixel[3]);
        if a < 125 || (r > 250 && g > 250 && b > 250) {
            continue;
        }
        let (count, sum) = buckets.entry((r >> 3, g >> 3, b >> 3)).or_default();
        *count += 1;
        sum[0] += u64::from(r);
        sum[1] += u64::from(g);
        sum[2] += u64::from(b);
    }

    buckets
        .into_values()
        .max_by_key(|&(count, _)| count)
        .map(|(count, [r, g, b])| Rgb((r / count) as u8, (g / count) as u8, (b / count) as u8))
}

#[derive(Clone, Debug, PartialEq)]
pub struct ButtonTheme {
    pub background: String,
    pub foreground: &'static str,
}

impl Default for ButtonTheme {
    fn default() -> Self {
        ButtonTheme {
            background: DEFAULT_BACKGROUND.to_string(),
            foreground: LIGHT_TEXT,
        }
    }
}

impl ButtonTheme {
    pub fn from_color(color: Rgb) -> Self {
        let Rgb(r, g, b) = color;
        let foreground = if color.luminance() > 0.5 {
            DARK_TEXT
        } else {
            LIGHT_TEXT
        };
        ButtonTheme {
            background: format!("rgb({}, {}, {})", r, g, b),
            foreground,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "background-color: {}; color: {};",
            self.background, self.foreground
        )
    }
}
