//! Color palette produced by populosity quantization

/// Ordered table of RGB colors.
///
/// Entries are ordered by decreasing popularity in the source image. Lookups
/// resolve ties to the earliest entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    colors: Vec<[u8; 3]>,
}

impl Palette {
    /// Create a palette from an ordered list of colors.
    pub fn new(colors: Vec<[u8; 3]>) -> Self {
        Self { colors }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All entries in order.
    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }

    /// Entry at `index`.
    pub fn get(&self, index: usize) -> Option<[u8; 3]> {
        self.colors.get(index).copied()
    }

    /// Check if `rgb` is an entry of the palette.
    pub fn contains(&self, rgb: [u8; 3]) -> bool {
        self.colors.contains(&rgb)
    }

    /// Index of the entry nearest to `rgb` in Euclidean RGB distance.
    ///
    /// The first entry with the minimal distance wins. Returns `None` for an
    /// empty palette.
    pub fn nearest(&self, rgb: [u8; 3]) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (i, c) in self.colors.iter().enumerate() {
            let d = distance_sq(rgb, *c);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }

    /// The entry nearest to `rgb`, see [`Palette::nearest`].
    pub fn nearest_color(&self, rgb: [u8; 3]) -> Option<[u8; 3]> {
        self.nearest(rgb).map(|i| self.colors[i])
    }
}

/// Squared Euclidean distance between two RGB triples.
///
/// Ordering by squared distance is the same as ordering by distance.
#[inline]
pub fn distance_sq(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x.abs_diff(y) as u32;
            d * d
        })
        .sum()
}
