use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

/// Responsive width threshold selecting which layout vector applies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize,
)]
pub enum Breakpoint {
    #[strum(serialize = "lg")]
    #[serde(rename = "lg")]
    Lg,
    #[strum(serialize = "md")]
    #[serde(rename = "md")]
    Md,
    #[strum(serialize = "sm")]
    #[serde(rename = "sm")]
    Sm,
}

impl Breakpoint {
    /// Lower width cutoff in CSS pixels.
    pub fn min_width_px(self) -> u32 {
        match self {
            Self::Lg => 1200,
            Self::Md => 996,
            Self::Sm => 768,
        }
    }

    /// All breakpoints use a 12-column grid.
    pub fn columns(self) -> u32 {
        12
    }

    /// Breakpoint for a viewport width. Widths below the `sm` cutoff still
    /// render with the `sm` layout; it is the narrowest one defined.
    pub fn for_width(width_px: f64) -> Self {
        if width_px >= Self::Lg.min_width_px() as f64 {
            Self::Lg
        } else if width_px >= Self::Md.min_width_px() as f64 {
            Self::Md
        } else {
            Self::Sm
        }
    }
}

/// Grid row height in CSS pixels, matching the layout collaborator.
pub const ROW_HEIGHT_PX: u32 = 30;

/// The five cards the dashboard knows about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize,
)]
pub enum CardId {
    #[strum(serialize = "crypto")]
    #[serde(rename = "crypto")]
    Crypto,
    #[strum(serialize = "btc-dominance")]
    #[serde(rename = "btc-dominance")]
    BtcDominance,
    #[strum(serialize = "news")]
    #[serde(rename = "news")]
    News,
    #[strum(serialize = "weather")]
    #[serde(rename = "weather")]
    Weather,
    #[strum(serialize = "analytics")]
    #[serde(rename = "analytics")]
    Analytics,
}

/// Position and size of one card within one breakpoint's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub id: CardId,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub min_w: u32,
    pub min_h: u32,
}

impl LayoutEntry {
    pub const fn new(id: CardId, x: u32, y: u32, w: u32, h: u32, min_w: u32, min_h: u32) -> Self {
        Self { id, x, y, w, h, min_w, min_h }
    }
}

/// Per-breakpoint layout vectors. Replaced wholesale on every
/// layout-change event; compared for equality when testing reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSet {
    pub lg: Vec<LayoutEntry>,
    pub md: Vec<LayoutEntry>,
    pub sm: Vec<LayoutEntry>,
}

impl LayoutSet {
    pub fn get(&self, breakpoint: Breakpoint) -> &[LayoutEntry] {
        match breakpoint {
            Breakpoint::Lg => &self.lg,
            Breakpoint::Md => &self.md,
            Breakpoint::Sm => &self.sm,
        }
    }

    /// Invariant check: every breakpoint covers the five known cards
    /// exactly once.
    pub fn is_complete(&self) -> bool {
        Breakpoint::iter().all(|bp| {
            let entries = self.get(bp);
            entries.len() == CardId::iter().count()
                && CardId::iter().all(|id| entries.iter().filter(|e| e.id == id).count() == 1)
        })
    }

    pub fn entry(&self, breakpoint: Breakpoint, id: CardId) -> Option<&LayoutEntry> {
        self.get(breakpoint).iter().find(|e| e.id == id)
    }
}

impl Default for LayoutSet {
    fn default() -> Self {
        default_layouts()
    }
}

/// Hardcoded initial grid arrangement. `lg` and `md` share a two-column
/// top row; `sm` stacks everything full-width.
pub fn default_layouts() -> LayoutSet {
    use CardId::*;
    let wide = vec![
        LayoutEntry::new(Crypto, 0, 0, 8, 10, 6, 8),
        LayoutEntry::new(BtcDominance, 8, 0, 4, 10, 4, 8),
        LayoutEntry::new(News, 0, 10, 12, 8, 8, 6),
        LayoutEntry::new(Weather, 0, 18, 6, 8, 4, 6),
        LayoutEntry::new(Analytics, 6, 18, 6, 8, 4, 6),
    ];
    LayoutSet {
        lg: wide.clone(),
        md: wide,
        sm: vec![
            LayoutEntry::new(Crypto, 0, 0, 12, 10, 6, 8),
            LayoutEntry::new(BtcDominance, 0, 10, 12, 8, 4, 8),
            LayoutEntry::new(News, 0, 18, 12, 8, 8, 6),
            LayoutEntry::new(Weather, 0, 26, 12, 8, 4, 6),
            LayoutEntry::new(Analytics, 0, 34, 12, 8, 4, 6),
        ],
    }
}

/// Whether the grid currently accepts drag/resize interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GridMode {
    #[default]
    View,
    Edit,
}

impl GridMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::View => Self::Edit,
            Self::Edit => Self::View,
        }
    }

    pub fn is_edit(self) -> bool {
        matches!(self, Self::Edit)
    }
}
