//! Color Theme
//!
//! User-chosen colors persisted under `customColors`, resolved against the
//! default palette and exposed as CSS custom properties.

use serde::{Deserialize, Serialize};

use crate::config::{palette, COLORS_KEY};
use crate::error::StoreResult;
use crate::storage::KeyValueStore;

/// Brightness offset for the two ends of the background gradient
const GRADIENT_SHADE: i16 = 40;

/// Named color slots of the theme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeSlot {
    Background,
    Container,
    Numbers,
    Labels,
    CountdownBackground,
    Title,
}

impl ThemeSlot {
    pub const ALL: [ThemeSlot; 6] = [
        ThemeSlot::Background,
        ThemeSlot::Container,
        ThemeSlot::Numbers,
        ThemeSlot::Labels,
        ThemeSlot::CountdownBackground,
        ThemeSlot::Title,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ThemeSlot::Background => "Background",
            ThemeSlot::Container => "Timer Window",
            ThemeSlot::Numbers => "Countdown Numbers",
            ThemeSlot::Labels => "Countdown Labels",
            ThemeSlot::CountdownBackground => "Countdown Background",
            ThemeSlot::Title => "Title Text",
        }
    }

    /// Id of the color input editing this slot
    pub fn input_id(self) -> &'static str {
        match self {
            ThemeSlot::Background => "color-bg",
            ThemeSlot::Container => "color-container",
            ThemeSlot::Numbers => "color-numbers",
            ThemeSlot::Labels => "color-labels",
            ThemeSlot::CountdownBackground => "color-countdown-bg",
            ThemeSlot::Title => "color-title",
        }
    }

    /// CSS custom property the stylesheet reads
    pub fn css_var(self) -> &'static str {
        match self {
            ThemeSlot::Background => "--bg",
            ThemeSlot::Container => "--container-bg",
            ThemeSlot::Numbers => "--numbers",
            ThemeSlot::Labels => "--labels",
            ThemeSlot::CountdownBackground => "--countdown-bg",
            ThemeSlot::Title => "--title",
        }
    }

    pub fn default_color(self) -> &'static str {
        match self {
            ThemeSlot::Background => palette::BG,
            ThemeSlot::Container => palette::CONTAINER,
            ThemeSlot::Numbers => palette::NUMBERS,
            ThemeSlot::Labels => palette::LABELS,
            ThemeSlot::CountdownBackground => palette::COUNTDOWN_BG,
            ThemeSlot::Title => palette::TITLE,
        }
    }
}

/// Stored theme; unset slots use the default palette
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTheme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numbers: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countdown_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ColorTheme {
    /// Read the stored theme; missing or malformed data yields the defaults
    pub fn load(storage: &dyn KeyValueStore) -> Self {
        let Some(raw) = storage.get(COLORS_KEY) else {
            return Self::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            log::warn!("[THEME] Ignoring malformed colors: {}", err);
            Self::default()
        })
    }

    pub fn save(&self, storage: &dyn KeyValueStore) -> StoreResult<()> {
        storage.set(COLORS_KEY, &serde_json::to_string(self)?)
    }

    /// Forget every stored color
    pub fn reset(storage: &dyn KeyValueStore) -> StoreResult<()> {
        storage.remove(COLORS_KEY)
    }

    fn slot(&self, slot: ThemeSlot) -> &Option<String> {
        match slot {
            ThemeSlot::Background => &self.bg,
            ThemeSlot::Container => &self.container,
            ThemeSlot::Numbers => &self.numbers,
            ThemeSlot::Labels => &self.labels,
            ThemeSlot::CountdownBackground => &self.countdown_bg,
            ThemeSlot::Title => &self.title,
        }
    }

    fn slot_mut(&mut self, slot: ThemeSlot) -> &mut Option<String> {
        match slot {
            ThemeSlot::Background => &mut self.bg,
            ThemeSlot::Container => &mut self.container,
            ThemeSlot::Numbers => &mut self.numbers,
            ThemeSlot::Labels => &mut self.labels,
            ThemeSlot::CountdownBackground => &mut self.countdown_bg,
            ThemeSlot::Title => &mut self.title,
        }
    }

    pub fn set(&mut self, slot: ThemeSlot, color: String) {
        *self.slot_mut(slot) = Some(color);
    }

    /// Effective color of a slot
    pub fn color(&self, slot: ThemeSlot) -> &str {
        self.slot(slot)
            .as_deref()
            .filter(|color| !color.is_empty())
            .unwrap_or(slot.default_color())
    }

    /// Page background: a gradient around the chosen color, or the color
    /// itself when it cannot be shaded
    pub fn background(&self) -> String {
        let base = self.color(ThemeSlot::Background);
        match (shade_color(base, GRADIENT_SHADE), shade_color(base, -GRADIENT_SHADE)) {
            (Some(lighter), Some(darker)) => {
                format!("linear-gradient(120deg, {} 0%, {} 100%)", lighter, darker)
            }
            _ => base.to_string(),
        }
    }

    /// CSS custom properties for every slot
    pub fn css_properties(&self) -> Vec<(&'static str, String)> {
        ThemeSlot::ALL
            .iter()
            .map(|&slot| {
                let value = match slot {
                    ThemeSlot::Background => self.background(),
                    _ => self.color(slot).to_string(),
                };
                (slot.css_var(), value)
            })
            .collect()
    }
}

/// Shift each RGB channel of a `#rgb`/`#rrggbb` color by `delta`, clamped
pub fn shade_color(color: &str, delta: i16) -> Option<String> {
    let hex = color.trim().strip_prefix('#')?;
    let hex: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let mut shaded = String::from("#");
    for i in 0..3 {
        let channel = u8::from_str_radix(hex.get(i * 2..i * 2 + 2)?, 16).ok()?;
        let shifted = (i16::from(channel) + delta).clamp(0, 255);
        shaded.push_str(&format!("{:02x}", shifted));
    }
    Some(shaded)
}
