//! Frontend configuration structures and loaders.
//!
//! Settings here are shared by every front-end that hosts the map: radius
//! bounds, gesture tuning, redraw scheduling and the sprite layout.

use std::env;
use std::time::Duration;

use map_core::{AxialHex, MapConfig, SpriteDefinition, ZoomPolicy, ensure_unique_ids};

use crate::scheduler::RedrawMode;

/// Frontend-specific configuration.
#[derive(Clone, Debug)]
pub struct FrontendConfig {
    pub map: MapConfig,
    pub interaction: InteractionConfig,
    pub redraw: RedrawConfig,
    pub sprites: Vec<SpriteDefinition>,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            map: MapConfig::default(),
            interaction: InteractionConfig::default(),
            redraw: RedrawConfig::default(),
            sprites: default_sprites(),
        }
    }
}

impl FrontendConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MAP_RADIUS_MIN` / `MAP_RADIUS_MAX` - Hex radius bounds (default: 10 / 500)
    /// - `MAP_INITIAL_RADIUS` - Starting hex radius (default: 20)
    /// - `MAP_ZOOM_POLICY` - `fixed` or `scaled` (default: scaled)
    /// - `MAP_DRAG_THRESHOLD` - Pixels before a press becomes a pan (default: 4)
    /// - `MAP_KEY_PAN_STEP` - Pixels per arrow key press (default: 10)
    /// - `MAP_SPRITE_HIT_SLOP` - Minimum sprite hit radius (default: 8)
    /// - `MAP_REDRAW_MODE` - `reactive`, `frame_loop` or `both` (default: both)
    /// - `MAP_MAX_REDRAW_HZ` - Reactive redraw rate cap (default: 60)
    /// - `MAP_FRAME_RATE_HZ` - Frame loop rate (default: 60)
    /// - `MAP_SPRITES` - JSON array of `{id, name, anchor: {q, r}}`
    ///
    /// Unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        let bounds = config.map.radius_bounds;
        let min = read_env::<f64>("MAP_RADIUS_MIN").unwrap_or(bounds.min());
        let max = read_env::<f64>("MAP_RADIUS_MAX").unwrap_or(bounds.max());
        let initial = read_env::<f64>("MAP_INITIAL_RADIUS").unwrap_or(config.map.initial_radius);
        match MapConfig::with_radius(min, max, initial) {
            Ok(map) => config.map = map,
            Err(error) => tracing::warn!("Ignoring radius settings: {}", error),
        }
        if let Some(policy) = read_env::<ZoomPolicy>("MAP_ZOOM_POLICY") {
            config.map = config.map.with_zoom_policy(policy);
        }

        if let Some(threshold) = read_env::<f64>("MAP_DRAG_THRESHOLD").filter(|v| v.is_finite()) {
            config.interaction.drag_threshold = threshold.max(0.0);
        }
        if let Some(step) = read_env::<f64>("MAP_KEY_PAN_STEP").filter(|v| v.is_finite()) {
            config.interaction.key_pan_step = step;
        }
        if let Some(slop) = read_env::<f64>("MAP_SPRITE_HIT_SLOP").filter(|v| v.is_finite()) {
            config.interaction.sprite_hit_slop = slop.max(0.0);
        }

        if let Some(mode) = read_env::<RedrawMode>("MAP_REDRAW_MODE") {
            config.redraw.mode = mode;
        }
        if let Some(hz) = read_env::<f64>("MAP_MAX_REDRAW_HZ").filter(|hz| valid_rate(*hz)) {
            config.redraw.max_redraw_hz = hz;
        }
        if let Some(hz) = read_env::<f64>("MAP_FRAME_RATE_HZ").filter(|hz| valid_rate(*hz)) {
            config.redraw.frame_rate_hz = hz;
        }

        if let Ok(raw) = env::var("MAP_SPRITES") {
            match parse_sprites(&raw) {
                Ok(sprites) => config.sprites = sprites,
                Err(error) => tracing::warn!("Ignoring MAP_SPRITES: {}", error),
            }
        }

        config
    }
}

/// Gesture tuning for the interaction controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionConfig {
    /// Pointer displacement (pixels) that turns a press into a pan.
    pub drag_threshold: f64,
    /// Origin shift (pixels) per arrow key press.
    pub key_pan_step: f64,
    /// Sprites are grabbable within at least this many pixels of their center.
    pub sprite_hit_slop: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            drag_threshold: MapConfig::DRAG_THRESHOLD,
            key_pan_step: MapConfig::KEY_PAN_STEP,
            sprite_hit_slop: 8.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RedrawConfig {
    pub mode: RedrawMode,
    pub max_redraw_hz: f64,
    pub frame_rate_hz: f64,
}

impl Default for RedrawConfig {
    fn default() -> Self {
        Self {
            mode: RedrawMode::default(),
            max_redraw_hz: Self::DEFAULT_RATE_HZ,
            frame_rate_hz: Self::DEFAULT_RATE_HZ,
        }
    }
}

impl RedrawConfig {
    pub const DEFAULT_RATE_HZ: f64 = 60.0;

    /// Rates outside `(0, 1000]` fall back to [`Self::DEFAULT_RATE_HZ`].
    pub fn min_redraw_interval(&self) -> Duration {
        rate_interval(self.max_redraw_hz)
    }

    pub fn frame_interval(&self) -> Duration {
        rate_interval(self.frame_rate_hz)
    }
}

fn rate_interval(hz: f64) -> Duration {
    let hz = if valid_rate(hz) { hz } else { RedrawConfig::DEFAULT_RATE_HZ };
    Duration::from_secs_f64(1.0 / hz)
}

/// Parses the `MAP_SPRITES` JSON array. Sprite ids must be unique.
pub fn parse_sprites(raw: &str) -> anyhow::Result<Vec<SpriteDefinition>> {
    let sprites: Vec<SpriteDefinition> = serde_json::from_str(raw)?;
    ensure_unique_ids(&sprites)?;
    Ok(sprites)
}

/// Star systems placed on a fresh map.
pub fn default_sprites() -> Vec<SpriteDefinition> {
    vec![
        SpriteDefinition::new(1, "Jita", AxialHex::new(0, 0)),
        SpriteDefinition::new(2, "Amarr", AxialHex::new(-6, 3)),
        SpriteDefinition::new(3, "Dodixie", AxialHex::new(5, 2)),
        SpriteDefinition::new(4, "Rens", AxialHex::new(-2, -4)),
        SpriteDefinition::new(5, "Hek", AxialHex::new(7, -5)),
    ]
}

fn valid_rate(hz: f64) -> bool {
    hz.is_finite() && hz > 0.0 && hz <= 1000.0
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use map_core::SpriteId;

    #[test]
    fn defaults() {
        let config = FrontendConfig::default();
        assert_eq!(config.interaction.drag_threshold, 4.0);
        assert_eq!(config.interaction.key_pan_step, 10.0);
        assert_eq!(config.redraw.mode, RedrawMode::Both);
        assert_eq!(config.map.zoom_policy, ZoomPolicy::Scaled);
        assert_eq!(config.sprites.len(), 5);
    }

    #[test]
    fn parses_sprite_json() {
        let sprites =
            parse_sprites(r#"[{"id": 9, "name": "Thera", "anchor": {"q": -3, "r": 1}}]"#).unwrap();
        assert_eq!(sprites, vec![SpriteDefinition::new(9, "Thera", AxialHex::new(-3, 1))]);
        assert_eq!(sprites[0].id, SpriteId(9));
        assert!(parse_sprites("[{\"id\": 1}]").is_err());
    }

    #[test]
    fn rejects_repeated_sprite_ids() {
        let raw = r#"[
            {"id": 4, "name": "Rens", "anchor": {"q": 0, "r": 0}},
            {"id": 4, "name": "Hek", "anchor": {"q": 2, "r": -1}}
        ]"#;
        let error = parse_sprites(raw).unwrap_err();
        assert_eq!(
            error.downcast_ref::<map_core::MapError>(),
            Some(&map_core::MapError::DuplicateSprite(SpriteId(4)))
        );
    }

    #[test]
    fn intervals_follow_rates() {
        let redraw = RedrawConfig {
            max_redraw_hz: 50.0,
            frame_rate_hz: 25.0,
            ..RedrawConfig::default()
        };
        assert_eq!(redraw.min_redraw_interval(), Duration::from_millis(20));
        assert_eq!(redraw.frame_interval(), Duration::from_millis(40));
    }

    #[test]
    fn rejects_out_of_range_rates() {
        assert!(valid_rate(60.0));
        assert!(!valid_rate(0.0));
        assert!(!valid_rate(f64::NAN));
        assert!(!valid_rate(-5.0));
    }

    #[test]
    fn invalid_rates_fall_back_to_default_interval() {
        let redraw = RedrawConfig {
            max_redraw_hz: 0.0,
            frame_rate_hz: f64::NAN,
            ..RedrawConfig::default()
        };
        let default = Duration::from_secs_f64(1.0 / RedrawConfig::DEFAULT_RATE_HZ);
        assert_eq!(redraw.min_redraw_interval(), default);
        assert_eq!(redraw.frame_interval(), default);
    }
}
