use std::time::{Duration, Instant};

use client_frontend_core::{
    DrawCommand, FrontendConfig, InputEvent, MapHost, MapStyle, PointerButtons, RecordingSurface,
    RedrawConfig, RedrawMode,
};
use map_core::{
    AxialHex, PixelPoint, SpriteDefinition, SpriteId, SurfaceSize, hex_polygon_vertices, hex_to_pixel,
};

const FRAME: Duration = Duration::from_millis(17);

fn host(mode: RedrawMode, sprites: Vec<SpriteDefinition>) -> MapHost {
    let config = FrontendConfig {
        redraw: RedrawConfig {
            mode,
            ..RedrawConfig::default()
        },
        sprites,
        ..FrontendConfig::default()
    };
    let mut host = MapHost::new(config, MapStyle::default());
    host.start(SurfaceSize::new(900.0, 600.0).unwrap()).unwrap();
    host
}

fn wheel(host: &mut MapHost, delta_y: f64) {
    host.handle_event(&InputEvent::Wheel {
        delta_y,
        cursor: PixelPoint::new(300.0, 200.0),
    });
}

#[test]
fn first_tick_draws_a_full_frame() {
    let mut host = host(RedrawMode::Reactive, Vec::new());
    let mut surface = RecordingSurface::new();

    let report = host.tick(Instant::now(), &mut surface).unwrap();
    assert!(report.rebuilt && report.presented);
    assert_eq!(surface.present_count(), 1);
    assert_eq!(surface.presented()[0], DrawCommand::Clear);
    assert!(surface.stroked().count() > 100);

    // Only the origin hex is filled on a fresh map.
    let fills: Vec<_> = surface.filled().collect();
    assert_eq!(fills.len(), 1);
    assert_eq!(fills[0], &hex_polygon_vertices(PixelPoint::new(450.0, 300.0), 20.0)[..]);
}

#[test]
fn burst_of_wheel_events_coalesces_into_one_redraw() {
    let mut host = host(RedrawMode::Reactive, Vec::new());
    let mut surface = RecordingSurface::new();
    let t0 = Instant::now();
    host.tick(t0, &mut surface).unwrap();

    for _ in 0..25 {
        wheel(&mut host, -40.0);
    }
    let report = host.tick(t0 + FRAME, &mut surface).unwrap();
    assert!(report.rebuilt);
    assert_eq!(surface.present_count(), 2);

    let idle = host.tick(t0 + FRAME * 2, &mut surface).unwrap();
    assert!(!idle.rebuilt && !idle.presented);
    assert_eq!(surface.present_count(), 2);
}

#[test]
fn change_inside_throttle_window_is_drawn_later() {
    let mut host = host(RedrawMode::Reactive, Vec::new());
    let mut surface = RecordingSurface::new();
    let t0 = Instant::now();
    host.tick(t0, &mut surface).unwrap();

    host.zoom_in();
    let early = host.tick(t0 + Duration::from_millis(3), &mut surface).unwrap();
    assert!(!early.rebuilt);

    let later = host.tick(t0 + FRAME, &mut surface).unwrap();
    assert!(later.rebuilt && later.presented);
    assert!(matches!(
        surface.presented()[1],
        DrawCommand::SetOutlineStyle { .. }
    ));
}

#[test]
fn both_mode_presents_each_frame_from_the_cached_scene() {
    let mut host = host(RedrawMode::Both, Vec::new());
    let mut surface = RecordingSurface::new();
    let t0 = Instant::now();

    let first = host.tick(t0, &mut surface).unwrap();
    for i in 1..5 {
        let report = host.tick(t0 + FRAME * i, &mut surface).unwrap();
        assert!(!report.rebuilt);
        assert!(report.presented);
        assert_eq!(report.commands, first.commands);
    }
    assert_eq!(surface.present_count(), 5);
}

#[test]
fn clicked_hex_is_filled_on_next_frame() {
    let mut host = host(RedrawMode::Reactive, Vec::new());
    let mut surface = RecordingSurface::new();
    let t0 = Instant::now();
    host.tick(t0, &mut surface).unwrap();

    let viewport = host.current_viewport().unwrap();
    let target = hex_to_pixel(AxialHex::new(-3, 2), &viewport);
    host.handle_event(&InputEvent::PointerDown {
        buttons: PointerButtons::PRIMARY,
        position: target,
    });
    host.handle_event(&InputEvent::PointerUp);
    host.tick(t0 + FRAME, &mut surface).unwrap();

    let selected = hex_polygon_vertices(target, 20.0);
    assert!(surface.filled().any(|points| points == &selected[..]));
    assert_eq!(surface.filled().count(), 2);
}

#[test]
fn scenario_d_sprites_scale_with_zoom() {
    let sprites = vec![SpriteDefinition::new(1, "Jita", AxialHex::new(2, 2))];
    let mut host = host(RedrawMode::Reactive, sprites);
    let mut surface = RecordingSurface::new();
    let t0 = Instant::now();

    host.tick(t0, &mut surface).unwrap();
    let (id, _, size) = surface.sprites().next().unwrap();
    assert_eq!(id, SpriteId(1));
    assert_eq!(size, 4.0);

    for _ in 0..480 {
        host.zoom_in();
    }
    host.tick(t0 + FRAME, &mut surface).unwrap();
    let viewport = host.current_viewport().unwrap();
    let (_, position, size) = surface.sprites().next().unwrap();
    assert_eq!(viewport.hex_radius(), 500.0);
    assert_eq!(size, 100.0);
    assert_eq!(position, hex_to_pixel(AxialHex::new(2, 2), &viewport));
}

#[test]
fn frame_loop_redraws_without_changes() {
    let mut host = host(RedrawMode::FrameLoop, Vec::new());
    let mut surface = RecordingSurface::new();
    let t0 = Instant::now();
    for i in 0..4 {
        let report = host.tick(t0 + FRAME * i, &mut surface).unwrap();
        assert!(report.rebuilt && report.presented);
    }
    assert_eq!(surface.present_count(), 4);
}

#[test]
fn stopped_host_draws_nothing() {
    let mut host = host(RedrawMode::FrameLoop, Vec::new());
    let mut surface = RecordingSurface::new();
    host.stop();
    let report = host.tick(Instant::now(), &mut surface).unwrap();
    assert!(!report.presented);
    assert_eq!(surface.present_count(), 0);
}
