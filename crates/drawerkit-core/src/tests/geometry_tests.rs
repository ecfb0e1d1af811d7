use super::*;

#[test]
fn closed_offset_is_viewport_height() {
    let config = DrawerConfig::new();
    let offsets = CanonicalOffsets::resolve(&config, ViewportMetrics::new(800.0, 300.0));
    assert_eq!(offsets.closed, 800.0);
}

#[test]
fn auto_full_open_subtracts_content_height() {
    let config = DrawerConfig::new();
    let offsets = CanonicalOffsets::resolve(&config, ViewportMetrics::new(800.0, 300.0));
    assert_eq!(offsets.full_open, 500.0);
    assert_eq!(offsets.peek_open, None);
}

#[test]
fn full_mode_uses_fixed_offset() {
    let config = DrawerConfig::new()
        .with_peek_height(150.0)
        .with_full_height(FullHeightMode::Full);
    let offsets = CanonicalOffsets::resolve(&config, ViewportMetrics::new(800.0, 2000.0));
    assert_eq!(offsets.full_open, FULL_OFFSET);
    assert_eq!(offsets.peek_open, Some(650.0));
}

#[test]
fn offset_ordering_holds_for_all_sampled_geometries() {
    // full_open <= peek_open <= closed must hold whenever peek is configured,
    // including pathological peek heights (larger than the viewport).
    let viewports = [0.0, 100.0, 480.0, 800.0, 2000.0];
    let contents = [0.0, 50.0, 300.0, 800.0, 5000.0];
    let peeks = [1.0, 150.0, 799.0, 800.0, 10_000.0];
    for &viewport in &viewports {
        for &content in &contents {
            for &peek in &peeks {
                for full_height in [FullHeightMode::Auto, FullHeightMode::Full] {
                    let config = DrawerConfig::new()
                        .with_peek_height(peek)
                        .with_full_height(full_height);
                    let offsets = CanonicalOffsets::resolve(
                        &config,
                        ViewportMetrics::new(viewport, content),
                    );
                    let peek_open = offsets.peek_open.expect("peek configured");
                    assert!(
                        offsets.full_open.min(offsets.closed) <= peek_open
                            && peek_open <= offsets.closed,
                        "ordering violated for vp={viewport} content={content} peek={peek} \
                         {full_height:?}: {offsets:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn oversized_peek_height_is_clamped() {
    let config = DrawerConfig::new().with_peek_height(10_000.0);
    let offsets = CanonicalOffsets::resolve(&config, ViewportMetrics::new(800.0, 300.0));
    assert_eq!(offsets.peek_open, Some(offsets.full_open));
}

#[test]
fn metrics_clamp_negative_heights_to_zero() {
    let metrics = ViewportMetrics::new(-5.0, -1.0);
    assert_eq!(metrics.viewport_height, 0.0);
    assert_eq!(metrics.content_height, 0.0);
}

#[test]
fn nearest_open_picks_closest_offset() {
    let config = DrawerConfig::new().with_peek_height(150.0);
    let offsets = CanonicalOffsets::resolve(&config, ViewportMetrics::new(800.0, 600.0));
    // peek_open = 650, full_open = 200
    assert_eq!(offsets.nearest_open(640.0), 650.0);
    assert_eq!(offsets.nearest_open(300.0), 200.0);
}

#[test]
fn nearest_open_without_peek_is_full() {
    let config = DrawerConfig::new();
    let offsets = CanonicalOffsets::resolve(&config, ViewportMetrics::new(800.0, 300.0));
    assert_eq!(offsets.nearest_open(790.0), 500.0);
}
