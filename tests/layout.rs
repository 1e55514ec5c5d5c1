//! Tests for scaling, bucket stacking, flow and drop placement.
mod common;
use common::*;
use routo::prelude::*;
use serde_json::json;
use std::cell::Cell;

#[test]
fn test_single_bucket_uses_full_scale() {
    let layout = bare_engine()
        .layout(&single_bucket(), Dimensions::new(200.0, 200.0))
        .expect("layout succeeds");

    assert!(layout.skipped.is_none());
    assert_eq!(layout.buckets.len(), 1);
    let bucket = &layout.buckets[0];
    assert_close(bucket.height, 200.0);
    assert_eq!(bucket.x, 0.0);
    assert_eq!(bucket.y, 0.0);
    assert_close(layout.y_scale, 2.0);
    assert_close(layout.bucket_width, 200.0);
}

#[test]
fn test_full_flow_has_unit_percent_and_no_offsets() {
    let layout = bare_engine()
        .layout(&full_flow(), Dimensions::new(300.0, 200.0))
        .expect("layout succeeds");

    assert_eq!(layout.flows.len(), 1);
    let flow = &layout.flows[0];
    assert_eq!(flow.id, "a-b");
    assert_close(flow.percent, 1.0);
    assert_eq!(flow.from_offset, 0.0);
    assert_eq!(flow.to_offset, 0.0);
    assert_close(flow.height, layout.buckets[flow.from].height);
    assert_eq!(layout.buckets[flow.from].id, "a");
    assert_eq!(layout.buckets[flow.to].id, "b");
}

#[test]
fn test_drop_and_flow_percentages_add_up() {
    let layout = bare_engine()
        .layout(&drop_and_flow(), Dimensions::new(300.0, 200.0))
        .expect("layout succeeds");

    assert_eq!(layout.drops.len(), 1);
    assert_eq!(layout.flows.len(), 1);
    let drop = &layout.drops[0];
    let flow = &layout.flows[0];
    assert_close(drop.percent, 0.30);
    assert_close(flow.percent, 0.70);
    assert_close(drop.percent + flow.percent, 1.0);
    assert_eq!(drop.title, "Lost");
    assert_eq!(layout.buckets[drop.from].id, "a");
}

#[test]
fn test_inbound_flows_stack_without_overlap() {
    let layout = bare_engine()
        .layout(&two_inbound(), Dimensions::new(300.0, 200.0))
        .expect("layout succeeds");

    assert_close(layout.y_scale, 4.0);
    let first = layout.flow_by_id("a-c").expect("a-c exists");
    let second = layout.flow_by_id("b-c").expect("b-c exists");
    assert_eq!(first.to_offset, 0.0);
    assert_close(second.to_offset, 30.0 * layout.y_scale);
    assert_close(first.to_offset + first.height, second.to_offset);

    let sink = layout.bucket_by_id("c").expect("c exists");
    assert_close(sink.to_offset, sink.height);
    assert_close(layout.bucket_by_id("a").expect("a").from_offset, 120.0);
    assert_close(layout.bucket_by_id("b").expect("b").from_offset, 80.0);
}

#[test]
fn test_buckets_stack_with_margins_in_array_order() {
    let funnel = FunnelSpec::new(vec![StepSpec::new(
        "Stack",
        vec![
            BucketSpec::new("top", "Top", 10.0),
            BucketSpec::new("middle", "Middle", 20.0),
            BucketSpec::new("bottom", "Bottom", 30.0),
        ],
    )]);
    let engine = LayoutEngine::builder()
        .with_header_height(0.0)
        .with_bucket_margin(20.0)
        .build()
        .unwrap();
    let layout = engine.layout(&funnel, Dimensions::new(100.0, 600.0)).unwrap();

    let ids: Vec<_> = layout.buckets.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["top", "middle", "bottom"]);
    assert_close(layout.y_scale, 10.0);
    assert_eq!(layout.buckets[0].y, 0.0);
    assert_close(layout.buckets[1].y, 100.0 + 20.0);
    assert_close(layout.buckets[2].y, 100.0 + 20.0 + 200.0 + 20.0);
}

#[test]
fn test_columns_are_two_bucket_widths_apart() {
    let layout = LayoutEngine::default()
        .layout(&evaluation_funnel(), Dimensions::new(700.0, 500.0))
        .unwrap();

    assert_close(layout.bucket_width, 100.0);
    for bucket in &layout.buckets {
        assert_close(bucket.x, 200.0 * bucket.step as f64);
    }
    for step in &layout.steps {
        assert_close(step.x, 200.0 * step.index as f64);
        assert_close(step.label_anchor.x, step.x + 50.0);
        assert_close(step.label_anchor.y, -25.0);
        assert_close(step.height, 450.0);
    }
    let titles: Vec<_> = layout.steps.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Evaluations", "Installation", "Usage", "Conversion"]);
}

#[test]
fn test_scale_includes_drops_by_default() {
    let funnel = evaluation_funnel();
    let with_drops = LayoutEngine::default()
        .layout(&funnel, Dimensions::new(700.0, 500.0))
        .unwrap();
    // Largest step is Evaluations: 100 + 20 dropped.
    assert_close(with_drops.y_scale, 450.0 / 120.0);

    let without_drops = LayoutEngine::builder()
        .with_drops_in_scale(false)
        .build()
        .unwrap()
        .layout(&funnel, Dimensions::new(700.0, 500.0))
        .unwrap();
    assert_close(without_drops.y_scale, 450.0 / 100.0);
}

#[test]
fn test_fit_margins_keeps_every_step_inside_content() {
    let funnel = FunnelSpec::new(vec![
        StepSpec::new("One", vec![BucketSpec::new("a", "A", 100.0)]),
        StepSpec::new(
            "Two",
            vec![
                BucketSpec::new("b", "B", 50.0).with_flow("a", 50.0),
                BucketSpec::new("c", "C", 50.0).with_flow("a", 50.0),
            ],
        ),
    ]);
    let engine = LayoutEngine::builder()
        .with_header_height(0.0)
        .with_bucket_margin(20.0)
        .with_fit_margins(true)
        .build()
        .unwrap();
    let layout = engine.layout(&funnel, Dimensions::new(300.0, 220.0)).unwrap();

    assert_close(layout.y_scale, 2.0);
    let c = layout.bucket_by_id("c").unwrap();
    assert_close(c.y + c.height, 220.0);
}

#[test]
fn test_zero_magnitude_items_are_excluded() {
    let funnel = FunnelSpec::new(vec![
        StepSpec::new(
            "First",
            vec![
                BucketSpec::new("a", "A", 50.0).with_drop("Nothing", 0.0),
                BucketSpec::new("empty", "Empty", 0.0),
            ],
        ),
        StepSpec::new(
            "Second",
            vec![
                BucketSpec::new("b", "B", 50.0)
                    .with_flow("a", 50.0)
                    .with_flow("a", 0.0),
            ],
        ),
    ]);
    let layout = bare_engine().layout(&funnel, Dimensions::new(300.0, 100.0)).unwrap();

    assert!(layout.bucket_by_id("empty").is_none());
    assert_eq!(layout.buckets.len(), 2);
    assert_eq!(layout.flows.len(), 1);
    assert!(layout.drops.is_empty());
    assert_eq!(layout.gradients.len(), 1);
}

#[test]
fn test_flow_from_filtered_bucket_is_dropped_silently() {
    let funnel = FunnelSpec::new(vec![
        StepSpec::new(
            "First",
            vec![BucketSpec::new("a", "A", 0.0), BucketSpec::new("x", "X", 10.0)],
        ),
        StepSpec::new(
            "Second",
            vec![
                BucketSpec::new("b", "B", 10.0)
                    .with_flow("a", 5.0)
                    .with_flow("x", 10.0),
            ],
        ),
    ]);
    let layout = bare_engine().layout(&funnel, Dimensions::new(300.0, 100.0)).unwrap();
    let ids: Vec<_> = layout.flows.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["x-b"]);
    assert_eq!(layout.flows[0].to_offset, 0.0);
}

#[test]
fn test_entity_lists_resolve_to_their_length() {
    let funnel = FunnelSpec::new(vec![StepSpec::new(
        "Users",
        vec![
            BucketSpec::new("listed", "Listed", 0.0)
                .with_entities(vec![json!({"name": "ada"}), json!({"name": "bob"})]),
            BucketSpec::new("counted", "Counted", 2.0),
        ],
    )]);

    let layout = bare_engine().layout(&funnel, Dimensions::new(100.0, 100.0)).unwrap();
    let listed = layout.bucket_by_id("listed").expect("entity bucket is laid out");
    assert_eq!(listed.value, 2.0);
    assert_close(listed.height, layout.bucket_by_id("counted").unwrap().height);

    let engine = LayoutEngine::builder()
        .with_header_height(0.0)
        .with_entity_resolution(false)
        .build()
        .unwrap();
    let layout = engine.layout(&funnel, Dimensions::new(100.0, 100.0)).unwrap();
    assert!(layout.bucket_by_id("listed").is_none());
}

#[test]
fn test_unmeasured_surface_skips_geometry() {
    let layout = LayoutEngine::default()
        .layout(&full_flow(), Dimensions::new(0.0, 0.0))
        .unwrap();
    assert_eq!(layout.skipped, Some(SkipReason::Unmeasured));
    assert!(layout.is_empty());
    assert!(layout.buckets.is_empty() && layout.flows.is_empty() && layout.steps.is_empty());
    assert!(layout.drop_gradient.is_none());
}

#[test]
fn test_header_taller_than_surface_skips_geometry() {
    let layout = LayoutEngine::default()
        .layout(&full_flow(), Dimensions::new(300.0, 40.0))
        .unwrap();
    assert_eq!(layout.skipped, Some(SkipReason::NoContentHeight));
}

#[test]
fn test_all_zero_funnel_skips_geometry() {
    let funnel = FunnelSpec::new(vec![StepSpec::new(
        "Nothing",
        vec![BucketSpec::new("a", "A", 0.0)],
    )]);
    let layout = LayoutEngine::default()
        .layout(&funnel, Dimensions::new(300.0, 300.0))
        .unwrap();
    assert_eq!(layout.skipped, Some(SkipReason::ZeroMagnitude));
    assert_eq!(layout.y_scale, 0.0);
}

#[test]
fn test_overflowing_step_volume_skips_geometry() {
    let funnel = FunnelSpec::new(vec![StepSpec::new(
        "Huge",
        vec![BucketSpec::new("a", "A", 1e308), BucketSpec::new("b", "B", 1e308)],
    )]);

    for fit_margins in [false, true] {
        let engine = LayoutEngine::builder()
            .with_fit_margins(fit_margins)
            .build()
            .unwrap();
        let layout = engine.layout(&funnel, Dimensions::new(300.0, 300.0)).unwrap();
        assert_eq!(layout.skipped, Some(SkipReason::ScaleOverflow));
        assert!(layout.buckets.is_empty());
    }
}

#[test]
fn test_surface_is_measured_once_per_pass() {
    struct CountingSurface {
        calls: Cell<usize>,
    }
    impl Surface for CountingSurface {
        fn measure(&self) -> Dimensions {
            self.calls.set(self.calls.get() + 1);
            Dimensions::new(300.0, 200.0)
        }
    }

    let surface = CountingSurface { calls: Cell::new(0) };
    let engine = bare_engine();
    let layout = engine.layout_on(&full_flow(), &surface).unwrap();
    assert_eq!(surface.calls.get(), 1);
    assert_eq!(layout.dimensions, Dimensions::new(300.0, 200.0));
}

#[test]
fn test_style_settings_pass_through() {
    let engine = LayoutEngine::builder()
        .with_border_radius(6.0)
        .with_bucket_margin(12.0)
        .with_interactive(true)
        .with_animate(true)
        .build()
        .unwrap();
    let layout = engine.layout(&full_flow(), Dimensions::new(300.0, 300.0)).unwrap();
    assert_eq!(
        layout.style,
        StyleSettings {
            border_radius: 6.0,
            bucket_margin: 12.0,
            interactive: true,
            animate: true,
        }
    );
}

#[test]
fn test_layout_is_idempotent() {
    let engine = LayoutEngine::default();
    let funnel = evaluation_funnel();
    let first = engine.layout(&funnel, Dimensions::new(900.0, 480.0)).unwrap();
    let second = engine.layout(&funnel, Dimensions::new(900.0, 480.0)).unwrap();
    assert_eq!(first, second);
}
