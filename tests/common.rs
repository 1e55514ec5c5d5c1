//! Common test fixtures for building funnels and engines.
use routo::prelude::*;

/// An engine without header or margins, so pixel values are easy to predict.
#[allow(dead_code)]
pub fn bare_engine() -> LayoutEngine {
    LayoutEngine::builder()
        .with_header_height(0.0)
        .with_bucket_margin(0.0)
        .build()
        .expect("bare options are valid")
}

/// One step, one bucket `a` of value 100.
#[allow(dead_code)]
pub fn single_bucket() -> FunnelSpec {
    FunnelSpec::new(vec![StepSpec::new(
        "Only",
        vec![BucketSpec::new("a", "A", 100.0)],
    )])
}

/// `a(100) -> b(100)`, the whole volume flows on.
#[allow(dead_code)]
pub fn full_flow() -> FunnelSpec {
    FunnelSpec::new(vec![
        StepSpec::new("First", vec![BucketSpec::new("a", "A", 100.0).with_color("#ff0000")]),
        StepSpec::new(
            "Second",
            vec![
                BucketSpec::new("b", "B", 100.0)
                    .with_color("#0000ff")
                    .with_flow("a", 100.0),
            ],
        ),
    ])
}

/// `a(100)` drops 30 and sends 70 to `b(70)`.
#[allow(dead_code)]
pub fn drop_and_flow() -> FunnelSpec {
    FunnelSpec::new(vec![
        StepSpec::new(
            "First",
            vec![BucketSpec::new("a", "A", 100.0).with_drop("Lost", 30.0)],
        ),
        StepSpec::new(
            "Second",
            vec![BucketSpec::new("b", "B", 70.0).with_flow("a", 70.0)],
        ),
    ])
}

/// `a(30)` and `b(20)` both feed `c(50)`.
#[allow(dead_code)]
pub fn two_inbound() -> FunnelSpec {
    FunnelSpec::new(vec![
        StepSpec::new(
            "Sources",
            vec![BucketSpec::new("a", "A", 30.0), BucketSpec::new("b", "B", 20.0)],
        ),
        StepSpec::new(
            "Sink",
            vec![
                BucketSpec::new("c", "C", 50.0)
                    .with_flow("a", 30.0)
                    .with_flow("b", 20.0),
            ],
        ),
    ])
}

/// The evaluation-to-conversion funnel, four steps with drops and a
/// bucket fed by three sources.
#[allow(dead_code)]
pub const EVALUATION_FUNNEL_JSON: &str = r##"
[
    {
        "title": "Evaluations",
        "buckets": [
            { "id": "evaluator", "title": "Evaluator", "value": 100, "color": "#3988A4",
              "drop": { "title": "Never installed", "value": 20 } }
        ]
    },
    {
        "title": "Installation",
        "buckets": [
            { "id": "installed", "title": "Installed", "value": 70, "color": "#67C2D4",
              "flows": [ { "source": "evaluator", "value": 70 } ],
              "drop": { "title": "Never used", "value": 10 } },
            { "id": "silent", "title": "Silent", "value": 10,
              "flows": [ { "source": "evaluator", "value": 10 } ] }
        ]
    },
    {
        "title": "Usage",
        "buckets": [
            { "id": "active", "title": "Active", "value": 20,
              "flows": [ { "source": "installed", "value": 20 } ],
              "drop": { "title": "Eval ended", "value": 10 } },
            { "id": "dormant", "title": "Dormant", "value": 40,
              "flows": [ { "source": "installed", "value": 40 } ],
              "drop": { "title": "Eval ended", "value": 35 } }
        ]
    },
    {
        "title": "Conversion",
        "buckets": [
            { "id": "converted", "title": "Converted", "value": 8,
              "flows": [
                  { "source": "active", "value": 5 },
                  { "source": "dormant", "value": 2 },
                  { "source": "silent", "value": 1 }
              ] }
        ]
    }
]
"##;

#[allow(dead_code)]
pub fn evaluation_funnel() -> FunnelSpec {
    FunnelSpec::from_json(EVALUATION_FUNNEL_JSON).expect("fixture JSON is valid")
}

#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
