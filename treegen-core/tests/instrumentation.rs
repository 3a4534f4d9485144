//! Checks the tracing spans and events emitted during generation.

use std::num::NonZeroUsize;

use rstest::{fixture, rstest};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use treegen_core::{
    Labeling, Orientation, ScriptedSource, SeededSource, TreeError, TreeGeneratorBuilder,
    TreeShape,
};
use treegen_test_support::tracing::RecordingLayer;

#[fixture]
fn layer() -> RecordingLayer {
    RecordingLayer::default()
}

#[rstest]
fn generate_span_records_configuration(layer: RecordingLayer) {
    let generator = TreeGeneratorBuilder::new()
        .with_vertex_count(16)
        .with_shape(TreeShape::Prim { elongation: 3 })
        .with_relabel(Orientation::Shuffle)
        .build()
        .expect("configuration is valid");
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let tree = tracing::subscriber::with_default(subscriber, || {
        generator.generate(&mut SeededSource::new(8))
    })
    .expect("generation succeeds");
    assert_eq!(tree.vertex_count(), 16);

    let span = layer
        .span_named("treegen.generate")
        .expect("treegen.generate span must exist");
    assert_eq!(span.field("vertex_count"), Some("16"));
    assert_eq!(span.field("shape"), Some("prim"));
    assert_eq!(span.field("relabel"), Some("Some(Shuffle)"));

    let events = layer.events_at(Level::DEBUG);
    assert!(events.iter().any(|event| {
        event.field("message") == Some("tree generated") && event.field("edges") == Some("15")
    }));
}

#[rstest]
fn rooted_generation_nests_spans(layer: RecordingLayer) {
    let generator = TreeGeneratorBuilder::new()
        .with_vertex_count(5)
        .with_shape(TreeShape::Wheel { spokes: 2 })
        .build()
        .expect("configuration is valid");
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    tracing::subscriber::with_default(subscriber, || {
        generator.generate_rooted(&mut ScriptedSource::default(), 0, Labeling::Preorder)
    })
    .expect("generation succeeds");

    let names: Vec<String> = layer.spans().into_iter().map(|span| span.name).collect();
    for expected in ["treegen.generate", "tree.to_rooted", "treegen.generate_rooted"] {
        assert!(names.iter().any(|name| name == expected), "missing {expected} in {names:?}");
    }
    let rooted = layer
        .span_named("treegen.generate_rooted")
        .expect("treegen.generate_rooted span must exist");
    assert_eq!(rooted.field("root"), Some("0"));
    assert_eq!(rooted.field("labeling"), Some("Preorder"));
}

#[rstest]
fn kruskal_reports_rejections(layer: RecordingLayer) {
    let generator = TreeGeneratorBuilder::new()
        .with_vertex_count(3)
        .with_shape(TreeShape::Kruskal { elongation: 0 })
        .with_kruskal_attempt_limit(NonZeroUsize::new(3).expect("non-zero literal"))
        .build()
        .expect("configuration is valid");
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let err = tracing::subscriber::with_default(subscriber, || {
        generator.generate(&mut ScriptedSource::new([0]))
    })
    .expect_err("the script keeps proposing the same pair");
    assert!(matches!(err, TreeError::AttemptLimitExceeded { limit: 3, .. }));

    let debug = layer.events_at(Level::DEBUG);
    let limit_event = debug
        .iter()
        .find(|event| event.field("message") == Some("kruskal attempt limit reached"))
        .expect("limit event must be emitted");
    assert_eq!(limit_event.field("accepted"), Some("1"));
    assert_eq!(limit_event.field("rejected"), Some("2"));

    let errors = layer.events_at(Level::ERROR);
    assert!(
        errors
            .iter()
            .any(|event| event.field("error").is_some_and(|e| e.contains("gave up after 3 draws"))),
        "the span must record the returned error: {errors:?}"
    );
}
