use crate::apply::{EdgeSetter, EdgeTarget, apply_to_all_edges, apply_to_edge};
use crate::engine::EngineError;
use crate::margin::{set_margin, set_margin_bottom, set_margin_left, set_margin_right, set_margin_top};
use crate::padding::{set_padding, set_padding_left};
use crate::position::{set_position, set_top};
use crate::recording::{EngineCall, RecordingHandle};
use crate::test_utils::{bound_view, bound_view_with, init_logging, unbound_view};
use quire_style::{BoxProperty, StyleValue};
use quire_types::Edge;
use std::ptr;

const MARGIN: BoxProperty = BoxProperty::Margin;

fn named_margin_setter(edge: Edge, value: Option<StyleValue>) -> EdgeSetter {
    match edge {
        Edge::Top => set_margin_top(value),
        Edge::Right => set_margin_right(value),
        Edge::Bottom => set_margin_bottom(value),
        Edge::Left => set_margin_left(value),
    }
}

#[test]
fn test_unbound_node_is_returned_untouched() {
    init_logging();
    let node = unbound_view();

    for edge in Edge::ALL {
        for value in [None, Some(StyleValue::Auto), Some(StyleValue::Exact(50.0))] {
            let result = named_margin_setter(edge, value).apply(&node).unwrap();
            assert!(ptr::eq(result, &node));
        }
    }
    let result = set_margin(None).apply(&node).unwrap();
    assert!(ptr::eq(result, &node));
    assert_eq!(node.box_geometry, unbound_view().box_geometry);
}

#[test]
fn test_absent_value_makes_no_engine_call() {
    let (node, handle) = bound_view();

    for edge in Edge::ALL {
        let result = apply_to_edge(edge, None).apply(&node).unwrap();
        assert!(ptr::eq(result, &node));
    }
    apply_to_all_edges(None).apply(&node).unwrap();

    assert_eq!(handle.call_count(), 0);
}

#[test]
fn test_auto_value_calls_auto_primitive() {
    for edge in Edge::ALL {
        let (node, handle) = bound_view();

        let result = named_margin_setter(edge, Some(StyleValue::Auto))
            .apply(&node)
            .unwrap();

        assert!(ptr::eq(result, &node));
        assert_eq!(handle.calls(), vec![EngineCall::Auto(MARGIN, edge)]);
    }
}

#[test]
fn test_numeric_value_calls_exact_primitive() {
    for edge in Edge::ALL {
        let (node, handle) = bound_view();

        let result = named_margin_setter(edge, Some(StyleValue::from(50)))
            .apply(&node)
            .unwrap();

        assert!(ptr::eq(result, &node));
        assert_eq!(handle.calls(), vec![EngineCall::Exact(MARGIN, edge, 50.0)]);
    }
}

#[test]
fn test_percent_value_calls_percentage_primitive() {
    for edge in Edge::ALL {
        let (node, handle) = bound_view();
        let value: StyleValue = "50%".parse().unwrap();

        let result = named_margin_setter(edge, Some(value)).apply(&node).unwrap();

        assert!(ptr::eq(result, &node));
        assert_eq!(handle.calls(), vec![EngineCall::Percent(MARGIN, edge, 50.0)]);
    }
}

#[test]
fn test_named_setters_match_parameterized_setter() {
    for edge in Edge::ALL {
        let value = Some(StyleValue::Percent(25.0));
        assert_eq!(named_margin_setter(edge, value), apply_to_edge(edge, value));
    }
    assert_eq!(set_margin(StyleValue::Auto), apply_to_all_edges(StyleValue::Auto));
}

#[test]
fn test_all_edges_auto_in_canonical_order() {
    let (node, handle) = bound_view();

    let result = set_margin(StyleValue::Auto).apply(&node).unwrap();

    assert!(ptr::eq(result, &node));
    assert_eq!(
        handle.calls(),
        vec![
            EngineCall::Auto(MARGIN, Edge::Top),
            EngineCall::Auto(MARGIN, Edge::Right),
            EngineCall::Auto(MARGIN, Edge::Bottom),
            EngineCall::Auto(MARGIN, Edge::Left),
        ]
    );
}

#[test]
fn test_all_edges_numeric_in_canonical_order() {
    let (node, handle) = bound_view();

    set_margin(StyleValue::Exact(50.0)).apply(&node).unwrap();

    assert_eq!(
        handle.calls(),
        vec![
            EngineCall::Exact(MARGIN, Edge::Top, 50.0),
            EngineCall::Exact(MARGIN, Edge::Right, 50.0),
            EngineCall::Exact(MARGIN, Edge::Bottom, 50.0),
            EngineCall::Exact(MARGIN, Edge::Left, 50.0),
        ]
    );
}

#[test]
fn test_all_edges_percent_in_canonical_order() {
    let (node, handle) = bound_view();

    set_margin(StyleValue::try_from("50%").unwrap())
        .apply(&node)
        .unwrap();

    assert_eq!(
        handle.calls(),
        vec![
            EngineCall::Percent(MARGIN, Edge::Top, 50.0),
            EngineCall::Percent(MARGIN, Edge::Right, 50.0),
            EngineCall::Percent(MARGIN, Edge::Bottom, 50.0),
            EngineCall::Percent(MARGIN, Edge::Left, 50.0),
        ]
    );
}

#[test]
fn test_setter_can_be_reapplied() {
    let (node, handle) = bound_view();
    let setter = set_margin_left(StyleValue::Exact(4.0));

    setter.apply(&node).unwrap();
    setter.apply(&node).unwrap();

    assert_eq!(
        handle.calls(),
        vec![
            EngineCall::Exact(MARGIN, Edge::Left, 4.0),
            EngineCall::Exact(MARGIN, Edge::Left, 4.0),
        ]
    );
}

#[test]
fn test_all_edges_stops_at_failing_edge() {
    let (node, handle) = bound_view_with(RecordingHandle::failing_on(Edge::Bottom));

    let err = set_margin(StyleValue::Exact(8.0)).apply(&node).unwrap_err();

    assert!(matches!(err, EngineError::Backend(_)));
    assert_eq!(
        handle.calls(),
        vec![
            EngineCall::Exact(MARGIN, Edge::Top, 8.0),
            EngineCall::Exact(MARGIN, Edge::Right, 8.0),
        ]
    );
}

#[test]
fn test_other_properties_share_dispatch() {
    let (node, handle) = bound_view();

    set_padding(StyleValue::Exact(2.0)).apply(&node).unwrap();
    set_padding_left(StyleValue::Percent(10.0)).apply(&node).unwrap();
    set_top(StyleValue::Auto).apply(&node).unwrap();
    set_position(None).apply(&node).unwrap();

    let calls = handle.calls();
    assert_eq!(calls.len(), 6);
    assert_eq!(
        calls[..4],
        [
            EngineCall::Exact(BoxProperty::Padding, Edge::Top, 2.0),
            EngineCall::Exact(BoxProperty::Padding, Edge::Right, 2.0),
            EngineCall::Exact(BoxProperty::Padding, Edge::Bottom, 2.0),
            EngineCall::Exact(BoxProperty::Padding, Edge::Left, 2.0),
        ]
    );
    assert_eq!(calls[4], EngineCall::Percent(BoxProperty::Padding, Edge::Left, 10.0));
    assert_eq!(calls[5], EngineCall::Auto(BoxProperty::Position, Edge::Top));
}

#[test]
fn test_edge_target_edges() {
    assert_eq!(EdgeTarget::Single(Edge::Right).edges(), &[Edge::Right]);
    assert_eq!(EdgeTarget::All.edges(), &Edge::ALL);

    let setter = EdgeSetter::new(MARGIN, EdgeTarget::All, Some(StyleValue::Auto));
    assert_eq!(setter.property(), MARGIN);
    assert_eq!(setter.target(), EdgeTarget::All);
    assert_eq!(setter.value(), Some(StyleValue::Auto));
}
