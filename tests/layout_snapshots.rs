//! Snapshot coverage of the three sizing regimes and a committed drag, as
//! the host would see them through the applied width map.

mod harness;

use harness::{ScriptedProbe, SharedStore, engine_with, render_layout, resource_columns};

use gridfit::Action;

#[test]
fn surplus_layout() {
    let columns = resource_columns();
    let mut engine = engine_with(SharedStore::default(), ScriptedProbe::default());
    engine.mount(columns.clone(), 600.0);

    insta::assert_snapshot!(render_layout(&engine, &columns), @r"
    name 180
    status 240
    pool 180
    hscroll false
    ");
}

#[test]
fn shrink_layout() {
    let columns = resource_columns();
    let mut engine = engine_with(SharedStore::default(), ScriptedProbe::default());
    engine.mount(columns.clone(), 600.0);

    engine.dispatch(Action::ContainerResize(400.0));

    insta::assert_snapshot!(render_layout(&engine, &columns), @r"
    name 123
    status 153
    pool 123
    hscroll false
    ");
}

#[test]
fn overflow_layout_pins_floors() {
    let columns = resource_columns();
    let mut engine = engine_with(SharedStore::default(), ScriptedProbe::default());
    engine.mount(columns.clone(), 600.0);

    engine.dispatch(Action::ContainerResize(200.0));

    insta::assert_snapshot!(render_layout(&engine, &columns), @r"
    name 80
    status 80
    pool 80
    hscroll true
    ");
}

#[test]
fn committed_drag_overflows_the_container_without_moving_neighbors() {
    let columns = resource_columns();
    let mut engine = engine_with(SharedStore::default(), ScriptedProbe::default());
    engine.mount(columns.clone(), 500.0);

    engine.dispatch(Action::ResizeStart {
        column: "name".into(),
        start_width: 150.0,
    });
    engine.dispatch(Action::ResizeMove(180.0));
    engine.dispatch(Action::ResizeEnd);

    insta::assert_snapshot!(render_layout(&engine, &columns), @r"
    name 180
    status 200
    pool 150
    hscroll true
    ");
}
