// tests/editor_routes.rs
mod common;

use common::*;
use pipeline_router::{
    EditorContext, EditorMode, EditorProps, IdParsePolicy, NavCommand, PageView, PipelineId,
    RouterConfig, RouterError, CREATE_ROUTE, EDIT_ROUTE,
};
use pretty_assertions::assert_eq;

#[test]
fn create_route_then_back_navigates_once_to_analyses() {
    let h = harness(RouterConfig::default());

    let page = h.router.open("/analyses/pipelines/new").unwrap();
    assert_eq!(page.route, CREATE_ROUTE);
    assert_eq!(page.context(), Some(&EditorContext::Create));

    h.router.back(&page);

    assert_eq!(h.navigator.commands(), vec![NavCommand::to("/analyses")]);
}

#[test]
fn create_route_mounts_editor_without_id() {
    let h = harness(RouterConfig::default());

    h.router.open("/analyses/pipelines/new").unwrap();

    assert_eq!(h.editor.mounts(), vec![EditorProps { pipeline_id: None }]);
}

#[test]
fn create_route_ignores_prior_edit_navigation() {
    let h = harness(RouterConfig::default());

    h.router.open("/analyses/pipelines/99").unwrap();
    let page = h.router.open("/analyses/pipelines/new").unwrap();

    let ctx = page.context().unwrap();
    assert_eq!(ctx.mode(), EditorMode::Create);
    assert_eq!(ctx.pipeline_id(), None);
}

#[test]
fn edit_route_mounts_editor_with_parsed_id() {
    let h = harness(RouterConfig::default());

    let page = h.router.open("/analyses/pipelines/1234").unwrap();

    assert_eq!(page.route, EDIT_ROUTE);
    assert_eq!(
        page.context(),
        Some(&EditorContext::Edit {
            pipeline_id: PipelineId(1234)
        })
    );
    assert_eq!(
        h.editor.mounts(),
        vec![EditorProps {
            pipeline_id: Some(PipelineId(1234))
        }]
    );
}

#[test]
fn opening_same_route_twice_gives_equal_pages() {
    let h = harness(RouterConfig::default());

    let first = h.router.open("/analyses/pipelines/5").unwrap();
    let second = h.router.open("/analyses/pipelines/5").unwrap();

    assert_eq!(first, second);
    assert_eq!(h.editor.mounts().len(), 2);
}

#[test]
fn zero_id_is_flagged_but_opened() {
    let h = harness(RouterConfig::default());

    let page = h.router.open("/analyses/pipelines/0").unwrap();

    assert_eq!(
        page.context().and_then(|c| c.pipeline_id()),
        Some(PipelineId(0))
    );
}

#[test]
fn non_numeric_id_shows_invalid_reference_and_mounts_nothing() {
    let h = harness(RouterConfig::default());

    let page = h.router.open("/analyses/pipelines/abc").unwrap();

    assert!(page.is_invalid_reference());
    match &page.view {
        PageView::InvalidReference { raw, .. } => assert_eq!(raw, "abc"),
        other => panic!("expected invalid reference, got {other:?}"),
    }
    assert!(h.editor.mounts().is_empty());

    // 返回按钮在无效页面上依然可用
    h.router.back(&page);
    assert_eq!(h.navigator.last(), Some(NavCommand::to("/analyses")));
}

#[test]
fn leading_digits_policy_accepts_numeric_prefix() {
    let h = harness(RouterConfig {
        id_policy: IdParsePolicy::LeadingDigits,
        ..RouterConfig::default()
    });

    let page = h.router.open("/analyses/pipelines/12abc").unwrap();
    assert_eq!(
        page.context().and_then(|c| c.pipeline_id()),
        Some(PipelineId(12))
    );

    let page = h.router.open("/analyses/pipelines/abc").unwrap();
    assert!(page.is_invalid_reference());
}

#[test]
fn listing_route_is_not_an_editor() {
    let h = harness(RouterConfig::default());

    let err = h.router.open("/analyses").unwrap_err();

    assert!(matches!(err, RouterError::NotAnEditorRoute { .. }));
    assert!(h.editor.mounts().is_empty());
}

#[test]
fn unknown_path_is_not_found() {
    let h = harness(RouterConfig::default());

    let err = h.router.open("/settings").unwrap_err();

    assert!(matches!(err, RouterError::RouteNotFound { ref path } if path == "/settings"));
    assert!(h.navigator.is_empty());
}

#[test]
fn query_string_does_not_affect_resolution() {
    let h = harness(RouterConfig::default());

    let page = h.router.open("/analyses/pipelines/77?from=list").unwrap();

    assert_eq!(
        page.context().and_then(|c| c.pipeline_id()),
        Some(PipelineId(77))
    );
}

#[test]
fn routes_and_back_target_come_from_toml() {
    let config = RouterConfig::from_toml_str(
        r#"
        create_path = "/pipelines/create"
        edit_path = "/pipelines/:pipeline/edit"
        id_param = "pipeline"
        listing_path = "/pipelines"
        back_target = "/pipelines"
        back_label = "Back"
        "#,
    )
    .unwrap();
    let h = harness(config);

    let page = h.router.open("/pipelines/create").unwrap();
    assert_eq!(page.back_action.label, "Back");

    let page = h.router.open("/pipelines/3/edit").unwrap();
    assert_eq!(
        page.context().and_then(|c| c.pipeline_id()),
        Some(PipelineId(3))
    );
    assert_eq!(
        h.router.edit_path(PipelineId(3)).unwrap(),
        "/pipelines/3/edit"
    );

    h.router.back(&page);
    assert_eq!(h.navigator.commands(), vec![NavCommand::to("/pipelines")]);
}

#[test]
fn both_pages_share_one_back_action() {
    let h = harness(RouterConfig::default());

    let create = h.router.open("/analyses/pipelines/new").unwrap();
    let edit = h.router.open("/analyses/pipelines/2").unwrap();

    assert_eq!(create.back_action, edit.back_action);
}

#[test]
fn mismatched_id_param_is_rejected_at_construction() {
    setup_tracing();
    let config = RouterConfig {
        edit_path: "/analyses/pipelines/:pipeline".to_string(),
        ..RouterConfig::default()
    };

    let err = pipeline_router::EditorRouter::new(config).unwrap_err();

    assert!(matches!(err, RouterError::InvalidRouteConfig { ref route, .. } if route == EDIT_ROUTE));
}
