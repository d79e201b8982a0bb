//! Integration tests for the debounced Name column filter.
//!
//! Keystrokes are fed straight into the column's debounced input and the
//! virtual clock is advanced by hand; the panel polls the input each frame.

mod common;
use common::TestCtx;

use directory_business::ColumnId;

fn edit_name_filter(ctx: &mut TestCtx<'_>, draft: &str) {
    let now = ctx.now();
    let (input, _) = ctx
        .directory_mut()
        .filter_input(ColumnId::Name)
        .expect("name filter input is mounted");
    input.edit(draft, now);
}

fn show_filters(ctx: &mut TestCtx<'_>) {
    ctx.directory_mut().set_show_column_filters(true);
    ctx.step();
}

fn name_filter(ctx: &TestCtx<'_>) -> String {
    ctx.directory().table().column_filter(ColumnId::Name).to_owned()
}

#[test]
fn test_filter_row_hidden_by_default() {
    let mut ctx = TestCtx::new();
    ctx.step();

    assert!(!ctx.directory().show_column_filters());
    assert!(ctx.has_label("Show filters"));
}

#[test]
fn test_commit_waits_for_quiet_period() {
    let mut ctx = TestCtx::new();
    show_filters(&mut ctx);

    edit_name_filter(&mut ctx, "phoe");
    ctx.step();
    assert_eq!(name_filter(&ctx), "");
    assert!(ctx.has_label("Lana Steiner"));

    ctx.advance_millis(499);
    ctx.step();
    assert_eq!(name_filter(&ctx), "", "commit must wait the full interval");

    ctx.advance_millis(1);
    ctx.step();
    assert_eq!(name_filter(&ctx), "phoe");

    ctx.step();
    assert!(ctx.has_label("Phoenix Baker"));
    assert!(!ctx.has_label("Lana Steiner"));
    assert!(ctx.has_label("1-1 of 1"));
}

#[test]
fn test_burst_of_edits_commits_final_value_once() {
    let mut ctx = TestCtx::new();
    show_filters(&mut ctx);

    for draft in ["a", "an", "and"] {
        edit_name_filter(&mut ctx, draft);
        ctx.step();
        ctx.advance_millis(200);
        ctx.step();
        assert_eq!(name_filter(&ctx), "", "no commit inside the burst");
    }

    ctx.advance_millis(300);
    ctx.step();
    assert_eq!(name_filter(&ctx), "and");

    let (input, _) = ctx
        .directory_mut()
        .filter_input(ColumnId::Name)
        .expect("name filter input is mounted");
    assert!(!input.is_pending(), "the timer fires only once");

    ctx.step();
    assert!(ctx.has_label("Andi Lane"));
    assert!(!ctx.has_label("Olivia Rhye"));
}

#[test]
fn test_filter_is_case_insensitive() {
    let mut ctx = TestCtx::new();
    show_filters(&mut ctx);

    edit_name_filter(&mut ctx, "OLIVIA");
    ctx.step();
    ctx.advance_millis(500);
    ctx.step();
    ctx.step();

    assert!(ctx.has_label("Olivia Rhye"));
    assert!(ctx.has_label("1-1 of 1"));
}

#[test]
fn test_external_clear_resets_draft_without_commit() {
    let mut ctx = TestCtx::new();
    show_filters(&mut ctx);

    edit_name_filter(&mut ctx, "noah");
    ctx.step();
    ctx.advance_millis(500);
    ctx.step();
    assert_eq!(name_filter(&ctx), "noah");

    edit_name_filter(&mut ctx, "noah t");
    ctx.directory_mut().clear_column_filters();
    ctx.step();

    let (input, committed) = ctx
        .directory_mut()
        .filter_input(ColumnId::Name)
        .expect("name filter input is mounted");
    assert_eq!(committed, "");
    assert_eq!(input.draft(), "");
    assert!(!input.is_pending());

    ctx.advance_millis(1_000);
    ctx.step();
    assert_eq!(name_filter(&ctx), "", "cleared filter stays cleared");
}

#[test]
fn test_hiding_filter_row_drops_pending_edit() {
    let mut ctx = TestCtx::new();
    show_filters(&mut ctx);

    edit_name_filter(&mut ctx, "kate");
    ctx.step();

    ctx.directory_mut().set_show_column_filters(false);
    ctx.step();
    assert!(ctx.directory_mut().filter_input(ColumnId::Name).is_none());

    ctx.advance_millis(1_000);
    ctx.step();
    assert_eq!(name_filter(&ctx), "");
    assert!(ctx.has_label("1-10 of 12"));
}

#[test]
fn test_commit_resets_page_index() {
    let mut ctx = TestCtx::new();
    ctx.directory_mut().table_mut().set_page_index(1);
    show_filters(&mut ctx);
    assert!(ctx.has_label("11-12 of 12"));

    edit_name_filter(&mut ctx, "a");
    ctx.step();
    ctx.advance_millis(500);
    ctx.step();

    assert_eq!(ctx.directory().table().pagination().page_index(), 0);
}
