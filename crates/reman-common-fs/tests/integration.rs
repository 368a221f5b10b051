use std::fs;

use reman_common_core::{ErrorCategory, ErrorCode};
use reman_common_fs::{self as rfs, StoreLayout};
use reman_test_utils::{assert_err, assert_ok, StoreFixture, TEMPLATE_BODY};

#[test]
fn test_errors_integrate_with_core_types() {
    let store = StoreFixture::empty();
    let err = assert_err!(rfs::directory_exists(store.path("nowhere")));

    assert_eq!(err.category(), ErrorCategory::FileSystem);
    assert_eq!(err.code(), ErrorCode::FILE_NOT_FOUND);
    assert_eq!(err.path(), Some(store.path("nowhere").as_path()));
}

#[test]
fn test_layout_over_fixture_store() {
    let store = StoreFixture::initialized("Jane");
    let layout = StoreLayout::new(store.root());

    assert!(layout.is_complete());
    let report = assert_ok!(layout.create());
    assert!(report.created.is_empty());
    // The config file makes the root non-empty
    assert!(!assert_ok!(rfs::is_empty_dir(store.root())));
}

#[test]
fn test_template_copy_flow() {
    let store = StoreFixture::initialized("Jane");
    store.add_template("modern");
    store.add_template("base");
    let layout = StoreLayout::new(store.root());

    let templates = assert_ok!(rfs::list_templates(store.root()));
    assert_eq!(templates.len(), 2);
    assert_eq!(templates[0].stem, "base");

    let dst = layout.document_path("Jane", "Eng1");
    let mut file = assert_ok!(rfs::create_document(&dst));
    let copied = assert_ok!(rfs::copy_into(&templates[0].path, &mut file));
    drop(file);

    assert_eq!(copied, TEMPLATE_BODY.len() as u64);
    assert_eq!(fs::read_to_string(&dst).unwrap(), TEMPLATE_BODY);
    assert_eq!(dst, store.path("src/Jane_Eng1.tex"));

    let err = assert_err!(rfs::create_document(&dst));
    assert_eq!(err.code(), ErrorCode::ALREADY_EXISTS);
}

#[test]
fn test_documents_are_not_templates() {
    let store = StoreFixture::initialized("Jane");
    store.write_file("src/Jane_Eng1.tex", "doc");
    store.write_file("src/custom/snippet.tex", "snippet");

    assert!(assert_ok!(rfs::list_templates(store.root())).is_empty());
}
