use crate::file_restorer::{FileKind, FileRestoreError, safe_relative_path};
use crate::{ArchiveWriter, FileRestorer, RestoreTarget};

use pm_core::{Dataset, ExportOptions, UserRecord};

use std::io::Cursor;
use std::path::PathBuf;

use googletest::prelude::*;
use zip::ZipArchive;

fn target(kind: FileKind, url: &str) -> RestoreTarget {
    RestoreTarget {
        kind,
        url: url.to_string(),
    }
}

fn user_with_avatar(id: &str, avatar: Option<&str>) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        username: id.to_string(),
        email: None,
        name: id.to_string(),
        password_hash: None,
        avatar: avatar.map(str::to_string),
        avatar_color: None,
        is_system_admin: false,
        is_active: true,
        created_at: "2024-01-01T00:00:00Z".to_string(),
        updated_at: "2024-01-01T00:00:00Z".to_string(),
        last_login_at: None,
        password_changed_at: None,
    }
}

#[test]
fn given_plain_url_when_resolved_then_relative_path() {
    assert_that!(
        safe_relative_path("/uploads/a/b.png"),
        eq(&Some(PathBuf::from("uploads/a/b.png")))
    );
}

#[test]
fn given_escaping_urls_when_resolved_then_refused() {
    for url in ["/uploads/../../etc/passwd", "//host/share", "relative.png", "/", "/./a.png"] {
        assert_that!(safe_relative_path(url), none());
    }
}

#[test]
fn given_remote_avatar_when_collecting_targets_then_skipped() {
    // Given
    let dataset = Dataset {
        users: vec![
            user_with_avatar("u-1", Some("/avatars/u-1.png")),
            user_with_avatar("u-2", Some("https://cdn.example.com/u-2.png")),
            user_with_avatar("u-3", None),
        ],
        ..Dataset::default()
    };
    let options = ExportOptions {
        include_attachments: true,
        include_avatars: true,
    };

    // When
    let targets = FileRestorer::targets(&dataset, options);

    // Then
    assert_that!(targets, eq(&vec![target(FileKind::Avatar, "/avatars/u-1.png")]));
}

#[test]
fn given_archive_with_some_files_when_restored_then_missing_ones_reported() {
    // Given
    let root = tempfile::tempdir().unwrap();
    let archive = ArchiveWriter::bundle(
        b"{}",
        &[("/uploads/present.txt".to_string(), b"hello".to_vec())],
    )
    .unwrap();
    let targets = vec![
        target(FileKind::Attachment, "/uploads/present.txt"),
        target(FileKind::Attachment, "/uploads/absent.txt"),
        target(FileKind::Avatar, "/uploads/../escape.png"),
    ];

    // When
    let report = FileRestorer::new(root.path()).restore(&archive, &targets);

    // Then
    assert_that!(report.attachments_restored, eq(1));
    assert_that!(report.attachments_missing, eq(1));
    assert_that!(report.avatars_missing, eq(1));
    assert_that!(
        report.missing_files,
        eq(&vec![
            "/uploads/absent.txt".to_string(),
            "/uploads/../escape.png".to_string()
        ])
    );
    let written = std::fs::read(root.path().join("uploads/present.txt")).unwrap();
    assert_that!(written, eq(&b"hello".to_vec()));
}

#[test]
fn given_unreadable_archive_when_restored_then_every_target_missing() {
    // Given
    let root = tempfile::tempdir().unwrap();
    let targets = vec![target(FileKind::Attachment, "/uploads/a.txt")];

    // When
    let report = FileRestorer::new(root.path()).restore(b"PK\x03\x04 truncated", &targets);

    // Then
    assert_that!(report.attachments_missing, eq(1));
    assert_that!(report.attachments_restored, eq(0));
}

#[test]
fn given_single_targets_when_restored_one_by_one_then_typed_outcomes() {
    // Given
    let root = tempfile::tempdir().unwrap();
    let bytes = ArchiveWriter::bundle(
        b"{}",
        &[("/uploads/present.txt".to_string(), b"hello".to_vec())],
    )
    .unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
    let entries = FileRestorer::index_entries(&archive);
    let restorer = FileRestorer::new(root.path());

    // When
    let written = restorer.restore_one(
        &mut archive,
        &entries,
        &target(FileKind::Attachment, "/uploads/present.txt"),
    );
    let absent = restorer.restore_one(
        &mut archive,
        &entries,
        &target(FileKind::Attachment, "/uploads/absent.txt"),
    );
    let escaping = restorer.restore_one(
        &mut archive,
        &entries,
        &target(FileKind::Avatar, "/uploads/../escape.png"),
    );

    // Then
    assert_that!(written.unwrap(), eq(&root.path().join("uploads/present.txt")));
    assert!(matches!(absent, Err(FileRestoreError::NotInArchive { ref url, .. }) if url == "/uploads/absent.txt"));
    assert!(matches!(escaping, Err(FileRestoreError::UnsafePath { .. })));
}

#[test]
fn given_files_root_is_a_file_when_restored_then_io_error() {
    // Given
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("root");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let bytes = ArchiveWriter::bundle(
        b"{}",
        &[("/uploads/a.txt".to_string(), b"a".to_vec())],
    )
    .unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
    let entries = FileRestorer::index_entries(&archive);

    // When
    let result = FileRestorer::new(&blocker).restore_one(
        &mut archive,
        &entries,
        &target(FileKind::Attachment, "/uploads/a.txt"),
    );

    // Then
    assert!(matches!(result, Err(FileRestoreError::Io { .. })));
}
