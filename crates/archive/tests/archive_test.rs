//! Archive create/open behavior as seen from outside the crate
//!
//! Covers the operator-facing error messages, which tools match on.

mod common;

use common::ScratchArchive;
use dura_archive::{Archive, ArchiveConfig, ArchiveError, ARCHIVE_HEADER_NAME, ARCHIVE_MAGIC};
use dura_core::BandNumber;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

#[test]
fn test_create_archive() {
    let temp_dir = TempDir::new().unwrap();
    let archive_path = temp_dir.path().join("testarchive");

    let archive = Archive::create(&archive_path).unwrap();

    assert_eq!(archive.path(), archive_path.as_path());
    assert!(archive_path.is_dir());
    assert!(archive_path.join("DURA-ARCHIVE").is_file());
}

#[test]
fn test_reopen_archive() {
    let temp_dir = TempDir::new().unwrap();
    let archive_path = temp_dir.path().join("testarchive");

    let _created = Archive::create(&archive_path).unwrap();
    let second = Archive::open(&archive_path).unwrap();

    assert_eq!(second.path(), archive_path.as_path());
}

#[test]
fn test_open_nonexistent() {
    let temp_dir = TempDir::new().unwrap();
    let archive_path = temp_dir.path().join("testarchive");

    // Don't create it
    let err = Archive::open(&archive_path).unwrap_err();
    assert!(matches!(err, ArchiveError::NoSuchArchive { .. }), "{:?}", err);

    let platform_text = std::fs::metadata(&archive_path).unwrap_err().to_string();
    let msg = err.to_string();
    assert!(msg.starts_with("No such archive: "), "{}", msg);
    assert!(msg.contains(&archive_path.display().to_string()), "{}", msg);
    assert!(msg.contains("testarchive"), "{}", msg);
    assert!(msg.ends_with(&platform_text), "{}", msg);

    #[cfg(unix)]
    assert!(msg.contains("No such file or directory"), "{}", msg);
}

#[test]
fn test_open_bad_magic() {
    let temp_dir = TempDir::new().unwrap();
    let archive_path = temp_dir.path().join("testarchive");

    let archive = Archive::create(&archive_path).unwrap();
    std::fs::write(archive.header_path(), b"not this!").unwrap();

    let err = Archive::open(&archive_path).unwrap_err();
    assert!(matches!(err, ArchiveError::BadArchiveHeader { .. }), "{:?}", err);
    assert_eq!(
        err.to_string(),
        format!("Bad archive header: {}", archive.header_path().display())
    );
}

#[test]
fn test_open_missing_marker() {
    let temp_dir = TempDir::new().unwrap();
    let archive_path = temp_dir.path().join("testarchive");

    let archive = Archive::create(&archive_path).unwrap();
    std::fs::remove_file(archive.header_path()).unwrap();

    let err = Archive::open(&archive_path).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Bad archive header: {}", archive_path.join(ARCHIVE_HEADER_NAME).display())
    );
}

#[test]
fn test_open_plain_directory() {
    let temp_dir = TempDir::new().unwrap();

    let err = Archive::open(temp_dir.path()).unwrap_err();
    assert!(err.is_bad_header(), "{:?}", err);
}

#[test]
fn test_create_repairs_nothing_on_open() {
    // A bad marker stays bad until someone explicitly creates again.
    let scratch = ScratchArchive::new();
    std::fs::write(scratch.header_path(), b"").unwrap();
    assert!(Archive::open(scratch.path()).unwrap_err().is_bad_header());
    assert!(Archive::open(scratch.path()).unwrap_err().is_bad_header());

    Archive::create(scratch.path()).unwrap();
    Archive::open(scratch.path()).unwrap();
}

#[cfg(unix)]
#[test]
fn test_create_unwritable_parent() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let locked = temp_dir.path().join("locked");
    std::fs::create_dir(&locked).unwrap();
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o500)).unwrap();

    // Root ignores permission bits; nothing to check there.
    let probe = locked.join("probe");
    if std::fs::create_dir(&probe).is_ok() {
        std::fs::remove_dir(&probe).unwrap();
        return;
    }

    let err = Archive::create(locked.join("archive")).unwrap_err();
    assert!(matches!(err, ArchiveError::Io { .. }), "{:?}", err);

    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o700)).unwrap();
}

#[test]
fn test_list_bands_ignores_other_entries() {
    let scratch = ScratchArchive::new();
    scratch.make_band_dir("b0000");
    scratch.make_band_dir("b0042");
    scratch.make_band_dir("b10000");
    scratch.make_band_dir("b9999");
    scratch.make_band_dir("b42");
    scratch.make_band_dir("notes");
    std::fs::write(scratch.path().join("b0007"), b"a file, not a band").unwrap();

    let bands: Vec<String> = scratch
        .list_bands()
        .unwrap()
        .iter()
        .map(BandNumber::canonical)
        .collect();

    assert_eq!(bands, vec!["0000", "0042", "9999", "10000"]);
}

#[test]
fn test_bands_survive_reopen() {
    let scratch = ScratchArchive::new();
    scratch.create_band().unwrap();
    scratch.create_band().unwrap();

    let reopened = Archive::open(scratch.path()).unwrap();
    assert_eq!(reopened.last_band().unwrap(), Some(BandNumber::from(1)));
    assert_eq!(reopened.create_band().unwrap(), BandNumber::from(2));
}

#[test]
fn test_create_band_refuses_existing_entry() {
    let scratch = ScratchArchive::new();
    scratch.make_band_dir("b0003");

    let band = scratch.create_band().unwrap();
    assert_eq!(band, BandNumber::from(4));

    // A plain file is not listed as a band, but it still occupies the name.
    std::fs::write(scratch.path().join("b0005"), b"squatter").unwrap();

    let err = scratch.create_band().unwrap_err();
    assert!(
        matches!(err, ArchiveError::BandExists { ref band } if *band == BandNumber::from(5)),
        "{:?}",
        err
    );
}

#[cfg(unix)]
#[test]
fn test_concurrent_create_never_exposes_partial_marker() {
    let temp_dir = TempDir::new().unwrap();
    let archive_path = temp_dir.path().join("shared");
    Archive::create(&archive_path).unwrap();

    let stop = Arc::new(AtomicBool::new(false));

    let writers: Vec<_> = (0..4)
        .map(|_| {
            let path = archive_path.clone();
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                while !stop.load(Ordering::Relaxed) {
                    Archive::create_with_config(&path, ArchiveConfig::for_testing()).unwrap();
                }
            })
        })
        .collect();

    for _ in 0..500 {
        if let Err(e) = Archive::open(&archive_path) {
            stop.store(true, Ordering::Relaxed);
            panic!("open raced with create: {}", e);
        }
    }

    stop.store(true, Ordering::Relaxed);
    for w in writers {
        w.join().unwrap();
    }

    assert_eq!(
        std::fs::read(archive_path.join(ARCHIVE_HEADER_NAME)).unwrap(),
        ARCHIVE_MAGIC
    );
    let leftovers: Vec<_> = std::fs::read_dir(&archive_path)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .filter(|name| name != ARCHIVE_HEADER_NAME)
        .collect();
    assert!(leftovers.is_empty(), "{:?}", leftovers);
}
