//! Integration tests for the disk browser service
//!
//! These tests validate browsing behavior end to end:
//! - Allocation table decoding at open
//! - Listing, lookups and directory changes
//! - Failure atomicity of navigation
//! - Reading from a real image file

use block_store::{BlockDevice, FailingBlockDevice, FailurePolicy, ImageDisk, RamDisk, BLOCK_SIZE};
use disk_format::{
    AllocationEntry, DirectoryRecord, ImageBuilder, RecordKind, ROOT_BLOCK,
};
use services_disk_browser::{DiskBrowser, DiskOperations, NavigationError, NavigationState};
use std::io::Write;

fn tree() -> RamDisk {
    ImageBuilder::new(32)
        .label("TREE")
        .directory(2, "docs", 5)
        .directory(5, "notes", 6)
        .directory(6, "deep", 9)
        .file(2, "readme.txt", 7, b"hello world")
        .file(5, "todo.txt", 8, b"- write tests\n- ship\n")
        .build()
}

#[test]
fn test_all_in_use_allocation_table() {
    // The builder encodes its own table over block 1, so patch the image afterwards
    let mut image = ImageBuilder::new(8).into_image();
    image[BLOCK_SIZE..2 * BLOCK_SIZE].fill(0xFE);

    let browser = DiskBrowser::open(RamDisk::from_image(&image)).unwrap();
    let table = browser.allocation_table();
    assert_eq!(table.len(), 256);
    assert!(table.entries().iter().all(|e| *e == AllocationEntry::InUse));
}

#[test]
fn test_single_docs_entry_listing() {
    let disk = ImageBuilder::new(8).directory(2, "docs", 5).build();
    let mut browser = DiskBrowser::open(disk).unwrap();

    let entries = browser.list().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind, RecordKind::Directory);
    assert_eq!(entries[0].name, "docs");

    browser.change_dir("docs").unwrap();
    assert_eq!(browser.navigator().current_block(), 5);
}

#[test]
fn test_docs_rejected_when_first_slot_is_file() {
    let disk = ImageBuilder::new(8)
        .directory(2, "docs", 5)
        .record(5, 0, DirectoryRecord::new(RecordKind::FileChunk, 6, 1, "x"))
        .build();
    let mut browser = DiskBrowser::open(disk).unwrap();

    assert_eq!(
        browser.change_dir("docs"),
        Err(NavigationError::NotADirectory("docs".to_string()))
    );
    assert!(browser.navigator().is_at_root());
}

#[test]
fn test_read_readme() {
    let mut browser = DiskBrowser::open(tree()).unwrap();
    let content = browser.read_file("readme.txt").unwrap();
    assert_eq!(content.to_string(), "hello world");
}

#[test]
fn test_cd_nope() {
    let mut browser = DiskBrowser::open(tree()).unwrap();
    let before = browser.navigator().state().clone();

    assert_eq!(
        browser.change_dir("nope"),
        Err(NavigationError::DirectoryNotFound("nope".to_string()))
    );
    assert_eq!(browser.navigator().state(), &before);
}

#[test]
fn test_cd_into_file() {
    let disk = ImageBuilder::new(16)
        .file(2, "afile", 7, &DirectoryRecord::new(RecordKind::FileChunk, 1, 1, "z").encode())
        .build();
    let mut browser = DiskBrowser::open(disk).unwrap();

    assert_eq!(
        browser.change_dir("afile"),
        Err(NavigationError::NotADirectory("afile".to_string()))
    );
    assert_eq!(browser.navigator().state(), &NavigationState::at_root());
}

#[test]
fn test_descend_and_climb_back() {
    let mut browser = DiskBrowser::open(tree()).unwrap();
    let path = ["docs", "notes", "deep"];

    for name in path {
        browser.change_dir(name).unwrap();
    }
    assert_eq!(browser.current_path(), "/docs/notes/deep");
    assert_eq!(browser.navigator().depth(), 3);

    for _ in path {
        browser.change_dir("..").unwrap();
    }
    assert_eq!(browser.navigator().current_block(), ROOT_BLOCK);
    assert!(browser.navigator().state().ancestors.is_empty());

    browser.change_dir("..").unwrap();
    assert_eq!(browser.navigator().state(), &NavigationState::at_root());
}

#[test]
fn test_failed_enter_mid_tree_is_atomic() {
    let mut browser = DiskBrowser::open(tree()).unwrap();
    browser.change_dir("docs").unwrap();
    let before = browser.navigator().state().clone();

    assert!(browser.change_dir("todo.txt").is_err());
    assert!(browser.change_dir("missing").is_err());
    assert!(browser.change_dir("readme.txt").is_err());

    assert_eq!(browser.navigator().state(), &before);
    assert_eq!(browser.current_path(), "/docs");
}

#[test]
fn test_io_error_is_reported_and_browsing_continues() {
    let device = FailingBlockDevice::new(tree(), FailurePolicy::OnBlocks(vec![7]));
    let mut browser = DiskBrowser::open(device).unwrap();

    assert!(matches!(
        browser.read_file("readme.txt"),
        Err(NavigationError::Io(_))
    ));
    browser.change_dir("docs").unwrap();
    assert_eq!(
        browser.read_file("todo.txt").unwrap().as_str(),
        "- write tests\n- ship\n"
    );
}

#[test]
fn test_list_preserves_slot_order() {
    let disk = ImageBuilder::new(16)
        .record(2, 5, DirectoryRecord::new(RecordKind::FileChunk, 9, 1, "b"))
        .record(2, 1, DirectoryRecord::new(RecordKind::FileChunk, 8, 1, "z"))
        .record(2, 3, DirectoryRecord::new(RecordKind::Unknown(0x99), 8, 1, "bad"))
        .build();
    let mut browser = DiskBrowser::open(disk).unwrap();

    let names: Vec<_> = browser.list().unwrap().into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["z".to_string(), "b".to_string()]);
}

#[test]
fn test_browse_image_file() {
    let image = ImageBuilder::new(16)
        .label("FILE IMAGE")
        .directory(2, "docs", 5)
        .file(5, "readme.txt", 7, b"from disk")
        .into_image();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&image).unwrap();
    file.flush().unwrap();

    let disk = ImageDisk::open(file.path()).unwrap();
    assert_eq!(disk.block_count(), 16);

    let mut browser = DiskBrowser::open(disk).unwrap();
    assert_eq!(browser.label().as_str(), "FILE IMAGE");
    browser.change_dir("docs").unwrap();
    assert_eq!(browser.read_file("readme.txt").unwrap().as_str(), "from disk");
}

#[test]
fn test_device_dying_after_open() {
    let device = FailingBlockDevice::new(tree(), FailurePolicy::AfterReads(2));
    let mut browser = DiskBrowser::open(device).unwrap();

    assert!(matches!(browser.list(), Err(NavigationError::Io(_))));
    assert!(matches!(browser.change_dir("docs"), Err(NavigationError::Io(_))));
    assert_eq!(browser.current_path(), "/");
    assert_eq!(browser.device().failures(), 2);
}

#[test]
fn test_enter_directory_holding_only_files() {
    let disk = ImageBuilder::new(16)
        .directory(2, "docs", 5)
        .file(5, "a.txt", 7, b"first")
        .file(5, "b.txt", 8, b"second")
        .build();
    let mut browser = DiskBrowser::open(disk).unwrap();

    browser.change_dir("docs").unwrap();
    assert_eq!(browser.current_path(), "/docs");

    let names: Vec<_> = browser.list().unwrap().into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["a.txt".to_string(), "b.txt".to_string()]);
    assert_eq!(browser.read_file("b.txt").unwrap().as_str(), "second");
}
