//! Example demonstrating the disk browser
//!
//! This example lays out a small image in memory and walks through it with
//! the same commands a user would type.

use cli_console::CommandHandler;
use disk_format::ImageBuilder;
use services_disk_browser::DiskBrowser;

fn main() {
    println!("=== Disk Browser Demo ===\n");

    let disk = ImageBuilder::new(32)
        .label("DEMO DISK")
        .directory(2, "docs", 5)
        .directory(5, "notes", 6)
        .file(2, "readme.txt", 7, b"Welcome to the demo disk.\n")
        .file(5, "todo.txt", 8, b"- read the docs\n- take notes\n")
        .file(6, "idea.txt", 9, b"Blocks all the way down.\n")
        .build();

    let browser = DiskBrowser::open(disk).expect("Failed to open demo image");
    let mut handler = CommandHandler::new(browser);
    print!("{}", handler.banner());

    let script = [
        "dir",
        "read readme.txt",
        "cd docs",
        "pwd",
        "dir",
        "read todo.txt",
        "cd notes",
        "pwd",
        "read idea.txt",
        "cd ..",
        "cd ..",
        "pwd",
        "cd missing",
        "info",
    ];

    for line in script {
        println!("> {}", line);
        print!("{}", handler.execute_line(line).output);
    }

    println!("\n=== Demo Complete ===");
}
