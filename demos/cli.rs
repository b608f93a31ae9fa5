//! Command-line demo for brand_colors
//!
//! Decodes an image file, runs the extraction pipeline, and prints the
//! branding triple with contrast feedback and the AppStream snippet.
//!
//! Run with: `cargo run --example cli --features image -- icon.png`

use brand_colors::{contrast_report, extract_branding, PixelBuffer};
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut as_json = false;
    let mut image_path_arg = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--json" => as_json = true,
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {arg}");
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
    }

    let Some(image_path) = image_path_arg else {
        print_help(&args[0]);
        process::exit(1);
    };
    let image_path = Path::new(&image_path);

    let decoded = match image::open(image_path) {
        Ok(decoded) => decoded.to_rgba8(),
        Err(e) => {
            eprintln!("Error: Could not decode '{}': {e}", image_path.display());
            process::exit(1);
        }
    };

    let buffer = match PixelBuffer::from_rgba_image(&decoded) {
        Ok(buffer) => buffer,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let colors = extract_branding(&buffer);

    if as_json {
        match serde_json::to_string_pretty(&colors) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
        return;
    }

    println!("Primary: {}", colors.primary);
    println!("Light:   {}", colors.light);
    println!("Dark:    {}", colors.dark);
    println!();

    for (label, hex) in [("light", &colors.light), ("dark", &colors.dark)] {
        if let Ok(report) = contrast_report(hex) {
            println!(
                "{label} variant contrast: {:.2}:1 vs white text, {:.2}:1 vs black text",
                report.against_white, report.against_black
            );
        }
    }

    println!();
    println!("{}", colors.appstream_snippet());
}

fn print_help(program: &str) {
    println!("Usage: {program} [--json] <image>");
    println!();
    println!("Extract branding colors from an application icon or logo.");
    println!();
    println!("Options:");
    println!("  --json    Print the color triple as JSON");
    println!("  --help    Show this help");
}
