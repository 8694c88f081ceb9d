use wordmark::{Color, EXPORT_FILE_NAME, Generator, Phase};

#[allow(clippy::unwrap_used)]
fn main() {
    let generator = Generator::new();
    generator.load_system_fonts();
    assert!(
        generator.has_fonts(),
        "system fonts are required for this demo"
    );

    generator.set_background_color(Color::from_hex("#FFF8E7").unwrap());
    generator.set_text_color(Color::from_hex("#1A1A1A").unwrap());
    generator.set_text("the quick brown fox jumps over the lazy dog");

    assert_eq!(generator.phase(), Phase::Rendered);

    // Ensure debug directory exists
    std::fs::create_dir_all("debug").expect("failed to create debug directory");

    let output_path = format!("debug/{EXPORT_FILE_NAME}");
    let written = generator.save_png(&output_path).expect("failed to export image");
    assert!(written);

    println!("Saved image to {output_path}");
}
