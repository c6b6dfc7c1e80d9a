//! Test fixtures and constants.

/// Colors used across tests
pub mod colors {
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const GREEN: [u8; 3] = [0, 255, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const BLACK: [u8; 3] = [0, 0, 0];
}

/// Literal codes for the colors above
pub mod codes {
    pub const RED: &str = "16'b1111100000000000";
    pub const GREEN: &str = "16'b0000011111100000";
    pub const BLUE: &str = "16'b0000000000011111";
    pub const WHITE: &str = "16'b1111111111111111";
    pub const BLACK: &str = "16'b0000000000000000";
}

/// Encode an 8-bit RGB PNG built from `f(x, y)`
pub fn encode_rgb_png(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 3]) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&f(x, y));
        }
    }

    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("Failed to write PNG header");
        writer
            .write_image_data(&data)
            .expect("Failed to write PNG data");
    }
    out
}

/// YAML config with custom names and frame size
pub const CUSTOM_CONFIG: &str = r#"
display:
  width: 4
  height: 2
verilog:
  target: lcd_rgb
  index_signal: addr
"#;
