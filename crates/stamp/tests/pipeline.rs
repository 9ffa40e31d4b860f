//! End-to-end tests for the render pipeline and the `stamp` binary

use std::fs;
use std::path::Path;
use std::process::Command;

use stamp::{FontOutcome, RenderConfig, StampError};
use stamp_text::{BoundingBox, FallbackPolicy, FontDatabase, FontQuery, FontSource};

fn decode(path: &Path) -> (png::OutputInfo, Vec<u8>) {
    let bytes = fs::read(path).expect("read output");
    let decoder = png::Decoder::new(&bytes[..]);
    let mut reader = decoder.read_info().expect("decode");
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("frame");
    buf.truncate(info.buffer_size());
    (info, buf)
}

/// Ink outside `rect` must be absent; fully covered ink must be opaque white
fn assert_ink_confined(pixels: &[u8], width: u32, rect: BoundingBox) -> usize {
    let mut opaque = 0;
    for (i, px) in pixels.chunks(4).enumerate() {
        let x = (i as u32 % width) as i32;
        let y = (i as u32 / width) as i32;
        if !rect.contains(x, y) {
            assert_eq!(px, [0, 0, 0, 0], "ink outside text box at ({x}, {y})");
        } else if px[3] == 255 {
            assert_eq!(px, [255, 255, 255, 255]);
            opaque += 1;
        } else if px[3] > 0 {
            // Anti-aliased edge: white at partial alpha
            assert_eq!(&px[0..3], [255, 255, 255]);
        }
    }
    opaque
}

fn installed_font_path() -> Option<(std::path::PathBuf, u32)> {
    let db = FontDatabase::with_system_fonts();
    let id = db.query(&FontQuery::default())?;
    let path = db.face_path(id)?.to_path_buf();
    let index = db.face_info(id)?.index;
    Some((path, index))
}

// ============================================================================
// FALLBACK PATH
// ============================================================================

#[test]
fn test_missing_font_still_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("0.png");
    let config = RenderConfig::default()
        .font(FontSource::path(dir.path().join("Helvetica.ttc")))
        .output(&output);

    let report = stamp::run(&config).unwrap();
    assert!(report.font.is_fallback());
    assert_eq!(report.output, output);

    let (info, pixels) = decode(&output);
    assert_eq!((info.width, info.height), (512, 512));
    assert_eq!(info.color_type, png::ColorType::Rgba);

    let opaque = assert_ink_confined(&pixels, 512, report.canvas_rect());
    assert!(opaque > 0);
}

#[test]
fn test_fallback_reason_names_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let font = dir.path().join("gone.ttf");
    let config = RenderConfig::default()
        .font(FontSource::path(&font))
        .output(dir.path().join("out.png"));

    let (_, report) = stamp::render(&config).unwrap();
    match report.font {
        FontOutcome::Fallback { reason, .. } => assert!(reason.contains("gone.ttf"), "{reason}"),
        other => panic!("expected fallback, got {other:?}"),
    }
    // render() alone writes nothing
    assert!(!dir.path().join("out.png").exists());
}

#[test]
fn test_corrupt_font_with_missing_only_policy_fails() {
    let dir = tempfile::tempdir().unwrap();
    let font = dir.path().join("corrupt.ttf");
    fs::write(&font, vec![0u8; 256]).unwrap();
    let output = dir.path().join("out.png");

    let config = RenderConfig::default()
        .font(FontSource::path(&font))
        .fallback(FallbackPolicy::MissingOnly)
        .output(&output);
    let err = stamp::run(&config).unwrap_err();
    assert!(matches!(err, StampError::Font(_)), "unexpected error: {err}");
    assert!(!output.exists());

    // The default policy absorbs the same failure
    let report = stamp::run(&config.fallback(FallbackPolicy::AnyError)).unwrap();
    assert!(report.font.is_fallback());
    assert!(output.exists());
}

#[test]
fn test_unwritable_output_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = RenderConfig::default()
        .font(FontSource::path(dir.path().join("none.ttf")))
        .output(dir.path().join("missing-dir").join("0.png"));
    assert!(matches!(stamp::run(&config), Err(StampError::Render(_))));
}

// ============================================================================
// DETERMINISM & OVERWRITE
// ============================================================================

#[test]
fn test_two_runs_identical_single_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("0.png");
    let config = RenderConfig::default()
        .font(FontSource::path(dir.path().join("none.ttc")))
        .output(&output);

    stamp::run(&config).unwrap();
    let first = fs::read(&output).unwrap();
    stamp::run(&config).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

// ============================================================================
// OUTLINE FONT PATH
// ============================================================================

#[test]
fn test_installed_font_renders_centered_digit() {
    let Some((path, index)) = installed_font_path() else {
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("0.png");
    let config = RenderConfig::default()
        .font(FontSource::Path { path, index })
        .fallback(FallbackPolicy::Never)
        .output(&output);

    let report = match stamp::run(&config) {
        Ok(report) => report,
        // Installed face may not be shapeable
        Err(StampError::Font(_)) => return,
        Err(e) => panic!("render failed: {e}"),
    };
    assert!(!report.font.is_fallback());

    let bbox = report.bbox;
    assert_eq!(report.origin.0, (512 - bbox.width() as i32).div_euclid(2));
    assert_eq!(report.origin.1, (512 - bbox.height() as i32).div_euclid(2));

    let (_, pixels) = decode(&output);
    let opaque = assert_ink_confined(&pixels, 512, report.canvas_rect());
    assert!(opaque > 100, "a 400px digit should have a solid stroke");

    let first = fs::read(&output).unwrap();
    stamp::run(&config).unwrap();
    assert_eq!(first, fs::read(&output).unwrap());
}

// ============================================================================
// BINARY
// ============================================================================

#[test]
fn test_binary_without_arguments_writes_zero_png() {
    let dir = tempfile::tempdir().unwrap();
    let status = Command::new(env!("CARGO_BIN_EXE_stamp"))
        .current_dir(dir.path())
        .env("RUST_LOG", "off")
        .status()
        .unwrap();
    assert!(status.success());

    let (info, _) = decode(&dir.path().join("0.png"));
    assert_eq!((info.width, info.height), (512, 512));
}

#[test]
fn test_binary_exits_nonzero_without_font() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_stamp"))
        .current_dir(dir.path())
        .args(["--font", "missing.ttf", "--fallback", "never"])
        .env("RUST_LOG", "off")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.ttf"));
    assert!(!dir.path().join("0.png").exists());
}
