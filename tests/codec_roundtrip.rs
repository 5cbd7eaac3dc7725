use pixeledit::codec::{self, CodecError, DATA_URI_PREFIX};
use pixeledit::{Color, PixelGrid, Point};

fn sample_grid() -> PixelGrid {
    let mut grid = PixelGrid::new(5, 4).unwrap();
    grid.set(Point::new(0, 0), Color::new(255, 0, 0, 255));
    grid.set(Point::new(4, 3), Color::new(0, 255, 0, 128));
    grid.set(Point::new(2, 1), Color::new(12, 34, 56, 78));
    grid
}

#[test]
fn png_round_trip_preserves_every_cell() {
    let grid = sample_grid();
    let bytes = codec::encode_png(&grid).unwrap();
    let back = codec::decode_png(&bytes).unwrap();
    assert_eq!(back, grid);
}

#[test]
fn decoded_dimensions_match_the_source_image() {
    let bytes = codec::encode_png(&sample_grid()).unwrap();
    let grid = codec::decode_png(&bytes).unwrap();
    assert_eq!(grid.width(), 5);
    assert_eq!(grid.height(), 4);
}

#[test]
fn data_uri_round_trip() {
    let bytes = codec::encode_png(&sample_grid()).unwrap();
    let uri = codec::to_data_uri(&bytes);
    assert!(uri.starts_with(DATA_URI_PREFIX));
    assert_eq!(codec::from_data_uri(&uri).unwrap(), bytes);
}

#[test]
fn foreign_data_uris_are_rejected() {
    assert!(matches!(
        codec::from_data_uri("data:text/plain;base64,AAAA"),
        Err(CodecError::MalformedDataUri)
    ));
}

#[test]
fn corrupt_base64_payload_is_rejected() {
    let uri = format!("{DATA_URI_PREFIX}not//valid==base64!!");
    assert!(matches!(
        codec::from_data_uri(&uri),
        Err(CodecError::Base64(_))
    ));
}

#[test]
fn garbage_bytes_fail_to_decode() {
    assert!(matches!(
        codec::decode_png(b"not a png"),
        Err(CodecError::Decode(_))
    ));
}
