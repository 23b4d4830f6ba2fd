//! Integration tests for artifact layout.

mod common;

use tagpress_compose::{
    ArtifactComposer, BandSpec, CompositionError, QrEncoder, layouts,
};
use tagpress_model::{Code, Timestamp};

use common::{BlockRenderer, OverCapacityEncoder, SquareEncoder, ink_span};

fn code() -> Code {
    Code::parse("4071").unwrap()
}

fn qr_composer(bands: Vec<BandSpec>) -> ArtifactComposer {
    ArtifactComposer::new(Box::new(QrEncoder::default()))
        .with_renderer(Box::new(BlockRenderer))
        .with_bands(bands)
}

#[test]
fn bare_layout_is_just_the_matrix() {
    let mut composer = qr_composer(layouts::bare());
    let artifact = composer.render(&code(), None).unwrap();
    assert_eq!((artifact.width(), artifact.height()), (290, 290));
}

#[test]
fn height_is_matrix_plus_band_heights() {
    let layouts = [
        layouts::bare(),
        layouts::code_caption(),
        layouts::ticket("Science Fair", "Booth 12"),
        vec![
            BandSpec::text("a", 10.0, 1),
            BandSpec::text("b", 10.0, 0),
            BandSpec::code(12.0, 333),
        ],
    ];
    let now = Timestamp::now();
    for bands in layouts {
        let expected: u32 = bands.iter().map(|b| b.height).sum();
        let mut composer = qr_composer(bands);
        let matrix = composer.encode(&code()).unwrap();
        let artifact = composer.render(&code(), Some(&now)).unwrap();
        assert_eq!(artifact.width(), matrix.width());
        assert_eq!(artifact.height(), matrix.height() + expected);
    }
}

#[test]
fn composing_twice_gives_identical_dimensions() {
    let mut composer = qr_composer(layouts::ticket("Title", "Subtitle"));
    let now = Timestamp::now();
    let first = composer.render(&code(), Some(&now)).unwrap();
    let second = composer.render(&code(), Some(&now)).unwrap();
    assert_eq!(first.image().dimensions(), second.image().dimensions());
    assert_eq!(first.image(), second.image());
}

#[test]
fn band_text_is_horizontally_centered() {
    let mut composer = ArtifactComposer::new(Box::new(SquareEncoder(200)))
        .with_renderer(Box::new(BlockRenderer))
        .with_bands(vec![BandSpec::code(40.0, 50).with_padding_top(5)]);
    let artifact = composer.render(&code(), None).unwrap();

    // 4 chars * 20px = 80px wide block, centered in 200px
    let (left, right) = ink_span(artifact.image(), 200, 250).unwrap();
    assert_eq!(left, 60);
    assert_eq!(right, 139);
    assert_eq!(ink_span(artifact.image(), 200, 205), None);
}

#[test]
fn bands_stack_in_order() {
    let mut composer = ArtifactComposer::new(Box::new(SquareEncoder(100)))
        .with_renderer(Box::new(BlockRenderer))
        .with_bands(vec![
            BandSpec::text("wide wide", 20.0, 30),
            BandSpec::text("n", 20.0, 30),
        ]);
    let artifact = composer.render(&code(), None).unwrap();
    let (first_left, first_right) = ink_span(artifact.image(), 100, 130).unwrap();
    let (second_left, second_right) = ink_span(artifact.image(), 130, 160).unwrap();
    assert!(first_right - first_left > second_right - second_left);
}

#[test]
fn encoding_failure_aborts_composition() {
    let mut composer = ArtifactComposer::new(Box::new(OverCapacityEncoder))
        .with_renderer(Box::new(BlockRenderer))
        .with_bands(layouts::code_caption());
    let err = composer.render(&code(), None).unwrap_err();
    assert!(matches!(err, CompositionError::Encode { payload_len: 4, .. }));
}

#[test]
fn timestamp_band_without_timestamp_fails() {
    let mut composer = qr_composer(vec![BandSpec::timestamp(18.0, 30)]);
    assert!(composer.needs_timestamp());
    let err = composer.render(&code(), None).unwrap_err();
    assert!(matches!(err, CompositionError::MissingTimestamp { band: 0 }));
}

#[test]
fn unknown_timestamp_specifier_fails_the_render() {
    let mut composer =
        qr_composer(vec![BandSpec::timestamp(18.0, 30)]).with_timestamp_format("%Y-%Q");
    let err = composer
        .render(&code(), Some(&Timestamp::now()))
        .unwrap_err();
    assert!(matches!(err, CompositionError::TimestampFormat(_)));
    assert!(err.user_message().contains("%Y-%Q"));
}

#[test]
fn empty_matrix_is_rejected() {
    let mut composer = ArtifactComposer::new(Box::new(SquareEncoder(0)));
    assert!(matches!(
        composer.render(&code(), None),
        Err(CompositionError::EmptyMatrix)
    ));
}

#[test]
fn bare_layout_needs_no_renderer() {
    let mut composer = ArtifactComposer::new(Box::new(QrEncoder::default()));
    assert!(composer.render(&code(), None).is_ok());
}

#[test]
fn bands_without_renderer_fail() {
    let mut composer =
        ArtifactComposer::new(Box::new(QrEncoder::default())).with_bands(layouts::code_caption());
    assert!(matches!(
        composer.render(&code(), None),
        Err(CompositionError::NoRenderer)
    ));
}
