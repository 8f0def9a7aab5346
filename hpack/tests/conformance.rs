//! Conformance tests against hand-verified wire fixtures, in the same
//! hex-plus-JSON shape as the community `hpack-test-case` corpus: each
//! fixture carries a hex-encoded header block and the header list it
//! must decode to.

use hpack::Decoder;
use serde_json::Value;

fn fixtures() -> Vec<std::path::PathBuf> {
    let pattern = format!("{}/tests/fixtures/*.json", env!("CARGO_MANIFEST_DIR"));
    glob::glob(&pattern).expect("valid glob pattern").filter_map(Result::ok).collect()
}

#[test]
fn decodes_every_fixture_to_its_expected_header_list() {
    let paths = fixtures();
    assert!(!paths.is_empty(), "expected at least one fixture under tests/fixtures");

    for path in paths {
        let raw = std::fs::read_to_string(&path).unwrap();
        let story: Value = serde_json::from_str(&raw).unwrap();

        let wire = hex::decode(story["wire"].as_str().unwrap()).unwrap();
        let expected: Vec<(Vec<u8>, Vec<u8>)> = story["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|pair| {
                let pair = pair.as_array().unwrap();
                (
                    pair[0].as_str().unwrap().as_bytes().to_vec(),
                    pair[1].as_str().unwrap().as_bytes().to_vec(),
                )
            })
            .collect();

        let mut decoder = Decoder::new();
        let actual = decoder.decode_block(&wire).unwrap_or_else(|e| {
            panic!("{}: decode failed: {e}", path.display());
        });

        assert_eq!(actual, expected, "{}", path.display());
    }
}

#[test]
fn encoder_and_decoder_stay_synchronized_across_a_block_sequence() {
    // Mirrors fixture 005: an encoder-driven table size shrink followed
    // by headers that must still decode correctly against the new size.
    let mut encoder = hpack::Encoder::new();
    let shrink = encoder.update_table_size(256).unwrap();
    assert!(!shrink.is_empty());

    let mut block = shrink;
    block.extend(encoder.encode_block(vec![(&b"x-a"[..], &b"1"[..])]).unwrap());
    block.extend(encoder.encode_block(vec![(&b"x-a"[..], &b"1"[..])]).unwrap());

    let mut decoder = Decoder::new();
    decoder.set_max_table_size(256);
    let headers = decoder.decode_block(&block).unwrap();

    assert_eq!(
        headers,
        vec![(b"x-a".to_vec(), b"1".to_vec()), (b"x-a".to_vec(), b"1".to_vec())]
    );
}
